use shopfront_core::RetailerId;

/// Retailer context for a request (authenticated identity).
///
/// This is immutable and must be present for all product routes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RetailerContext {
    retailer_id: RetailerId,
}

impl RetailerContext {
    pub fn new(retailer_id: RetailerId) -> Self {
        Self { retailer_id }
    }

    pub fn retailer_id(&self) -> RetailerId {
        self.retailer_id
    }
}
