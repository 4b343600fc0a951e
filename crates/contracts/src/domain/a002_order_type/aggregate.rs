use serde::{Deserialize, Serialize};

/// Order type (aggregate a002). The backend stores these in Mongo and
/// serializes the identifier as `_id`, unlike the items endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderType {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Create/update payload. The order-types endpoint accepts only the name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTypeDto {
    pub name: String,
}

/// List envelope of the order-types endpoint: `{ "data": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTypeListResponse {
    pub data: Vec<OrderType>,
}

impl OrderTypeListResponse {
    /// Unwrap the envelope into the plain collection.
    pub fn into_order_types(self) -> Vec<OrderType> {
        self.data
    }
}
