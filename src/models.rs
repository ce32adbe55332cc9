use serde::{Deserialize, Serialize};

/// Response type for GET /will
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct WillResponse {
    pub response: String,
}
