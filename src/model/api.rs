use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned with every error status.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub detail: String,
}

/// Plain confirmation message, used by the root and delete endpoints.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
