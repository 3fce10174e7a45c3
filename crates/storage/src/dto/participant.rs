use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating or replacing a participant.
///
/// Every field must be present; empty strings are accepted as-is.
/// `id` is never accepted from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ParticipantRequest {
    pub name: String,

    pub school: String,

    pub avatar: String,

    pub score: i64,
}

impl ParticipantRequest {
    pub fn new(
        name: impl Into<String>,
        school: impl Into<String>,
        avatar: impl Into<String>,
        score: i64,
    ) -> Self {
        Self {
            name: name.into(),
            school: school.into(),
            avatar: avatar.into(),
            score,
        }
    }
}

/// Body returned by a successful delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
