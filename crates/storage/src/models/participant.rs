use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A leaderboard entrant as stored in the `participants` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Participant {
    pub id: i64,
    pub name: String,
    pub school: String,
    /// Symbolic avatar key understood by the frontend (`robot1`, `rocket`, ...)
    pub avatar: String,
    pub score: i64,
}
