use serde::Deserialize;
use utoipa::IntoParams;

/// Upper bound applied to `limit` so a single request cannot pull the whole table.
pub const MAX_LIMIT: i64 = 1000;

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of ranked entries to skip
    #[serde(default)]
    pub skip: i64,
    /// Maximum number of entries to return (capped at 1000)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl ListParams {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.skip < 0 {
            return Err("skip must be >= 0".to_string());
        }
        if self.limit < 0 {
            return Err("limit must be >= 0".to_string());
        }
        Ok(())
    }

    pub fn offset(&self) -> i64 {
        self.skip.max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.clamp(0, MAX_LIMIT)
    }
}
