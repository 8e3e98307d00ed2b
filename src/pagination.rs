//! This modules defines how clients page through stored records.

use serde::Deserialize;

/// The number of records skipped when a request does not specify `skip`.
pub const DEFAULT_SKIP: i64 = 0;
/// The maximum number of records returned when a request does not specify `limit`.
pub const DEFAULT_LIMIT: i64 = 100;

/// The `skip` and `limit` query parameters for listing records.
///
/// Values are not validated: a negative `skip` is treated as zero and a
/// `limit` of zero or less selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// The number of records to skip from the start.
    #[serde(default = "default_skip")]
    pub skip: i64,
    /// The maximum number of records to return.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Pagination {
    /// The number of rows to skip, clamped to be non-negative.
    pub fn offset(&self) -> i64 {
        self.skip.max(0)
    }

    /// Whether this page cannot contain any records regardless of how many
    /// are stored.
    pub fn is_empty(&self) -> bool {
        self.limit <= 0
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_skip() -> i64 {
    DEFAULT_SKIP
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}
