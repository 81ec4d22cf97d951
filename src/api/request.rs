//! Request types for the rotation sync API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query string accepted by the sync endpoints.
///
/// `?as_of=2024-03-10` pins the as-of date for one run, overriding both the
/// configured date and the processing date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncParams {
    /// Optional as-of override in `YYYY-MM-DD` form.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}
