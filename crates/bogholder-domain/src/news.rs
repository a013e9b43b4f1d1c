//! News items shown on the ledger overview. Immutable once loaded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One news item: a dated headline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItemData {
    pub date: NaiveDate,
    pub headline: String,
}
