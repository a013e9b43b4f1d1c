//! Account-group classification buckets. Groups are immutable reference
//! data; aggregation over their member accounts happens in the view-model
//! layer.

use serde::{Deserialize, Serialize};

/// Which side of the balance sheet an account group lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceSide {
    Asset,
    Liability,
}

/// Account group (kontogruppe) reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountGroupData {
    pub id: i32,
    pub number: i32,
    pub name: String,
    pub balance_side: BalanceSide,
}

/// Budget-account group (budgetkontogruppe) reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAccountGroupData {
    pub id: i32,
    pub number: i32,
    pub name: String,
}
