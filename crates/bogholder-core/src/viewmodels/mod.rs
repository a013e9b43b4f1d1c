//! Entity view-models and collection aggregators.
//!
//! Every view-model wraps one already-loaded domain model (never created
//! empty), wires its relay subscriptions at construction time, and tears
//! them down when it is detached or dropped.

mod account;
mod account_group;
mod address_account;
mod budget_account;
mod context;
mod ledger;
mod news;
mod posting_line;
mod posting_warning;
mod statement_line;

pub use account::AccountViewModel;
pub use account_group::{AccountGroupViewModel, BudgetAccountGroupViewModel};
pub use address_account::AddressAccountViewModel;
pub use budget_account::BudgetAccountViewModel;
pub use context::ViewModelContext;
pub use ledger::LedgerViewModel;
pub use news::NewsItemViewModel;
pub use posting_line::PostingLineViewModel;
pub use posting_warning::PostingWarningViewModel;
pub use statement_line::StatementLineViewModel;
