//! bogholder-domain
//!
//! Observable in-memory models for the bookkeeping client: ledger, accounts,
//! posting lines, posting warnings, account groups, and news items, plus the
//! property-change notification machinery they share. No I/O, no UI. The
//! view-model layer in `bogholder-core` subscribes to these models and writes
//! to them only through their setters.

pub mod account;
pub mod error;
pub mod group;
pub mod ledger;
pub mod news;
pub mod observe;
pub mod posting;
pub mod prop;

pub use account::*;
pub use error::*;
pub use group::*;
pub use ledger::*;
pub use news::*;
pub use observe::*;
pub use posting::*;
