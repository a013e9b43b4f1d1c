//! Ledger (regnskab) model.

use std::cell::RefCell;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::observe::{ChangeNotifier, Observable};
use crate::prop;

/// Ledger fields as loaded from the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerData {
    pub number: i32,
    pub name: String,
    pub status_date: DateTime<Utc>,
}

/// Contract the ledger view-model programs against.
pub trait LedgerModel: Observable {
    fn number(&self) -> i32;
    fn name(&self) -> String;
    fn set_name(&self, value: &str) -> ModelResult<()>;
    fn status_date(&self) -> DateTime<Utc>;
    /// The status date never regresses; setting it backward is rejected with
    /// an argument error and leaves the stored date unchanged.
    fn set_status_date(&self, value: DateTime<Utc>) -> ModelResult<()>;
}

/// Observable in-memory ledger, constructed from already-loaded data.
pub struct Ledger {
    data: RefCell<LedgerData>,
    notifier: ChangeNotifier,
}

impl Ledger {
    pub fn new(data: LedgerData) -> Self {
        Self {
            data: RefCell::new(data),
            notifier: ChangeNotifier::new(),
        }
    }
}

impl Observable for Ledger {
    fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }
}

impl LedgerModel for Ledger {
    fn number(&self) -> i32 {
        self.data.borrow().number
    }

    fn name(&self) -> String {
        self.data.borrow().name.clone()
    }

    fn set_name(&self, value: &str) -> ModelResult<()> {
        if value.trim().is_empty() {
            return Err(ModelError::argument("name", "ledger name must not be blank"));
        }
        {
            let mut data = self.data.borrow_mut();
            if data.name == value {
                return Ok(());
            }
            data.name = value.to_string();
        }
        self.notifier.raise(prop::NAVN);
        Ok(())
    }

    fn status_date(&self) -> DateTime<Utc> {
        self.data.borrow().status_date
    }

    fn set_status_date(&self, value: DateTime<Utc>) -> ModelResult<()> {
        {
            let mut data = self.data.borrow_mut();
            if value < data.status_date {
                return Err(ModelError::argument(
                    "status_date",
                    "status date must not regress",
                ));
            }
            if value == data.status_date {
                return Ok(());
            }
            data.status_date = value;
        }
        self.notifier.raise(prop::STATUS_DATO);
        Ok(())
    }
}
