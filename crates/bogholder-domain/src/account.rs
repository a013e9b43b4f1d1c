//! Account models: ordinary accounts, budget accounts, and address accounts
//! (debtors/creditors). Each belongs to one ledger and one account group by
//! reference.

use std::cell::RefCell;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::observe::{ChangeNotifier, Observable};
use crate::prop;

/// Ordinary account fields as loaded from the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountData {
    pub number: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    pub group_number: i32,
    pub status_date: DateTime<Utc>,
    pub credit_limit: Decimal,
    pub balance: Decimal,
}

/// Contract the account view-model programs against.
pub trait AccountModel: Observable {
    fn number(&self) -> String;
    fn name(&self) -> String;
    fn set_name(&self, value: &str) -> ModelResult<()>;
    fn description(&self) -> Option<String>;
    fn note(&self) -> Option<String>;
    fn group_number(&self) -> i32;
    fn status_date(&self) -> DateTime<Utc>;
    fn credit_limit(&self) -> Decimal;
    fn set_credit_limit(&self, value: Decimal) -> ModelResult<()>;
    fn balance(&self) -> Decimal;
    fn set_balance(&self, value: Decimal) -> ModelResult<()>;
}

/// Observable in-memory account.
pub struct Account {
    data: RefCell<AccountData>,
    notifier: ChangeNotifier,
}

impl Account {
    pub fn new(data: AccountData) -> Self {
        Self {
            data: RefCell::new(data),
            notifier: ChangeNotifier::new(),
        }
    }
}

impl Observable for Account {
    fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }
}

impl AccountModel for Account {
    fn number(&self) -> String {
        self.data.borrow().number.clone()
    }

    fn name(&self) -> String {
        self.data.borrow().name.clone()
    }

    fn set_name(&self, value: &str) -> ModelResult<()> {
        if value.trim().is_empty() {
            return Err(ModelError::argument("name", "account name must not be blank"));
        }
        self.data.borrow_mut().name = value.to_string();
        self.notifier.raise(prop::KONTONAVN);
        Ok(())
    }

    fn description(&self) -> Option<String> {
        self.data.borrow().description.clone()
    }

    fn note(&self) -> Option<String> {
        self.data.borrow().note.clone()
    }

    fn group_number(&self) -> i32 {
        self.data.borrow().group_number
    }

    fn status_date(&self) -> DateTime<Utc> {
        self.data.borrow().status_date
    }

    fn credit_limit(&self) -> Decimal {
        self.data.borrow().credit_limit
    }

    fn set_credit_limit(&self, value: Decimal) -> ModelResult<()> {
        self.data.borrow_mut().credit_limit = value;
        self.notifier.raise(prop::KREDIT);
        Ok(())
    }

    fn balance(&self) -> Decimal {
        self.data.borrow().balance
    }

    fn set_balance(&self, value: Decimal) -> ModelResult<()> {
        self.data.borrow_mut().balance = value;
        self.notifier.raise(prop::SALDO);
        Ok(())
    }
}

/// Budget account fields as loaded from the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAccountData {
    pub number: String,
    pub name: String,
    #[serde(default)]
    pub group_number: Option<i32>,
    pub income: Decimal,
    pub expenses: Decimal,
    pub budget: Decimal,
    pub posted: Decimal,
}

/// Contract the budget-account view-model programs against.
pub trait BudgetAccountModel: Observable {
    fn number(&self) -> String;
    fn name(&self) -> String;
    fn set_name(&self, value: &str) -> ModelResult<()>;
    /// `None` when the account has not been classified into a group yet.
    fn group_number(&self) -> Option<i32>;
    fn income(&self) -> Decimal;
    fn set_income(&self, value: Decimal) -> ModelResult<()>;
    fn expenses(&self) -> Decimal;
    fn set_expenses(&self, value: Decimal) -> ModelResult<()>;
    fn budget(&self) -> Decimal;
    fn set_budget(&self, value: Decimal) -> ModelResult<()>;
    fn posted(&self) -> Decimal;
    fn set_posted(&self, value: Decimal) -> ModelResult<()>;
}

/// Observable in-memory budget account.
pub struct BudgetAccount {
    data: RefCell<BudgetAccountData>,
    notifier: ChangeNotifier,
}

impl BudgetAccount {
    pub fn new(data: BudgetAccountData) -> Self {
        Self {
            data: RefCell::new(data),
            notifier: ChangeNotifier::new(),
        }
    }
}

impl Observable for BudgetAccount {
    fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }
}

impl BudgetAccountModel for BudgetAccount {
    fn number(&self) -> String {
        self.data.borrow().number.clone()
    }

    fn name(&self) -> String {
        self.data.borrow().name.clone()
    }

    fn set_name(&self, value: &str) -> ModelResult<()> {
        if value.trim().is_empty() {
            return Err(ModelError::argument("name", "account name must not be blank"));
        }
        self.data.borrow_mut().name = value.to_string();
        self.notifier.raise(prop::KONTONAVN);
        Ok(())
    }

    fn group_number(&self) -> Option<i32> {
        self.data.borrow().group_number
    }

    fn income(&self) -> Decimal {
        self.data.borrow().income
    }

    fn set_income(&self, value: Decimal) -> ModelResult<()> {
        self.data.borrow_mut().income = value;
        self.notifier.raise(prop::INDTAEGTER);
        Ok(())
    }

    fn expenses(&self) -> Decimal {
        self.data.borrow().expenses
    }

    fn set_expenses(&self, value: Decimal) -> ModelResult<()> {
        self.data.borrow_mut().expenses = value;
        self.notifier.raise(prop::UDGIFTER);
        Ok(())
    }

    fn budget(&self) -> Decimal {
        self.data.borrow().budget
    }

    fn set_budget(&self, value: Decimal) -> ModelResult<()> {
        self.data.borrow_mut().budget = value;
        self.notifier.raise(prop::BUDGET);
        Ok(())
    }

    fn posted(&self) -> Decimal {
        self.data.borrow().posted
    }

    fn set_posted(&self, value: Decimal) -> ModelResult<()> {
        self.data.borrow_mut().posted = value;
        self.notifier.raise(prop::BOGFOERT);
        Ok(())
    }
}

/// Whether an address account tracks money owed to us or by us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressAccountKind {
    Debtor,
    Creditor,
}

/// Address account (contact account) fields as loaded from the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressAccountData {
    pub number: String,
    pub name: String,
    pub kind: AddressAccountKind,
    pub status_date: DateTime<Utc>,
    pub balance: Decimal,
}

/// Contract the address-account view-model programs against.
pub trait AddressAccountModel: Observable {
    fn number(&self) -> String;
    fn name(&self) -> String;
    fn set_name(&self, value: &str) -> ModelResult<()>;
    fn kind(&self) -> AddressAccountKind;
    fn status_date(&self) -> DateTime<Utc>;
    fn balance(&self) -> Decimal;
    fn set_balance(&self, value: Decimal) -> ModelResult<()>;
}

/// Observable in-memory address account.
pub struct AddressAccount {
    data: RefCell<AddressAccountData>,
    notifier: ChangeNotifier,
}

impl AddressAccount {
    pub fn new(data: AddressAccountData) -> Self {
        Self {
            data: RefCell::new(data),
            notifier: ChangeNotifier::new(),
        }
    }
}

impl Observable for AddressAccount {
    fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }
}

impl AddressAccountModel for AddressAccount {
    fn number(&self) -> String {
        self.data.borrow().number.clone()
    }

    fn name(&self) -> String {
        self.data.borrow().name.clone()
    }

    fn set_name(&self, value: &str) -> ModelResult<()> {
        if value.trim().is_empty() {
            return Err(ModelError::argument("name", "account name must not be blank"));
        }
        self.data.borrow_mut().name = value.to_string();
        self.notifier.raise(prop::NAVN);
        Ok(())
    }

    fn kind(&self) -> AddressAccountKind {
        self.data.borrow().kind
    }

    fn status_date(&self) -> DateTime<Utc> {
        self.data.borrow().status_date
    }

    fn balance(&self) -> Decimal {
        self.data.borrow().balance
    }

    fn set_balance(&self, value: Decimal) -> ModelResult<()> {
        self.data.borrow_mut().balance = value;
        self.notifier.raise(prop::SALDO);
        Ok(())
    }
}
