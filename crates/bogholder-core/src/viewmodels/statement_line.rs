//! Financial-statement line (opgørelse) view-model: one row per
//! budget-account group, summing the budget accounts registered into it.

use std::cell::RefCell;
use std::rc::Rc;

use rust_decimal::Decimal;

use bogholder_domain::{prop, BudgetAccountGroupData, ChangeNotifier, Observable, Subscription};

use crate::relay::{self, RelayMap};
use crate::viewmodels::{BudgetAccountViewModel, LedgerViewModel};

static MEMBER_RELAY: RelayMap = RelayMap::new(&[
    (prop::BUDGET, &[prop::BUDGET, prop::BUDGET_AS_TEXT]),
    (
        prop::BOGFOERT,
        &[
            prop::BOGFOERT,
            prop::BOGFOERT_AS_TEXT,
            prop::DISPONIBEL,
            prop::DISPONIBEL_AS_TEXT,
        ],
    ),
]);

/// One aggregation row of the financial statement.
pub struct StatementLineViewModel {
    group: BudgetAccountGroupData,
    notifier: ChangeNotifier,
    members: RefCell<Vec<(Rc<BudgetAccountViewModel>, Subscription)>>,
}

impl StatementLineViewModel {
    pub fn new(group: BudgetAccountGroupData) -> Rc<Self> {
        Rc::new(Self {
            group,
            notifier: ChangeNotifier::new(),
            members: RefCell::new(Vec::new()),
        })
    }

    pub fn group_number(&self) -> i32 {
        self.group.number
    }

    pub fn name(&self) -> &str {
        &self.group.name
    }

    /// Registers `candidate` into this line.
    ///
    /// All four guard conditions are normal outcomes, not errors: a
    /// candidate outside the ledger's budget-account collection, without a
    /// group, with a different group number, or already registered leaves
    /// state untouched and raises nothing. The registered flag makes
    /// registration idempotent, so an account is never counted twice.
    pub fn register(&self, ledger: &LedgerViewModel, candidate: &Rc<BudgetAccountViewModel>) {
        if !ledger
            .budget_accounts()
            .iter()
            .any(|account| Rc::ptr_eq(account, candidate))
        {
            return;
        }
        let Some(group_number) = candidate.group_number() else {
            return;
        };
        if group_number != self.group.number {
            return;
        }
        if candidate.is_registered() {
            return;
        }
        candidate.mark_registered();
        let subscription =
            relay::relay_subscription(candidate.notifier(), &self.notifier, &MEMBER_RELAY);
        self.members
            .borrow_mut()
            .push((Rc::clone(candidate), subscription));
        self.notifier.raise(prop::BUDGETKONTI);
    }

    /// Sum of the registered members' budgets.
    pub fn budget(&self) -> Decimal {
        self.members
            .borrow()
            .iter()
            .map(|(account, _)| account.budget())
            .sum()
    }

    pub fn budget_as_text(&self) -> String {
        crate::format::currency(self.budget())
    }

    /// Sum of the registered members' posted amounts.
    pub fn posted(&self) -> Decimal {
        self.members
            .borrow()
            .iter()
            .map(|(account, _)| account.posted())
            .sum()
    }

    pub fn posted_as_text(&self) -> String {
        crate::format::currency(self.posted())
    }

    /// Sum of the registered members' available amounts.
    pub fn available(&self) -> Decimal {
        self.members
            .borrow()
            .iter()
            .map(|(account, _)| account.available())
            .sum()
    }

    pub fn available_as_text(&self) -> String {
        crate::format::currency(self.available())
    }

    pub fn member_count(&self) -> usize {
        self.members.borrow().len()
    }
}

impl Observable for StatementLineViewModel {
    fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }
}
