//! Account-group view-models: classification buckets that aggregate their
//! registered member accounts.

use std::cell::RefCell;
use std::rc::Rc;

use rust_decimal::Decimal;

use bogholder_domain::{
    prop, AccountGroupData, BalanceSide, BudgetAccountGroupData, ChangeNotifier, Observable,
    Subscription,
};

use crate::relay::{self, RelayMap};
use crate::viewmodels::{AccountViewModel, LedgerViewModel};

static MEMBER_RELAY: RelayMap = RelayMap::new(&[
    (prop::SALDO, &[prop::KONTOVAERDI]),
    (prop::DISPONIBEL, &[prop::KONTOVAERDI]),
]);

/// View-model for one account group (kontogruppe), aggregating the balances
/// of the accounts registered into it.
pub struct AccountGroupViewModel {
    data: AccountGroupData,
    notifier: ChangeNotifier,
    members: RefCell<Vec<(Rc<AccountViewModel>, Subscription)>>,
}

impl AccountGroupViewModel {
    pub fn new(data: AccountGroupData) -> Rc<Self> {
        Rc::new(Self {
            data,
            notifier: ChangeNotifier::new(),
            members: RefCell::new(Vec::new()),
        })
    }

    pub fn id(&self) -> i32 {
        self.data.id
    }

    pub fn number(&self) -> i32 {
        self.data.number
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn balance_side(&self) -> BalanceSide {
        self.data.balance_side
    }

    /// Registers `candidate` as a member of this group.
    ///
    /// Like statement-line registration, the guards are normal outcomes: a
    /// candidate outside the ledger's account collection, with a different
    /// group number, or already registered is ignored without an error.
    pub fn register(&self, ledger: &LedgerViewModel, candidate: &Rc<AccountViewModel>) {
        if !ledger
            .accounts()
            .iter()
            .any(|account| Rc::ptr_eq(account, candidate))
        {
            return;
        }
        if candidate.group_number() != self.data.number {
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
        self.notifier.raise(prop::KONTI);
    }

    /// Sum of the registered members' balances.
    pub fn account_value(&self) -> Decimal {
        self.members
            .borrow()
            .iter()
            .map(|(account, _)| account.balance())
            .sum()
    }

    pub fn account_value_as_text(&self) -> String {
        crate::format::currency(self.account_value())
    }

    pub fn member_count(&self) -> usize {
        self.members.borrow().len()
    }
}

impl Observable for AccountGroupViewModel {
    fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }
}

/// View-model for one budget-account group (budgetkontogruppe). Aggregation
/// over budget accounts happens in the statement line built from this group.
pub struct BudgetAccountGroupViewModel {
    data: BudgetAccountGroupData,
}

impl BudgetAccountGroupViewModel {
    pub fn new(data: BudgetAccountGroupData) -> Rc<Self> {
        Rc::new(Self { data })
    }

    pub fn id(&self) -> i32 {
        self.data.id
    }

    pub fn number(&self) -> i32 {
        self.data.number
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use bogholder_domain::{
        Account, AccountData, AccountModel, Ledger, LedgerData,
    };

    use crate::error::CollectingErrorSink;
    use crate::viewmodels::ViewModelContext;

    use super::*;

    fn context() -> ViewModelContext {
        ViewModelContext::new(Rc::new(CollectingErrorSink::new()))
    }

    fn ledger(context: &ViewModelContext) -> Rc<LedgerViewModel> {
        LedgerViewModel::new(
            Rc::new(Ledger::new(LedgerData {
                number: 1,
                name: "Privatregnskab".to_string(),
                status_date: "2014-01-01T00:00:00Z".parse().unwrap(),
            })),
            context.clone(),
        )
    }

    fn account(number: &str, group: i32, balance: Decimal, context: &ViewModelContext) -> Rc<AccountViewModel> {
        AccountViewModel::new(
            Rc::new(Account::new(AccountData {
                number: number.to_string(),
                name: format!("Konto {number}"),
                description: None,
                note: None,
                group_number: group,
                status_date: "2014-01-01T00:00:00Z".parse().unwrap(),
                credit_limit: Decimal::ZERO,
                balance,
            })),
            context.clone(),
        )
    }

    fn group() -> Rc<AccountGroupViewModel> {
        AccountGroupViewModel::new(AccountGroupData {
            id: 1,
            number: 1,
            name: "Bankkonti".to_string(),
            balance_side: BalanceSide::Asset,
        })
    }

    #[test]
    fn registered_members_contribute_to_the_account_value() {
        let context = context();
        let ledger = ledger(&context);
        let group = group();
        let first = account("1110", 1, dec!(1000), &context);
        let second = account("1120", 1, dec!(250.50), &context);
        ledger.add_account(Rc::clone(&first));
        ledger.add_account(Rc::clone(&second));

        group.register(&ledger, &first);
        group.register(&ledger, &second);

        assert_eq!(group.member_count(), 2);
        assert_eq!(group.account_value(), dec!(1250.50));
        assert_eq!(group.account_value_as_text(), "1.250,50");
    }

    #[test]
    fn mismatched_group_number_is_ignored() {
        let context = context();
        let ledger = ledger(&context);
        let group = group();
        let foreign = account("2210", 2, dec!(99), &context);
        ledger.add_account(Rc::clone(&foreign));

        group.register(&ledger, &foreign);

        assert_eq!(group.member_count(), 0);
        assert!(!foreign.is_registered());
    }

    #[test]
    fn member_balance_change_raises_kontovaerdi() {
        let context = context();
        let ledger = ledger(&context);
        let group = group();
        let member_model = Rc::new(Account::new(AccountData {
            number: "1110".to_string(),
            name: "Kasse".to_string(),
            description: None,
            note: None,
            group_number: 1,
            status_date: "2014-01-01T00:00:00Z".parse().unwrap(),
            credit_limit: Decimal::ZERO,
            balance: dec!(100),
        }));
        let member = AccountViewModel::new(member_model.clone(), context.clone());
        ledger.add_account(Rc::clone(&member));
        group.register(&ledger, &member);

        let log = Rc::new(RefCell::new(Vec::new()));
        let collector = Rc::clone(&log);
        group
            .notifier()
            .subscribe(move |property| collector.borrow_mut().push(property.to_string()));

        member_model.set_balance(dec!(175)).unwrap();

        assert!(log.borrow().contains(&prop::KONTOVAERDI.to_string()));
        assert_eq!(group.account_value(), dec!(175));
    }
}
