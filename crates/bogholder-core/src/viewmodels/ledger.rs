//! Ledger (regnskab) view-model: the composition root for one open ledger,
//! owning the collections the UI binds to.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use bogholder_domain::{prop, ChangeNotifier, LedgerModel, Observable, Subscription};

use crate::error::{classify_set, ViewModelError};
use crate::format;
use crate::relay::{self, RelayMap};
use crate::validation::{self, ValidationFailure};
use crate::viewmodels::{
    AccountGroupViewModel, AccountViewModel, AddressAccountViewModel, BudgetAccountGroupViewModel,
    BudgetAccountViewModel, NewsItemViewModel, PostingLineViewModel, PostingWarningViewModel,
    StatementLineViewModel, ViewModelContext,
};

static RELAY: RelayMap = RelayMap::new(&[
    (prop::NUMMER, &[prop::NUMMER]),
    (prop::NAVN, &[prop::NAVN]),
    (prop::STATUS_DATO, &[prop::STATUS_DATO]),
]);

const OWNER: &str = "LedgerViewModel";

/// View-model for one ledger and everything displayed with it.
///
/// Collections are exposed as snapshots only; mutation goes through the
/// `add_*`/`remove_*` operations, each of which raises exactly one
/// notification for the owning collection property.
pub struct LedgerViewModel {
    model: Rc<dyn LedgerModel>,
    context: ViewModelContext,
    notifier: ChangeNotifier,
    posting_lines: RefCell<Vec<Rc<PostingLineViewModel>>>,
    debtors: RefCell<Vec<Rc<AddressAccountViewModel>>>,
    creditors: RefCell<Vec<Rc<AddressAccountViewModel>>>,
    news: RefCell<Vec<Rc<NewsItemViewModel>>>,
    accounts: RefCell<Vec<Rc<AccountViewModel>>>,
    budget_accounts: RefCell<Vec<Rc<BudgetAccountViewModel>>>,
    warnings: RefCell<Vec<Rc<PostingWarningViewModel>>>,
    statement_lines: RefCell<Vec<Rc<StatementLineViewModel>>>,
    account_groups: RefCell<Vec<Rc<AccountGroupViewModel>>>,
    budget_account_groups: RefCell<Vec<Rc<BudgetAccountGroupViewModel>>>,
    _model_subscription: Subscription,
}

impl LedgerViewModel {
    pub fn new(model: Rc<dyn LedgerModel>, context: ViewModelContext) -> Rc<Self> {
        let notifier = ChangeNotifier::new();
        let subscription = relay::relay_subscription(model.notifier(), &notifier, &RELAY);
        Rc::new(Self {
            model,
            context,
            notifier,
            posting_lines: RefCell::new(Vec::new()),
            debtors: RefCell::new(Vec::new()),
            creditors: RefCell::new(Vec::new()),
            news: RefCell::new(Vec::new()),
            accounts: RefCell::new(Vec::new()),
            budget_accounts: RefCell::new(Vec::new()),
            warnings: RefCell::new(Vec::new()),
            statement_lines: RefCell::new(Vec::new()),
            account_groups: RefCell::new(Vec::new()),
            budget_account_groups: RefCell::new(Vec::new()),
            _model_subscription: subscription,
        })
    }

    pub fn number(&self) -> i32 {
        self.model.number()
    }

    pub fn name(&self) -> String {
        self.model.name()
    }

    pub fn set_name(&self, value: Option<&str>) {
        if let Err(failure) = validation::required_text(value) {
            self.reject(prop::NAVN, value, failure);
            return;
        }
        if let Err(error) = self.model.set_name(value.unwrap_or_default()) {
            let classified =
                classify_set(self.context.texts.as_ref(), OWNER, prop::NAVN, value, error);
            self.context.errors.handle_error(classified);
        }
    }

    fn reject(&self, property: &str, value: Option<&str>, failure: ValidationFailure) {
        let message = failure.message(self.context.texts.as_ref());
        self.context
            .errors
            .handle_error(ViewModelError::rejected_input(OWNER, property, value, message));
    }

    pub fn status_date(&self) -> DateTime<Utc> {
        self.model.status_date()
    }

    pub fn status_date_as_text(&self) -> String {
        format::short_date_time(self.model.status_date())
    }

    /// Writes a new status date to the model. A regressing date is rejected
    /// by the model; the rejection is classified and handed to the sink, and
    /// the stored date stays unchanged.
    pub fn set_status_date(&self, value: DateTime<Utc>) {
        if let Err(error) = self.model.set_status_date(value) {
            let formatted = format::short_date_time(value);
            let classified = classify_set(
                self.context.texts.as_ref(),
                OWNER,
                prop::STATUS_DATO,
                Some(formatted.as_str()),
                error,
            );
            self.context.errors.handle_error(classified);
        }
    }

    pub fn add_posting_line(&self, line: Rc<PostingLineViewModel>) {
        self.posting_lines.borrow_mut().push(line);
        self.notifier.raise(prop::BOGFOERINGSLINJER);
    }

    pub fn posting_lines(&self) -> Vec<Rc<PostingLineViewModel>> {
        self.posting_lines.borrow().clone()
    }

    pub fn add_debtor(&self, debtor: Rc<AddressAccountViewModel>) {
        self.debtors.borrow_mut().push(debtor);
        self.notifier.raise(prop::DEBITORER);
    }

    pub fn debtors(&self) -> Vec<Rc<AddressAccountViewModel>> {
        self.debtors.borrow().clone()
    }

    pub fn add_creditor(&self, creditor: Rc<AddressAccountViewModel>) {
        self.creditors.borrow_mut().push(creditor);
        self.notifier.raise(prop::KREDITORER);
    }

    pub fn creditors(&self) -> Vec<Rc<AddressAccountViewModel>> {
        self.creditors.borrow().clone()
    }

    pub fn add_news_item(&self, item: Rc<NewsItemViewModel>) {
        self.news.borrow_mut().push(item);
        self.notifier.raise(prop::NYHEDER);
    }

    pub fn news_items(&self) -> Vec<Rc<NewsItemViewModel>> {
        self.news.borrow().clone()
    }

    pub fn add_account(&self, account: Rc<AccountViewModel>) {
        self.accounts.borrow_mut().push(account);
        self.notifier.raise(prop::KONTI);
    }

    pub fn accounts(&self) -> Vec<Rc<AccountViewModel>> {
        self.accounts.borrow().clone()
    }

    pub fn add_budget_account(&self, account: Rc<BudgetAccountViewModel>) {
        self.budget_accounts.borrow_mut().push(account);
        self.notifier.raise(prop::BUDGETKONTI);
    }

    pub fn budget_accounts(&self) -> Vec<Rc<BudgetAccountViewModel>> {
        self.budget_accounts.borrow().clone()
    }

    pub fn add_statement_line(&self, line: Rc<StatementLineViewModel>) {
        self.statement_lines.borrow_mut().push(line);
        self.notifier.raise(prop::OPGOERELSESLINJER);
    }

    pub fn statement_lines(&self) -> Vec<Rc<StatementLineViewModel>> {
        self.statement_lines.borrow().clone()
    }

    /// Adds an account group, deduplicated by group number: a second group
    /// with a number already present is a silent no-op, no notification.
    pub fn add_account_group(&self, group: Rc<AccountGroupViewModel>) {
        {
            let mut groups = self.account_groups.borrow_mut();
            if groups.iter().any(|existing| existing.number() == group.number()) {
                return;
            }
            groups.push(group);
        }
        self.notifier.raise(prop::KONTOGRUPPER);
    }

    pub fn account_groups(&self) -> Vec<Rc<AccountGroupViewModel>> {
        self.account_groups.borrow().clone()
    }

    /// Adds a budget-account group, deduplicated by group number.
    pub fn add_budget_account_group(&self, group: Rc<BudgetAccountGroupViewModel>) {
        {
            let mut groups = self.budget_account_groups.borrow_mut();
            if groups.iter().any(|existing| existing.number() == group.number()) {
                return;
            }
            groups.push(group);
        }
        self.notifier.raise(prop::BUDGETKONTOGRUPPER);
    }

    pub fn budget_account_groups(&self) -> Vec<Rc<BudgetAccountGroupViewModel>> {
        self.budget_account_groups.borrow().clone()
    }

    pub fn add_posting_warning(&self, warning: Rc<PostingWarningViewModel>) {
        self.warnings.borrow_mut().push(warning);
        self.notifier.raise(prop::BOGFOERINGSADVARSLER);
    }

    pub fn posting_warnings(&self) -> Vec<Rc<PostingWarningViewModel>> {
        self.warnings.borrow().clone()
    }

    /// Drops exactly `warning` from the collection, compared by reference
    /// identity rather than value equality, and tears its relay wires down.
    pub fn remove_posting_warning(&self, warning: &Rc<PostingWarningViewModel>) {
        let removed = {
            let mut warnings = self.warnings.borrow_mut();
            let before = warnings.len();
            warnings.retain(|existing| !Rc::ptr_eq(existing, warning));
            warnings.len() != before
        };
        if removed {
            warning.detach();
            self.notifier.raise(prop::BOGFOERINGSADVARSLER);
        }
    }
}

impl Observable for LedgerViewModel {
    fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }
}
