//! Budget-account (budgetkonto) view-model.

use std::cell::Cell;
use std::rc::Rc;

use rust_decimal::Decimal;

use bogholder_domain::{prop, BudgetAccountModel, ChangeNotifier, Observable, Subscription};

use crate::error::{classify_set, ViewModelError};
use crate::format;
use crate::relay::{self, RelayMap};
use crate::validation::{self, ValidationFailure};
use crate::viewmodels::ViewModelContext;

static RELAY: RelayMap = RelayMap::new(&[
    (prop::KONTONUMMER, &[prop::KONTONUMMER]),
    (prop::KONTONAVN, &[prop::KONTONAVN]),
    (prop::KONTOGRUPPE, &[prop::KONTOGRUPPE]),
    (prop::INDTAEGTER, &[prop::INDTAEGTER, prop::INDTAEGTER_AS_TEXT]),
    (prop::UDGIFTER, &[prop::UDGIFTER, prop::UDGIFTER_AS_TEXT]),
    (
        prop::BUDGET,
        &[
            prop::BUDGET,
            prop::BUDGET_AS_TEXT,
            prop::DISPONIBEL,
            prop::DISPONIBEL_AS_TEXT,
        ],
    ),
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

const OWNER: &str = "BudgetAccountViewModel";

/// View-model for one budget account. The available amount is derived:
/// budget minus posted.
pub struct BudgetAccountViewModel {
    model: Rc<dyn BudgetAccountModel>,
    context: ViewModelContext,
    notifier: ChangeNotifier,
    registered: Cell<bool>,
    _model_subscription: Subscription,
}

impl BudgetAccountViewModel {
    pub fn new(model: Rc<dyn BudgetAccountModel>, context: ViewModelContext) -> Rc<Self> {
        let notifier = ChangeNotifier::new();
        let subscription = relay::relay_subscription(model.notifier(), &notifier, &RELAY);
        Rc::new(Self {
            model,
            context,
            notifier,
            registered: Cell::new(false),
            _model_subscription: subscription,
        })
    }

    pub fn number(&self) -> String {
        self.model.number()
    }

    pub fn name(&self) -> String {
        self.model.name()
    }

    pub fn set_name(&self, value: Option<&str>) {
        if let Err(failure) = validation::required_text(value) {
            self.reject(prop::KONTONAVN, value, failure);
            return;
        }
        if let Err(error) = self.model.set_name(value.unwrap_or_default()) {
            let classified = classify_set(
                self.context.texts.as_ref(),
                OWNER,
                prop::KONTONAVN,
                value,
                error,
            );
            self.context.errors.handle_error(classified);
        }
    }

    fn reject(&self, property: &str, value: Option<&str>, failure: ValidationFailure) {
        let message = failure.message(self.context.texts.as_ref());
        self.context
            .errors
            .handle_error(ViewModelError::rejected_input(OWNER, property, value, message));
    }

    pub fn group_number(&self) -> Option<i32> {
        self.model.group_number()
    }

    pub fn income(&self) -> Decimal {
        self.model.income()
    }

    pub fn income_as_text(&self) -> String {
        format::currency(self.model.income())
    }

    pub fn expenses(&self) -> Decimal {
        self.model.expenses()
    }

    pub fn expenses_as_text(&self) -> String {
        format::currency(self.model.expenses())
    }

    pub fn budget(&self) -> Decimal {
        self.model.budget()
    }

    pub fn budget_as_text(&self) -> String {
        format::currency(self.model.budget())
    }

    pub fn posted(&self) -> Decimal {
        self.model.posted()
    }

    pub fn posted_as_text(&self) -> String {
        format::currency(self.model.posted())
    }

    /// Budget minus posted.
    pub fn available(&self) -> Decimal {
        self.model.budget() - self.model.posted()
    }

    pub fn available_as_text(&self) -> String {
        format::currency(self.available())
    }

    /// Whether the account has been registered into a statement line. The
    /// flag guarantees an account is counted in at most one line, once.
    pub fn is_registered(&self) -> bool {
        self.registered.get()
    }

    pub(crate) fn mark_registered(&self) {
        self.registered.set(true);
    }
}

impl Observable for BudgetAccountViewModel {
    fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }
}
