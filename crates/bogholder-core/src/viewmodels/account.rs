//! Account (konto) view-model.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use bogholder_domain::{prop, AccountModel, ChangeNotifier, Observable, Subscription};

use crate::error::{classify_set, ViewModelError};
use crate::format;
use crate::relay::{self, RelayMap};
use crate::validation::{self, ValidationFailure};
use crate::viewmodels::ViewModelContext;

static RELAY: RelayMap = RelayMap::new(&[
    (prop::KONTONUMMER, &[prop::KONTONUMMER]),
    (prop::KONTONAVN, &[prop::KONTONAVN]),
    (prop::BESKRIVELSE, &[prop::BESKRIVELSE]),
    (prop::NOTAT, &[prop::NOTAT]),
    (prop::KONTOGRUPPE, &[prop::KONTOGRUPPE]),
    (
        prop::KREDIT,
        &[
            prop::KREDIT,
            prop::KREDIT_AS_TEXT,
            prop::DISPONIBEL,
            prop::DISPONIBEL_AS_TEXT,
        ],
    ),
    (
        prop::SALDO,
        &[
            prop::SALDO,
            prop::SALDO_AS_TEXT,
            prop::DISPONIBEL,
            prop::DISPONIBEL_AS_TEXT,
        ],
    ),
    (prop::STATUS_DATO, &[prop::STATUS_DATO, prop::STATUS_DATO_AS_TEXT]),
]);

const OWNER: &str = "AccountViewModel";

/// View-model for one ordinary account. The available amount is derived:
/// credit limit plus balance.
pub struct AccountViewModel {
    model: Rc<dyn AccountModel>,
    context: ViewModelContext,
    notifier: ChangeNotifier,
    registered: Cell<bool>,
    _model_subscription: Subscription,
}

impl AccountViewModel {
    pub fn new(model: Rc<dyn AccountModel>, context: ViewModelContext) -> Rc<Self> {
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

    pub fn description(&self) -> Option<String> {
        self.model.description()
    }

    pub fn note(&self) -> Option<String> {
        self.model.note()
    }

    pub fn group_number(&self) -> i32 {
        self.model.group_number()
    }

    pub fn status_date(&self) -> DateTime<Utc> {
        self.model.status_date()
    }

    pub fn status_date_as_text(&self) -> String {
        format::short_date_time(self.model.status_date())
    }

    pub fn credit_limit(&self) -> Decimal {
        self.model.credit_limit()
    }

    pub fn credit_limit_as_text(&self) -> String {
        format::currency(self.model.credit_limit())
    }

    pub fn balance(&self) -> Decimal {
        self.model.balance()
    }

    pub fn balance_as_text(&self) -> String {
        format::currency(self.model.balance())
    }

    /// Credit limit plus balance.
    pub fn available(&self) -> Decimal {
        self.model.credit_limit() + self.model.balance()
    }

    pub fn available_as_text(&self) -> String {
        format::currency(self.available())
    }

    /// Whether the account has been registered into an account group line.
    /// The flag prevents double counting in aggregate sums.
    pub fn is_registered(&self) -> bool {
        self.registered.get()
    }

    pub(crate) fn mark_registered(&self) {
        self.registered.set(true);
    }
}

impl Observable for AccountViewModel {
    fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }
}
