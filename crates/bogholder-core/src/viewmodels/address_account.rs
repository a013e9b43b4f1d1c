//! Address-account view-model for debtors and creditors.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use bogholder_domain::{
    prop, AddressAccountKind, AddressAccountModel, ChangeNotifier, Observable, Subscription,
};

use crate::error::{classify_set, ViewModelError};
use crate::format;
use crate::relay::{self, RelayMap};
use crate::validation::{self, ValidationFailure};
use crate::viewmodels::ViewModelContext;

static RELAY: RelayMap = RelayMap::new(&[
    (prop::KONTONUMMER, &[prop::KONTONUMMER]),
    (prop::NAVN, &[prop::NAVN]),
    (prop::SALDO, &[prop::SALDO, prop::SALDO_AS_TEXT]),
    (prop::STATUS_DATO, &[prop::STATUS_DATO, prop::STATUS_DATO_AS_TEXT]),
]);

const OWNER: &str = "AddressAccountViewModel";

/// View-model for one debtor or creditor account.
pub struct AddressAccountViewModel {
    model: Rc<dyn AddressAccountModel>,
    context: ViewModelContext,
    notifier: ChangeNotifier,
    _model_subscription: Subscription,
}

impl AddressAccountViewModel {
    pub fn new(model: Rc<dyn AddressAccountModel>, context: ViewModelContext) -> Rc<Self> {
        let notifier = ChangeNotifier::new();
        let subscription = relay::relay_subscription(model.notifier(), &notifier, &RELAY);
        Rc::new(Self {
            model,
            context,
            notifier,
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

    pub fn kind(&self) -> AddressAccountKind {
        self.model.kind()
    }

    pub fn status_date(&self) -> DateTime<Utc> {
        self.model.status_date()
    }

    pub fn status_date_as_text(&self) -> String {
        format::short_date_time(self.model.status_date())
    }

    pub fn balance(&self) -> Decimal {
        self.model.balance()
    }

    pub fn balance_as_text(&self) -> String {
        format::currency(self.model.balance())
    }
}

impl Observable for AddressAccountViewModel {
    fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }
}
