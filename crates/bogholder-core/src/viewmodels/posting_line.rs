//! Posting-line (bogføringslinje) view-model: validated settable fields over
//! a posting line that has not been committed yet.

use std::rc::Rc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use bogholder_domain::{
    prop, ChangeNotifier, ModelResult, Observable, PostingLineModel, Subscription,
};

use crate::error::{classify_set, ViewModelError};
use crate::format;
use crate::relay::{self, RelayMap};
use crate::validation::{self, ValidationFailure};
use crate::viewmodels::ViewModelContext;

static RELAY: RelayMap = RelayMap::new(&[
    (prop::DATO, &[prop::DATO, prop::DATO_AS_TEXT]),
    (prop::BILAG, &[prop::BILAG]),
    (prop::KONTONUMMER, &[prop::KONTONUMMER]),
    (prop::TEKST, &[prop::TEKST]),
    (prop::BUDGETKONTONUMMER, &[prop::BUDGETKONTONUMMER]),
    (prop::ADRESSEKONTO, &[prop::ADRESSEKONTO]),
    (prop::DEBIT, &[prop::DEBIT, prop::DEBIT_AS_TEXT]),
    (prop::KREDIT, &[prop::KREDIT, prop::KREDIT_AS_TEXT]),
    (prop::BOGFOERT, &[prop::BOGFOERT, prop::BOGFOERT_AS_TEXT]),
]);

const OWNER: &str = "PostingLineViewModel";

/// View-model for one editable posting line.
///
/// Setters validate first; rejected input goes to the error sink and never
/// reaches the model. Accepted writes raise no notification here: the
/// model's own relayed event is the single source of truth, which keeps a
/// successful edit from firing twice.
pub struct PostingLineViewModel {
    model: Rc<dyn PostingLineModel>,
    context: ViewModelContext,
    notifier: ChangeNotifier,
    _model_subscription: Subscription,
}

impl PostingLineViewModel {
    pub fn new(model: Rc<dyn PostingLineModel>, context: ViewModelContext) -> Rc<Self> {
        let notifier = ChangeNotifier::new();
        let subscription = relay::relay_subscription(model.notifier(), &notifier, &RELAY);
        Rc::new(Self {
            model,
            context,
            notifier,
            _model_subscription: subscription,
        })
    }

    fn reject(&self, property: &str, value: Option<&str>, failure: ValidationFailure) {
        let message = failure.message(self.context.texts.as_ref());
        self.context
            .errors
            .handle_error(ViewModelError::rejected_input(OWNER, property, value, message));
    }

    fn apply(&self, property: &str, value: Option<&str>, result: ModelResult<()>) {
        if let Err(error) = result {
            let classified =
                classify_set(self.context.texts.as_ref(), OWNER, property, value, error);
            self.context.errors.handle_error(classified);
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.model.date()
    }

    pub fn date_as_text(&self) -> String {
        format::short_date(self.model.date())
    }

    /// Validates and applies a user-entered posting date.
    pub fn set_date_text(&self, value: Option<&str>) {
        match validation::date_text(value, self.context.clock.as_ref()) {
            Ok(date) => self.apply(prop::DATO, value, self.model.set_date(date)),
            Err(failure) => self.reject(prop::DATO, value, failure),
        }
    }

    pub fn annex(&self) -> Option<String> {
        self.model.annex()
    }

    /// The annex reference is optional; any input is accepted.
    pub fn set_annex(&self, value: Option<&str>) {
        if let Err(failure) = validation::optional_text(value) {
            self.reject(prop::BILAG, value, failure);
            return;
        }
        self.apply(prop::BILAG, value, self.model.set_annex(value));
    }

    pub fn account_number(&self) -> Option<String> {
        self.model.account_number()
    }

    pub fn set_account_number(&self, value: Option<&str>) {
        if let Err(failure) = validation::required_text(value) {
            self.reject(prop::KONTONUMMER, value, failure);
            return;
        }
        self.apply(prop::KONTONUMMER, value, self.model.set_account_number(value));
    }

    pub fn text(&self) -> Option<String> {
        self.model.text()
    }

    pub fn set_text(&self, value: Option<&str>) {
        if let Err(failure) = validation::required_text(value) {
            self.reject(prop::TEKST, value, failure);
            return;
        }
        self.apply(
            prop::TEKST,
            value,
            self.model.set_text(value.unwrap_or_default()),
        );
    }

    pub fn budget_account_number(&self) -> Option<String> {
        self.model.budget_account_number()
    }

    /// The budget-account reference is optional; any input is accepted.
    pub fn set_budget_account_number(&self, value: Option<&str>) {
        if let Err(failure) = validation::optional_text(value) {
            self.reject(prop::BUDGETKONTONUMMER, value, failure);
            return;
        }
        self.apply(
            prop::BUDGETKONTONUMMER,
            value,
            self.model.set_budget_account_number(value),
        );
    }

    pub fn address_account_number(&self) -> Option<String> {
        self.model.address_account_number()
    }

    pub fn set_address_account_number(&self, value: Option<&str>) {
        self.apply(
            prop::ADRESSEKONTO,
            value,
            self.model.set_address_account_number(value),
        );
    }

    pub fn debit(&self) -> Decimal {
        self.model.debit()
    }

    pub fn debit_as_text(&self) -> String {
        format::currency(self.model.debit())
    }

    pub fn set_debit_text(&self, value: Option<&str>) {
        match validation::amount_text(value) {
            Ok(amount) => self.apply(prop::DEBIT, value, self.model.set_debit(amount)),
            Err(failure) => self.reject(prop::DEBIT, value, failure),
        }
    }

    pub fn credit(&self) -> Decimal {
        self.model.credit()
    }

    pub fn credit_as_text(&self) -> String {
        format::currency(self.model.credit())
    }

    pub fn set_credit_text(&self, value: Option<&str>) {
        match validation::amount_text(value) {
            Ok(amount) => self.apply(prop::KREDIT, value, self.model.set_credit(amount)),
            Err(failure) => self.reject(prop::KREDIT, value, failure),
        }
    }

    pub fn posted(&self) -> Decimal {
        self.model.posted()
    }

    pub fn posted_as_text(&self) -> String {
        format::currency(self.model.posted())
    }
}

impl Observable for PostingLineViewModel {
    fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }
}
