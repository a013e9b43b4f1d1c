//! Posting-warning (bogføringsadvarsel) view-model: a derived alert that a
//! posting took an account out of bounds.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rust_decimal::Decimal;

use bogholder_domain::{
    prop, ChangeNotifier, Observable, PostingWarningModel, Subscription,
};

use crate::format::{self, AmountDirection};
use crate::relay::{self, RelayMap};
use crate::text::Text;
use crate::viewmodels::{LedgerViewModel, PostingLineViewModel, ViewModelContext};

static WARNING_RELAY: RelayMap = RelayMap::new(&[
    (prop::ADVARSEL, &[prop::ADVARSEL, prop::INFORMATION]),
    (prop::KONTONUMMER, &[prop::KONTONUMMER, prop::INFORMATION]),
    (prop::KONTONAVN, &[prop::KONTONAVN, prop::INFORMATION]),
    (
        prop::BELOEB,
        &[prop::BELOEB, prop::BELOEB_AS_TEXT, prop::INFORMATION],
    ),
]);

static LINE_RELAY: RelayMap = RelayMap::new(&[(prop::DATO, &[prop::DATO, prop::DATO_AS_TEXT])]);

/// View-model for one posting warning. It belongs to exactly one ledger and
/// derives its explanation from the warning model together with a read-only
/// posting-line view-model.
pub struct PostingWarningViewModel {
    ledger: Weak<LedgerViewModel>,
    model: Rc<dyn PostingWarningModel>,
    posting_line: Rc<PostingLineViewModel>,
    context: ViewModelContext,
    notifier: ChangeNotifier,
    subscriptions: RefCell<Vec<Subscription>>,
}

impl PostingWarningViewModel {
    pub fn new(
        ledger: &Rc<LedgerViewModel>,
        model: Rc<dyn PostingWarningModel>,
        posting_line: Rc<PostingLineViewModel>,
        context: ViewModelContext,
    ) -> Rc<Self> {
        let notifier = ChangeNotifier::new();
        let subscriptions = vec![
            relay::relay_subscription(model.notifier(), &notifier, &WARNING_RELAY),
            relay::relay_subscription(posting_line.notifier(), &notifier, &LINE_RELAY),
        ];
        Rc::new(Self {
            ledger: Rc::downgrade(ledger),
            model,
            posting_line,
            context,
            notifier,
            subscriptions: RefCell::new(subscriptions),
        })
    }

    pub fn warning(&self) -> String {
        self.model.warning()
    }

    pub fn account_number(&self) -> String {
        self.model.account_number()
    }

    pub fn account_name(&self) -> String {
        self.model.account_name()
    }

    /// The displayed amount is always non-negative; the direction carries
    /// the sign separately.
    pub fn amount(&self) -> Decimal {
        format::normalized_amount(self.model.amount()).0
    }

    pub fn amount_as_text(&self) -> String {
        format::currency(self.amount())
    }

    pub fn direction(&self) -> AmountDirection {
        format::normalized_amount(self.model.amount()).1
    }

    /// Human-readable explanation composed from the account reference and
    /// the normalized amount; the sign picks the phrasing.
    pub fn information(&self) -> String {
        let (amount, direction) = format::normalized_amount(self.model.amount());
        let label = format!("{} ({})", self.model.account_name(), self.model.account_number());
        let key = match direction {
            AmountDirection::Overdrawn => Text::AccountOverdrawnBy,
            AmountDirection::Reduced => Text::AvailableAmountDownTo,
        };
        self.context
            .texts
            .resolve(key, &[&label, &format::currency(amount)])
    }

    /// The posting line the warning refers to; read-only here.
    pub fn posting_line(&self) -> &Rc<PostingLineViewModel> {
        &self.posting_line
    }

    /// Detaches the warning from its owning ledger. The ledger drops exactly
    /// this instance, compared by reference identity.
    pub fn remove(self: &Rc<Self>) {
        if let Some(ledger) = self.ledger.upgrade() {
            ledger.remove_posting_warning(self);
        }
    }

    /// Tears down the relay wires; called by the ledger on removal.
    pub(crate) fn detach(&self) {
        for subscription in self.subscriptions.borrow().iter() {
            subscription.detach();
        }
        self.subscriptions.borrow_mut().clear();
    }
}

impl Observable for PostingWarningViewModel {
    fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }
}
