//! End-to-end flows over a fully wired ledger view-model.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use bogholder_core::{
    AccountViewModel, CollectingErrorSink, FixedClock, LedgerViewModel, PostingLineViewModel,
    PostingWarningViewModel, StatementLineViewModel, ViewModelContext, ViewModelError,
};
use bogholder_domain::{
    prop, Account, AccountData, BudgetAccount, BudgetAccountData, BudgetAccountGroupData,
    BudgetAccountModel, Ledger,
    LedgerData, Observable, PostingLine, PostingLineData, PostingWarning, PostingWarningData,
};

fn context(sink: &Rc<CollectingErrorSink>) -> ViewModelContext {
    ViewModelContext::new(Rc::clone(sink) as Rc<dyn bogholder_core::ErrorSink>).with_clock(
        Rc::new(FixedClock::at(NaiveDate::from_ymd_opt(2014, 6, 30).unwrap())),
    )
}

fn ledger_view_model(context: &ViewModelContext) -> Rc<LedgerViewModel> {
    LedgerViewModel::new(
        Rc::new(Ledger::new(LedgerData {
            number: 1,
            name: "Privatregnskab".to_string(),
            status_date: "2013-01-01T12:00:00Z".parse().unwrap(),
        })),
        context.clone(),
    )
}

fn empty_posting_line(context: &ViewModelContext) -> Rc<PostingLineViewModel> {
    PostingLineViewModel::new(
        Rc::new(PostingLine::new(PostingLineData {
            date: NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
            annex: None,
            account_number: None,
            text: None,
            budget_account_number: None,
            address_account_number: None,
            debit: Decimal::ZERO,
            credit: Decimal::ZERO,
            posted: Decimal::ZERO,
        })),
        context.clone(),
    )
}

fn record(observable: &dyn Observable) -> Rc<RefCell<Vec<String>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let collector = Rc::clone(&log);
    observable
        .notifier()
        .subscribe(move |property| collector.borrow_mut().push(property.to_string()));
    log
}

#[test]
fn status_date_scenario_matches_the_monotonic_contract() {
    let sink = Rc::new(CollectingErrorSink::new());
    let context = context(&sink);
    let ledger = ledger_view_model(&context);
    let log = record(ledger.as_ref());

    // Earlier date: rejected, unchanged, no notification.
    ledger.set_status_date("2012-12-31T23:00:00Z".parse().unwrap());
    assert_eq!(
        ledger.status_date(),
        "2013-01-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );
    assert!(log.borrow().is_empty());
    assert_eq!(sink.len(), 1);
    assert!(matches!(
        sink.take()[0],
        ViewModelError::Validation { .. }
    ));

    // Later date: applied with exactly one StatusDato notification.
    ledger.set_status_date("2013-06-30T12:00:00Z".parse().unwrap());
    assert_eq!(
        ledger.status_date(),
        "2013-06-30T12:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );
    assert_eq!(*log.borrow(), vec![prop::STATUS_DATO]);
    assert!(sink.is_empty());
}

#[test]
fn adding_a_posting_line_notifies_the_collection_once() {
    let sink = Rc::new(CollectingErrorSink::new());
    let context = context(&sink);
    let ledger = ledger_view_model(&context);
    assert!(ledger.posting_lines().is_empty());
    let log = record(ledger.as_ref());

    ledger.add_posting_line(empty_posting_line(&context));

    assert_eq!(ledger.posting_lines().len(), 1);
    assert_eq!(*log.borrow(), vec![prop::BOGFOERINGSLINJER]);
}

#[test]
fn an_edited_posting_line_round_trips_through_the_ledger() {
    let sink = Rc::new(CollectingErrorSink::new());
    let context = context(&sink);
    let ledger = ledger_view_model(&context);
    let line = empty_posting_line(&context);
    ledger.add_posting_line(Rc::clone(&line));

    line.set_date_text(Some("2014-01-01"));
    line.set_account_number(Some("1110"));
    line.set_text(Some("Husleje"));
    line.set_debit_text(Some("4.500,00"));

    assert!(sink.is_empty());
    let stored = &ledger.posting_lines()[0];
    assert_eq!(stored.date(), NaiveDate::from_ymd_opt(2014, 1, 1).unwrap());
    assert_eq!(stored.date_as_text(), "01-01-2014");
    assert_eq!(stored.account_number().as_deref(), Some("1110"));
    assert_eq!(stored.debit(), dec!(4500));
}

#[test]
fn removing_a_warning_drops_exactly_that_instance() {
    let sink = Rc::new(CollectingErrorSink::new());
    let context = context(&sink);
    let ledger = ledger_view_model(&context);

    let make_warning = |amount| {
        PostingWarningViewModel::new(
            &ledger,
            Rc::new(PostingWarning::new(PostingWarningData {
                warning: "Kontoen er overtrukket".to_string(),
                account_number: "1110".to_string(),
                account_name: "Kassekredit".to_string(),
                amount,
            })),
            empty_posting_line(&context),
            context.clone(),
        )
    };
    let first = make_warning(dec!(-100));
    let second = make_warning(dec!(-200));
    ledger.add_posting_warning(Rc::clone(&first));
    ledger.add_posting_warning(Rc::clone(&second));
    let log = record(ledger.as_ref());

    first.remove();

    let remaining = ledger.posting_warnings();
    assert_eq!(remaining.len(), 1);
    assert!(Rc::ptr_eq(&remaining[0], &second));
    assert_eq!(*log.borrow(), vec![prop::BOGFOERINGSADVARSLER]);

    // Removing again is a no-op: the instance is already gone.
    first.remove();
    assert_eq!(ledger.posting_warnings().len(), 1);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn statement_line_registration_feeds_the_ledger_wide_sums() {
    let sink = Rc::new(CollectingErrorSink::new());
    let context = context(&sink);
    let ledger = ledger_view_model(&context);
    let line = StatementLineViewModel::new(BudgetAccountGroupData {
        id: 2,
        number: 2,
        name: "Faste udgifter".to_string(),
    });
    ledger.add_statement_line(Rc::clone(&line));

    let model = Rc::new(BudgetAccount::new(BudgetAccountData {
        number: "3000".to_string(),
        name: "Dagligvarer".to_string(),
        group_number: Some(2),
        income: Decimal::ZERO,
        expenses: dec!(3500),
        budget: dec!(-3500),
        posted: dec!(-1200),
    }));
    let account = bogholder_core::BudgetAccountViewModel::new(model.clone(), context.clone());
    ledger.add_budget_account(Rc::clone(&account));

    line.register(&ledger, &account);
    line.register(&ledger, &account);

    assert_eq!(line.member_count(), 1);
    assert_eq!(line.budget(), dec!(-3500));
    assert_eq!(line.posted(), dec!(-1200));

    // A refresh of the underlying model flows into the aggregate.
    model.set_posted(dec!(-2000)).unwrap();
    assert_eq!(line.posted(), dec!(-2000));
    assert_eq!(line.available(), dec!(-1500));
}

#[test]
fn account_collections_expose_snapshots_not_live_views() {
    let sink = Rc::new(CollectingErrorSink::new());
    let context = context(&sink);
    let ledger = ledger_view_model(&context);
    let account = AccountViewModel::new(
        Rc::new(Account::new(AccountData {
            number: "1110".to_string(),
            name: "Kassekredit".to_string(),
            description: None,
            note: None,
            group_number: 1,
            status_date: "2014-01-01T00:00:00Z".parse().unwrap(),
            credit_limit: Decimal::ZERO,
            balance: dec!(100),
        })),
        context.clone(),
    );

    let snapshot = ledger.accounts();
    ledger.add_account(account);

    assert!(snapshot.is_empty());
    assert_eq!(ledger.accounts().len(), 1);
}
