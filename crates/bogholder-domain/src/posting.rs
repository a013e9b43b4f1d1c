//! Posting-line (bogføringslinje) and posting-warning (bogføringsadvarsel)
//! models.

use std::cell::RefCell;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::observe::{ChangeNotifier, Observable};
use crate::prop;

/// Posting-line fields as loaded from (or staged for) the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostingLineData {
    pub date: NaiveDate,
    #[serde(default)]
    pub annex: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub budget_account_number: Option<String>,
    #[serde(default)]
    pub address_account_number: Option<String>,
    pub debit: Decimal,
    pub credit: Decimal,
    pub posted: Decimal,
}

/// Contract the posting-line view-model programs against.
///
/// `account_number` and `budget_account_number` may be unset, but once a
/// value is supplied it must be non-blank.
pub trait PostingLineModel: Observable {
    fn date(&self) -> NaiveDate;
    fn set_date(&self, value: NaiveDate) -> ModelResult<()>;
    fn annex(&self) -> Option<String>;
    fn set_annex(&self, value: Option<&str>) -> ModelResult<()>;
    fn account_number(&self) -> Option<String>;
    fn set_account_number(&self, value: Option<&str>) -> ModelResult<()>;
    fn text(&self) -> Option<String>;
    fn set_text(&self, value: &str) -> ModelResult<()>;
    fn budget_account_number(&self) -> Option<String>;
    fn set_budget_account_number(&self, value: Option<&str>) -> ModelResult<()>;
    fn address_account_number(&self) -> Option<String>;
    fn set_address_account_number(&self, value: Option<&str>) -> ModelResult<()>;
    fn debit(&self) -> Decimal;
    fn set_debit(&self, value: Decimal) -> ModelResult<()>;
    fn credit(&self) -> Decimal;
    fn set_credit(&self, value: Decimal) -> ModelResult<()>;
    fn posted(&self) -> Decimal;
    fn set_posted(&self, value: Decimal) -> ModelResult<()>;
}

/// Observable in-memory posting line, mutable until committed.
pub struct PostingLine {
    data: RefCell<PostingLineData>,
    notifier: ChangeNotifier,
}

impl PostingLine {
    pub fn new(data: PostingLineData) -> Self {
        Self {
            data: RefCell::new(data),
            notifier: ChangeNotifier::new(),
        }
    }

    fn non_blank(parameter: &'static str, value: Option<&str>) -> ModelResult<Option<String>> {
        match value {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Err(ModelError::argument(
                parameter,
                "value may be unset but must not be blank",
            )),
            Some(raw) => Ok(Some(raw.to_string())),
        }
    }
}

impl Observable for PostingLine {
    fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }
}

impl PostingLineModel for PostingLine {
    fn date(&self) -> NaiveDate {
        self.data.borrow().date
    }

    fn set_date(&self, value: NaiveDate) -> ModelResult<()> {
        self.data.borrow_mut().date = value;
        self.notifier.raise(prop::DATO);
        Ok(())
    }

    fn annex(&self) -> Option<String> {
        self.data.borrow().annex.clone()
    }

    fn set_annex(&self, value: Option<&str>) -> ModelResult<()> {
        self.data.borrow_mut().annex = value.map(str::to_string);
        self.notifier.raise(prop::BILAG);
        Ok(())
    }

    fn account_number(&self) -> Option<String> {
        self.data.borrow().account_number.clone()
    }

    fn set_account_number(&self, value: Option<&str>) -> ModelResult<()> {
        let checked = Self::non_blank("account_number", value)?;
        self.data.borrow_mut().account_number = checked;
        self.notifier.raise(prop::KONTONUMMER);
        Ok(())
    }

    fn text(&self) -> Option<String> {
        self.data.borrow().text.clone()
    }

    fn set_text(&self, value: &str) -> ModelResult<()> {
        self.data.borrow_mut().text = Some(value.to_string());
        self.notifier.raise(prop::TEKST);
        Ok(())
    }

    fn budget_account_number(&self) -> Option<String> {
        self.data.borrow().budget_account_number.clone()
    }

    fn set_budget_account_number(&self, value: Option<&str>) -> ModelResult<()> {
        let checked = Self::non_blank("budget_account_number", value)?;
        self.data.borrow_mut().budget_account_number = checked;
        self.notifier.raise(prop::BUDGETKONTONUMMER);
        Ok(())
    }

    fn address_account_number(&self) -> Option<String> {
        self.data.borrow().address_account_number.clone()
    }

    fn set_address_account_number(&self, value: Option<&str>) -> ModelResult<()> {
        self.data.borrow_mut().address_account_number = value.map(str::to_string);
        self.notifier.raise(prop::ADRESSEKONTO);
        Ok(())
    }

    fn debit(&self) -> Decimal {
        self.data.borrow().debit
    }

    fn set_debit(&self, value: Decimal) -> ModelResult<()> {
        self.data.borrow_mut().debit = value;
        self.notifier.raise(prop::DEBIT);
        Ok(())
    }

    fn credit(&self) -> Decimal {
        self.data.borrow().credit
    }

    fn set_credit(&self, value: Decimal) -> ModelResult<()> {
        self.data.borrow_mut().credit = value;
        self.notifier.raise(prop::KREDIT);
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

/// Posting-warning fields: raised when a posting takes an account out of
/// bounds. The amount keeps its sign here; presentation normalizes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostingWarningData {
    pub warning: String,
    pub account_number: String,
    pub account_name: String,
    pub amount: Decimal,
}

/// Contract the posting-warning view-model programs against.
pub trait PostingWarningModel: Observable {
    fn warning(&self) -> String;
    fn set_warning(&self, value: &str) -> ModelResult<()>;
    fn account_number(&self) -> String;
    fn set_account_number(&self, value: &str) -> ModelResult<()>;
    fn account_name(&self) -> String;
    fn set_account_name(&self, value: &str) -> ModelResult<()>;
    fn amount(&self) -> Decimal;
    fn set_amount(&self, value: Decimal) -> ModelResult<()>;
}

/// Observable in-memory posting warning.
pub struct PostingWarning {
    data: RefCell<PostingWarningData>,
    notifier: ChangeNotifier,
}

impl PostingWarning {
    pub fn new(data: PostingWarningData) -> Self {
        Self {
            data: RefCell::new(data),
            notifier: ChangeNotifier::new(),
        }
    }
}

impl Observable for PostingWarning {
    fn notifier(&self) -> ChangeNotifier {
        self.notifier.clone()
    }
}

impl PostingWarningModel for PostingWarning {
    fn warning(&self) -> String {
        self.data.borrow().warning.clone()
    }

    fn set_warning(&self, value: &str) -> ModelResult<()> {
        self.data.borrow_mut().warning = value.to_string();
        self.notifier.raise(prop::ADVARSEL);
        Ok(())
    }

    fn account_number(&self) -> String {
        self.data.borrow().account_number.clone()
    }

    fn set_account_number(&self, value: &str) -> ModelResult<()> {
        if value.trim().is_empty() {
            return Err(ModelError::argument(
                "account_number",
                "account number must not be blank",
            ));
        }
        self.data.borrow_mut().account_number = value.to_string();
        self.notifier.raise(prop::KONTONUMMER);
        Ok(())
    }

    fn account_name(&self) -> String {
        self.data.borrow().account_name.clone()
    }

    fn set_account_name(&self, value: &str) -> ModelResult<()> {
        self.data.borrow_mut().account_name = value.to_string();
        self.notifier.raise(prop::KONTONAVN);
        Ok(())
    }

    fn amount(&self) -> Decimal {
        self.data.borrow().amount
    }

    fn set_amount(&self, value: Decimal) -> ModelResult<()> {
        self.data.borrow_mut().amount = value;
        self.notifier.raise(prop::BELOEB);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn line() -> PostingLine {
        PostingLine::new(PostingLineData {
            date: NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
            annex: None,
            account_number: None,
            text: None,
            budget_account_number: None,
            address_account_number: None,
            debit: Decimal::ZERO,
            credit: Decimal::ZERO,
            posted: Decimal::ZERO,
        })
    }

    #[test]
    fn account_number_may_be_unset_but_not_blank() {
        let line = line();

        line.set_account_number(Some("1110")).unwrap();
        assert_eq!(line.account_number().as_deref(), Some("1110"));

        let err = line.set_account_number(Some("   ")).unwrap_err();
        assert!(matches!(err, ModelError::Argument { ref parameter, .. } if parameter == "account_number"));
        assert_eq!(line.account_number().as_deref(), Some("1110"));

        line.set_account_number(None).unwrap();
        assert_eq!(line.account_number(), None);
    }

    #[test]
    fn debit_change_raises_debit() {
        let line = line();
        let raised = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = std::rc::Rc::clone(&raised);
        line.notifier()
            .subscribe(move |property| sink.borrow_mut().push(property.to_string()));

        line.set_debit(dec!(250)).unwrap();

        assert_eq!(*raised.borrow(), vec![prop::DEBIT]);
    }

    #[test]
    fn warning_keeps_its_signed_amount() {
        let warning = PostingWarning::new(PostingWarningData {
            warning: "Kassekredit overtrukket".to_string(),
            account_number: "1110".to_string(),
            account_name: "Kassekredit".to_string(),
            amount: dec!(-750.25),
        });
        assert_eq!(warning.amount(), dec!(-750.25));
    }
}
