//! View-model error taxonomy and the exception classifier.
//!
//! Every failure raised while reading or writing a repository-backed
//! property funnels through [`classify_get`]/[`classify_set`] and is handed
//! to an [`ErrorSink`]; nothing is rethrown past the property boundary.

use std::cell::RefCell;

use thiserror::Error;

use bogholder_domain::ModelError;

use crate::text::{Text, TextProvider};

/// Errors surfaced to the UI through the error sink.
#[derive(Debug, Error)]
pub enum ViewModelError {
    /// Rejected input, or an argument-shaped failure from the model. The
    /// attempted value never reaches (or never survives in) the model.
    #[error("{message}")]
    Validation {
        /// The view-model instance performing the validation.
        owner: String,
        property: String,
        /// The raw value as the user entered it.
        value: Option<String>,
        message: String,
        #[source]
        source: Option<ModelError>,
    },
    /// Data-access failure reported by a collaborator; the original message
    /// is passed through verbatim, without a cause.
    #[error("{0}")]
    Repository(String),
    /// Domain-rule violation reported by a collaborator; the original
    /// message is passed through verbatim, without a cause.
    #[error("{0}")]
    Business(String),
    /// Anything else, wrapped with a generated description and the original
    /// failure preserved as cause.
    #[error("{message}")]
    System {
        property: String,
        message: String,
        #[source]
        source: Option<ModelError>,
    },
}

impl ViewModelError {
    /// Validation error for input the rules rejected before any model write.
    pub fn rejected_input(
        owner: &str,
        property: &str,
        value: Option<&str>,
        message: String,
    ) -> Self {
        ViewModelError::Validation {
            owner: owner.to_string(),
            property: property.to_string(),
            value: value.map(str::to_string),
            message,
            source: None,
        }
    }
}

/// Which accessor the failure came from; picks the generated message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Get,
    Set,
}

impl Access {
    fn text(self) -> Text {
        match self {
            Access::Get => Text::ErrorWhileGettingPropertyValue,
            Access::Set => Text::ErrorWhileSettingPropertyValue,
        }
    }
}

/// Maps a failure raised while writing `property` into the fixed taxonomy.
///
/// Dispatch order: argument shape, repository, business, catch-all. The
/// repository and business arms reuse the collaborator's message verbatim
/// and drop the cause; the other two keep the original error as cause.
pub fn classify_set(
    texts: &dyn TextProvider,
    owner: &str,
    property: &str,
    value: Option<&str>,
    error: ModelError,
) -> ViewModelError {
    classify(texts, Access::Set, owner, property, value, error)
}

/// Maps a failure raised while reading `property` into the fixed taxonomy.
pub fn classify_get(
    texts: &dyn TextProvider,
    owner: &str,
    property: &str,
    error: ModelError,
) -> ViewModelError {
    classify(texts, Access::Get, owner, property, None, error)
}

fn classify(
    texts: &dyn TextProvider,
    access: Access,
    owner: &str,
    property: &str,
    value: Option<&str>,
    error: ModelError,
) -> ViewModelError {
    let detail = error.to_string();
    match error {
        ModelError::Argument { .. } => ViewModelError::Validation {
            owner: owner.to_string(),
            property: property.to_string(),
            value: value.map(str::to_string),
            message: texts.resolve(access.text(), &[property, &detail]),
            source: Some(error),
        },
        ModelError::Repository(message) => ViewModelError::Repository(message),
        ModelError::Business(message) => ViewModelError::Business(message),
        ModelError::Other(_) => ViewModelError::System {
            property: property.to_string(),
            message: texts.resolve(access.text(), &[property, &detail]),
            source: Some(error),
        },
    }
}

/// Sole user-visible error surface of the view-model layer.
pub trait ErrorSink {
    fn handle_error(&self, error: ViewModelError);
}

/// Default sink: logs classified errors through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn handle_error(&self, error: ViewModelError) {
        tracing::warn!(error = %error, "view-model error");
    }
}

/// Records every classified error. Useful to host applications and tests.
#[derive(Default)]
pub struct CollectingErrorSink {
    errors: RefCell<Vec<ViewModelError>>,
}

impl CollectingErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns the recorded errors.
    pub fn take(&self) -> Vec<ViewModelError> {
        self.errors.take()
    }

    pub fn len(&self) -> usize {
        self.errors.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }
}

impl ErrorSink for CollectingErrorSink {
    fn handle_error(&self, error: ViewModelError) {
        self.errors.borrow_mut().push(error);
    }
}

#[cfg(test)]
mod tests {
    use crate::text::DefaultTexts;

    use super::*;

    #[test]
    fn argument_errors_become_validation_with_value_and_cause() {
        let original = ModelError::argument("status_date", "status date must not regress");
        let classified = classify_set(
            &DefaultTexts,
            "LedgerViewModel",
            "StatusDato",
            Some("2012-12-31"),
            original.clone(),
        );

        match classified {
            ViewModelError::Validation {
                owner,
                property,
                value,
                message,
                source,
            } => {
                assert_eq!(owner, "LedgerViewModel");
                assert_eq!(property, "StatusDato");
                assert_eq!(value.as_deref(), Some("2012-12-31"));
                assert!(message.starts_with("error while setting property value: StatusDato:"));
                assert_eq!(source, Some(original));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn repository_and_business_messages_pass_through_verbatim() {
        let repository = classify_set(
            &DefaultTexts,
            "AccountViewModel",
            "Saldo",
            None,
            ModelError::Repository("connection refused".to_string()),
        );
        assert!(
            matches!(repository, ViewModelError::Repository(ref message) if message == "connection refused")
        );
        assert!(std::error::Error::source(&repository).is_none());

        let business = classify_get(
            &DefaultTexts,
            "AccountViewModel",
            "Saldo",
            ModelError::Business("account is closed".to_string()),
        );
        assert!(
            matches!(business, ViewModelError::Business(ref message) if message == "account is closed")
        );
        assert!(std::error::Error::source(&business).is_none());
    }

    #[test]
    fn unrecognized_errors_become_system_with_embedded_message() {
        let classified = classify_set(
            &DefaultTexts,
            "PostingLineViewModel",
            "Tekst",
            Some("Husleje"),
            ModelError::Other("disk on fire".to_string()),
        );

        match classified {
            ViewModelError::System {
                property,
                message,
                source,
            } => {
                assert_eq!(property, "Tekst");
                assert_eq!(
                    message,
                    "error while setting property value: Tekst: disk on fire"
                );
                assert_eq!(source, Some(ModelError::Other("disk on fire".to_string())));
            }
            other => panic!("expected System, got {other:?}"),
        }
    }

    #[test]
    fn getter_failures_use_the_getting_template() {
        let classified = classify_get(
            &DefaultTexts,
            "AccountViewModel",
            "Saldo",
            ModelError::Other("boom".to_string()),
        );
        assert_eq!(
            classified.to_string(),
            "error while getting property value: Saldo: boom"
        );
    }

    #[test]
    fn collecting_sink_records_in_order() {
        let sink = CollectingErrorSink::new();
        sink.handle_error(ViewModelError::Repository("first".to_string()));
        sink.handle_error(ViewModelError::Business("second".to_string()));

        let errors = sink.take();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ViewModelError::Repository(_)));
        assert!(matches!(errors[1], ViewModelError::Business(_)));
        assert!(sink.is_empty());
    }
}
