//! bogholder-core
//!
//! View-model layer for the bookkeeping client: validation rules, the
//! exception classifier, the change relay, derived-value formatting, and the
//! entity view-models a data-bound UI reads from. Depends on
//! `bogholder-domain` only; repositories, commands, and the UI itself are
//! external collaborators.

pub mod error;
pub mod format;
pub mod relay;
pub mod text;
pub mod time;
pub mod validation;
pub mod viewmodels;

pub use error::{
    classify_get, classify_set, CollectingErrorSink, ErrorSink, TracingErrorSink, ViewModelError,
};
pub use text::{DefaultTexts, Text, TextProvider};
pub use time::{Clock, FixedClock, SystemClock};
pub use viewmodels::*;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("bogholder_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
