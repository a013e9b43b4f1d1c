//! Collaborator handles shared by every view-model of one ledger window.

use std::rc::Rc;

use crate::error::{ErrorSink, TracingErrorSink};
use crate::text::{DefaultTexts, TextProvider};
use crate::time::{Clock, SystemClock};

/// Injected collaborators: the error sink (sole user-visible error surface),
/// the localized text catalog, and the clock used by date validation.
#[derive(Clone)]
pub struct ViewModelContext {
    pub errors: Rc<dyn ErrorSink>,
    pub texts: Rc<dyn TextProvider>,
    pub clock: Rc<dyn Clock>,
}

impl ViewModelContext {
    pub fn new(errors: Rc<dyn ErrorSink>) -> Self {
        Self {
            errors,
            texts: Rc::new(DefaultTexts),
            clock: Rc::new(SystemClock),
        }
    }

    pub fn with_texts(mut self, texts: Rc<dyn TextProvider>) -> Self {
        self.texts = texts;
        self
    }

    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

impl Default for ViewModelContext {
    fn default() -> Self {
        Self::new(Rc::new(TracingErrorSink))
    }
}
