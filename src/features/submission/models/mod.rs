mod form;

pub use form::{ReportForm, WizardStep};
