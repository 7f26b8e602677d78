mod selection;

pub use selection::ReportSelection;
