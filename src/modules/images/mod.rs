//! Image selection module
//!
//! The picker hands back a local, displayable reference. Images are never
//! uploaded anywhere.

mod source;

pub use source::ImageSource;
