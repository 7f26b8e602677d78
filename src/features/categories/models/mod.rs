mod category;

pub use category::{Category, CategoryStyle, UpdateCategory};
