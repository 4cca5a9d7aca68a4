mod enums;
mod style;

pub use enums::{TableLayout, Tag};
pub use style::Style;
