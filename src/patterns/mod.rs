//! Line grammar matching for the fixed benchmark log formats

pub mod cursor;
pub mod line;

pub use cursor::LineCursor;
pub use line::{FieldKind, FieldMap, FieldValue, LinePattern};
