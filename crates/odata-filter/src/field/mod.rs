//! Module: field
//! Responsibility: typed per-category predicate builders over property paths.
//! Does not own: expression composition or schema derivation.

mod boolean;
mod collection;
mod date;
mod generic;
mod number;
mod string;

pub use boolean::BoolField;
pub use collection::CollectionField;
pub use date::{DateComponent, DateField, TimeSpan};
pub use generic::Field;
pub use number::NumberField;
pub use string::StringField;
