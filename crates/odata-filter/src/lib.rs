//! Typed builders for OData-style `$filter` clauses: per-field predicate
//! methods that compose into a single correctly-parenthesized boolean
//! expression string, plus the ergonomics exported via the `prelude`.
#![warn(unreachable_pub)]

// Generated code addresses this crate by name.
extern crate self as odata_filter;

pub mod expr;
pub mod field;
pub mod operand;
pub mod schema;

#[cfg(feature = "derive")]
pub use odata_filter_derive::Filterable;

// test
#[cfg(test)]
pub(crate) mod tests;

///
/// Prelude
///
/// Prelude contains only builder vocabulary.
/// No operand enums or render internals are re-exported here.
///

pub mod prelude {
    pub use crate::{
        expr::Expression,
        field::{
            BoolField, CollectionField, DateComponent, DateField, Field, NumberField, StringField,
            TimeSpan,
        },
        schema::{FilterField, Filterable, fields},
    };

    #[cfg(feature = "derive")]
    pub use crate::Filterable;
}
