//! Module: schema
//! Responsibility: the binding contract between typed builders and
//! schema-shaped proxy surfaces.
//! Does not own: clause rendering or proc-macro code generation.

use crate::field::{BoolField, CollectionField, DateField, NumberField, StringField};
use chrono::{DateTime, Utc};

///
/// FilterField
///
/// A builder surface bindable to a property path. `property_keys` is the
/// ordered set of property names addressable on the surface; scalar builders
/// report none and are addressed through their own path. Collection
/// quantifiers branch on exactly this distinction.
///

pub trait FilterField: Sized {
    /// Ordered, distinct property names addressable on this surface.
    fn property_keys() -> &'static [&'static str];

    /// Bind the surface to a property path.
    fn bind(path: &str) -> Self;
}

///
/// Filterable
///
/// Maps a schema value category to its builder category. Implemented here
/// for the scalar primitives and the structural wrappers; user schema types
/// implement it via `#[derive(Filterable)]`.
///

pub trait Filterable {
    type Field: FilterField;
}

impl Filterable for String {
    type Field = StringField;
}

impl Filterable for bool {
    type Field = BoolField;
}

impl Filterable for DateTime<Utc> {
    type Field = DateField;
}

macro_rules! filterable_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Filterable for $ty {
                type Field = NumberField;
            }
        )*
    };
}

filterable_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<T: Filterable> Filterable for Option<T> {
    type Field = T::Field;
}

impl<T: Filterable> Filterable for Vec<T> {
    type Field = CollectionField<T::Field>;
}

/// Root builder surface for a filterable schema type. Top-level properties
/// are addressed by bare name.
#[must_use]
pub fn fields<T: Filterable>() -> T::Field {
    T::Field::bind("")
}

/// Join a property name onto a path prefix with the protocol's `/`
/// separator; an empty prefix yields the bare name.
#[must_use]
pub fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}

///
/// TESTS
///
