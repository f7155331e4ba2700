//! Module: operand
//! Responsibility: closed comparison-operand variants and literal rendering.
//! Does not own: clause assembly; builders format operands into clauses.

use crate::field::{BoolField, DateField, Field, NumberField, StringField};
use chrono::{DateTime, SecondsFormat, Utc};

/// Single-quote a string literal. Embedded quotes pass through unescaped.
pub(crate) fn quote(text: &str) -> String {
    format!("'{text}'")
}

/// Wrap a rendered operand in the protocol's case-folding function.
pub(crate) fn casefold(text: &str) -> String {
    format!("tolower({text})")
}

/// ISO-8601 UTC timestamp with millisecond precision and `Z` suffix.
pub(crate) fn iso(moment: &DateTime<Utc>) -> String {
    moment.to_rfc3339_opts(SecondsFormat::Millis, true)
}

///
/// StringOperand
///
/// Right-hand side of a text comparison, resolved once at the builder-method
/// boundary: a quoted literal, or a reference to another field's path.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StringOperand {
    Literal(String),
    Field(String),
}

impl StringOperand {
    pub(crate) fn render(&self) -> String {
        match self {
            Self::Literal(text) => quote(text),
            Self::Field(path) => path.clone(),
        }
    }

    /// Literals are lower-cased at build time, field references case-folded
    /// at render time.
    pub(crate) fn render_ci(&self) -> String {
        match self {
            Self::Literal(text) => quote(&text.to_lowercase()),
            Self::Field(path) => casefold(path),
        }
    }
}

impl From<&str> for StringOperand {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for StringOperand {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

impl From<&StringField> for StringOperand {
    fn from(field: &StringField) -> Self {
        Self::Field(field.path().to_string())
    }
}

impl From<&Field> for StringOperand {
    fn from(field: &Field) -> Self {
        Self::Field(field.path().to_string())
    }
}

///
/// NumberOperand
///

#[derive(Clone, Debug, PartialEq)]
pub enum NumberOperand {
    Int(i64),
    Float(f64),
    Field(String),
}

impl NumberOperand {
    pub(crate) fn render(&self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Field(path) => path.clone(),
        }
    }
}

macro_rules! number_operand_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for NumberOperand {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

number_operand_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for NumberOperand {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for NumberOperand {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&NumberField> for NumberOperand {
    fn from(field: &NumberField) -> Self {
        Self::Field(field.path().to_string())
    }
}

impl From<&Field> for NumberOperand {
    fn from(field: &Field) -> Self {
        Self::Field(field.path().to_string())
    }
}

///
/// BoolOperand
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BoolOperand {
    Literal(bool),
    Field(String),
}

impl BoolOperand {
    pub(crate) fn render(&self) -> String {
        match self {
            Self::Literal(value) => value.to_string(),
            Self::Field(path) => path.clone(),
        }
    }
}

impl From<bool> for BoolOperand {
    fn from(value: bool) -> Self {
        Self::Literal(value)
    }
}

impl From<&BoolField> for BoolOperand {
    fn from(field: &BoolField) -> Self {
        Self::Field(field.path().to_string())
    }
}

impl From<&Field> for BoolOperand {
    fn from(field: &Field) -> Self {
        Self::Field(field.path().to_string())
    }
}

///
/// DateOperand
///
/// Whole-value date comparison operand. `Raw` strings are the caller's
/// pre-formatted protocol text and pass through verbatim, unquoted.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DateOperand {
    Raw(String),
    Moment(DateTime<Utc>),
    Field(String),
}

impl DateOperand {
    pub(crate) fn render(&self) -> String {
        match self {
            Self::Raw(text) => text.clone(),
            Self::Moment(moment) => iso(moment),
            Self::Field(path) => path.clone(),
        }
    }
}

impl From<&str> for DateOperand {
    fn from(text: &str) -> Self {
        Self::Raw(text.to_string())
    }
}

impl From<String> for DateOperand {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

impl From<DateTime<Utc>> for DateOperand {
    fn from(moment: DateTime<Utc>) -> Self {
        Self::Moment(moment)
    }
}

impl From<&DateTime<Utc>> for DateOperand {
    fn from(moment: &DateTime<Utc>) -> Self {
        Self::Moment(*moment)
    }
}

impl From<&DateField> for DateOperand {
    fn from(field: &DateField) -> Self {
        Self::Field(field.path().to_string())
    }
}

///
/// ComponentOperand
///
/// Component-granular date comparison operand; the granularity itself is a
/// required parameter on the builder method.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ComponentOperand {
    Ordinal(i64),
    Moment(DateTime<Utc>),
    Field(String),
}

macro_rules! component_operand_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ComponentOperand {
                fn from(value: $ty) -> Self {
                    Self::Ordinal(i64::from(value))
                }
            }
        )*
    };
}

component_operand_int!(i32, i64, u32);

impl From<DateTime<Utc>> for ComponentOperand {
    fn from(moment: DateTime<Utc>) -> Self {
        Self::Moment(moment)
    }
}

impl From<&DateTime<Utc>> for ComponentOperand {
    fn from(moment: &DateTime<Utc>) -> Self {
        Self::Moment(*moment)
    }
}

impl From<&DateField> for ComponentOperand {
    fn from(field: &DateField) -> Self {
        Self::Field(field.path().to_string())
    }
}

///
/// Comparand
///
/// Operand of the generic equality methods on [`Field`]: dispatches on the
/// value category at the call boundary instead of per rendering branch.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Comparand {
    Bool(bool),
    Field(String),
    Float(f64),
    Int(i64),
    Text(String),
}

impl Comparand {
    pub(crate) fn render(&self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Field(path) => path.clone(),
            Self::Float(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Text(text) => quote(text),
        }
    }
}

impl From<&str> for Comparand {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Comparand {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for Comparand {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! comparand_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Comparand {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

comparand_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Comparand {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Comparand {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&Field> for Comparand {
    fn from(field: &Field) -> Self {
        Self::Field(field.path().to_string())
    }
}

impl From<&StringField> for Comparand {
    fn from(field: &StringField) -> Self {
        Self::Field(field.path().to_string())
    }
}

impl From<&NumberField> for Comparand {
    fn from(field: &NumberField) -> Self {
        Self::Field(field.path().to_string())
    }
}

impl From<&BoolField> for Comparand {
    fn from(field: &BoolField) -> Self {
        Self::Field(field.path().to_string())
    }
}

///
/// TESTS
///
