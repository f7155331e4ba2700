use crate::{
    expr::Expression,
    operand::{self, StringOperand},
    schema::FilterField,
};

///
/// StringField
///
/// Typed handle over a text property path. Case-insensitive variants follow
/// the `_ci` suffix convention; they lower-case literal operands at build
/// time and case-fold both sides of the clause.
///

#[derive(Clone, Debug)]
pub struct StringField {
    path: String,
}

impl StringField {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// `path ne null`
    #[must_use]
    pub fn not_null(&self) -> Expression {
        Expression::textual(format!("{} ne null", self.path))
    }

    // ------------------------------------------------------------------
    // Equality
    // ------------------------------------------------------------------

    #[must_use]
    pub fn eq(&self, value: impl Into<StringOperand>) -> Expression {
        self.compare("eq", &value.into())
    }

    #[must_use]
    pub fn eq_ci(&self, value: impl Into<StringOperand>) -> Expression {
        self.compare_ci("eq", &value.into())
    }

    #[must_use]
    pub fn ne(&self, value: impl Into<StringOperand>) -> Expression {
        self.compare("ne", &value.into())
    }

    #[must_use]
    pub fn ne_ci(&self, value: impl Into<StringOperand>) -> Expression {
        self.compare_ci("ne", &value.into())
    }

    // ------------------------------------------------------------------
    // Substring functions
    // ------------------------------------------------------------------

    #[must_use]
    pub fn contains(&self, value: impl Into<StringOperand>) -> Expression {
        self.function("contains", &value.into())
    }

    #[must_use]
    pub fn contains_ci(&self, value: impl Into<StringOperand>) -> Expression {
        self.function_ci("contains", &value.into())
    }

    #[must_use]
    pub fn starts_with(&self, value: impl Into<StringOperand>) -> Expression {
        self.function("startswith", &value.into())
    }

    #[must_use]
    pub fn starts_with_ci(&self, value: impl Into<StringOperand>) -> Expression {
        self.function_ci("startswith", &value.into())
    }

    #[must_use]
    pub fn ends_with(&self, value: impl Into<StringOperand>) -> Expression {
        self.function("endswith", &value.into())
    }

    #[must_use]
    pub fn ends_with_ci(&self, value: impl Into<StringOperand>) -> Expression {
        self.function_ci("endswith", &value.into())
    }

    // ------------------------------------------------------------------
    // Clause shapes
    // ------------------------------------------------------------------

    fn compare(&self, op: &str, value: &StringOperand) -> Expression {
        Expression::textual(format!("{} {op} {}", self.path, value.render()))
    }

    fn compare_ci(&self, op: &str, value: &StringOperand) -> Expression {
        Expression::textual(format!(
            "{} {op} {}",
            operand::casefold(&self.path),
            value.render_ci()
        ))
    }

    fn function(&self, func: &str, value: &StringOperand) -> Expression {
        Expression::textual(format!("{func}({}, {})", self.path, value.render()))
    }

    fn function_ci(&self, func: &str, value: &StringOperand) -> Expression {
        Expression::textual(format!(
            "{func}({}, {})",
            operand::casefold(&self.path),
            value.render_ci()
        ))
    }
}

impl FilterField for StringField {
    fn property_keys() -> &'static [&'static str] {
        &[]
    }

    fn bind(path: &str) -> Self {
        Self::new(path)
    }
}

///
/// TESTS
///
