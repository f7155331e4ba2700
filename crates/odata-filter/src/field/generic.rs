use crate::{
    expr::Expression,
    operand::{self, Comparand},
    schema::FilterField,
};

///
/// Field
///
/// Untyped handle for schemas without a typed surface. Equality dispatches
/// on the operand's value category, resolved once at the call boundary.
///

#[derive(Clone, Debug)]
pub struct Field {
    path: String,
}

impl Field {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn eq(&self, value: impl Into<Comparand>) -> Expression {
        self.compare("eq", &value.into())
    }

    #[must_use]
    pub fn ne(&self, value: impl Into<Comparand>) -> Expression {
        self.compare("ne", &value.into())
    }

    /// Case folding applies only to text and field operands; for numeric and
    /// boolean operands this behaves exactly like [`Self::eq`].
    #[must_use]
    pub fn eq_ci(&self, value: impl Into<Comparand>) -> Expression {
        self.compare_ci("eq", &value.into())
    }

    /// Same dispatch as [`Self::eq_ci`], with the `ne` operator.
    #[must_use]
    pub fn ne_ci(&self, value: impl Into<Comparand>) -> Expression {
        self.compare_ci("ne", &value.into())
    }

    fn compare(&self, op: &str, value: &Comparand) -> Expression {
        Expression::textual(format!("{} {op} {}", self.path, value.render()))
    }

    fn compare_ci(&self, op: &str, value: &Comparand) -> Expression {
        match value {
            Comparand::Text(text) => Expression::textual(format!(
                "{} {op} {}",
                operand::casefold(&self.path),
                operand::quote(&text.to_lowercase())
            )),
            Comparand::Field(path) => Expression::textual(format!(
                "{} {op} {}",
                operand::casefold(&self.path),
                operand::casefold(path)
            )),
            other => self.compare(op, other),
        }
    }
}

impl FilterField for Field {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_operand_category() {
        let field = Field::new("Value");

        assert_eq!(field.eq("red").render(false), "Value eq 'red'");
        assert_eq!(field.eq(5).render(false), "Value eq 5");
        assert_eq!(field.eq(4.5).render(false), "Value eq 4.5");
        assert_eq!(field.eq(true).render(false), "Value eq true");
    }

    #[test]
    fn field_operand_renders_its_path() {
        let field = Field::new("Value");
        let other = Field::new("Other");

        assert_eq!(field.ne(&other).render(false), "Value ne Other");
    }

    #[test]
    fn case_insensitive_applies_to_text_and_fields_only() {
        let field = Field::new("Value");
        let other = Field::new("Other");

        assert_eq!(field.eq_ci("ReD").render(false), "tolower(Value) eq 'red'");
        assert_eq!(
            field.ne_ci(&other).render(false),
            "tolower(Value) ne tolower(Other)"
        );
        assert_eq!(field.eq_ci(5).render(false), "Value eq 5");
        assert_eq!(field.eq_ci(true).render(false), "Value eq true");
    }
}
