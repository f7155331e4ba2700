use crate::{expr::Expression, operand::NumberOperand, schema::FilterField};

///
/// NumberField
///
/// Typed handle over a numeric property path. Literals render unquoted;
/// field operands render as their property path.
///

#[derive(Clone, Debug)]
pub struct NumberField {
    path: String,
}

impl NumberField {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn eq(&self, value: impl Into<NumberOperand>) -> Expression {
        self.compare("eq", &value.into())
    }

    #[must_use]
    pub fn ne(&self, value: impl Into<NumberOperand>) -> Expression {
        self.compare("ne", &value.into())
    }

    #[must_use]
    pub fn gt(&self, value: impl Into<NumberOperand>) -> Expression {
        self.compare("gt", &value.into())
    }

    #[must_use]
    pub fn lt(&self, value: impl Into<NumberOperand>) -> Expression {
        self.compare("lt", &value.into())
    }

    fn compare(&self, op: &str, value: &NumberOperand) -> Expression {
        Expression::textual(format!("{} {op} {}", self.path, value.render()))
    }
}

impl FilterField for NumberField {
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
