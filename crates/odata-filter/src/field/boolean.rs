use crate::{expr::Expression, operand::BoolOperand, schema::FilterField};

///
/// BoolField
///
/// Typed handle over a boolean property path.
///

#[derive(Clone, Debug)]
pub struct BoolField {
    path: String,
}

impl BoolField {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn eq(&self, value: impl Into<BoolOperand>) -> Expression {
        self.compare("eq", &value.into())
    }

    #[must_use]
    pub fn ne(&self, value: impl Into<BoolOperand>) -> Expression {
        self.compare("ne", &value.into())
    }

    fn compare(&self, op: &str, value: &BoolOperand) -> Expression {
        Expression::textual(format!("{} {op} {}", self.path, value.render()))
    }
}

impl FilterField for BoolField {
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
