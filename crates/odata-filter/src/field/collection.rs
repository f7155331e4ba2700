use crate::{expr::Expression, schema::FilterField};
use std::marker::PhantomData;

///
/// CollectionField
///
/// Typed handle over a collection-valued property path. Sub-predicates are
/// scoped to the loop variable `x`. Complex elements expose a property-shaped
/// proxy and the rendered sub-expression gets a textual `x/` prefix; scalar
/// elements are addressed through the loop variable itself. Nested
/// quantifiers reuse `x`, inner scopes shadowing outer ones.
///

#[derive(Clone, Debug)]
pub struct CollectionField<E> {
    path: String,
    element: PhantomData<fn() -> E>,
}

impl<E: FilterField> CollectionField<E> {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            element: PhantomData,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// `path/any()`
    #[must_use]
    pub fn not_empty(&self) -> Expression {
        Expression::textual(format!("{}/any()", self.path))
    }

    /// Existential quantifier over the element predicate.
    #[must_use]
    pub fn any(&self, predicate: impl FnOnce(&E) -> Expression) -> Expression {
        self.quantify("any", predicate)
    }

    /// Universal quantifier over the element predicate.
    #[must_use]
    pub fn all(&self, predicate: impl FnOnce(&E) -> Expression) -> Expression {
        self.quantify("all", predicate)
    }

    fn quantify(&self, op: &str, predicate: impl FnOnce(&E) -> Expression) -> Expression {
        let scoped = if E::property_keys().is_empty() {
            // Scalar element: the predicate addresses the loop variable.
            let inner = predicate(&E::bind("x"));
            if inner.is_empty() {
                return self.unconstrained(op);
            }
            inner.render(false)
        } else {
            // Complex element: properties are bound by bare name and the loop
            // variable is applied textually to the rendered sub-expression.
            let inner = predicate(&E::bind(""));
            if inner.is_empty() {
                return self.unconstrained(op);
            }
            format!("x/{}", inner.render(false))
        };

        Expression::textual(format!("{}/{op}(x:{scoped})", self.path))
    }

    // A sub-predicate with no constraint degrades to a well-formed clause
    // instead of an empty lambda body.
    fn unconstrained(&self, op: &str) -> Expression {
        if op == "all" {
            Expression::textual(format!("{}/all(x:true)", self.path))
        } else {
            self.not_empty()
        }
    }
}

impl<E: FilterField> FilterField for CollectionField<E> {
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
