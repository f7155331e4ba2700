use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

///
/// Expression
///
/// Immutable filter predicate fragment. `Empty` is the neutral element,
/// produced when a builder yields no constraint. `Textual` wraps a finalized
/// clause that is substituted verbatim into larger boolean expressions.
/// Combining never mutates an operand; every combinator returns a new value.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expression {
    Empty,
    Textual(String),
}

impl Expression {
    /// The neutral expression.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    pub(crate) fn textual(clause: impl Into<String>) -> Self {
        Self::Textual(clause.into())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Render the clause text. `Empty` renders as the empty string.
    ///
    /// `needs_grouping` is requested only by the right-hand operand of a
    /// combinator: a compound clause (one containing a top-level ` and ` or
    /// ` or `) is wrapped in parentheses so its precedence cannot leak into
    /// the outer expression. Detection is textual, not a parse; a quoted
    /// literal containing either substring is over-grouped.
    #[must_use]
    pub fn render(&self, needs_grouping: bool) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Textual(clause) => {
                if needs_grouping && is_compound(clause) {
                    format!("({clause})")
                } else {
                    clause.clone()
                }
            }
        }
    }

    /// Negate the expression. `not` must bind to the whole sub-expression, so
    /// the clause is always parenthesized. Negating `Empty` stays `Empty`:
    /// there is no constraint to negate.
    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Textual(clause) => Self::Textual(format!("not ({clause})")),
        }
    }

    /// Conjoin with `other`. The left operand accumulates without
    /// re-wrapping; only the right operand gets the grouping check, so
    /// left-associative chains stay flat.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        self.combine("and", other)
    }

    /// Disjoin with `other`. Same grouping policy as [`Self::and`].
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        self.combine("or", other)
    }

    fn combine(self, op: &str, other: Self) -> Self {
        match (self, other) {
            (Self::Empty, rhs) => rhs,
            (lhs, Self::Empty) => lhs,
            (Self::Textual(lhs), rhs @ Self::Textual(_)) => {
                Self::Textual(format!("{lhs} {op} {}", rhs.render(true)))
            }
        }
    }
}

/// Textual compound-clause check backing the grouping policy.
fn is_compound(clause: &str) -> bool {
    clause.contains(" or ") || clause.contains(" and ")
}

// ----------------------------------------------------------------------
// Operator sugar
// ----------------------------------------------------------------------

impl BitAnd for Expression {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitAnd for &Expression {
    type Output = Expression;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.clone().and(rhs.clone())
    }
}

impl BitOr for Expression {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl BitOr for &Expression {
    type Output = Expression;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.clone().or(rhs.clone())
    }
}

impl Not for Expression {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::not(self)
    }
}

// ----------------------------------------------------------------------
// Boundary traits
// ----------------------------------------------------------------------

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// Serializes as the rendered clause string, ready to embed in a serialized
/// query-option struct. There is no `Deserialize`: a rendered clause cannot
/// be split back into its operands.
impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render(false))
    }
}

///
/// TESTS
///
