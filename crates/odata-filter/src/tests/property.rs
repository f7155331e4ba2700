use crate::expr::Expression;
use proptest::prelude::*;

// Simple comparison clauses: never contain ` and `/` or `, so the grouping
// heuristic treats them as non-compound.
fn arb_simple_clause() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,7} (eq|ne|gt|lt) [0-9]{1,4}"
}

proptest! {
    #[test]
    fn empty_is_neutral(clause in arb_simple_clause()) {
        let e = Expression::Textual(clause);

        prop_assert_eq!(Expression::Empty.and(e.clone()), e.clone());
        prop_assert_eq!(Expression::Empty.or(e.clone()), e.clone());
        prop_assert_eq!(e.clone().and(Expression::Empty), e.clone());
        prop_assert_eq!(e.clone().or(Expression::Empty), e);
    }

    #[test]
    fn rendering_is_deterministic(
        a in arb_simple_clause(),
        b in arb_simple_clause(),
        c in arb_simple_clause(),
    ) {
        let e = Expression::Textual(a)
            .and(Expression::Textual(b).or(Expression::Textual(c)));

        prop_assert_eq!(e.render(false), e.render(false));
        prop_assert_eq!(e.render(true), e.render(true));
    }

    #[test]
    fn chained_and_stays_flat(
        a in arb_simple_clause(),
        b in arb_simple_clause(),
        c in arb_simple_clause(),
    ) {
        let rendered = Expression::Textual(a.clone())
            .and(Expression::Textual(b.clone()))
            .and(Expression::Textual(c.clone()))
            .render(false);

        prop_assert_eq!(rendered, format!("{a} and {b} and {c}"));
    }

    #[test]
    fn compound_right_operand_is_grouped(
        a in arb_simple_clause(),
        b in arb_simple_clause(),
        c in arb_simple_clause(),
    ) {
        let rendered = Expression::Textual(a.clone())
            .and(Expression::Textual(b.clone()).or(Expression::Textual(c.clone())))
            .render(false);

        prop_assert_eq!(rendered, format!("{a} and ({b} or {c})"));
    }

    #[test]
    fn double_negation_adds_two_wrappers(clause in arb_simple_clause()) {
        let rendered = Expression::Textual(clause.clone()).not().not().render(false);

        prop_assert_eq!(rendered, format!("not (not ({clause}))"));
    }

    #[test]
    fn combinators_never_mutate_operands(
        a in arb_simple_clause(),
        b in arb_simple_clause(),
    ) {
        let lhs = Expression::Textual(a);
        let rhs = Expression::Textual(b);
        let before = (lhs.clone(), rhs.clone());

        let _ = lhs.clone().and(rhs.clone());
        let _ = lhs.clone().or(rhs.clone());
        let _ = lhs.clone().not();

        prop_assert_eq!((lhs, rhs), before);
    }
}
