//! Cross-module behavior tests: algebra laws under arbitrary clauses and
//! derived schema surfaces rendered end to end.

mod property;
