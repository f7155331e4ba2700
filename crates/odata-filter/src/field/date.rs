use crate::{
    expr::Expression,
    operand::{ComponentOperand, DateOperand},
    schema::FilterField,
};
use chrono::{DateTime, Datelike, Timelike, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// DateComponent
///
/// Calendar/clock granularity used by component-level date predicates. The
/// display form is the protocol's extraction function name.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum DateComponent {
    #[display("day")]
    Day,
    #[display("hour")]
    Hour,
    #[display("minute")]
    Minute,
    #[display("month")]
    Month,
    #[display("second")]
    Second,
    #[display("year")]
    Year,
}

impl DateComponent {
    /// Extract this component from a UTC timestamp. Months are 1-based.
    #[must_use]
    pub fn extract(self, moment: &DateTime<Utc>) -> i64 {
        match self {
            Self::Day => i64::from(moment.day()),
            Self::Hour => i64::from(moment.hour()),
            Self::Minute => i64::from(moment.minute()),
            Self::Month => i64::from(moment.month()),
            Self::Second => i64::from(moment.second()),
            Self::Year => i64::from(moment.year()),
        }
    }
}

///
/// TimeSpan
///
/// Calendar span for [`DateField::in_time_span`]: a required year plus
/// progressively finer optional components.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TimeSpan {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    hour: Option<u32>,
    minute: Option<u32>,
}

impl TimeSpan {
    #[must_use]
    pub const fn year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
            hour: None,
            minute: None,
        }
    }

    #[must_use]
    pub const fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    #[must_use]
    pub const fn day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    #[must_use]
    pub const fn hour(mut self, hour: u32) -> Self {
        self.hour = Some(hour);
        self
    }

    #[must_use]
    pub const fn minute(mut self, minute: u32) -> Self {
        self.minute = Some(minute);
        self
    }
}

///
/// DateField
///
/// Typed handle over a date/time property path.
///

#[derive(Clone, Debug)]
pub struct DateField {
    path: String,
}

impl DateField {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Conjunction of component equalities, one per present component. Every
    /// sub-clause is parenthesized regardless of shape; this is distinct from
    /// the algebra's conditional grouping.
    #[must_use]
    pub fn in_time_span(&self, span: TimeSpan) -> Expression {
        let mut clauses = vec![format!("year({}) eq {}", self.path, span.year)];

        let finer = [
            (DateComponent::Month, span.month),
            (DateComponent::Day, span.day),
            (DateComponent::Hour, span.hour),
            (DateComponent::Minute, span.minute),
        ];
        for (component, value) in finer {
            if let Some(value) = value {
                clauses.push(format!("{component}({}) eq {value}", self.path));
            }
        }

        Expression::textual(format!("({})", clauses.join(") and (")))
    }

    /// Whole-value equality. Raw strings pass through verbatim, timestamps
    /// render as ISO-8601 UTC, field operands as their path.
    #[must_use]
    pub fn is_same(&self, value: impl Into<DateOperand>) -> Expression {
        self.compare("eq", &value.into())
    }

    /// Component-level equality; the granularity is required.
    #[must_use]
    pub fn is_same_component(
        &self,
        component: DateComponent,
        value: impl Into<ComponentOperand>,
    ) -> Expression {
        let rhs = match value.into() {
            ComponentOperand::Ordinal(value) => value.to_string(),
            ComponentOperand::Moment(moment) => component.extract(&moment).to_string(),
            ComponentOperand::Field(path) => format!("{component}({path})"),
        };

        Expression::textual(format!("{component}({}) eq {rhs}", self.path))
    }

    #[must_use]
    pub fn is_after(&self, value: impl Into<DateOperand>) -> Expression {
        self.compare("gt", &value.into())
    }

    #[must_use]
    pub fn is_before(&self, value: impl Into<DateOperand>) -> Expression {
        self.compare("lt", &value.into())
    }

    fn compare(&self, op: &str, value: &DateOperand) -> Expression {
        Expression::textual(format!("{} {op} {}", self.path, value.render()))
    }
}

impl FilterField for DateField {
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
    use chrono::TimeZone;

    fn moment() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 7, 30, 9).unwrap()
    }

    #[test]
    fn in_time_span_with_year_only() {
        let created = DateField::new("Created");

        assert_eq!(
            created.in_time_span(TimeSpan::year(2024)).render(false),
            "(year(Created) eq 2024)"
        );
    }

    #[test]
    fn in_time_span_joins_parenthesized_clauses() {
        let created = DateField::new("Created");

        assert_eq!(
            created
                .in_time_span(TimeSpan::year(2024).month(3))
                .render(false),
            "(year(Created) eq 2024) and (month(Created) eq 3)"
        );
        assert_eq!(
            created
                .in_time_span(TimeSpan::year(2024).month(3).day(5).hour(7).minute(30))
                .render(false),
            "(year(Created) eq 2024) and (month(Created) eq 3) and (day(Created) eq 5) \
             and (hour(Created) eq 7) and (minute(Created) eq 30)"
        );
    }

    #[test]
    fn is_same_raw_string_is_verbatim() {
        let created = DateField::new("Created");

        assert_eq!(
            created.is_same("2024-03-05").render(false),
            "Created eq 2024-03-05"
        );
    }

    #[test]
    fn is_same_moment_renders_iso() {
        let created = DateField::new("Created");

        assert_eq!(
            created.is_same(moment()).render(false),
            "Created eq 2024-03-05T07:30:09.000Z"
        );
    }

    #[test]
    fn is_same_field_is_direct_path_equality() {
        let created = DateField::new("Created");
        let updated = DateField::new("Updated");

        assert_eq!(created.is_same(&updated).render(false), "Created eq Updated");
    }

    #[test]
    fn is_same_component_with_ordinal() {
        let created = DateField::new("Created");

        assert_eq!(
            created
                .is_same_component(DateComponent::Month, 3)
                .render(false),
            "month(Created) eq 3"
        );
    }

    #[test]
    fn is_same_component_extracts_each_granularity() {
        let created = DateField::new("Created");

        let cases = [
            (DateComponent::Year, "year(Created) eq 2024"),
            (DateComponent::Month, "month(Created) eq 3"),
            (DateComponent::Day, "day(Created) eq 5"),
            (DateComponent::Hour, "hour(Created) eq 7"),
            (DateComponent::Minute, "minute(Created) eq 30"),
            (DateComponent::Second, "second(Created) eq 9"),
        ];
        for (component, expected) in cases {
            assert_eq!(
                created.is_same_component(component, moment()).render(false),
                expected
            );
        }
    }

    #[test]
    fn is_same_component_against_field_extracts_both_sides() {
        let created = DateField::new("Created");
        let updated = DateField::new("Updated");

        assert_eq!(
            created
                .is_same_component(DateComponent::Year, &updated)
                .render(false),
            "year(Created) eq year(Updated)"
        );
    }

    #[test]
    fn is_after_uses_gt() {
        let created = DateField::new("Created");

        assert_eq!(
            created.is_after("2024-01-01").render(false),
            "Created gt 2024-01-01"
        );
        assert_eq!(
            created.is_after(moment()).render(false),
            "Created gt 2024-03-05T07:30:09.000Z"
        );
    }

    #[test]
    fn is_before_uses_lt_for_every_operand_kind() {
        let created = DateField::new("Created");
        let updated = DateField::new("Updated");

        assert_eq!(
            created.is_before("2024-01-01").render(false),
            "Created lt 2024-01-01"
        );
        assert_eq!(
            created.is_before(moment()).render(false),
            "Created lt 2024-03-05T07:30:09.000Z"
        );
        assert_eq!(created.is_before(&updated).render(false), "Created lt Updated");
    }
}
