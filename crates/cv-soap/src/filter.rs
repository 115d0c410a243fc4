//! Search filters.
//!
//! A [`Filter`] is a (field, operator, value) triple. Construction never
//! fails; the operator is checked when the filter is turned into a
//! parameter tree, so a filter with a bad operator only fails when used.
//!
//! # Example
//!
//! ```rust
//! use cvent_soap::Filter;
//! use serde_json::json;
//!
//! let filter = Filter::new("EventStatus", "in", vec!["Active", "Completed"]);
//! assert_eq!(
//!     filter.to_tree().unwrap(),
//!     json!({
//!         "Field": "EventStatus",
//!         "Operator": "Includes",
//!         "ValueArray": { "Value": ["Active", "Completed"] }
//!     })
//! );
//! ```

use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

use crate::error::{Error, ErrorKind, Result};

/// Civil-time format the API expects for date filters.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Comparison operators the Search call accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equals,
    NotEqualTo,
    LessThan,
    GreaterThan,
    LessThanOrEqualTo,
    GreaterThanOrEqualTo,
    Contains,
    DoesNotContain,
    StartsWith,
    Includes,
    Excludes,
}

impl Operator {
    pub const ALL: [Operator; 11] = [
        Operator::Equals,
        Operator::NotEqualTo,
        Operator::LessThan,
        Operator::GreaterThan,
        Operator::LessThanOrEqualTo,
        Operator::GreaterThanOrEqualTo,
        Operator::Contains,
        Operator::DoesNotContain,
        Operator::StartsWith,
        Operator::Includes,
        Operator::Excludes,
    ];

    /// The operator string sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "Equals",
            Operator::NotEqualTo => "Not Equal to",
            Operator::LessThan => "Less than",
            Operator::GreaterThan => "Greater than",
            Operator::LessThanOrEqualTo => "Less than or Equal to",
            Operator::GreaterThanOrEqualTo => "Greater than or Equal to",
            Operator::Contains => "Contains",
            Operator::DoesNotContain => "Does not Contain",
            Operator::StartsWith => "Starts with",
            Operator::Includes => "Includes",
            Operator::Excludes => "Excludes",
        }
    }

    /// Resolve an operator token. Case-insensitive; accepts the wire names
    /// and the usual shorthands.
    pub fn parse(token: &str) -> Option<Operator> {
        let token = token.trim().to_lowercase();

        let op = match token.as_str() {
            "=" | "==" | "===" | "equal" | "equals" => Operator::Equals,
            "!=" | "<>" | "not equal" | "not equal to" => Operator::NotEqualTo,
            "<" | "less" | "less than" => Operator::LessThan,
            ">" | "greater" | "greater than" => Operator::GreaterThan,
            "<=" | "less than or equal to" => Operator::LessThanOrEqualTo,
            ">=" | "greater than or equal to" => Operator::GreaterThanOrEqualTo,
            "contains" => Operator::Contains,
            "does not contain" => Operator::DoesNotContain,
            "starts with" => Operator::StartsWith,
            "in" | "includes" => Operator::Includes,
            "not in" | "excludes" => Operator::Excludes,
            _ => return None,
        };

        Some(op)
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Operator::parse(s).ok_or_else(|| Error::new(ErrorKind::InvalidOperator(s.to_string())))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter operand.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Passed through as-is.
    Scalar(Value),
    /// Serialized under `ValueArray`.
    List(Vec<FilterValue>),
    /// Formatted as UTC civil time.
    Timestamp(DateTime<Utc>),
}

impl FilterValue {
    /// The value as it goes into the parameter tree.
    pub fn coerce(&self) -> Value {
        match self {
            FilterValue::Scalar(value) => value.clone(),
            FilterValue::List(items) => Value::Array(items.iter().map(FilterValue::coerce).collect()),
            FilterValue::Timestamp(at) => Value::String(at.format(TIMESTAMP_FORMAT).to_string()),
        }
    }
}

impl From<Value> for FilterValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => FilterValue::List(items.into_iter().map(FilterValue::from).collect()),
            other => FilterValue::Scalar(other),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Scalar(Value::String(value.to_string()))
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Scalar(Value::String(value))
    }
}

impl From<&String> for FilterValue {
    fn from(value: &String) -> Self {
        FilterValue::from(value.as_str())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Scalar(value.into())
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Scalar(value.into())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Scalar(value.into())
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Scalar(value.into())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for FilterValue {
    fn from(value: DateTime<Tz>) -> Self {
        FilterValue::Timestamp(value.with_timezone(&Utc))
    }
}

impl<T: Into<FilterValue>> From<Vec<T>> for FilterValue {
    fn from(values: Vec<T>) -> Self {
        FilterValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// One search condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    field: String,
    operator: String,
    value: FilterValue,
}

impl Filter {
    /// Create a filter. The operator is not checked until serialization.
    pub fn new(field: impl Into<String>, operator: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Create an `Equals` filter.
    pub fn equals(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, "=", value)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// The operator token as given.
    pub fn raw_operator(&self) -> &str {
        &self.operator
    }

    pub fn value(&self) -> &FilterValue {
        &self.value
    }

    /// The normalized operator.
    pub fn operator(&self) -> Result<Operator> {
        self.operator.parse()
    }

    /// Serialize into a `Filter` parameter tree.
    ///
    /// Sequence values go under `ValueArray`, everything else under `Value`.
    pub fn to_tree(&self) -> Result<Value> {
        let operator = self.operator()?;

        let tree = match self.value.coerce() {
            Value::Array(values) => json!({
                "Field": self.field,
                "Operator": operator.as_str(),
                "ValueArray": { "Value": values },
            }),
            value => json!({
                "Field": self.field,
                "Operator": operator.as_str(),
                "Value": value,
            }),
        };

        Ok(tree)
    }
}

/// A search predicate: a typed filter, or a raw tree passed through as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Filter(Filter),
    Raw(Value),
}

impl Predicate {
    pub fn to_tree(&self) -> Result<Value> {
        match self {
            Predicate::Filter(filter) => filter.to_tree(),
            Predicate::Raw(tree) => Ok(tree.clone()),
        }
    }
}

impl From<Filter> for Predicate {
    fn from(filter: Filter) -> Self {
        Predicate::Filter(filter)
    }
}

impl From<Value> for Predicate {
    fn from(tree: Value) -> Self {
        Predicate::Raw(tree)
    }
}
