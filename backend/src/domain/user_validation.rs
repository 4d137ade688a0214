//! Constraint checks for user create payloads.
//!
//! All constraints are evaluated so a single response can report every
//! violation at once.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::user::{NewUser, UserId};

/// Minimum number of characters in a user name.
pub const NAME_MIN_CHARS: usize = 2;

const NULL_MESSAGE: &str = "must not be null";
const NAME_LENGTH_MESSAGE: &str = "Name should have atleast 2 characters";
const PAST_DATE_MESSAGE: &str = "must be a past date";

/// Raw user create body, prior to validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    /// Optional explicit identifier. A taken id is handled by the repository
    /// adapter, see [`UserRepository::save`](crate::domain::ports::UserRepository::save).
    #[schema(example = 4)]
    pub id: Option<i32>,
    #[schema(example = "Al")]
    pub name: Option<String>,
    #[schema(value_type = Option<String>, format = Date, example = "2000-01-01")]
    pub birth_date: Option<NaiveDate>,
}

/// One broken constraint on one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    #[schema(example = "name")]
    pub field: String,
    #[schema(example = "Name should have atleast 2 characters")]
    pub message: String,
    /// Offending value as received, `null` when absent.
    #[schema(value_type = Object)]
    pub rejected_value: Value,
}

impl Violation {
    /// Record that `field` broke the constraint described by `message`.
    pub fn new(field: impl Into<String>, message: impl Into<String>, rejected_value: Value) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rejected_value,
        }
    }
}

/// Validate `payload` against the user constraints, relative to `today`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rest_ws::domain::{UserPayload, validate_new_user};
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let payload = UserPayload {
///     id: None,
///     name: Some("A".into()),
///     birth_date: Some(today),
/// };
/// let violations = validate_new_user(payload, today).unwrap_err();
/// assert_eq!(violations.len(), 2);
/// ```
pub fn validate_new_user(payload: UserPayload, today: NaiveDate) -> Result<NewUser, Vec<Violation>> {
    let mut violations = Vec::new();

    match payload.name.as_deref() {
        None => violations.push(Violation::new("name", NULL_MESSAGE, Value::Null)),
        Some(name) if name.chars().count() < NAME_MIN_CHARS => violations.push(Violation::new(
            "name",
            NAME_LENGTH_MESSAGE,
            Value::String(name.to_owned()),
        )),
        Some(_) => {}
    }

    match payload.birth_date {
        None => violations.push(Violation::new("birthDate", NULL_MESSAGE, Value::Null)),
        Some(date) if date >= today => violations.push(Violation::new(
            "birthDate",
            PAST_DATE_MESSAGE,
            Value::String(date.to_string()),
        )),
        Some(_) => {}
    }

    match (payload.name, payload.birth_date) {
        (Some(name), Some(birth_date)) if violations.is_empty() => Ok(NewUser {
            id: payload.id.map(UserId::new),
            name,
            birth_date,
        }),
        _ => Err(violations),
    }
}

/// Human-readable `field: message` summary joined with `"; "`.
pub fn violations_summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}
