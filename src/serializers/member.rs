//! Member serializer.
//!
//! Input is checked in two passes: shape checks on the raw JSON (presence,
//! null, type, blank), then `validator` rules on the typed fields. Errors from
//! both passes are reported together.

use serde_json::{Map, Value};
use validator::Validate;

use crate::errors::{FieldErrors, NON_FIELD_ERRORS};
use crate::models::{Member, MemberFields};

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const NOT_BLANK: &str = "This field may not be blank.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_A_BOOLEAN: &str = "Must be a valid boolean.";

// Accepted spellings are matched exactly; mixed case like "yEs" is rejected.
const TRUE_VALUES: &[&str] = &[
    "t", "T", "y", "Y", "yes", "Yes", "YES", "true", "True", "TRUE", "on", "On", "ON", "1",
];
const FALSE_VALUES: &[&str] = &[
    "f", "F", "n", "N", "no", "No", "NO", "false", "False", "FALSE", "off", "Off", "OFF", "0",
];

/// Validates member input and renders members for responses.
pub struct MemberSerializer;

impl MemberSerializer {
    /// Render a member as its JSON representation.
    pub fn to_representation(member: &Member) -> Value {
        serde_json::json!({
            "id": member.id,
            "firstname": member.firstname,
            "lastname": member.lastname,
            "is_active": member.is_active,
        })
    }

    /// Validate untrusted input into writable fields.
    ///
    /// Both name fields are always required, so the same rules serve create
    /// and full-replace update. All problems are reported at once.
    pub fn validate(input: &Value) -> Result<MemberFields, FieldErrors> {
        let Some(object) = input.as_object() else {
            let mut errors = FieldErrors::new();
            errors.add(
                NON_FIELD_ERRORS,
                format!(
                    "Invalid data. Expected a dictionary, but got {}.",
                    json_type_name(input)
                ),
            );
            return Err(errors);
        };

        let mut errors = FieldErrors::new();
        let firstname = name_field(object, "firstname", &mut errors);
        let lastname = name_field(object, "lastname", &mut errors);
        let is_active = bool_field(object, "is_active", &mut errors);

        // Fields that failed above are left empty, which no length rule rejects.
        let fields = MemberFields {
            firstname: firstname.unwrap_or_default(),
            lastname: lastname.unwrap_or_default(),
            is_active: is_active.unwrap_or_default(),
        };
        if let Err(length_errors) = fields.validate() {
            errors.merge(length_errors.into());
        }

        if errors.is_empty() {
            Ok(fields)
        } else {
            Err(errors)
        }
    }
}

/// Extract a required, trimmed, non-blank string field.
fn name_field(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    let value = match object.get(field) {
        None => {
            errors.add(field, REQUIRED);
            return None;
        }
        Some(Value::Null) => {
            errors.add(field, NOT_NULL);
            return None;
        }
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => {
            errors.add(field, NOT_A_STRING);
            return None;
        }
    };

    if value.is_empty() {
        errors.add(field, NOT_BLANK);
        return None;
    }
    Some(value)
}

/// Extract an optional boolean field, accepting the usual textual spellings
/// and any number equal to 1 or 0.
///
/// `Ok(None)` means the field was absent; `Err(())` means an error was recorded.
fn bool_field(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Result<Option<bool>, ()> {
    let parsed = match object.get(field) {
        None => return Ok(None),
        Some(Value::Null) => {
            errors.add(field, NOT_NULL);
            return Err(());
        }
        Some(Value::Bool(b)) => Some(*b),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v == 1.0 => Some(true),
            Some(v) if v == 0.0 => Some(false),
            _ => None,
        },
        Some(Value::String(s)) => {
            if TRUE_VALUES.contains(&s.as_str()) {
                Some(true)
            } else if FALSE_VALUES.contains(&s.as_str()) {
                Some(false)
            } else {
                None
            }
        }
        Some(_) => None,
    };

    match parsed {
        Some(b) => Ok(Some(b)),
        None => {
            errors.add(field, NOT_A_BOOLEAN);
            Err(())
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
