pub mod comment;
pub mod post;
pub mod user;

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Overwrites `field` only when `value` was supplied and is not empty.
/// Absent, `null` and `""` all leave the stored value untouched.
pub(crate) fn overwrite_if_present(
	field: &mut String,
	value: Option<String>,
) -> bool {
	match value {
		Some(value) if !value.is_empty() => {
			*field = value;
			true
		}
		_ => false,
	}
}

/// Reads an optional update field. Falsy JSON (`null`, `""`, `0`, `false`)
/// counts as not supplied; any other non-string value is rejected.
pub(crate) fn falsy_as_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	match Value::deserialize(deserializer)? {
		Value::Null | Value::Bool(false) => Ok(None),
		Value::String(s) if s.is_empty() => Ok(None),
		Value::String(s) => Ok(Some(s)),
		Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
		other => Err(de::Error::invalid_type(unexpected(&other), &"a string")),
	}
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
	match value {
		Value::Bool(b) => de::Unexpected::Bool(*b),
		Value::Number(n) => match n.as_f64() {
			Some(f) => de::Unexpected::Float(f),
			None => de::Unexpected::Other("number"),
		},
		Value::Array(_) => de::Unexpected::Seq,
		Value::Object(_) => de::Unexpected::Map,
		_ => de::Unexpected::Other("value"),
	}
}
