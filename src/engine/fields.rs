// * Shape-Tolerant Field Reader
// * One lookup routine for every normalized field. Callers pass the ordered key
// * list for the field (see `config::constants::FieldKeys`) and a default.
// *
// * "Present" means the key exists and is not JSON null. A present falsy value
// * (0, false, "") is returned as-is; only coercion may reject it later.

use serde_json::Value;

/// Returns the value of the first key in `keys` that is present and non-null.
pub fn read_field<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let object = record.as_object()?;
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
}

/// Positional counterpart for table rows.
/// Out-of-range indices and blank cells count as absent.
pub fn read_cell(cells: &[String], index: usize) -> Option<&str> {
    cells
        .get(index)
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
}

pub fn read_cell_or<'a>(cells: &'a [String], index: usize, default: &'a str) -> &'a str {
    read_cell(cells, index).unwrap_or(default)
}

/// Renders a scalar JSON value as display text.
/// Arrays, objects, null and blank strings have no display form.
pub fn as_display_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerces an integer-like JSON value.
/// Floats are rounded; strings may carry a sign and `,` thousands separators.
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else if n.as_u64().is_some() {
                Some(i64::MAX)
            } else {
                n.as_f64().and_then(float_to_i64)
            }
        }
        Value::String(s) => {
            let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
            if cleaned.is_empty() {
                return None;
            }
            cleaned
                .parse::<i64>()
                .ok()
                .or_else(|| cleaned.parse::<f64>().ok().and_then(float_to_i64))
        }
        _ => None,
    }
}

fn float_to_i64(f: f64) -> Option<i64> {
    // ? i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f.round() as i64)
    } else {
        None
    }
}

/// Reads a field as display text, or `default` when absent or not displayable.
pub fn text_field_or(record: &Value, keys: &[&str], default: &str) -> String {
    read_field(record, keys)
        .and_then(as_display_text)
        .unwrap_or_else(|| default.to_string())
}

/// Reads a field as an integer, or `default` when absent or not integer-like.
pub fn integer_field_or(record: &Value, keys: &[&str], default: i64) -> i64 {
    read_field(record, keys).and_then(as_integer).unwrap_or(default)
}
