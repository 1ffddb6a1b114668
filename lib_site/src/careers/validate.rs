//! Whole-object validation of an untrusted careers document.
//!
//! A document is accepted only if `heading` and `subheading` are non-empty
//! strings, `positions` is an array, and every position carries every field:
//! non-empty strings for the scalars, a known employment type, and arrays of
//! strings for `requirements` and `responsibilities`. The first violation
//! rejects the whole document.

use serde_json::{Map, Value};

use super::model::{CareerPosition, CareersPage, EmploymentType};
use crate::utils::ShapeError;

fn object<'a>(path: &str, value: &'a Value) -> Result<&'a Map<String, Value>, ShapeError> {
    value
        .as_object()
        .ok_or_else(|| ShapeError::new(path, "expected an object"))
}

fn required_text(path: &str, map: &Map<String, Value>, key: &str) -> Result<String, ShapeError> {
    match map.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(ShapeError::new(ShapeError::join(path, key), "must not be empty")),
        None | Some(Value::Null) => Err(ShapeError::new(ShapeError::join(path, key), "missing")),
        Some(_) => Err(ShapeError::new(ShapeError::join(path, key), "expected a string")),
    }
}

fn string_list(path: &str, map: &Map<String, Value>, key: &str) -> Result<Vec<String>, ShapeError> {
    let field = ShapeError::join(path, key);
    let Some(Value::Array(items)) = map.get(key) else {
        return Err(ShapeError::new(field, "expected an array"));
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| ShapeError::new(format!("{}[{}]", field, i), "expected a string"))
        })
        .collect()
}

fn employment_type(path: &str, map: &Map<String, Value>) -> Result<EmploymentType, ShapeError> {
    let label = required_text(path, map, "type")?;
    EmploymentType::from_label(&label).ok_or_else(|| {
        ShapeError::new(
            ShapeError::join(path, "type"),
            format!("unknown employment type {:?}", label),
        )
    })
}

/// Validates one position object.
pub fn validate_position(path: &str, value: &Value) -> Result<CareerPosition, ShapeError> {
    let map = object(path, value)?;
    Ok(CareerPosition {
        id: required_text(path, map, "id")?,
        title: required_text(path, map, "title")?,
        department: required_text(path, map, "department")?,
        location: required_text(path, map, "location")?,
        employment_type: employment_type(path, map)?,
        experience: required_text(path, map, "experience")?,
        summary: required_text(path, map, "summary")?,
        requirements: string_list(path, map, "requirements")?,
        responsibilities: string_list(path, map, "responsibilities")?,
        apply_url: required_text(path, map, "applyUrl")?,
        posted_date: required_text(path, map, "postedDate")?,
    })
}

/// Validates a whole careers document.
pub fn validate_careers(value: &Value) -> Result<CareersPage, ShapeError> {
    let path = "careers";
    let map = object(path, value)?;
    let heading = required_text(path, map, "heading")?;
    let subheading = required_text(path, map, "subheading")?;

    let Some(Value::Array(raw_positions)) = map.get("positions") else {
        return Err(ShapeError::new(ShapeError::join(path, "positions"), "expected an array"));
    };
    let positions = raw_positions
        .iter()
        .enumerate()
        .map(|(i, p)| validate_position(&format!("{}.positions[{}]", path, i), p))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CareersPage {
        heading,
        subheading,
        positions,
    })
}
