use objcmd_core::ScalarType;
use objcmd_ir::DeclaredType;
use serde_json::{Number, Value};

use super::BindError;

/// Convert a raw invocation value into the JSON value stored in the field.
///
/// Text-like scalars are kept verbatim, numbers are parsed, and composite
/// values (models, arrays, maps) are read as JSON of the matching shape.
pub fn parse_value(parameter: &str, ty: &DeclaredType, raw: &str) -> Result<Value, BindError> {
    match ty {
        DeclaredType::Scalar(scalar) => parse_scalar(parameter, *scalar, raw),
        DeclaredType::Boolean | DeclaredType::Switch => parse_bool(parameter, raw).map(Value::Bool),
        DeclaredType::Binary | DeclaredType::Path => Ok(Value::String(raw.to_string())),
        DeclaredType::Model(_) | DeclaredType::Map(_) => {
            let value = parse_json(parameter, raw)?;
            if value.is_object() {
                Ok(value)
            } else {
                Err(BindError::invalid(parameter, format!("expected a JSON object for {}", ty)))
            }
        }
        DeclaredType::Array(_) => {
            let value = parse_json(parameter, raw)?;
            if value.is_array() {
                Ok(value)
            } else {
                Err(BindError::invalid(parameter, format!("expected a JSON array for {}", ty)))
            }
        }
    }
}

/// Parse `true`/`false` (any case).
pub(crate) fn parse_bool(parameter: &str, raw: &str) -> Result<bool, BindError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(BindError::invalid(
            parameter,
            format!("'{}' is not true or false", raw),
        )),
    }
}

fn parse_scalar(parameter: &str, scalar: ScalarType, raw: &str) -> Result<Value, BindError> {
    if scalar.is_integer() {
        let n: i64 = raw
            .trim()
            .parse()
            .map_err(|_| BindError::invalid(parameter, format!("'{}' is not an integer", raw)))?;
        if scalar == ScalarType::Int32 && i32::try_from(n).is_err() {
            return Err(BindError::invalid(
                parameter,
                format!("{} does not fit in int32", n),
            ));
        }
        return Ok(Value::Number(n.into()));
    }

    if scalar.is_float() {
        let n: f64 = raw
            .trim()
            .parse()
            .map_err(|_| BindError::invalid(parameter, format!("'{}' is not a number", raw)))?;
        return Number::from_f64(n).map(Value::Number).ok_or_else(|| {
            BindError::invalid(parameter, format!("'{}' is not a finite number", raw))
        });
    }

    Ok(Value::String(raw.to_string()))
}

fn parse_json(parameter: &str, raw: &str) -> Result<Value, BindError> {
    serde_json::from_str(raw).map_err(|e| BindError::invalid(parameter, e.to_string()))
}
