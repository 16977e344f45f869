//! Field validator chains and the error-collecting gate in front of the handlers.
//!
//! Each check records a [`FieldError`] instead of failing fast, so a single
//! 400 response lists every problem in the request.

use crate::error::AppError;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::LazyLock;
use utoipa::ToSchema;

pub const MSG_INVALID_ID: &str = "El ID debe ser un numero entero";
pub const MSG_NAME_REQUIRED: &str = "El nombre de Producto es requerido";
pub const MSG_PRICE_REQUIRED: &str = "El precio de Producto es requerido";
pub const MSG_PRICE_POSITIVE: &str = "El precio debe ser mayor a 0";
pub const MSG_INVALID_VALUE: &str = "Valor no valido";

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("integer pattern compiles"));

/// Plain decimal notation: no exponent, no surrounding whitespace, no trailing dot.
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:[0-9]*[.])?[0-9]+$").expect("numeric pattern compiles"));

/// Where the offending value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// One failed check.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "field")]
    pub kind: &'static str,
    /// The rejected value; omitted when the field was absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub value: Option<Value>,
    #[schema(example = "El nombre de Producto es requerido")]
    pub msg: String,
    #[schema(example = "name")]
    pub path: String,
    pub location: Location,
}

/// The `{ "errors": [...] }` body of a failed validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, ToSchema)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages recorded for one field, in check order.
    pub fn messages_for(&self, path: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.path == path)
            .map(|e| e.msg.as_str())
            .collect()
    }
}

/// Accumulates the outcome of a route's validator chain.
#[derive(Debug, Default)]
pub struct Checks {
    errors: ValidationErrors,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, location: Location, path: &str, value: Option<&Value>, msg: &str) {
        self.errors.errors.push(FieldError {
            kind: "field",
            value: value.cloned(),
            msg: msg.to_string(),
            path: path.to_string(),
            location,
        });
    }

    /// `id` path parameter: an integer that fits the primary key column.
    pub fn param_id(&mut self, raw: &str) -> Option<i32> {
        let parsed = INTEGER
            .is_match(raw)
            .then(|| raw.trim_start_matches('+').parse::<i32>().ok())
            .flatten();
        if parsed.is_none() {
            let value = Value::String(raw.to_string());
            self.fail(Location::Params, "id", Some(&value), MSG_INVALID_ID);
        }
        parsed
    }

    /// `name` body field: a non-blank string.
    pub fn body_name(&mut self, body: &Value) -> Option<String> {
        let value = field(body, "name");
        match value {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            Some(Value::String(_)) | Some(Value::Null) | None => {
                self.fail(Location::Body, "name", value, MSG_NAME_REQUIRED);
                None
            }
            Some(other) => {
                self.fail(Location::Body, "name", Some(other), MSG_INVALID_VALUE);
                None
            }
        }
    }

    /// `price` body field. The numeric, presence and positivity checks each
    /// report independently.
    pub fn body_price(&mut self, body: &Value) -> Option<f64> {
        let value = field(body, "price");
        let numeric = value.and_then(as_number);
        let empty = match value {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        };
        let positive = numeric.filter(|p| *p > 0.0);

        if numeric.is_none() {
            self.fail(Location::Body, "price", value, MSG_INVALID_VALUE);
        }
        if empty {
            self.fail(Location::Body, "price", value, MSG_PRICE_REQUIRED);
        }
        if positive.is_none() {
            self.fail(Location::Body, "price", value, MSG_PRICE_POSITIVE);
        }
        positive
    }

    /// `availability` body field. `Some(None)` when absent, `None` when invalid.
    pub fn body_availability(&mut self, body: &Value) -> Option<Option<bool>> {
        let value = match field(body, "availability") {
            None => return Some(None),
            Some(v) => v,
        };
        let parsed = match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => match n.as_f64() {
                Some(v) if v == 1.0 => Some(true),
                Some(v) if v == 0.0 => Some(false),
                _ => None,
            },
            Value::String(s) => match s.as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        };
        if parsed.is_none() {
            self.fail(Location::Body, "availability", Some(value), MSG_INVALID_VALUE);
            return None;
        }
        Some(parsed)
    }

    /// Short-circuits with every collected error, or hands back the value
    /// the chain produced.
    pub fn finish<T>(self, value: Option<T>) -> Result<T, AppError> {
        handle_input_errors(self.errors)?;
        // Every check that yields `None` also records an error.
        value.ok_or_else(|| AppError::BadRequest("invalid request".into()))
    }
}

/// Rejects the request with 400 when any validator recorded an error.
pub fn handle_input_errors(errors: ValidationErrors) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = errors.len(), "request failed validation");
        Err(AppError::Validation(errors))
    }
}

fn field<'a>(body: &'a Value, name: &str) -> Option<&'a Value> {
    body.as_object().and_then(|m| m.get(name))
}

fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if NUMERIC.is_match(s) => s.parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
