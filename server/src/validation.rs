// catalog_server/src/validation.rs

//! Field checks for create/update bodies. Only validated input reaches the catalog.

use crate::errors::AppError;
use catalog::ProductInput;
use serde::Deserialize;
use serde_json::Value;

/// Request body as received. Members stay raw JSON so a wrong type becomes a
/// field message instead of an opaque deserialization failure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
  pub name: Option<Value>,
  pub price: Option<Value>,
  pub category: Option<Value>,
  pub description: Option<Value>,
  pub in_stock: Option<Value>,
}

fn required_text(value: Option<&Value>, field: &str, errors: &mut Vec<String>) -> Option<String> {
  match value {
    Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
    Some(Value::String(_)) | None | Some(Value::Null) => {
      errors.push(format!("{} is required", field));
      None
    }
    Some(_) => {
      errors.push(format!("{} must be a string", field));
      None
    }
  }
}

impl ProductPayload {
  /// Checks every field and reports all problems at once.
  pub fn validate(self) -> Result<ProductInput, AppError> {
    let mut errors = Vec::new();

    let name = required_text(self.name.as_ref(), "name", &mut errors);
    let category = required_text(self.category.as_ref(), "category", &mut errors);

    let price = match self.price.as_ref() {
      None | Some(Value::Null) => {
        errors.push("price is required".to_string());
        None
      }
      Some(Value::Number(n)) => match n.as_f64().filter(|p| p.is_finite() && *p >= 0.0) {
        Some(p) => Some(p),
        None => {
          errors.push("price must be a non-negative number".to_string());
          None
        }
      },
      Some(_) => {
        errors.push("price must be a non-negative number".to_string());
        None
      }
    };

    let description = match self.description {
      None | Some(Value::Null) => None,
      Some(Value::String(s)) => Some(s),
      Some(_) => {
        errors.push("description must be a string".to_string());
        None
      }
    };

    let in_stock = match self.in_stock {
      None | Some(Value::Null) => None,
      Some(Value::Bool(b)) => Some(b),
      Some(_) => {
        errors.push("inStock must be a boolean".to_string());
        None
      }
    };

    match (name, price, category) {
      (Some(name), Some(price), Some(category)) if errors.is_empty() => Ok(ProductInput {
        name,
        price,
        category,
        description,
        in_stock,
      }),
      _ => Err(AppError::Validation(errors)),
    }
  }
}
