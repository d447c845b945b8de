//! Validation chains for dish requests.
//!
//! Create runs `name → description → image_url → price`. Update first checks that the body
//! does not name another dish, then runs the same field checks. The first failing step is
//! the one reported.

use super::DishError;
use crate::model::Dish;
use crate::payload::{positive_integer, Payload, Shown};
use resource_actor::Pipeline;

/// What the dish checks look at: the request body, plus the stored dish on update.
pub struct DishCheck<'r> {
    pub body: &'r Payload,
    pub existing: Option<&'r Dish>,
}

impl<'r> DishCheck<'r> {
    pub fn create(body: &'r Payload) -> Self {
        Self {
            body,
            existing: None,
        }
    }

    pub fn update(existing: &'r Dish, body: &'r Payload) -> Self {
        Self {
            body,
            existing: Some(existing),
        }
    }
}

fn require_text(
    field: &'static str,
) -> impl Fn(&DishCheck) -> Result<(), DishError> + Send + Sync {
    move |check| match check.body.text(field) {
        Some(_) => Ok(()),
        None => Err(DishError::MissingField(field)),
    }
}

fn require_price(check: &DishCheck) -> Result<(), DishError> {
    check
        .body
        .get("price")
        .and_then(positive_integer)
        .map(|_| ())
        .ok_or(DishError::InvalidPrice)
}

fn require_matching_id(check: &DishCheck) -> Result<(), DishError> {
    let (Some(existing), Some(body_id)) = (check.existing, check.body.id()) else {
        return Ok(());
    };
    if body_id.as_str() == Some(existing.id.0.as_str()) {
        Ok(())
    } else {
        Err(DishError::IdMismatch {
            body: Shown(body_id).to_string(),
            route: existing.id.to_string(),
        })
    }
}

fn field_checks<'r>() -> Pipeline<'static, DishCheck<'r>, DishError> {
    Pipeline::new()
        .step(require_text("name"))
        .step(require_text("description"))
        .step(require_text("image_url"))
        .step(require_price)
}

/// Checks run before a dish is created.
pub fn create_checks<'r>() -> Pipeline<'static, DishCheck<'r>, DishError> {
    field_checks()
}

/// Checks run before a stored dish is overwritten.
pub fn update_checks<'r>() -> Pipeline<'static, DishCheck<'r>, DishError> {
    Pipeline::new().step(require_matching_id).then(field_checks())
}
