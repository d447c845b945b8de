//! Validation chains for order requests.
//!
//! Create: `deliverTo → mobileNumber → dishes → dish quantities → status` (status only
//! when one is given). Update: `deliverTo → mobileNumber → dishes → status` presence, then
//! the body id, the status rule, and the dish quantities.

use super::OrderError;
use crate::model::{Order, OrderStatus};
use crate::payload::{positive_integer, Payload, Shown};
use resource_actor::Pipeline;
use serde_json::Value;

/// What the order checks look at: the request body, plus the stored order on update.
pub struct OrderCheck<'r> {
    pub body: &'r Payload,
    pub existing: Option<&'r Order>,
}

impl<'r> OrderCheck<'r> {
    pub fn create(body: &'r Payload) -> Self {
        Self {
            body,
            existing: None,
        }
    }

    pub fn update(existing: &'r Order, body: &'r Payload) -> Self {
        Self {
            body,
            existing: Some(existing),
        }
    }
}

/// The status named in the body, if it is a known one.
pub fn requested_status(body: &Payload) -> Option<OrderStatus> {
    body.text("status").and_then(|s| s.parse().ok())
}

fn require_text(
    field: &'static str,
) -> impl Fn(&OrderCheck) -> Result<(), OrderError> + Send + Sync {
    move |check| match check.body.text(field) {
        Some(_) => Ok(()),
        None => Err(OrderError::MissingField(field)),
    }
}

fn require_field(
    field: &'static str,
) -> impl Fn(&OrderCheck) -> Result<(), OrderError> + Send + Sync {
    move |check| {
        if check.body.has(field) {
            Ok(())
        } else {
            Err(OrderError::MissingField(field))
        }
    }
}

fn require_dish_quantities(check: &OrderCheck) -> Result<(), OrderError> {
    let dishes = match check.body.get("dishes") {
        Some(Value::Array(dishes)) if !dishes.is_empty() => dishes,
        _ => return Err(OrderError::NoDishes),
    };
    for (index, dish) in dishes.iter().enumerate() {
        match dish.get("quantity") {
            None | Some(Value::Null) => return Err(OrderError::MissingQuantity(index)),
            Some(quantity) if positive_integer(quantity).is_none() => {
                return Err(OrderError::InvalidQuantity(index))
            }
            Some(_) => {}
        }
    }
    Ok(())
}

fn require_matching_id(check: &OrderCheck) -> Result<(), OrderError> {
    let (Some(existing), Some(body_id)) = (check.existing, check.body.id()) else {
        return Ok(());
    };
    if body_id.as_str() == Some(existing.id.0.as_str()) {
        Ok(())
    } else {
        Err(OrderError::IdMismatch {
            body: Shown(body_id).to_string(),
            route: existing.id.to_string(),
        })
    }
}

/// A delivered order is frozen; otherwise the body must name a known status.
fn require_changeable_status(check: &OrderCheck) -> Result<(), OrderError> {
    if check
        .existing
        .is_some_and(|order| order.status == OrderStatus::Delivered)
    {
        return Err(OrderError::Delivered);
    }
    requested_status(check.body)
        .map(|_| ())
        .ok_or(OrderError::InvalidStatus)
}

/// A status given on create must be a known one; a missing status means pending.
fn optional_known_status(check: &OrderCheck) -> Result<(), OrderError> {
    if !check.body.has("status") || requested_status(check.body).is_some() {
        Ok(())
    } else {
        Err(OrderError::InvalidStatus)
    }
}

/// Checks run before an order is created.
pub fn create_checks<'r>() -> Pipeline<'static, OrderCheck<'r>, OrderError> {
    Pipeline::new()
        .step(require_text("deliverTo"))
        .step(require_text("mobileNumber"))
        .step(require_field("dishes"))
        .step(require_dish_quantities)
        .step(optional_known_status)
}

/// Checks run before a stored order is overwritten.
pub fn update_checks<'r>() -> Pipeline<'static, OrderCheck<'r>, OrderError> {
    Pipeline::new()
        .step(require_text("deliverTo"))
        .step(require_text("mobileNumber"))
        .step(require_field("dishes"))
        .step(require_field("status"))
        .step(require_matching_id)
        .step(require_changeable_status)
        .step(require_dish_quantities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderId;
    use serde_json::json;

    fn body(data: Value) -> Payload {
        Payload::from_body(json!({ "data": data }))
    }

    fn valid(extra: Value) -> Payload {
        let mut data = json!({
            "deliverTo": "308 Negra Arroyo Lane",
            "mobileNumber": "(505) 143-3369",
            "dishes": [{ "id": "d1", "quantity": 2 }]
        });
        if let (Some(base), Value::Object(extra)) = (data.as_object_mut(), extra) {
            base.extend(extra);
        }
        body(data)
    }

    fn stored(status: OrderStatus) -> Order {
        Order {
            id: OrderId::from("o1"),
            deliver_to: "somewhere".into(),
            mobile_number: "555".into(),
            status,
            dishes: Vec::new(),
        }
    }

    fn run_create(payload: &Payload) -> Result<(), OrderError> {
        create_checks().run(&OrderCheck::create(payload))
    }

    fn run_update(order: &Order, payload: &Payload) -> Result<(), OrderError> {
        update_checks().run(&OrderCheck::update(order, payload))
    }

    #[test]
    fn test_create_presence_in_order() {
        assert_eq!(
            run_create(&body(json!({}))),
            Err(OrderError::MissingField("deliverTo"))
        );
        assert_eq!(
            run_create(&body(json!({ "deliverTo": "x" }))),
            Err(OrderError::MissingField("mobileNumber"))
        );
        assert_eq!(
            run_create(&body(json!({ "deliverTo": "x", "mobileNumber": "y" }))),
            Err(OrderError::MissingField("dishes"))
        );
        assert_eq!(run_create(&valid(json!({}))), Ok(()));
    }

    #[test]
    fn test_non_string_text_is_missing() {
        assert_eq!(
            run_create(&valid(json!({ "deliverTo": 5 }))),
            Err(OrderError::MissingField("deliverTo"))
        );
        assert_eq!(
            run_create(&valid(json!({ "mobileNumber": ["555"] }))),
            Err(OrderError::MissingField("mobileNumber"))
        );
    }

    #[test]
    fn test_empty_or_non_list_dishes() {
        assert_eq!(
            run_create(&valid(json!({ "dishes": [] }))),
            Err(OrderError::NoDishes)
        );
        assert_eq!(
            run_create(&valid(json!({ "dishes": "taco" }))),
            Err(OrderError::NoDishes)
        );
    }

    #[test]
    fn test_quantity_errors_reference_index() {
        let cases = [
            (json!([{ "quantity": 1 }, {}]), OrderError::MissingQuantity(1)),
            (json!([{ "quantity": null }]), OrderError::MissingQuantity(0)),
            (json!([{ "quantity": 0 }]), OrderError::InvalidQuantity(0)),
            (json!([{ "quantity": 1 }, { "quantity": "2" }]), OrderError::InvalidQuantity(1)),
            (json!([{ "quantity": 1.5 }]), OrderError::InvalidQuantity(0)),
            (json!([7]), OrderError::MissingQuantity(0)),
        ];
        for (dishes, expected) in cases {
            assert_eq!(run_create(&valid(json!({ "dishes": dishes }))), Err(expected));
        }
    }

    #[test]
    fn test_create_status_must_be_known_when_given() {
        assert_eq!(run_create(&valid(json!({ "status": "" }))), Ok(()));
        assert_eq!(run_create(&valid(json!({ "status": "preparing" }))), Ok(()));
        assert_eq!(
            run_create(&valid(json!({ "status": "lost" }))),
            Err(OrderError::InvalidStatus)
        );
    }

    #[test]
    fn test_update_requires_status() {
        let order = stored(OrderStatus::Pending);
        assert_eq!(
            run_update(&order, &valid(json!({}))),
            Err(OrderError::MissingField("status"))
        );
    }

    #[test]
    fn test_update_rejects_other_id_before_status() {
        let order = stored(OrderStatus::Delivered);
        assert_eq!(
            run_update(&order, &valid(json!({ "id": 99, "status": "pending" }))),
            Err(OrderError::IdMismatch {
                body: "99".into(),
                route: "o1".into()
            })
        );
    }

    #[test]
    fn test_update_status_rules() {
        let pending = stored(OrderStatus::Pending);
        assert_eq!(
            run_update(&pending, &valid(json!({ "status": "delivered" }))),
            Ok(())
        );
        assert_eq!(
            run_update(&pending, &valid(json!({ "status": "invalid" }))),
            Err(OrderError::InvalidStatus)
        );

        let delivered = stored(OrderStatus::Delivered);
        assert_eq!(
            run_update(&delivered, &valid(json!({ "status": "pending" }))),
            Err(OrderError::Delivered)
        );
    }

    #[test]
    fn test_update_checks_quantities_last() {
        let order = stored(OrderStatus::Preparing);
        assert_eq!(
            run_update(
                &order,
                &valid(json!({ "status": "bogus", "dishes": [{ "quantity": 0 }] }))
            ),
            Err(OrderError::InvalidStatus)
        );
        assert_eq!(
            run_update(
                &order,
                &valid(json!({ "status": "preparing", "dishes": [{ "quantity": 0 }] }))
            ),
            Err(OrderError::InvalidQuantity(0))
        );
    }
}
