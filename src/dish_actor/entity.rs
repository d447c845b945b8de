//! Entity trait implementation for the Dish domain type.
//!
//! Both hooks run the dish validation chain against the request payload before anything is
//! written, so a rejected request never leaves a partial dish behind.

use super::validation::{create_checks, update_checks, DishCheck};
use super::DishError;
use crate::model::{Dish, DishFields, DishId};
use crate::payload::Payload;
use resource_actor::ActorEntity;

fn read_fields(body: &Payload) -> Result<DishFields, DishError> {
    body.parse()
        .map_err(|e| DishError::Malformed(e.to_string()))
}

impl ActorEntity for Dish {
    type Id = DishId;
    type Create = Payload;
    type Update = Payload;
    type Error = DishError;

    fn id(&self) -> &DishId {
        &self.id
    }

    /// Validates the payload and builds a dish under the freshly generated id.
    fn from_create_params(id: DishId, params: Payload) -> Result<Self, Self::Error> {
        create_checks().run(&DishCheck::create(&params))?;
        Ok(Dish::new(id, read_fields(&params)?))
    }

    /// Overwrites name, description, price and image_url. The id is never changed.
    fn on_update(&mut self, update: Payload) -> Result<(), Self::Error> {
        update_checks().run(&DishCheck::update(self, &update))?;
        let fields = read_fields(&update)?;
        self.apply(fields);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(data: serde_json::Value) -> Payload {
        Payload::from_body(json!({ "data": data }))
    }

    fn taco() -> Payload {
        payload(json!({
            "name": "Taco",
            "description": "Spicy",
            "price": 8,
            "image_url": "x"
        }))
    }

    #[test]
    fn test_create_builds_dish() {
        let dish = Dish::from_create_params(DishId::from("d1"), taco()).unwrap();
        assert_eq!(
            serde_json::to_value(&dish).unwrap(),
            json!({
                "id": "d1",
                "name": "Taco",
                "description": "Spicy",
                "price": 8,
                "image_url": "x"
            })
        );
    }

    #[test]
    fn test_create_ignores_body_id() {
        let dish = Dish::from_create_params(
            DishId::from("generated"),
            payload(json!({
                "id": "chosen",
                "name": "Taco",
                "description": "Spicy",
                "price": 8.0,
                "image_url": "x"
            })),
        )
        .unwrap();
        assert_eq!(dish.id, DishId::from("generated"));
        assert_eq!(dish.price, 8);
    }

    #[test]
    fn test_failed_update_changes_nothing() {
        let mut dish = Dish::from_create_params(DishId::from("d1"), taco()).unwrap();
        let before = dish.clone();

        let err = dish
            .on_update(payload(json!({
                "name": "Burrito", "description": "Big", "image_url": "y", "price": -1
            })))
            .unwrap_err();
        assert_eq!(err, DishError::InvalidPrice);
        assert_eq!(dish, before);

        let err = dish
            .on_update(payload(json!({
                "id": "d2", "name": "Burrito", "description": "Big", "image_url": "y", "price": 9
            })))
            .unwrap_err();
        assert!(matches!(err, DishError::IdMismatch { .. }));
        assert_eq!(dish, before);
    }

    #[test]
    fn test_update_overwrites_fields_but_not_id() {
        let mut dish = Dish::from_create_params(DishId::from("d1"), taco()).unwrap();
        dish.on_update(payload(json!({
            "id": "d1", "name": "Burrito", "description": "Big", "image_url": "y", "price": 9
        })))
        .unwrap();

        assert_eq!(dish.id, DishId::from("d1"));
        assert_eq!(dish.name, "Burrito");
        assert_eq!(dish.description, "Big");
        assert_eq!(dish.price, 9);
        assert_eq!(dish.image_url, "y");
    }
}
