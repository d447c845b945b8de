use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Dishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub String);

impl From<String> for DishId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DishId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a dish on the menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ActorEntity for Dish`](#impl-ActorEntity-for-Dish) for the create and update
/// rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

/// The writable fields of a dish, as they appear in a validated request body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "crate::payload::deserialize_positive_integer")]
    pub price: u64,
    pub image_url: String,
}

impl Dish {
    /// Creates a new Dish instance from its id and fields.
    pub fn new(id: DishId, fields: DishFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }

    /// Overwrites every field except the id.
    pub fn apply(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}
