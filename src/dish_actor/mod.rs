//! # Dish Actor
//!
//! The Dish resource: menu items with a name, description, image and price.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Dish`]
//! - [`error`] - [`DishError`] type for type-safe error handling
//! - [`validation`] - the create and update validation chains
//! - [`new()`] - Factory function that creates the actor and client
//!
//! Dishes are created and updated but never deleted.

pub mod entity;
pub mod error;
pub mod validation;

pub use error::*;

use crate::clients::DishClient;
use crate::model::{Dish, DishId};
use crate::next_id::next_id;
use resource_actor::ResourceActor;

/// Creates a new Dish actor and its client, with random ids.
pub fn new(buffer_size: usize) -> (ResourceActor<Dish>, DishClient) {
    with_ids(buffer_size, || DishId(next_id()))
}

/// Creates a new Dish actor whose ids come from `next_id`.
pub fn with_ids(
    buffer_size: usize,
    next_id: impl FnMut() -> DishId + Send + 'static,
) -> (ResourceActor<Dish>, DishClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, next_id);
    (actor, DishClient::new(generic_client))
}
