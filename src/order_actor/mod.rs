//! # Order Actor
//!
//! The Order resource: a delivery address, a phone number, the ordered dishes and a status.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`validation`] - the create and update validation chains
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;
pub mod validation;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::{Order, OrderId};
use crate::next_id::next_id;
use resource_actor::ResourceActor;

/// Creates a new Order actor and its client, with random ids.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    with_ids(buffer_size, || OrderId(next_id()))
}

/// Creates a new Order actor whose ids come from `next_id`.
pub fn with_ids(
    buffer_size: usize,
    next_id: impl FnMut() -> OrderId + Send + 'static,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, next_id);
    (actor, OrderClient::new(generic_client))
}
