//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (Dish, Order, …) must
//! implement to be managed by the generic `ResourceActor`. It specifies associated types for
//! the id, the create/update payloads and the error, and provides the lifecycle hooks
//! (`from_create_params`, `on_update`, `on_delete`) where each resource runs its validation.
//!
//! # Architecture Note
//! By defining a contract (`ActorEntity`) that all our resource types must satisfy, we write
//! the `ResourceActor` logic *once* and reuse it everywhere.
//!
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type safety.
//! A `Dish` entity requires a dish payload, and you can't accidentally send it
//! an order payload. The compiler prevents this class of bugs entirely.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_delete`] has a default implementation that allows the removal.
//! Override it to veto a delete.

use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Validation Before Mutation
/// The hooks run inside the actor, one request at a time. An implementation must finish all
/// of its checks before touching `self`: when a hook returns `Err`, the stored record has to
/// be exactly what it was before the request arrived.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., String, Uuid, u64).
    type Id: PartialEq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// The framework enforces a **Per-Actor Error Type** (one enum for the whole actor) rather
    /// than per-operation error types. Clients deal with a single `DishError` type, making
    /// pattern matching easier.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id of this record. Used by the actor for lookups.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload.
    ///
    /// Validation of the payload happens here; returning `Err` means nothing is stored.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called when an update request is received for an existing record.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
