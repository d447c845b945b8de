//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants of this enum map directly to the standard **CRUD** operations, plus a
/// `List` variant that returns the whole collection in insertion order.
///
/// - **Create**: Lifecycle start. Uses [`ActorEntity::Create`] to initialize a new resource
///   and answers with the stored record.
/// - **List**: Every record, oldest first.
/// - **Get (Read)**: Fetches the current state of the resource by ID.
/// - **Update**: State mutation. Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Delete**: Lifecycle end. Removes the resource if [`ActorEntity::on_delete`] allows it.
///
/// # Entity Interaction
/// This type is generic over `T: ActorEntity` and uses its associated types, which
/// guarantees that you can't send a "Dish Create" payload to an "Order" actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
