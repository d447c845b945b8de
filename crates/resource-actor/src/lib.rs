//! # Resource Actor
//!
//! Building blocks for managing in-memory resource collections behind actors.
//! Every resource type gets its own store, owned by exactly one task; callers reach it
//! through a cloneable, typed client.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the resource's data and its validation hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing over an ordered store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//! 4. **Validation** ([`Pipeline`]) - ordered, short-circuiting checks used inside the hooks
//!
//! You write the business rules **once** in the entity hooks; the framework handles the
//! message passing, lookups, logging and error plumbing.
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, Pipeline, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Item { id: u32, name: String }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("{0}")]
//! struct ItemError(String);
//!
//! fn name_checks() -> Pipeline<'static, String, ItemError> {
//!     Pipeline::new().step(|name: &String| {
//!         if name.is_empty() { Err(ItemError("Item must include a name".into())) } else { Ok(()) }
//!     })
//! }
//!
//! impl ActorEntity for Item {
//!     type Id = u32;
//!     type Create = String;
//!     type Update = String;
//!     type Error = ItemError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, name: String) -> Result<Self, ItemError> {
//!         name_checks().run(&name)?;
//!         Ok(Self { id, name })
//!     }
//!
//!     fn on_update(&mut self, name: String) -> Result<(), ItemError> {
//!         name_checks().run(&name)?;
//!         self.name = name;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut next = 0;
//!     let (actor, client) = ResourceActor::<Item>::new(10, move || { next += 1; next });
//!     tokio::spawn(actor.run());
//!
//!     let item = client.create("Taco".into()).await.unwrap();
//!     assert!(client.create(String::new()).await.is_err());
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//!     assert_eq!(client.get(item.id).await.unwrap().unwrap().name, "Taco");
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Different resources run in **parallel** and share nothing
//!
//! ## Testing
//!
//! The [`mock`] module provides channel helpers and a scripted [`mock::MockClient`] for
//! testing clients without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod pipeline;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use pipeline::{Pipeline, Step};
