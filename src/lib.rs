//! # GrubDash
//!
//! > **An in-memory dishes and orders API built on resource actors.**
//!
//! Two resources, dishes and orders, each live in their own actor. Every request runs through
//! an ordered validation chain inside the actor; the first failing check answers the request
//! and nothing is written.
//!
//! ## 🏗️ Design
//!
//! ### One actor per resource
//! Each store is a `Vec` owned by a single Tokio task (see [`resource_actor::ResourceActor`]).
//! Requests are handled one at a time, so validation and mutation never interleave and the
//! stores need no locks.
//!
//! ### Validation chains
//! Create and update rules are [`resource_actor::Pipeline`]s of small steps, built in
//! [`dish_actor::validation`] and [`order_actor::validation`]. The order of the steps is the
//! order in which errors are reported.
//!
//! ### Typed errors, HTTP at the edge
//! Clients return [`DishError`](dish_actor::DishError) and
//! [`OrderError`](order_actor::OrderError). Only the [`api`] handlers turn them into a status
//! code and a `{ "error": message }` body.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Resources ([`model`], [`dish_actor`], [`order_actor`])
//! - **Role**: the records, their validation chains, and the
//!   [`ActorEntity`](resource_actor::ActorEntity) hooks that apply them.
//! - **Key items**: [`Dish`](model::Dish), [`Order`](model::Order),
//!   [`OrderStatus`](model::OrderStatus).
//!
//! ### 2. The Interface ([`clients`])
//! - **Role**: wraps the generic `ResourceClient` in domain-specific clients.
//! - **Key items**: [`DishClient`](clients::DishClient), [`OrderClient`](clients::OrderClient).
//!
//! ### 3. The Edge ([`api`], [`payload`])
//! - **Role**: reads `{ "data": ... }` request bodies and produces status-coded responses.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! - **Role**: starts and stops the actors.
//! - **Key items**: [`GrubDashSystem`](lifecycle::GrubDashSystem),
//!   [`SystemConfig`](config::SystemConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Smaller request channels
//! GRUBDASH_CHANNEL_CAPACITY=4 cargo run
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod dish_actor;
pub mod lifecycle;
pub mod model;
pub mod next_id;
pub mod order_actor;
pub mod payload;
