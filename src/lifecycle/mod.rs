//! # System Lifecycle
//!
//! Starts the resource actors, hands out their clients, and shuts them down again.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors log their final size** and return
//! 4. **Await completion** - [`GrubDashSystem::shutdown`] joins every actor task
//!
//! Clones of a client handed out elsewhere keep their actor alive, so drop them before
//! shutting down.
//!
//! Tracing is installed separately with
//! [`setup_tracing`](resource_actor::tracing::setup_tracing).

pub mod grub_system;

pub use grub_system::*;
