//! # System Lifecycle & Orchestration
//!
//! [`BakerySystem`] starts the four store actors, hands out their clients and shuts them down.
//! The stores do not depend on one another, so there is no start order to respect.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Stores detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every store task to finish
//!
//! Clones of a client held elsewhere (a [`Dashboard`](crate::Dashboard), a test) keep that
//! store alive until they are dropped too.
//!
//! ## Configuration
//!
//! See [`SystemConfig`]: channel capacity and whether to seed placeholder data, from
//! `BAKERY_CHANNEL_CAPACITY` and `BAKERY_SEED`.

pub mod bakery_system;
pub mod config;

pub use bakery_system::*;
pub use config::*;
