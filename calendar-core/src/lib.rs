//! Core simulation for the stress relief calendar.
//!
//! Main components:
//! - [`month`] - the month table and its round-robin date cursors.
//! - [`spawn`] - launch edge, position and velocity for new particles.
//! - [`particle`] - a single date disc and its physics.
//! - [`world`] - the live particle collection and the per-tick pipeline.
//! - [`command`] - host-independent input commands and key layout.
//! - [`session`] - owned state tying registry, world and glow together.
//! - [`glow`] - instruction text flash animation.
//! - [`render`] - drawing seam implemented by the host.
//! - [`config`] - fixed physics constants.
//! - [`error`] - error type.
//! - [`types`] - colours, canvas bounds and month indices.

pub mod command;
pub mod config;
pub mod error;
pub mod glow;
pub mod month;
pub mod particle;
pub mod render;
pub mod session;
pub mod spawn;
pub mod types;
pub mod world;
