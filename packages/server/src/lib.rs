// Foundry Makerspace - Presence Core
//
// This crate provides the backend for camera-driven shop presence tracking:
// who is checked in, which station each maker holds, and any active safety
// violations, with every change pushed to wall dashboards over SSE.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
