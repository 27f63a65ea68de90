//! Pet engine API server library.
//!
//! Exposes the building blocks (config, state, error handling, engine,
//! routes) so integration tests and the binary entrypoint share the
//! same stack.

pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
pub mod wallet;
