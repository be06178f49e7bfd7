//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`store`, `session`, `auth_flow`) so individual
//! components can depend on small focused models. Signals carry plain state
//! for rendering; mutation goes through the storage-backed stores, which
//! persist before updating their in-memory mirrors.

pub mod auth_flow;
pub mod session;
pub mod store;
pub mod theme;
