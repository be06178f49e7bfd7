//! Networking: the authentication API client and its wire types.

pub mod api;
pub mod types;
