//! REST client layer: wire types and `gloo-net` calls to the book API.

pub mod api;
pub mod types;
