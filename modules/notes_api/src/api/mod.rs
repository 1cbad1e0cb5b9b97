//! Request handlers and wire types.
//!
//! Routing, CORS and transport framing belong to the embedding HTTP front
//! end. Handlers take the raw JSON body and produce a status/body pair the
//! front end serializes onto the wire.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod response;

pub use response::Response;
