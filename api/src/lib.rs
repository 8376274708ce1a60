//! HTTP layer of the AceTrack backend.
//!
//! Exposes the route tree, the auth stack (JWT claims, extractors, guards and
//! the role/action policy table) and the response envelope. The binary in
//! `main.rs` wires these together with logging and CORS.

pub mod auth;
pub mod response;
pub mod routes;
