//! CRUD HTTP service over a single `User` resource backed by PostgreSQL.
//!
//! The crate is laid out hexagonally: [`domain`] holds transport-agnostic
//! types and ports, [`inbound`] adapts HTTP requests onto those ports,
//! [`outbound`] implements them against PostgreSQL via Diesel, and
//! [`server`] wires the pieces into an Actix application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
