//! # Storage Module
//!
//! Handles all data persistence for the football manager backend.
//!
//! SQLite via SQLx is the single source of truth between service calls; the
//! domain layer holds no long-lived in-memory state. Row-to-record
//! deserialization happens once, at this boundary, so the rest of the code
//! only ever sees the typed records from `shared`.

pub mod db;

pub use db::DbConnection;
