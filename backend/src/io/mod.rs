//! Interface layer exposing the domain services to callers.

pub mod rest;

pub use rest::AppState;
