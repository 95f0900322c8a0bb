//! Domain layer for calculator module
//!
//! Contains business logic for greeting and arithmetic operations.

pub mod service;

pub use service::Service;
