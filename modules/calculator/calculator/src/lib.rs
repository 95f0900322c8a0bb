//! Calculator Module
//!
//! A trivial stateless service that greets and performs integer addition
//! and multiplication.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core business logic
//! - `config.rs` - Typed module configuration
//!
//! Consumers program against the `CalculatorApi` trait from `calculator-sdk`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub mod domain;

pub use config::CalculatorConfig;
pub use domain::Service;
