//! calc-rs: headless calculator engine.
//!
//! This crate provides a two-operand, single-pending-operator calculator
//! state machine with memory storage, unary functions and display
//! formatting. Rendering and input wiring stay outside the engine behind the
//! `Renderer` and token seams.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{CalculatorEngine, CalculatorEngineConfig};
pub use error::{CalcError, CalcResult};
