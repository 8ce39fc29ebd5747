//! Host-facing extension hooks.
//!
//! Extensions observe the engine; they never mutate calculator state.

pub mod plugins;

pub use plugins::{CalculatorPlugin, PluginContext, PluginEvent};
