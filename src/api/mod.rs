mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod input_controller;
mod json_contract;
mod memory_controller;
mod operator_controller;
mod plugin_dispatch;
mod plugin_registry;
mod snapshot_controller;
mod token_dispatch;
mod unary_controller;
mod validation;

pub use engine::CalculatorEngine;
pub use engine_config::{CalculatorEngineConfig, UnaryResultPolicy};
pub use engine_snapshot::CalculatorSnapshot;
pub use json_contract::{CALCULATOR_SNAPSHOT_JSON_SCHEMA_V1, CalculatorSnapshotJsonContractV1};

pub use crate::extensions::{PluginContext, PluginEvent};
