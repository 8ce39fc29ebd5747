use tracing::debug;

use crate::error::{CalcError, CalcResult};
use crate::extensions::CalculatorPlugin;
use crate::render::Renderer;

use super::CalculatorEngine;

impl<R: Renderer> CalculatorEngine<R> {
    /// Attaches an observer that is told about every key press outcome:
    /// input edits, operator selection, evaluations, unary functions, memory
    /// changes and clears.
    ///
    /// Observers are notified in attachment order. The id is what a host later
    /// passes to [`Self::unregister_plugin`] to detach a history tape or an
    /// announcer, so it must be non-empty and not already attached.
    pub fn register_plugin(&mut self, plugin: Box<dyn CalculatorPlugin>) -> CalcResult<()> {
        let plugin_id = plugin.id();
        if plugin_id.is_empty() {
            return Err(CalcError::InvalidData(
                "calculator observer id must not be empty".to_owned(),
            ));
        }
        if self.plugin_index(plugin_id).is_some() {
            return Err(CalcError::InvalidData(format!(
                "calculator observer `{plugin_id}` is already attached"
            )));
        }
        debug!(plugin_id, "attach calculator observer");
        self.core.runtime.plugins.push(plugin);
        Ok(())
    }

    /// Detaches the observer with `plugin_id`; later events no longer reach it.
    ///
    /// Returns `false` when no such observer was attached. The calculator state
    /// is never touched.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let Some(index) = self.plugin_index(plugin_id) else {
            return false;
        };
        self.core.runtime.plugins.remove(index);
        debug!(plugin_id, "detach calculator observer");
        true
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.runtime.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugin_index(plugin_id).is_some()
    }

    fn plugin_index(&self, plugin_id: &str) -> Option<usize> {
        self.core
            .runtime
            .plugins
            .iter()
            .position(|plugin| plugin.id() == plugin_id)
    }
}
