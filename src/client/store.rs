/**
 * Client Configuration Store
 *
 * Holds the three configuration states a client cares about: the static
 * default configuration, the server-held user configuration, and the merged
 * result derived from the two. The merged view is recomputed whenever either
 * input changes and is never set directly.
 */

use crate::shared::config::{ConfigPayload, DefaultConfig, MergedConfig, ModuleConfig};
use crate::shared::merge::merge_configs;

/// Field-wise update for a module in the merged view. `None` leaves the
/// field untouched.
#[derive(Debug, Clone, Default)]
pub struct ModuleConfigUpdate {
    pub enabled: Option<bool>,
    pub path: Option<String>,
    pub permissions: Option<Vec<String>>,
}

/// Field-wise update for a module property in the merged view.
#[derive(Debug, Clone, Default)]
pub struct ModulePropertyUpdate {
    pub show: Option<bool>,
    pub value: Option<serde_json::Value>,
}

/// Client-side configuration cache.
#[derive(Debug, Default)]
pub struct ConfigStore {
    default_config: Option<DefaultConfig>,
    user_config: Option<ConfigPayload>,
    merged_config: Option<MergedConfig>,
    loading: bool,
    error: Option<String>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the builtin defaults already loaded.
    pub fn with_builtin_defaults() -> Self {
        let mut store = Self::default();
        store.set_default_config(DefaultConfig::builtin());
        store
    }

    pub fn default_config(&self) -> Option<&DefaultConfig> {
        self.default_config.as_ref()
    }

    pub fn user_config(&self) -> Option<&ConfigPayload> {
        self.user_config.as_ref()
    }

    /// The merged view, present once both inputs have been set.
    pub fn merged_config(&self) -> Option<&MergedConfig> {
        self.merged_config.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_default_config(&mut self, config: DefaultConfig) {
        self.default_config = Some(config);
        self.recompute();
    }

    pub fn set_user_config(&mut self, config: ConfigPayload) {
        self.user_config = Some(config);
        self.recompute();
    }

    /// Drop user-specific state (on logout). The default configuration
    /// survives; the merged view does not.
    pub fn reset(&mut self) {
        self.user_config = None;
        self.merged_config = None;
        self.loading = false;
        self.error = None;
    }

    fn recompute(&mut self) {
        self.merged_config = match (&self.default_config, &self.user_config) {
            (Some(default_config), Some(user)) => Some(merge_configs(default_config, user)),
            _ => None,
        };
    }

    /// Apply a field-wise update to a module in the merged view.
    ///
    /// Returns false when there is no merged view or no such module. Local
    /// only; persisting the change is a separate API call.
    pub fn update_module(&mut self, module_id: &str, update: ModuleConfigUpdate) -> bool {
        let Some(merged) = self.merged_config.as_mut() else {
            return false;
        };
        let Some(module) = merged.module_mut(module_id) else {
            return false;
        };

        if let Some(enabled) = update.enabled {
            module.enabled = enabled;
        }
        if let Some(path) = update.path {
            module.path = path;
        }
        if let Some(permissions) = update.permissions {
            module.permissions = permissions;
        }
        true
    }

    /// Apply a field-wise update to a property in the merged view.
    pub fn update_property(
        &mut self,
        module_id: &str,
        property_id: &str,
        update: ModulePropertyUpdate,
    ) -> bool {
        let Some(merged) = self.merged_config.as_mut() else {
            return false;
        };
        let Some(property) = merged
            .module_mut(module_id)
            .and_then(|m| m.properties.iter_mut().find(|p| p.id == property_id))
        else {
            return false;
        };

        if let Some(show) = update.show {
            property.show = show;
        }
        if let Some(value) = update.value {
            property.value = Some(value);
        }
        true
    }

    /// Convenience accessor used by navigation: enabled modules of the
    /// merged view, in merge order.
    pub fn enabled_modules(&self) -> Vec<&ModuleConfig> {
        self.merged_config
            .as_ref()
            .map(|merged| merged.modules.iter().filter(|m| m.enabled).collect())
            .unwrap_or_default()
    }
}
