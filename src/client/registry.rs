/**
 * Module Registry
 *
 * Owned lookup table from module ids to their definitions and render
 * capabilities. Callers hold the registry as a plain value and decide the
 * sharing story themselves; nothing here is global.
 */

use std::collections::{HashMap, HashSet};

use crate::shared::config::ModuleConfig;

/// Renders one module to its display output.
pub type ModuleRenderer = Box<dyn Fn(&ModuleConfig) -> String + Send + Sync>;

/// Summary counters for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    pub registered: usize,
    pub renderable: usize,
    pub loaded: usize,
}

#[derive(Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, ModuleConfig>,
    renderers: HashMap<String, ModuleRenderer>,
    loaded: HashSet<String>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a module definition.
    pub fn register(&mut self, module: ModuleConfig) {
        self.modules.insert(module.id.clone(), module);
    }

    /// Attach a renderer to a module id.
    pub fn register_renderer(
        &mut self,
        module_id: impl Into<String>,
        renderer: impl Fn(&ModuleConfig) -> String + Send + Sync + 'static,
    ) {
        self.renderers.insert(module_id.into(), Box::new(renderer));
    }

    pub fn module(&self, module_id: &str) -> Option<&ModuleConfig> {
        self.modules.get(module_id)
    }

    pub fn renderer(&self, module_id: &str) -> Option<&ModuleRenderer> {
        self.renderers.get(module_id)
    }

    pub fn is_registered(&self, module_id: &str) -> bool {
        self.modules.contains_key(module_id)
    }

    pub fn all_modules(&self) -> impl Iterator<Item = &ModuleConfig> {
        self.modules.values()
    }

    /// Mark a module's assets as loaded.
    pub fn mark_loaded(&mut self, module_id: impl Into<String>) {
        self.loaded.insert(module_id.into());
    }

    pub fn is_loaded(&self, module_id: &str) -> bool {
        self.loaded.contains(module_id)
    }

    pub fn loaded_modules(&self) -> impl Iterator<Item = &str> {
        self.loaded.iter().map(String::as_str)
    }

    /// Forget a module entirely: definition, renderer, loaded flag.
    pub fn unload(&mut self, module_id: &str) -> bool {
        let was_registered = self.modules.remove(module_id).is_some();
        self.renderers.remove(module_id);
        self.loaded.remove(module_id);
        was_registered
    }

    pub fn clear(&mut self) {
        self.modules.clear();
        self.renderers.clear();
        self.loaded.clear();
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            registered: self.modules.len(),
            renderable: self.renderers.len(),
            loaded: self.loaded.len(),
        }
    }

    /// Bulk-register module definitions, e.g. from a merged configuration.
    pub fn initialize<I: IntoIterator<Item = ModuleConfig>>(&mut self, modules: I) {
        for module in modules {
            self.register(module);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(id: &str) -> ModuleConfig {
        ModuleConfig {
            id: id.to_string(),
            path: format!("/{}", id),
            enabled: true,
            permissions: vec!["user".to_string()],
            properties: vec![],
            children: vec![],
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ModuleRegistry::new();
        registry.register(module("home"));
        assert!(registry.is_registered("home"));
        assert_eq!(registry.module("home").unwrap().path, "/home");
        assert!(registry.module("nope").is_none());
    }

    #[test]
    fn test_renderer_roundtrip() {
        let mut registry = ModuleRegistry::new();
        registry.register(module("home"));
        registry.register_renderer("home", |m| format!("<div id=\"{}\"/>", m.id));

        let rendered = registry.renderer("home").unwrap()(registry.module("home").unwrap());
        assert_eq!(rendered, "<div id=\"home\"/>");
    }

    #[test]
    fn test_loaded_tracking_and_unload() {
        let mut registry = ModuleRegistry::new();
        registry.register(module("home"));
        registry.mark_loaded("home");
        assert!(registry.is_loaded("home"));

        assert!(registry.unload("home"));
        assert!(!registry.is_registered("home"));
        assert!(!registry.is_loaded("home"));
        assert!(!registry.unload("home"));
    }

    #[test]
    fn test_initialize_and_stats() {
        let mut registry = ModuleRegistry::new();
        registry.initialize(vec![module("home"), module("dashboard")]);
        registry.register_renderer("home", |_| String::new());

        let stats = registry.stats();
        assert_eq!(
            stats,
            RegistryStats {
                registered: 2,
                renderable: 1,
                loaded: 0,
            }
        );
    }
}
