/**
 * Module Gate
 *
 * Combines the permission evaluator with the module registry: decides what
 * the current user may see, and renders it if a renderer exists.
 *
 * Property rendering chains both checks: the module must be visible to the
 * user AND the property's show flag must be set.
 */

use crate::client::registry::ModuleRegistry;
use crate::shared::config::{MergedConfig, User};
use crate::shared::permission::{can_access_module, can_access_property};

/// Borrowing view over a user and their merged configuration.
pub struct ModuleGate<'a> {
    user: &'a User,
    config: &'a MergedConfig,
}

impl<'a> ModuleGate<'a> {
    pub fn new(user: &'a User, config: &'a MergedConfig) -> Self {
        Self { user, config }
    }

    /// Should this module render for the current user?
    pub fn should_render(&self, module_id: &str) -> bool {
        can_access_module(self.user, self.config, module_id)
    }

    /// Should this property render? Requires the module to be visible.
    pub fn should_render_property(&self, module_id: &str, property_id: &str) -> bool {
        self.should_render(module_id) && can_access_property(self.config, module_id, property_id)
    }

    /// Ids of all modules the user may see, in merge order.
    pub fn visible_modules(&self) -> Vec<&str> {
        self.config
            .modules
            .iter()
            .filter(|m| self.should_render(&m.id))
            .map(|m| m.id.as_str())
            .collect()
    }

    /// Render a module through the registry.
    ///
    /// `None` when the gate denies access or no renderer is registered.
    pub fn render(&self, registry: &ModuleRegistry, module_id: &str) -> Option<String> {
        if !self.should_render(module_id) {
            return None;
        }
        let module = self.config.module(module_id)?;
        let renderer = registry.renderer(module_id)?;
        Some(renderer(module))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{ConfigPayload, DefaultConfig};
    use crate::shared::merge::merge_configs;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(roles: &[&str]) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            avatar: None,
            role: roles.iter().map(|s| s.to_string()).collect(),
            permissions: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn merged() -> MergedConfig {
        merge_configs(&DefaultConfig::builtin(), &ConfigPayload::default())
    }

    #[test]
    fn test_visible_modules() {
        let user = user(&["user"]);
        let config = merged();
        let gate = ModuleGate::new(&user, &config);
        // "admin" is disabled by default, so even admins don't see it; a
        // plain user sees the two enabled user modules.
        assert_eq!(gate.visible_modules(), vec!["home", "dashboard"]);
    }

    #[test]
    fn test_property_gating_chains_module_check() {
        let guest = user(&["guest"]);
        let config = merged();
        let gate = ModuleGate::new(&guest, &config);
        // Property itself is shown, but the module is not visible to guests.
        assert!(!gate.should_render_property("home", "welcome-banner"));

        let member = user(&["user"]);
        let gate = ModuleGate::new(&member, &config);
        assert!(gate.should_render_property("home", "welcome-banner"));
        assert!(!gate.should_render_property("home", "no-such-property"));
    }

    #[test]
    fn test_render_through_registry() {
        let member = user(&["user"]);
        let config = merged();
        let gate = ModuleGate::new(&member, &config);

        let mut registry = ModuleRegistry::new();
        registry.register_renderer("home", |m| format!("home at {}", m.path));

        assert_eq!(
            gate.render(&registry, "home"),
            Some("home at /home".to_string())
        );
        // No renderer registered.
        assert_eq!(gate.render(&registry, "dashboard"), None);

        let guest = user(&["guest"]);
        let gate = ModuleGate::new(&guest, &config);
        assert_eq!(gate.render(&registry, "home"), None);
    }
}
