/**
 * Configuration Merge Engine
 *
 * Pure functions that overlay a user's stored configuration payload onto the
 * static default configuration, producing the merged configuration the UI
 * renders from.
 *
 * Ordering contract: default entries first, in default order (whether or not
 * the user customized them), then user-exclusive entries in user order. The
 * same rule applies one level down to module properties.
 */

use std::collections::{HashMap, HashSet};

use crate::shared::config::{
    ConfigPayload, DefaultConfig, MergedConfig, ModuleConfig, ModuleProperty,
};

/// Overlay `user` onto `default_config`.
///
/// Top-level scalars take the user's value when present, else the default's.
/// The permission catalog always comes from the default configuration; users
/// cannot grant themselves entries through their payload.
pub fn merge_configs(default_config: &DefaultConfig, user: &ConfigPayload) -> MergedConfig {
    MergedConfig {
        lang: user
            .lang
            .clone()
            .unwrap_or_else(|| default_config.lang.clone()),
        theme_url: user
            .theme_url
            .clone()
            .unwrap_or_else(|| default_config.theme_url.clone()),
        layout: user
            .layout
            .clone()
            .unwrap_or_else(|| default_config.layout.clone()),
        modules: merge_modules(&default_config.modules, &user.modules),
        permissions: default_config.permissions.clone(),
    }
}

/// Merge two module lists by id.
///
/// Every default module appears exactly once (overridden where the user has a
/// module with the same id); user modules with no default counterpart are
/// appended afterwards in their payload order.
pub fn merge_modules(defaults: &[ModuleConfig], user: &[ModuleConfig]) -> Vec<ModuleConfig> {
    let by_id: HashMap<&str, &ModuleConfig> =
        user.iter().map(|m| (m.id.as_str(), m)).collect();
    let mut consumed: HashSet<&str> = HashSet::new();

    let mut merged: Vec<ModuleConfig> = defaults
        .iter()
        .map(|default| match by_id.get(default.id.as_str()) {
            Some(overlay) => {
                consumed.insert(default.id.as_str());
                merge_module(default, overlay)
            }
            None => default.clone(),
        })
        .collect();

    merged.extend(
        user.iter()
            .filter(|m| !consumed.contains(m.id.as_str()))
            .cloned(),
    );

    merged
}

/// Overlay one user module onto its default counterpart.
///
/// `enabled` always takes the user's value. Fields the user left empty
/// (`path`, `permissions`, `children`) fall back to the default's, so a
/// sparse payload still yields a renderable module.
fn merge_module(default: &ModuleConfig, user: &ModuleConfig) -> ModuleConfig {
    ModuleConfig {
        id: default.id.clone(),
        path: if user.path.is_empty() {
            default.path.clone()
        } else {
            user.path.clone()
        },
        enabled: user.enabled,
        permissions: if user.permissions.is_empty() {
            default.permissions.clone()
        } else {
            user.permissions.clone()
        },
        properties: merge_properties(&default.properties, &user.properties),
        children: if user.children.is_empty() {
            default.children.clone()
        } else {
            merge_modules(&default.children, &user.children)
        },
    }
}

/// Same id-keyed merge as [`merge_modules`], one level down.
pub fn merge_properties(
    defaults: &[ModuleProperty],
    user: &[ModuleProperty],
) -> Vec<ModuleProperty> {
    let by_id: HashMap<&str, &ModuleProperty> =
        user.iter().map(|p| (p.id.as_str(), p)).collect();
    let mut consumed: HashSet<&str> = HashSet::new();

    let mut merged: Vec<ModuleProperty> = defaults
        .iter()
        .map(|default| match by_id.get(default.id.as_str()) {
            Some(overlay) => {
                consumed.insert(default.id.as_str());
                merge_property(default, overlay)
            }
            None => default.clone(),
        })
        .collect();

    merged.extend(
        user.iter()
            .filter(|p| !consumed.contains(p.id.as_str()))
            .cloned(),
    );

    merged
}

fn merge_property(default: &ModuleProperty, user: &ModuleProperty) -> ModuleProperty {
    ModuleProperty {
        id: default.id.clone(),
        global_label: if user.global_label.is_empty() {
            default.global_label.clone()
        } else {
            user.global_label.clone()
        },
        show: user.show,
        value: user.value.clone().or_else(|| default.value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn module(id: &str, enabled: bool) -> ModuleConfig {
        ModuleConfig {
            id: id.to_string(),
            path: format!("/{}", id),
            enabled,
            permissions: vec!["user".to_string()],
            properties: vec![],
            children: vec![],
        }
    }

    #[test]
    fn test_merge_preserves_default_order() {
        let defaults = vec![module("a", true), module("b", true)];
        // User lists b first; default order must still win.
        let user = vec![module("b", false), module("a", false)];

        let merged = merge_modules(&defaults, &user);
        let ids: Vec<&str> = merged.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(merged.iter().all(|m| !m.enabled));
    }

    #[test]
    fn test_merge_appends_user_exclusive_modules() {
        let defaults = vec![module("home", true)];
        let user = vec![module("plugin-b", true), module("plugin-a", true)];

        let merged = merge_modules(&defaults, &user);
        let ids: Vec<&str> = merged.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["home", "plugin-b", "plugin-a"]);
    }

    #[test]
    fn test_merge_cardinality() {
        let defaults = vec![module("a", true), module("b", true)];
        let user = vec![module("b", false), module("c", true)];

        let merged = merge_modules(&defaults, &user);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_user_enabled_always_wins() {
        let defaults = vec![module("dashboard", true)];
        let user = vec![module("dashboard", false)];

        let merged = merge_modules(&defaults, &user);
        assert!(!merged[0].enabled);

        let defaults = vec![module("admin", false)];
        let user = vec![module("admin", true)];

        let merged = merge_modules(&defaults, &user);
        assert!(merged[0].enabled);
    }

    #[test]
    fn test_sparse_user_module_falls_back_to_default_fields() {
        let defaults = vec![ModuleConfig {
            id: "home".to_string(),
            path: "/home".to_string(),
            enabled: true,
            permissions: vec!["user".to_string()],
            properties: vec![ModuleProperty::new("banner", "global.home.banner", true)],
            children: vec![module("profile", true)],
        }];
        let user = vec![ModuleConfig {
            id: "home".to_string(),
            path: String::new(),
            enabled: false,
            permissions: vec![],
            properties: vec![],
            children: vec![],
        }];

        let merged = merge_modules(&defaults, &user);
        assert_eq!(merged[0].path, "/home");
        assert_eq!(merged[0].permissions, vec!["user".to_string()]);
        assert_eq!(merged[0].properties.len(), 1);
        assert_eq!(merged[0].children.len(), 1);
        assert!(!merged[0].enabled);
    }

    #[test]
    fn test_property_merge_order_and_show() {
        let defaults = vec![
            ModuleProperty::new("p1", "l1", true),
            ModuleProperty::new("p2", "l2", true),
        ];
        let user = vec![
            ModuleProperty::new("p3", "l3", true),
            ModuleProperty::new("p1", "", false),
        ];

        let merged = merge_properties(&defaults, &user);
        let ids: Vec<&str> = merged.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
        assert!(!merged[0].show);
        // Empty user label falls back to the default's.
        assert_eq!(merged[0].global_label, "l1");
    }

    #[test]
    fn test_property_value_prefers_user() {
        let default = ModuleProperty {
            value: Some(serde_json::json!({"rows": 5})),
            ..ModuleProperty::new("p", "l", true)
        };
        let user = ModuleProperty {
            value: Some(serde_json::json!({"rows": 10})),
            ..ModuleProperty::new("p", "", true)
        };

        let merged = merge_properties(&[default.clone()], &[user]);
        assert_eq!(merged[0].value, Some(serde_json::json!({"rows": 10})));

        let absent = ModuleProperty::new("p", "", true);
        let merged = merge_properties(&[default], &[absent]);
        assert_eq!(merged[0].value, Some(serde_json::json!({"rows": 5})));
    }

    #[test]
    fn test_merge_is_idempotent_for_empty_payload() {
        let default_config = DefaultConfig::builtin();
        let merged = merge_configs(&default_config, &ConfigPayload::default());

        assert_eq!(merged.lang, default_config.lang);
        assert_eq!(merged.theme_url, default_config.theme_url);
        assert_eq!(merged.layout, default_config.layout);
        assert_eq!(merged.modules, default_config.modules);
        assert_eq!(merged.permissions, default_config.permissions);
    }

    #[test]
    fn test_merge_scalar_overrides() {
        let default_config = DefaultConfig::builtin();
        let payload = ConfigPayload {
            lang: Some("zh-CN".to_string()),
            theme_url: None,
            layout: Some("grid".to_string()),
            modules: vec![],
        };

        let merged = merge_configs(&default_config, &payload);
        assert_eq!(merged.lang, "zh-CN");
        assert_eq!(merged.theme_url, default_config.theme_url);
        assert_eq!(merged.layout, "grid");
    }
}
