/**
 * Configuration Data Model
 *
 * This module defines the configuration tree shared by the server and the
 * client: the static default configuration, per-user configuration payloads,
 * and the merged configuration derived from the two.
 *
 * All types serialize with camelCase field names to match the JSON wire
 * format of the REST surface.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Fallback language when neither the user nor the default config sets one.
pub const DEFAULT_LANG: &str = "en-US";
/// Stylesheet served for the default theme.
pub const DEFAULT_THEME_URL: &str = "/themes/default.css";
/// Default page layout.
pub const DEFAULT_LAYOUT: &str = "dashboard";

fn default_true() -> bool {
    true
}

/// A single visibility-gated sub-feature of a module.
///
/// `global_label` is an i18n lookup key resolved through the language
/// catalog; `value` carries an optional module-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProperty {
    pub id: String,
    #[serde(default)]
    pub global_label: String,
    #[serde(default = "default_true")]
    pub show: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl ModuleProperty {
    pub fn new(id: impl Into<String>, global_label: impl Into<String>, show: bool) -> Self {
        Self {
            id: id.into(),
            global_label: global_label.into(),
            show,
            value: None,
        }
    }
}

/// A named, permission-gated unit of UI functionality.
///
/// `id` is unique within a sibling list. Properties form an ordered mapping:
/// they are stored as a list whose ids are unique within the module, and
/// looked up by id via [`ModuleConfig::property`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleConfig {
    pub id: String,
    #[serde(default)]
    pub path: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Role/permission tags required to view the module (OR semantics).
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub properties: Vec<ModuleProperty>,
    /// Nested sub-modules, same shape. Carried through merges but not
    /// consulted by the top-level permission check.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ModuleConfig>,
}

impl ModuleConfig {
    /// Look up a property by id.
    pub fn property(&self, property_id: &str) -> Option<&ModuleProperty> {
        self.properties.iter().find(|p| p.id == property_id)
    }
}

/// Kind of a permission entry in the default configuration's catalog.
///
/// The source data model also declared a `condition` kind that no evaluator
/// ever implemented; it is deliberately not part of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionKind {
    Role,
    Permission,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionOperator {
    And,
    Or,
}

/// A tag-matching predicate from the default configuration's permission
/// catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(rename = "type")]
    pub kind: PermissionKind,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<PermissionOperator>,
}

impl Permission {
    pub fn role(value: impl Into<String>) -> Self {
        Self {
            kind: PermissionKind::Role,
            value: value.into(),
            operator: None,
        }
    }
}

/// The static, process-wide default configuration.
///
/// Loaded once (see [`DefaultConfig::builtin`]) and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultConfig {
    pub lang: String,
    pub theme_url: String,
    pub layout: String,
    pub modules: Vec<ModuleConfig>,
    pub permissions: Vec<Permission>,
}

/// The per-user stored configuration payload.
///
/// Top-level scalars are optional so that "user's value when present, else
/// default's" is representable; the server's lazily-created snapshot fills
/// them all in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default)]
    pub modules: Vec<ModuleConfig>,
}

impl ConfigPayload {
    /// Check the uniqueness invariants: module ids unique within a sibling
    /// list, property ids unique within a module.
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_modules(&self.modules)
    }
}

fn validate_modules(modules: &[ModuleConfig]) -> Result<(), SharedError> {
    let mut seen = std::collections::HashSet::new();
    for module in modules {
        if !seen.insert(module.id.as_str()) {
            return Err(SharedError::validation(
                "modules",
                format!("duplicate module id '{}'", module.id),
            ));
        }
        let mut props = std::collections::HashSet::new();
        for property in &module.properties {
            if !props.insert(property.id.as_str()) {
                return Err(SharedError::validation(
                    "properties",
                    format!(
                        "duplicate property id '{}' in module '{}'",
                        property.id, module.id
                    ),
                ));
            }
        }
        validate_modules(&module.children)?;
    }
    Ok(())
}

/// The runtime overlay of a user configuration onto the default
/// configuration. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedConfig {
    pub lang: String,
    pub theme_url: String,
    pub layout: String,
    pub modules: Vec<ModuleConfig>,
    pub permissions: Vec<Permission>,
}

impl MergedConfig {
    /// Look up a top-level module by id.
    pub fn module(&self, module_id: &str) -> Option<&ModuleConfig> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    pub fn module_mut(&mut self, module_id: &str) -> Option<&mut ModuleConfig> {
        self.modules.iter_mut().find(|m| m.id == module_id)
    }
}

/// A user as seen by clients: identity plus the flat role and permission tag
/// sets checked by the permission evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DefaultConfig {
    /// The static default configuration shipped with the application.
    pub fn builtin() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            theme_url: DEFAULT_THEME_URL.to_string(),
            layout: DEFAULT_LAYOUT.to_string(),
            modules: vec![
                ModuleConfig {
                    id: "home".to_string(),
                    path: "/home".to_string(),
                    enabled: true,
                    permissions: vec!["user".to_string(), "admin".to_string()],
                    properties: vec![
                        ModuleProperty::new(
                            "welcome-banner",
                            "global.pages.home.property.welcome-banner",
                            true,
                        ),
                        ModuleProperty::new(
                            "quick-actions",
                            "global.pages.home.property.quick-actions",
                            true,
                        ),
                        ModuleProperty::new(
                            "recent-activities",
                            "global.pages.home.property.recent-activities",
                            true,
                        ),
                    ],
                    children: vec![
                        ModuleConfig {
                            id: "profile".to_string(),
                            path: "/home/profile".to_string(),
                            enabled: true,
                            permissions: vec!["user".to_string()],
                            properties: vec![],
                            children: vec![],
                        },
                        ModuleConfig {
                            id: "settings".to_string(),
                            path: "/home/settings".to_string(),
                            enabled: true,
                            permissions: vec!["user".to_string()],
                            properties: vec![],
                            children: vec![],
                        },
                    ],
                },
                ModuleConfig {
                    id: "dashboard".to_string(),
                    path: "/dashboard".to_string(),
                    enabled: true,
                    permissions: vec!["user".to_string(), "admin".to_string()],
                    properties: vec![
                        ModuleProperty::new(
                            "stats-cards",
                            "global.pages.dashboard.property.stats-cards",
                            true,
                        ),
                        ModuleProperty::new(
                            "charts",
                            "global.pages.dashboard.property.charts",
                            true,
                        ),
                        ModuleProperty::new(
                            "recent-orders",
                            "global.pages.dashboard.property.recent-orders",
                            true,
                        ),
                    ],
                    children: vec![],
                },
                ModuleConfig {
                    id: "admin".to_string(),
                    path: "/admin".to_string(),
                    enabled: false,
                    permissions: vec!["admin".to_string()],
                    properties: vec![
                        ModuleProperty::new(
                            "user-management",
                            "global.pages.admin.property.user-management",
                            true,
                        ),
                        ModuleProperty::new(
                            "system-settings",
                            "global.pages.admin.property.system-settings",
                            true,
                        ),
                        ModuleProperty::new("logs", "global.pages.admin.property.logs", false),
                    ],
                    children: vec![
                        ModuleConfig {
                            id: "users".to_string(),
                            path: "/admin/users".to_string(),
                            enabled: true,
                            permissions: vec!["admin".to_string()],
                            properties: vec![],
                            children: vec![],
                        },
                        ModuleConfig {
                            id: "settings".to_string(),
                            path: "/admin/settings".to_string(),
                            enabled: true,
                            permissions: vec!["admin".to_string()],
                            properties: vec![],
                            children: vec![],
                        },
                    ],
                },
            ],
            permissions: vec![Permission::role("user"), Permission::role("admin")],
        }
    }
}
