/**
 * Permission Evaluator
 *
 * Pure visibility decisions over a merged configuration: whether a user may
 * see a module, and whether a module property should render.
 *
 * The module check is deny-by-default and OR-matching: a user qualifies when
 * the union of their role and permission tags intersects the module's
 * permission list. The property check is a pure visibility flag and does not
 * consult the user at all.
 */

use crate::shared::config::{MergedConfig, User};

impl User {
    pub fn has_role(&self, role: &str) -> bool {
        self.role.iter().any(|r| r == role)
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// True when the tag appears in either the role list or the permission
    /// list. This union is what module gating matches against.
    pub fn holds_tag(&self, tag: &str) -> bool {
        self.has_role(tag) || self.has_permission(tag)
    }

    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|r| self.has_role(r))
    }

    pub fn has_all_roles(&self, roles: &[&str]) -> bool {
        roles.iter().all(|r| self.has_role(r))
    }

    pub fn has_any_permission(&self, permissions: &[&str]) -> bool {
        permissions.iter().any(|p| self.has_permission(p))
    }

    pub fn has_all_permissions(&self, permissions: &[&str]) -> bool {
        permissions.iter().all(|p| self.has_permission(p))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role("admin")
    }
}

/// Decide whether `user` may access the top-level module `module_id`.
///
/// Returns false when the module is absent from the merged configuration or
/// disabled, regardless of how privileged the user is. A module with an
/// empty permission list is satisfiable by nobody.
///
/// Only top-level modules participate; gating a child module means gating
/// its top-level ancestor.
pub fn can_access_module(user: &User, config: &MergedConfig, module_id: &str) -> bool {
    let Some(module) = config.module(module_id) else {
        return false;
    };
    if !module.enabled {
        return false;
    }
    module.permissions.iter().any(|tag| user.holds_tag(tag))
}

/// Decide whether property `property_id` of module `module_id` should render.
///
/// Purely a visibility check on the merged configuration: the property must
/// exist and its `show` flag must be set. Callers wanting user-aware gating
/// chain this after [`can_access_module`].
pub fn can_access_property(config: &MergedConfig, module_id: &str, property_id: &str) -> bool {
    config
        .module(module_id)
        .and_then(|module| module.property(property_id))
        .map(|property| property.show)
        .unwrap_or(false)
}
