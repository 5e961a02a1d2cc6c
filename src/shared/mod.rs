//! Shared Types & Pure Logic
//!
//! Everything both the server and the client-side state layer depend on:
//! the configuration data model, the merge engine, the permission evaluator,
//! wire DTOs, and shared error types.
//!
//! ## Module Structure
//!
//! ```text
//! shared/
//! ├── api.rs          - Request/response wire types
//! ├── config.rs       - Configuration data model + builtin defaults
//! ├── error.rs        - Shared error types
//! ├── merge.rs        - Default/user configuration merge engine
//! └── permission.rs   - Module/property visibility evaluator
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod merge;
pub mod permission;

pub use config::{
    ConfigPayload, DefaultConfig, MergedConfig, ModuleConfig, ModuleProperty, Permission,
    PermissionKind, PermissionOperator, User,
};
pub use error::SharedError;
pub use merge::merge_configs;
pub use permission::{can_access_module, can_access_property};
