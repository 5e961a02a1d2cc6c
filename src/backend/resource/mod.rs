//! Static Resource Catalogs
//!
//! Languages (i18n bundles) and themes, served read-only.
//!
//! ## Module Structure
//!
//! ```text
//! resource/
//! ├── store.rs     - Row types + catalog queries
//! └── handlers.rs  - GET /resource/* endpoints
//! ```

pub mod handlers;
pub mod store;

pub use handlers::{get_default_theme, get_language, get_theme, list_languages, list_themes};
