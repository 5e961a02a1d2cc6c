//! Client-Side State Layer
//!
//! Everything a frontend needs to consume the server: an HTTP client, the
//! configuration store with its merged view, session state, the module
//! registry, permission-gated rendering, and translation lookup.
//!
//! ## Module Structure
//!
//! ```text
//! client/
//! ├── api.rs       - Async HTTP client (reqwest)
//! ├── store.rs     - Default/user/merged configuration cache
//! ├── session.rs   - User + token pair state
//! ├── registry.rs  - Module definitions and renderers
//! ├── gate.rs      - Permission-gated module rendering
//! └── i18n.rs      - Translation lookup table
//! ```

pub mod api;
pub mod gate;
pub mod i18n;
pub mod registry;
pub mod session;
pub mod store;

pub use api::{ApiClient, ClientError};
pub use gate::ModuleGate;
pub use i18n::TranslationTable;
pub use registry::{ModuleRegistry, ModuleRenderer};
pub use session::Session;
pub use store::{ConfigStore, ModuleConfigUpdate, ModulePropertyUpdate};
