//! panelkit - configuration-driven modular web application
//!
//! A small full-stack kit: an Axum backend serving authentication, per-user
//! configuration, and static resource catalogs, plus a client-side state
//! layer that overlays user configuration onto the builtin defaults and
//! gates module rendering by permission.
//!
//! ## Crate Structure
//!
//! ```text
//! src/
//! ├── shared/   - Data model, merge engine, permission evaluator, DTOs
//! ├── backend/  - Axum server (auth, config, resources)
//! └── client/   - HTTP client, stores, registry, gating, i18n
//! ```

pub mod backend;
pub mod client;
pub mod shared;
