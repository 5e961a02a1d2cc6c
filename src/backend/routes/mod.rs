//! HTTP Routing
//!
//! ## Module Structure
//!
//! ```text
//! routes/
//! ├── api_routes.rs  - Route groups (auth / config / resource)
//! └── router.rs      - Router assembly + middleware layers
//! ```

pub mod api_routes;
pub mod router;

pub use router::create_router;
