//! Backend Error Handling
//!
//! ## Module Structure
//!
//! ```text
//! error/
//! ├── types.rs       - ApiError taxonomy
//! └── conversion.rs  - IntoResponse impl (JSON error bodies)
//! ```

pub mod conversion;
pub mod types;

pub use types::ApiError;
