//! # File Storage
//!
//! Directory-backed key-value store. Each storage key is one file in the
//! data directory:
//!
//! ```text
//! ~/.local/share/khet-bondhu/
//! ├── farmer-app-data        ← observation document (JSON)
//! └── farmer-app-language    ← "bn" or "en"
//! ```
//!
//! Writes go to a temp file first and are renamed into place.

pub mod connection;

pub use connection::{FileConnection, APP_DIRECTORY_NAME};
