//! Python interpreter location and version queries.
//!
//! # Architecture
//!
//! - [`locate`] - PATH resolution and interpreter discovery
//! - [`version`] - Runtime version querying and parsing

pub mod locate;
pub mod version;

pub use locate::{locate_interpreter, parse_system_path, resolve_on_path};
pub use version::{query_version, RuntimeVersion};
