pub mod bundle;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod layout;
pub mod mode;
pub mod naming;
pub mod resolve;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use dev::*;
pub use error::*;
pub use layout::*;
pub use mode::*;
pub use naming::*;
pub use resolve::*;

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, CONFIG_FILE, ENV_PREFIX};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
