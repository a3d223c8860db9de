pub mod descriptor;
pub mod error;
pub mod global;
pub mod plugin;
pub mod registry;
pub mod url;

pub use descriptor::{ConnectorDescriptor, DescriptorDecl};
pub use error::RegistryError;
pub use registry::ConnectorRegistry;
pub use url::{JdbcUrl, UrlError};

pub use anyhow::Result;
pub use anyhow::Error;
pub use anyhow::anyhow as anyhow;
