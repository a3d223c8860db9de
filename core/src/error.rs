use thiserror::Error;

use crate::url::UrlError;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("connector alias is empty")]
    EmptyAlias,
    #[error("connector '{alias}' is already registered")]
    DuplicateAlias { alias: String },
    #[error("connector '{alias}' has no translator name")]
    MissingTranslator { alias: String },
    #[error("jdbc connector '{alias}' declares no driver")]
    MissingDriver { alias: String },
    #[error("connector '{alias}' declares malformed driver name '{driver}'")]
    InvalidDriver { alias: String, driver: String },
    #[error("connector '{alias}' declares driver '{driver}' twice")]
    DuplicateDriver { alias: String, driver: String },
    #[error("connector '{alias}' has invalid default url '{url}': {source}")]
    InvalidUrl {
        alias: String,
        url: String,
        #[source]
        source: UrlError,
    },
    #[error("plugin '{plugin}': {source}")]
    Plugin {
        plugin: String,
        #[source]
        source: Box<RegistryError>,
    },
}

impl RegistryError {
    /// Alias of the connector that caused the error, if any.
    pub fn alias(&self) -> Option<&str> {
        match self {
            RegistryError::EmptyAlias => None,
            RegistryError::DuplicateAlias { alias }
            | RegistryError::MissingTranslator { alias }
            | RegistryError::MissingDriver { alias }
            | RegistryError::InvalidDriver { alias, .. }
            | RegistryError::DuplicateDriver { alias, .. }
            | RegistryError::InvalidUrl { alias, .. } => Some(alias),
            RegistryError::Plugin { source, .. } => source.alias(),
        }
    }
}
