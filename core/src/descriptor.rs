use serde::{Deserialize, Serialize};

fn default_jdbc() -> bool {
    true
}

/// How to reach and translate queries for one external database variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorDescriptor {
    /// Short name users select the connector by, unique within a registry
    pub alias: String,
    pub translator_name: String,
    /// Fully-qualified driver identifiers, in declaration order
    #[serde(default)]
    pub driver_class_names: Vec<String>,
    /// Connection URI template
    #[serde(default)]
    pub default_url: String,
    #[serde(default = "default_jdbc")]
    pub is_jdbc: bool,
}

impl ConnectorDescriptor {
    pub fn new(alias: &str, translator_name: &str) -> Self {
        Self {
            alias: alias.to_string(),
            translator_name: translator_name.to_string(),
            driver_class_names: Vec::new(),
            default_url: String::new(),
            is_jdbc: true,
        }
    }

    /// Appends a driver, keeping the list free of repeats.
    pub fn with_driver(mut self, class_name: &str) -> Self {
        if !self.driver_class_names.iter().any(|d| d == class_name) {
            self.driver_class_names.push(class_name.to_string());
        }
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.default_url = url.to_string();
        self
    }

    pub fn with_jdbc(mut self, is_jdbc: bool) -> Self {
        self.is_jdbc = is_jdbc;
        self
    }

    pub fn has_driver(&self, class_name: &str) -> bool {
        self.driver_class_names.iter().any(|d| d == class_name)
    }

    pub fn primary_driver(&self) -> Option<&str> {
        self.driver_class_names.first().map(String::as_str)
    }
}

/// Compile-time declaration of a connector.
///
/// Kept as `&'static` data so a connector can be declared as a `const` and
/// turned into a [`ConnectorDescriptor`] at registration time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DescriptorDecl {
    pub alias: &'static str,
    pub translator_name: &'static str,
    pub driver_class_names: &'static [&'static str],
    pub default_url: &'static str,
    pub is_jdbc: bool,
}

impl DescriptorDecl {
    pub fn descriptor(&self) -> ConnectorDescriptor {
        ConnectorDescriptor {
            alias: self.alias.to_string(),
            translator_name: self.translator_name.to_string(),
            driver_class_names: self
                .driver_class_names
                .iter()
                .map(|d| d.to_string())
                .collect(),
            default_url: self.default_url.to_string(),
            is_jdbc: self.is_jdbc,
        }
    }
}

impl From<&DescriptorDecl> for ConnectorDescriptor {
    fn from(decl: &DescriptorDecl) -> Self {
        decl.descriptor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: DescriptorDecl = DescriptorDecl {
        alias: "sample",
        translator_name: "sample-translator",
        driver_class_names: &["org.sample.Driver", "org.sample.LegacyDriver"],
        default_url: "jdbc:sample://localhost/db",
        is_jdbc: true,
    };

    #[test]
    fn test_decl_to_descriptor() {
        let d = SAMPLE.descriptor();
        assert_eq!(d.alias, "sample");
        assert_eq!(d.translator_name, "sample-translator");
        assert_eq!(
            d.driver_class_names,
            vec!["org.sample.Driver", "org.sample.LegacyDriver"]
        );
        assert_eq!(d.primary_driver(), Some("org.sample.Driver"));
        assert!(d.is_jdbc);
        assert_eq!(ConnectorDescriptor::from(&SAMPLE), d);
    }

    #[test]
    fn test_with_driver_skips_repeats() {
        let d = ConnectorDescriptor::new("a", "a")
            .with_driver("x.Driver")
            .with_driver("y.Driver")
            .with_driver("x.Driver");
        assert_eq!(d.driver_class_names, vec!["x.Driver", "y.Driver"]);
        assert!(d.has_driver("y.Driver"));
        assert!(!d.has_driver("z.Driver"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let d: ConnectorDescriptor =
            serde_json::from_str(r#"{"alias":"h2","translator_name":"h2"}"#).unwrap();
        assert!(d.is_jdbc);
        assert!(d.driver_class_names.is_empty());
        assert_eq!(d.default_url, "");
    }
}
