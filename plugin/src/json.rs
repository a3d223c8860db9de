use dsc_core::plugin::Plugin;
use dsc_core::ConnectorDescriptor;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DESCRIPTOR_FILE: &str = "connector.json";

/// Loads one descriptor per sub-directory holding a `connector.json`.
pub struct JsonPlugin {
    plugins_dir: Vec<PathBuf>,
}

impl JsonPlugin {
    pub fn new() -> Self {
        let mut plugin_dirs = Vec::new();

        if let Ok(exec_path) = env::current_exe() {
            if let Some(exec_dir) = exec_path.parent() {
                plugin_dirs.push(exec_dir.join("connectors"));
            }
        }

        #[cfg(target_os = "linux")]
        plugin_dirs.push(PathBuf::from("/usr/share/dsc/connectors"));

        Self {
            plugins_dir: plugin_dirs,
        }
    }

    pub fn with_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            plugins_dir: dirs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.plugins_dir
    }

    fn load_descriptor(&self, path: &Path) -> Option<ConnectorDescriptor> {
        let file = path.join(DESCRIPTOR_FILE);
        let content = match fs::read_to_string(&file) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("skip {}: {}", file.display(), e);
                return None;
            }
        };
        match serde_json::from_str::<ConnectorDescriptor>(&content) {
            Ok(descriptor) => Some(descriptor),
            Err(e) => {
                log::warn!("skip {}: {}", file.display(), e);
                None
            }
        }
    }
}

impl Default for JsonPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for JsonPlugin {
    fn id(&self) -> &str {
        "dsc.plugin.json"
    }
    fn name(&self) -> &str {
        "json"
    }
    fn connector_descriptors(&self) -> Vec<ConnectorDescriptor> {
        let mut descriptors = Vec::new();

        for plugins_dir in &self.plugins_dir {
            let entries = match fs::read_dir(plugins_dir) {
                Ok(entries) => entries,
                Err(e) => {
                    log::debug!("skip plugin dir {}: {}", plugins_dir.display(), e);
                    continue;
                }
            };
            // read_dir order is platform dependent
            let mut paths: Vec<PathBuf> = entries
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry.path()),
                    Err(e) => {
                        log::debug!("skip entry in {}: {}", plugins_dir.display(), e);
                        None
                    }
                })
                .collect();
            paths.sort();
            for path in paths {
                if let Some(descriptor) = self.load_descriptor(&path) {
                    descriptors.push(descriptor);
                }
            }
        }

        descriptors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        let sub = dir.join(name);
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join(DESCRIPTOR_FILE), content).unwrap();
    }

    #[test]
    fn test_load_descriptors() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "h2",
            r#"{"alias":"h2","translator_name":"h2",
                "driver_class_names":["org.h2.Driver"],
                "default_url":"jdbc:h2:mem:test"}"#,
        );
        write(tmp.path(), "broken", "{ not json");
        fs::create_dir_all(tmp.path().join("empty")).unwrap();

        let plugin = JsonPlugin::with_dirs([tmp.path()]);
        let descriptors = plugin.connector_descriptors();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].alias, "h2");
        assert!(descriptors[0].is_jdbc);
    }

    #[test]
    fn test_unreadable_files_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("dir").join(DESCRIPTOR_FILE)).unwrap();
        let utf = tmp.path().join("utf");
        fs::create_dir_all(&utf).unwrap();
        fs::write(utf.join(DESCRIPTOR_FILE), [0xffu8, 0xfe, 0x00]).unwrap();
        write(
            tmp.path(),
            "zz",
            r#"{"alias":"derby","translator_name":"derby",
                "driver_class_names":["org.apache.derby.jdbc.ClientDriver"],
                "default_url":"jdbc:derby://localhost:1527/db"}"#,
        );

        let plugin = JsonPlugin::with_dirs([tmp.path()]);
        let descriptors = plugin.connector_descriptors();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].alias, "derby");
    }

    #[test]
    fn test_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let plugin = JsonPlugin::with_dirs([tmp.path().join("absent")]);
        assert!(plugin.connector_descriptors().is_empty());
    }
}
