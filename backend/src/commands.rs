use dsc_core::{ConnectorDescriptor, ConnectorRegistry};

use crate::error::CommandError;

fn summary(d: &ConnectorDescriptor) -> String {
    format!(
        "{:<16} translator={:<16} driver={}",
        d.alias,
        d.translator_name,
        d.primary_driver().unwrap_or("-")
    )
}

pub fn list(reg: &ConnectorRegistry, json: bool) -> Result<String, CommandError> {
    if json {
        let all: Vec<&ConnectorDescriptor> = reg.iter().map(|d| &**d).collect();
        return Ok(serde_json::to_string_pretty(&all)?);
    }
    Ok(reg
        .iter()
        .map(|d| summary(d))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn show(reg: &ConnectorRegistry, alias: &str, json: bool) -> Result<String, CommandError> {
    let d = reg
        .get(alias)
        .ok_or_else(|| CommandError::UnknownAlias(alias.to_string()))?;
    if json {
        return Ok(serde_json::to_string_pretty(&*d)?);
    }
    Ok(format!(
        "alias:       {}\ntranslator:  {}\ndrivers:     {}\ndefault url: {}\njdbc:        {}",
        d.alias,
        d.translator_name,
        d.driver_class_names.join(", "),
        d.default_url,
        d.is_jdbc
    ))
}

pub fn resolve(reg: &ConnectorRegistry, url: &str) -> Result<String, CommandError> {
    reg.resolve_url(url)
        .map(|d| d.alias.clone())
        .ok_or_else(|| CommandError::NoMatch(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ConnectorRegistry {
        let mut reg = ConnectorRegistry::new();
        reg.register(
            ConnectorDescriptor::new("h2", "h2")
                .with_driver("org.h2.Driver")
                .with_url("jdbc:h2:mem:test"),
        )
        .unwrap();
        reg
    }

    #[test]
    fn test_list() {
        let reg = registry();
        let text = list(&reg, false).unwrap();
        assert!(text.starts_with("h2"));
        assert!(text.contains("driver=org.h2.Driver"));

        let json: serde_json::Value = serde_json::from_str(&list(&reg, true).unwrap()).unwrap();
        assert_eq!(json[0]["alias"], "h2");
    }

    #[test]
    fn test_show_and_resolve() {
        let reg = registry();
        assert!(show(&reg, "h2", false).unwrap().contains("jdbc:h2:mem:test"));
        assert!(matches!(
            show(&reg, "derby", false),
            Err(CommandError::UnknownAlias(_))
        ));
        assert_eq!(resolve(&reg, "jdbc:h2:file:/tmp/x").unwrap(), "h2");
        assert!(matches!(
            resolve(&reg, "jdbc:derby:db"),
            Err(CommandError::NoMatch(_))
        ));
    }
}
