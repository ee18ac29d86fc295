use std::collections::HashMap;

use serde::Deserialize;

use super::error::CrudError;
use crate::vars::DEFAULT_HOME_URL;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageConfig {
    plugin_identifier: String,
    view_name: String,
    #[serde(default)]
    translations: HashMap<String, String>,
    #[serde(default = "default_home_url")]
    home_url: String,
}

fn default_home_url() -> String {
    DEFAULT_HOME_URL.to_string()
}

impl PageConfig {
    pub fn new(plugin_identifier: &str, view_name: &str) -> Self {
        Self {
            plugin_identifier: plugin_identifier.to_string(),
            view_name: view_name.to_string(),
            translations: HashMap::new(),
            home_url: default_home_url(),
        }
    }

    pub fn from_yaml(yaml_str: &str) -> Result<Self, CrudError> {
        let config: PageConfig = serde_yaml::from_str(yaml_str)?;
        config.validate()
    }

    pub fn from_json(json_str: &str) -> Result<Self, CrudError> {
        let config: PageConfig = serde_json::from_str(json_str)?;
        config.validate()
    }

    pub fn with_translation(mut self, key: &str, value: &str) -> Self {
        self.translations.insert(key.to_string(), value.to_string());
        self
    }

    pub fn plugin_identifier(&self) -> &str {
        &self.plugin_identifier
    }

    pub fn view_name(&self) -> &str {
        &self.view_name
    }

    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    pub fn translation(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(|s| s.as_str())
    }

    fn validate(self) -> Result<Self, CrudError> {
        if self.plugin_identifier.trim().is_empty() {
            return Err(CrudError::ConfigInvalid(
                "plugin_identifier is empty".to_string(),
            ));
        }
        if self.view_name.trim().is_empty() {
            return Err(CrudError::ConfigInvalid(
                "view_name is empty".to_string(),
            ));
        }
        Ok(self)
    }
}
