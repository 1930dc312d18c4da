use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config. A missing source yields `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct ListenConfig {
        host: String,
        port: u16,
    }

    impl Default for ListenConfig {
        fn default() -> Self {
            Self {
                host: "127.0.0.1".to_string(),
                port: 8080,
            }
        }
    }

    impl Validate for ListenConfig {
        fn validate(&self) -> Result<(), String> {
            if self.port == 0 {
                return Err("port must be non-zero".to_string());
            }
            Ok(())
        }
    }

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_config_{}.yaml", random_number))
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager: ConfigManager<_, ListenConfig, _> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");

        let loaded = manager.get_config().unwrap();

        assert_eq!(loaded, ListenConfig::default());
    }

    #[test]
    fn test_config_can_be_saved_and_loaded() {
        let file_path = get_temp_file_path();
        let config = ListenConfig {
            host: "0.0.0.0".to_string(),
            port: 10000,
        };

        let writer: ConfigManager<_, ListenConfig, _> = ConfigManager::from_yaml_file(&file_path);
        writer.set_config(&config).unwrap();

        let reader: ConfigManager<_, ListenConfig, _> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(reader.get_config().unwrap(), config);
        assert_eq!(reader.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(&file_path);
        provider
            .set_config_content("host: 0.0.0.0\nport: 0\n")
            .unwrap();

        let manager: ConfigManager<_, ListenConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        let result = manager.get_config();

        assert!(result.unwrap_err().contains("validation"));
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, ListenConfig, _> = ConfigManager::from_yaml_file(&file_path);

        let result = manager.set_config(&ListenConfig {
            host: "0.0.0.0".to_string(),
            port: 0,
        });

        assert!(result.is_err());
        assert!(!file_path.exists());
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(&file_path);
        provider.set_config_content("host: [unclosed").unwrap();

        let manager: ConfigManager<_, ListenConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(file_path);
    }
}
