//! Persistent CLI profile configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use jeonlog_core::models::SortMode;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "cli-config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliProfilesConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub active_profile: Option<String>,
    #[serde(default)]
    pub profiles: BTreeMap<String, CliProfile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliProfile {
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_avatar: Option<String>,
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub db_path: Option<PathBuf>,
    #[serde(default)]
    pub sort: Option<SortMode>,
}

const fn default_config_version() -> u32 {
    1
}

/// `JEONLOG_CONFIG_PATH` wins over the platform config directory.
pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("JEONLOG_CONFIG_PATH") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("jeonlog")
        .join(CONFIG_FILE_NAME)
}

pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    jeonlog_core::util::normalize_text_option(value)
}

pub fn normalize_profile_name(value: Option<&str>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn normalize_path_option(value: Option<PathBuf>) -> Option<PathBuf> {
    value.filter(|path| !path.as_os_str().is_empty())
}

impl CliProfilesConfig {
    pub fn load() -> Result<Self, String> {
        Self::load_from_path(&default_config_path())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config at {}: {}", path.display(), error))?;
        let mut config = serde_json::from_str::<Self>(&raw)
            .map_err(|error| format!("Failed to parse config at {}: {}", path.display(), error))?;
        config.normalize();
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf, String> {
        let path = default_config_path();
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    error
                )
            })?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)
            .map_err(|error| format!("Failed to serialize config: {error}"))?;
        std::fs::write(path, serialized)
            .map_err(|error| format!("Failed to write config at {}: {}", path.display(), error))
    }

    pub fn resolve_profile_name(&self, explicit: Option<&str>) -> String {
        if let Some(profile) = normalize_profile_name(explicit) {
            return profile;
        }
        if let Some(profile) =
            normalize_profile_name(std::env::var("JEONLOG_PROFILE").ok().as_deref())
        {
            return profile;
        }
        if let Some(profile) = normalize_profile_name(self.active_profile.as_deref()) {
            return profile;
        }
        "default".to_string()
    }

    pub fn profile(&self, name: &str) -> Option<&CliProfile> {
        self.profiles.get(name)
    }

    /// Resolved profile, or an empty one when it was never initialized.
    pub fn resolved_profile(&self, explicit: Option<&str>) -> CliProfile {
        let name = self.resolve_profile_name(explicit);
        self.profile(&name).cloned().unwrap_or_default()
    }

    pub fn profile_mut_or_default(&mut self, name: &str) -> &mut CliProfile {
        self.profiles.entry(name.to_string()).or_default()
    }

    fn normalize(&mut self) {
        self.active_profile = normalize_profile_name(self.active_profile.as_deref());
        for profile in self.profiles.values_mut() {
            profile.normalize();
        }
    }
}

impl CliProfile {
    fn normalize(&mut self) {
        self.author_name = normalize_text_option(self.author_name.take());
        self.author_avatar = normalize_text_option(self.author_avatar.take());
        self.catalog_path = normalize_path_option(self.catalog_path.take());
        self.db_path = normalize_path_option(self.db_path.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_profile_name_rejects_empty() {
        assert_eq!(normalize_profile_name(None), None);
        assert_eq!(normalize_profile_name(Some(" ")), None);
        assert_eq!(normalize_profile_name(Some(" gallery ")), Some("gallery".into()));
    }

    #[test]
    fn config_roundtrip_preserves_profiles() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = CliProfilesConfig {
            version: 1,
            active_profile: Some(" default ".to_string()),
            profiles: BTreeMap::new(),
        };
        config.profiles.insert(
            "default".to_string(),
            CliProfile {
                author_name: Some(" 민지 ".to_string()),
                author_avatar: Some("   ".to_string()),
                catalog_path: Some(PathBuf::from("/tmp/catalog.json")),
                db_path: Some(PathBuf::new()),
                sort: Some(SortMode::Popular),
            },
        );

        config.save_to_path(&path).unwrap();
        let loaded = CliProfilesConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.active_profile.as_deref(), Some("default"));

        let profile = loaded.profile("default").unwrap();
        assert_eq!(profile.author_name.as_deref(), Some("민지"));
        assert_eq!(profile.author_avatar, None);
        assert_eq!(
            profile.catalog_path.as_deref(),
            Some(Path::new("/tmp/catalog.json"))
        );
        assert_eq!(profile.db_path, None);
        assert_eq!(profile.sort, Some(SortMode::Popular));
    }

    #[test]
    fn missing_config_file_loads_default() {
        let tmp = tempfile::tempdir().unwrap();
        let loaded = CliProfilesConfig::load_from_path(&tmp.path().join("absent.json")).unwrap();
        assert_eq!(loaded, CliProfilesConfig::default());
    }

    #[test]
    fn malformed_config_file_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ nope").unwrap();

        let error = CliProfilesConfig::load_from_path(&path).unwrap_err();
        assert!(error.contains("Failed to parse config"));
    }

    #[test]
    fn resolve_profile_name_prefers_explicit_then_active() {
        let config = CliProfilesConfig {
            version: 1,
            active_profile: Some("museum".to_string()),
            profiles: BTreeMap::new(),
        };
        assert_eq!(config.resolve_profile_name(Some("travel")), "travel");
        if std::env::var_os("JEONLOG_PROFILE").is_none() {
            assert_eq!(config.resolve_profile_name(None), "museum");
        }
    }

    #[test]
    fn resolved_profile_defaults_when_uninitialized() {
        let config = CliProfilesConfig::default();
        assert_eq!(config.resolved_profile(Some("ghost")), CliProfile::default());
    }
}
