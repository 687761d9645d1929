use crate::highlight::Theme;
use crate::open::CommandOpener;
use crate::query::{ExtensionFilter, SearchConfiguration, SearchMode};
use crate::scope::ProjectLayout;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".scopegrep.toml";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchDefaults,
    pub scope: ScopeConfig,
    pub display: DisplayConfig,
    pub open: OpenConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDefaults {
    pub mode: SearchMode,
    pub case_sensitive: bool,
    pub whole_word: bool,
    pub extensions: ExtensionFilter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    pub default_root: PathBuf,
    pub secondary_root: PathBuf,
    pub include: Vec<PathBuf>,
    pub exclude: Vec<PathBuf>,
    pub include_secondary: bool,
    /// Skip hidden and gitignored files while walking.
    pub respect_ignore: bool,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        let layout = ProjectLayout::default();
        Self {
            default_root: layout.default_root,
            secondary_root: layout.secondary_root,
            include: Vec::new(),
            exclude: Vec::new(),
            include_secondary: false,
            respect_ignore: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub theme: Theme,
    pub progress: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            progress: true,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenConfig {
    /// Template with `{path}` and `{line}` placeholders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Config {
    /// Loads `explicit` if given, otherwise the first config file found.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_path(),
        };
        match config_path {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn find_config_path() -> Option<PathBuf> {
        if let Some(xdg_config) = dirs::config_dir() {
            let xdg_path = xdg_config.join("scopegrep/config.toml");
            if xdg_path.exists() {
                return Some(xdg_path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            let home_path = home.join(CONFIG_FILE_NAME);
            if home_path.exists() {
                return Some(home_path);
            }
        }

        let current_path = Path::new(CONFIG_FILE_NAME);
        if current_path.exists() {
            return Some(current_path.to_path_buf());
        }

        None
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout {
            default_root: self.scope.default_root.clone(),
            secondary_root: self.scope.secondary_root.clone(),
        }
    }

    /// Starting configuration for a search, before command-line overrides.
    pub fn search_configuration(&self) -> SearchConfiguration {
        let mut extensions = ExtensionFilter::empty();
        for toggle in self.search.extensions.iter() {
            extensions.set(&toggle.ext, toggle.enabled);
        }
        SearchConfiguration {
            query: String::new(),
            mode: self.search.mode,
            case_sensitive: self.search.case_sensitive,
            whole_word: self.search.whole_word,
            extensions,
            include_roots: self.scope.include.clone(),
            exclude_roots: self.scope.exclude.clone(),
            include_secondary_root: self.scope.include_secondary,
        }
    }

    pub fn opener(&self) -> CommandOpener {
        match &self.open.command {
            Some(template) => CommandOpener::new(template.clone()),
            None => CommandOpener::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[display]\ntheme = \"light\"\n").unwrap();
        assert_eq!(config.display.theme, Theme::Light);
        assert!(config.display.progress);
        assert_eq!(config.search.extensions, ExtensionFilter::default());
        assert_eq!(config.scope.secondary_root, PathBuf::from("Packages"));
    }

    #[test]
    fn extension_list_is_read_in_order_and_normalized() {
        let toml = r#"
            [search]
            mode = "regex"
            case_sensitive = true

            [[search.extensions]]
            ext = "RS"
            enabled = true

            [[search.extensions]]
            ext = ".toml"
            enabled = false

            [scope]
            exclude = ["target"]
            include_secondary = true
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        let search = config.search_configuration();
        assert_eq!(search.mode, SearchMode::Regex);
        assert!(search.case_sensitive);
        let exts: Vec<_> = search.extensions.iter().map(|t| t.ext.as_str()).collect();
        assert_eq!(exts, vec![".rs", ".toml"]);
        assert_eq!(search.extensions.enabled().collect::<Vec<_>>(), vec![".rs"]);
        assert_eq!(search.exclude_roots, vec![PathBuf::from("target")]);
        assert!(search.include_secondary_root);
        assert!(search.query.is_empty());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");
        let mut config = Config::default();
        config.search.whole_word = true;
        config.open.command = Some("code -g {path}:{line}".to_string());
        config.save(&path).unwrap();

        let loaded = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn unreadable_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn opener_prefers_configured_template() {
        let mut config = Config::default();
        config.open.command = Some("ed {path}".to_string());
        assert_eq!(config.opener(), CommandOpener::new("ed {path}"));
    }
}
