//! Demo configuration loaded from JSON.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use skillkit::{SelectOption, SelectTheme, SkillCard, options_from};

use crate::error::DemoError;
use crate::paths;

/// One select shown by the demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectConfig {
    pub caption: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub multi: bool,
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

fn default_placeholder() -> String {
    skillkit::widgets::select::props::DEFAULT_PLACEHOLDER.to_string()
}

/// One skill card shown next to the selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub level: u8,
}

impl From<CardConfig> for SkillCard {
    fn from(card: CardConfig) -> Self {
        SkillCard::new(card.title, card.content).level(card.level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Dark,
    Light,
}

/// Either a preset name (`"light"`) or a full colour table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeConfig {
    Preset(ThemePreset),
    Custom(SelectTheme),
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::Preset(ThemePreset::default())
    }
}

impl ThemeConfig {
    pub fn resolve(&self) -> SelectTheme {
        match self {
            Self::Preset(ThemePreset::Dark) => SelectTheme::dark(),
            Self::Preset(ThemePreset::Light) => SelectTheme::light(),
            Self::Custom(theme) => theme.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub selects: Vec<SelectConfig>,
    pub cards: Vec<CardConfig>,
    pub theme: ThemeConfig,
    /// Width of every select, in columns
    pub width: u16,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            selects: vec![
                SelectConfig {
                    caption: "Favourite fruit".into(),
                    placeholder: "Type a fruit...".into(),
                    multi: false,
                    options: options_from([("1", "Apple"), ("2", "Banana"), ("3", "Apricot")]),
                },
                SelectConfig {
                    caption: "Skills".into(),
                    placeholder: "Filter skills...".into(),
                    multi: true,
                    options: options_from([
                        ("rust", "Rust"),
                        ("react", "React"),
                        ("redux", "Redux"),
                        ("ts", "TypeScript"),
                        ("sql", "SQL"),
                        ("docker", "Docker"),
                    ]),
                },
            ],
            cards: vec![
                CardConfig {
                    title: "Rust".into(),
                    content: "Systems programming".into(),
                    level: 4,
                },
                CardConfig {
                    title: "React".into(),
                    content: "Component UIs".into(),
                    level: 3,
                },
            ],
            theme: ThemeConfig::default(),
            width: 36,
        }
    }
}

impl DemoConfig {
    pub fn from_json(path: &Path, text: &str) -> Result<Self, DemoError> {
        serde_json::from_str(text).map_err(|source| DemoError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config.
    ///
    /// An explicit path must exist. Without one, the platform config file is
    /// used when present, otherwise the built-in defaults.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, DemoError> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(DemoError::MissingConfig(path));
                }
                path
            }
            None => match paths::config_file() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No demo config found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        info!("Loading demo config from {}", path.display());
        let text = fs::read_to_string(&path)?;
        Self::from_json(&path, &text)
    }
}
