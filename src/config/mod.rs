//! Configuration system for Prospectus

#![allow(dead_code)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::{Company, Template};

/// Global application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub output: OutputConfig,
    pub cms: CmsConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("prospectus").join("config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Theme applied when a site config names none.
    pub default_theme: Option<String>,
    pub default_layout: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_theme: None,
            default_layout: "capital-markets-hub".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    pub base_url: Option<String>,
    /// Environment variable holding the bearer token; never the token itself.
    pub token_env: Option<String>,
    pub timeout_secs: u64,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            token_env: None,
            timeout_secs: 10,
        }
    }
}

/// Per-site configuration (site.toml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Preset name or path to a theme TOML file.
    pub theme: Option<String>,
    pub company: Company,
    #[serde(default)]
    pub template: Template,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub output: SiteOutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub source: SourceKind,
    pub file: Option<PathBuf>,
    pub use_cms: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::None,
            file: None,
            use_cms: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Cms,
    File,
    #[default]
    None,
}

impl SourceKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Cms => "cms",
            Self::File => "file",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteOutputConfig {
    /// Overrides the directory name derived from the company.
    pub slug: Option<String>,
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read site config {}", path.display()))?;
        let mut config: SiteConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse site config {}", path.display()))?;

        // Content file paths are written relative to the site config.
        if let Some(file) = &config.content.file {
            if file.is_relative() {
                if let Some(parent) = path.parent() {
                    config.content.file = Some(parent.join(file));
                }
            }
        }

        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Initialize a starter site configuration
pub fn init_site_config(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join("site.toml");

    if path.exists() && !force {
        anyhow::bail!("site.toml already exists. Use --force to overwrite.");
    }

    let company_name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("Acme Capital")
        .to_string();

    let mut company = Company::new(company_name);
    company.description = Some("Tell investors what you own and why.".to_string());
    company.ir_email = Some("ir@example.com".to_string());

    let config = SiteConfig {
        theme: Some("obsidian".to_string()),
        company,
        template: Template {
            name: Some("Capital Markets Hub".to_string()),
            layout: Some("capital-markets-hub".to_string()),
            settings: None,
        },
        content: ContentConfig {
            source: SourceKind::File,
            file: Some(PathBuf::from("content.yaml")),
            use_cms: true,
        },
        output: SiteOutputConfig::default(),
    };

    config.save(&path)?;
    println!("Created site.toml");
    Ok(())
}
