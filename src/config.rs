//! Site configuration module.
//!
//! Handles loading, validating, and merging the optional `config.toml` in the
//! content directory. The user file is sparse: its values are merged on top
//! of the stock defaults, then the result is deserialized and validated.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml      # Optional, overrides stock defaults
//! └── assets/          # Optional, copied verbatim to the output root
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "Insights"
//! tagline = "Practical guidance for putting AI to work"
//! base_url = "https://example.com"
//! footer = "© Insights Press"
//!
//! [insights]
//! description_length = 160  # Meta description length (40-320)
//! show_tldr = true          # Render the TL;DR box above each article
//!
//! [case_studies]
//! default_layout = "hero"   # Layout used for case-studies/<id>/index.html
//! showcase = "workflow-automation-financial-services"
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#1a1a2e"
//! text_muted = "#6b7280"
//! border = "#e5e7eb"
//! primary = "#2563eb"
//! accent = "#f59e0b"
//!
//! [colors.dark]
//! background = "#0f1117"
//! text = "#e5e7eb"
//! text_muted = "#9ca3af"
//! border = "#2d3140"
//! primary = "#60a5fa"
//! accent = "#fbbf24"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::case_study::Layout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity shown in the header, footer and page titles.
    pub site: SiteSection,
    /// Article page settings.
    pub insights: InsightsConfig,
    /// Case-study page settings.
    pub case_studies: CaseStudiesConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        let url = &self.site.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(
                "site.base_url must start with http:// or https://".into(),
            ));
        }
        if url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must not end with a slash".into(),
            ));
        }
        if !(40..=320).contains(&self.insights.description_length) {
            return Err(ConfigError::Validation(
                "insights.description_length must be 40-320".into(),
            ));
        }
        for (mode, scheme) in [("light", &self.colors.light), ("dark", &self.colors.dark)] {
            if let Some(key) = scheme.first_empty() {
                return Err(ConfigError::Validation(format!(
                    "colors.{mode}.{key} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Site identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    pub name: String,
    pub tagline: String,
    /// Absolute origin used for canonical links, without a trailing slash.
    pub base_url: String,
    pub footer: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: "Insights".to_string(),
            tagline: "Practical guidance for putting AI to work".to_string(),
            base_url: "https://example.com".to_string(),
            footer: "© Insights Press".to_string(),
        }
    }
}

/// Article page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InsightsConfig {
    /// Maximum length of the generated `<meta name="description">`.
    pub description_length: usize,
    /// Render the TL;DR summary box above each article body.
    pub show_tldr: bool,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            description_length: 160,
            show_tldr: true,
        }
    }
}

/// Case-study page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaseStudiesConfig {
    /// Layout rendered at `case-studies/<id>/index.html`.
    pub default_layout: Layout,
    /// Record shown on the layout showcase pages.
    pub showcase: String,
}

impl Default for CaseStudiesConfig {
    fn default() -> Self {
        Self {
            default_layout: Layout::Hero,
            showcase: "workflow-automation-financial-services".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Secondary text: dates, read times, captions.
    pub text_muted: String,
    pub border: String,
    /// Links, metric values, buttons.
    pub primary: String,
    /// Annual-impact callouts and highlights.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#1a1a2e".to_string(),
            text_muted: "#6b7280".to_string(),
            border: "#e5e7eb".to_string(),
            primary: "#2563eb".to_string(),
            accent: "#f59e0b".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0f1117".to_string(),
            text: "#e5e7eb".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "#2d3140".to_string(),
            primary: "#60a5fa".to_string(),
            accent: "#fbbf24".to_string(),
        }
    }

    fn first_empty(&self) -> Option<&'static str> {
        [
            ("background", &self.background),
            ("text", &self.text),
            ("text_muted", &self.text_muted),
            ("border", &self.border),
            ("primary", &self.primary),
            ("accent", &self.accent),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Stock defaults as a TOML table: the base layer user overrides merge onto.
fn stock_defaults() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from the content directory.
///
/// The file only needs the keys it overrides: it is merged over the stock
/// defaults, deserialized (unknown keys are rejected) and validated. A
/// missing file yields the defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let merged = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        let overlay: toml::Value = toml::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "read config overrides");
        merge_toml(stock_defaults(), overlay)
    } else {
        stock_defaults()
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Insights Press Configuration
# ============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at <content>/config.toml. Only the keys you want to
# override are needed. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
name = "Insights"
tagline = "Practical guidance for putting AI to work"

# Absolute origin for canonical links. No trailing slash.
base_url = "https://example.com"

footer = "© Insights Press"

# ---------------------------------------------------------------------------
# Article pages
# ---------------------------------------------------------------------------
[insights]
# Maximum length of the <meta name="description"> text (40-320).
description_length = 160

# Show the TL;DR summary box above each article.
show_tldr = true

# ---------------------------------------------------------------------------
# Case-study pages
# ---------------------------------------------------------------------------
[case_studies]
# Layout for case-studies/<id>/index.html.
# One of: hero, accordion, timeline, modular, floating, interactive.
default_layout = "hero"

# Record shown on the case-study-alternatives showcase pages.
showcase = "workflow-automation-financial-services"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#1a1a2e"
text_muted = "#6b7280"    # Dates, read times, captions
border = "#e5e7eb"
primary = "#2563eb"       # Links, metric values, buttons
accent = "#f59e0b"        # Annual impact, highlights

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0f1117"
text = "#e5e7eb"
text_muted = "#9ca3af"
border = "#2d3140"
primary = "#60a5fa"
accent = "#fbbf24"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-primary: {light_primary};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-primary: {dark_primary};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_primary = colors.light.primary,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_primary = colors.dark.primary,
        dark_accent = colors.dark.accent,
    )
}
