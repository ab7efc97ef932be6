//! Storefront configuration.
//!
//! Handles loading and validating `config.toml`. Every value has a
//! stock default matching the live page; a user file only overrides what it
//! names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [order]
//! phone_number = "919996124025"   # wa.me recipient, digits only
//!
//! [carousel]
//! autoplay_ms = 5000              # Auto-advance period
//! swipe_threshold_px = 50.0       # Minimum horizontal travel for a swipe
//!
//! [navbar]
//! scrolled_offset_px = 100.0      # Scroll offset that compacts the navbar
//!
//! [reveal]
//! threshold = 0.1                 # Visible fraction that triggers a reveal
//! bottom_margin_px = 100.0        # Viewport bottom pulled up by this much
//! stagger_ms = 100                # Per-card transition delay step
//! hero_delays_ms = [100, 300, 500] # Title, tagline, CTA buttons
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
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

/// Storefront configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Where order links point.
    pub order: OrderConfig,
    /// Slide timing and gesture settings.
    pub carousel: CarouselConfig,
    /// Navbar scroll behavior.
    pub navbar: NavbarConfig,
    /// Reveal animation settings.
    pub reveal: RevealConfig,
}

impl StoreConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let phone = &self.order.phone_number;
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Validation(
                "order.phone_number must be digits only, with country code".into(),
            ));
        }
        if self.carousel.autoplay_ms == 0 {
            return Err(ConfigError::Validation(
                "carousel.autoplay_ms must be greater than 0".into(),
            ));
        }
        non_negative("carousel.swipe_threshold_px", self.carousel.swipe_threshold_px)?;
        non_negative("navbar.scrolled_offset_px", self.navbar.scrolled_offset_px)?;
        non_negative("reveal.bottom_margin_px", self.reveal.bottom_margin_px)?;
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Validation(
                "reveal.threshold must be between 0 and 1".into(),
            ));
        }
        Ok(())
    }
}

fn non_negative(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_nan() || value < 0.0 {
        return Err(ConfigError::Validation(format!(
            "{key} must be a non-negative number"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrderConfig {
    /// International number without `+` or spaces.
    pub phone_number: String,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            phone_number: crate::order::DEFAULT_PHONE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub autoplay_ms: u64,
    pub swipe_threshold_px: f64,
}

impl CarouselConfig {
    pub fn autoplay_period(&self) -> Duration {
        Duration::from_millis(self.autoplay_ms)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_ms: 5000,
            swipe_threshold_px: crate::swipe::DEFAULT_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarConfig {
    pub scrolled_offset_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scrolled_offset_px: crate::nav::DEFAULT_SCROLLED_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    pub threshold: f64,
    pub bottom_margin_px: f64,
    pub stagger_ms: u64,
    /// Fade-in delays for hero title, tagline, and CTA buttons.
    pub hero_delays_ms: [u64; 3],
}

impl RevealConfig {
    pub fn rule(&self) -> crate::reveal::RevealRule {
        crate::reveal::RevealRule {
            threshold: self.threshold,
            bottom_margin: self.bottom_margin_px,
        }
    }

    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    pub fn hero_delays(&self) -> [Duration; 3] {
        self.hero_delays_ms.map(Duration::from_millis)
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 100.0,
            stagger_ms: 100,
            hero_delays_ms: [100, 300, 500],
        }
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from `config.toml` in `dir`, falling back to stock defaults.
///
/// Sections and keys the file leaves out keep their defaults through
/// `#[serde(default)]`; the result is validated before it is returned.
pub fn load_config(dir: &Path) -> Result<StoreConfig, ConfigError> {
    let config_path = dir.join("config.toml");
    let config: StoreConfig = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        StoreConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Storefront Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Orders
# ---------------------------------------------------------------------------
[order]
# WhatsApp recipient: country code + number, digits only.
phone_number = "919996124025"

# ---------------------------------------------------------------------------
# Carousel
# ---------------------------------------------------------------------------
[carousel]
# Milliseconds between automatic slide changes.
autoplay_ms = 5000

# Horizontal travel (CSS px) a touch must exceed to count as a swipe.
swipe_threshold_px = 50.0

# ---------------------------------------------------------------------------
# Navbar
# ---------------------------------------------------------------------------
[navbar]
# Scroll offset (px) beyond which the navbar switches to its compact style.
scrolled_offset_px = 100.0

# ---------------------------------------------------------------------------
# Reveal animations
# ---------------------------------------------------------------------------
[reveal]
# Fraction of an element that must be on screen before it fades in.
threshold = 0.1

# The viewport's bottom edge is pulled up by this many px when testing.
bottom_margin_px = 100.0

# Cards fade in one after another, this many ms apart.
stagger_ms = 100

# Hero title, tagline and CTA buttons fade in after these delays (ms).
hero_delays_ms = [100, 300, 500]
"##
}
