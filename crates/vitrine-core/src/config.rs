use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Page file opened when none is given on the command line
    #[serde(default)]
    pub page_path: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            page_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Rows reserved for the fixed header (bar + shadow rule)
    #[serde(default = "default_header_rows")]
    pub header_rows: u16,
    /// Extra rows left above a section after an anchor jump
    #[serde(default = "default_anchor_margin")]
    pub anchor_margin_rows: u16,
    /// Scroll offset past which the header renders its shadow
    #[serde(default = "default_shadow_threshold")]
    pub shadow_threshold_rows: u16,
    /// Smooth scrolling behavior
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            header_rows: default_header_rows(),
            anchor_margin_rows: default_anchor_margin(),
            shadow_threshold_rows: default_shadow_threshold(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Smooth scrolling configuration shared by the page scroller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable eased scrolling (false = instant jumps)
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingKind,
    /// Rows moved per plain scroll step
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Frames per second while a scroll animation runs
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: EasingKind::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Easing curve applied to scroll animations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingKind {
    Linear,
    #[default]
    Cubic,
    EaseOut,
}

/// Carousel rotation timing. The defaults mirror the page animation the
/// gallery reproduces: a 1 s head start, a 3 s cadence, and an 850 ms
/// settle window during which further rotation requests are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default = "default_initial_delay")]
    pub initial_delay_ms: u64,
    #[serde(default = "default_rotate_interval")]
    pub interval_ms: u64,
    #[serde(default = "default_settle_delay")]
    pub settle_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: default_initial_delay(),
            interval_ms: default_rotate_interval(),
            settle_ms: default_settle_delay(),
        }
    }
}

/// Entrance-reveal tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Rows trimmed from the viewport bottom before testing visibility
    #[serde(default = "default_reveal_margin")]
    pub bottom_margin_rows: u16,
    /// Fraction of a section that must be visible before it reveals
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            bottom_margin_rows: default_reveal_margin(),
            threshold: default_reveal_threshold(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Configuration file path: ~/.config/vitrine/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("vitrine")
            .join("config.toml")
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_header_rows() -> u16 {
    2
}

fn default_anchor_margin() -> u16 {
    1
}

fn default_shadow_threshold() -> u16 {
    2
}

fn default_true() -> bool {
    true
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u32 {
    60
}

fn default_initial_delay() -> u64 {
    1000
}

fn default_rotate_interval() -> u64 {
    3000
}

fn default_settle_delay() -> u64 {
    850
}

fn default_reveal_margin() -> u16 {
    2
}

fn default_reveal_threshold() -> f64 {
    0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_carousel_timing() {
        let config = CarouselConfig::default();
        assert_eq!(config.initial_delay_ms, 1000);
        assert_eq!(config.interval_ms, 3000);
        assert_eq!(config.settle_ms, 850);
    }

    #[test]
    fn test_default_scroll_config() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.animation_duration_ms, 150);
        assert_eq!(config.easing, EasingKind::Cubic);
    }

    #[test]
    fn test_partial_config_parses_with_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [carousel]
            interval_ms = 5000
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.interval_ms, 5000);
        assert_eq!(config.carousel.settle_ms, 850);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!((config.reveal.threshold - 0.1).abs() < f64::EPSILON);
    }
}
