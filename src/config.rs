use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// Top-level carousel configuration (YAML, kebab-case keys).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Configuration {
    /// Ordered list of images to show, fixed for the lifetime of the widget.
    #[serde(default)]
    pub images: Vec<PathBuf>,
    /// Auto-advance period, e.g. "3s" or "1500ms".
    #[serde(default = "Configuration::default_interval", with = "humantime_serde")]
    pub interval: Duration,
    #[serde(default)]
    pub drag: DragOptions,
    #[serde(default = "Configuration::default_window_title")]
    pub window_title: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct DragOptions {
    /// Whether drag-based navigation is attached to the widget.
    pub enabled: bool,
    /// Horizontal distance a drag must cover before it navigates.
    pub threshold_px: f32,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold_px: 50.0,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            interval: Self::default_interval(),
            drag: DragOptions::default(),
            window_title: Self::default_window_title(),
        }
    }
}

impl Configuration {
    const fn default_interval() -> Duration {
        Duration::from_secs(3)
    }

    fn default_window_title() -> String {
        "Photo Carousel".to_owned()
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let cfg: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(cfg)
    }

    /// Rejects configurations the widget cannot run with. An empty image
    /// list fails here rather than producing a silently inert window.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            !self.images.is_empty(),
            "images must list at least one slide"
        );
        ensure!(!self.interval.is_zero(), "interval must be positive");
        ensure!(
            self.drag.threshold_px > 0.0,
            "drag.threshold-px must be positive"
        );
        Ok(self)
    }
}
