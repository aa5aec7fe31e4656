use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const OVERLAY_SETTINGS_FILE_NAME: &str = "overlay_settings.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverlayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl OverlayColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// XOR mask for one framebuffer pixel. Alpha participates so a toggled
    /// pixel becomes visible and a second toggle restores full transparency.
    pub fn to_mask(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }
}

fn default_nudge_debounce_ms() -> u64 {
    100
}

fn default_ghost_color() -> OverlayColor {
    OverlayColor::rgb(255, 255, 255)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverlaySettings {
    /// Quiet period before a coalesced pointer nudge fires.
    #[serde(default = "default_nudge_debounce_ms")]
    pub nudge_debounce_ms: u64,
    #[serde(default = "default_ghost_color")]
    pub ghost_color: OverlayColor,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            nudge_debounce_ms: default_nudge_debounce_ms(),
            ghost_color: default_ghost_color(),
        }
    }
}

impl OverlaySettings {
    pub fn nudge_interval(&self) -> Duration {
        Duration::from_millis(self.nudge_debounce_ms.max(1))
    }

    /// Clamp values a hand-edited settings file could have broken.
    pub fn sanitize(&mut self) {
        if self.nudge_debounce_ms == 0 {
            self.nudge_debounce_ms = 1;
        }
    }
}

pub fn settings_path_from_exe_path(exe_path: &Path) -> Result<PathBuf> {
    let parent = exe_path
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe_path.display()))?;
    Ok(parent.join(OVERLAY_SETTINGS_FILE_NAME))
}

pub fn resolve_settings_path() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().context("resolve current executable")?;
    settings_path_from_exe_path(&exe_path)
}

pub fn load() -> Result<OverlaySettings> {
    load_from_path(&resolve_settings_path()?)
}

pub fn save(settings: &OverlaySettings) -> Result<PathBuf> {
    let path = resolve_settings_path()?;
    save_to_path(&path, settings)?;
    Ok(path)
}

/// Load settings, falling back to defaults when the file is missing or
/// holds only whitespace.
pub fn load_from_path(path: &Path) -> Result<OverlaySettings> {
    if !path.exists() {
        return Ok(OverlaySettings::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read overlay settings file {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(OverlaySettings::default());
    }

    let mut loaded: OverlaySettings = serde_json::from_str(&content)
        .with_context(|| format!("deserialize overlay settings file {}", path.display()))?;
    loaded.sanitize();
    Ok(loaded)
}

pub fn save_to_path(path: &Path, settings: &OverlaySettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create overlay settings folder {}", parent.display()))?;
    }

    let mut sanitized = settings.clone();
    sanitized.sanitize();
    let json = serde_json::to_string_pretty(&sanitized).context("serialize overlay settings")?;
    std::fs::write(path, json)
        .with_context(|| format!("write overlay settings file {}", path.display()))
}
