//! Sandbox settings
//!
//! Fixed at build time: `Settings::default()` reads the constants in
//! `crate::consts`. Nothing is loaded from disk or the command line.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::SandboxConfig;

/// Window, rendering and simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Window title
    pub title: String,

    // === Rendering ===
    /// Wait for vertical blank when presenting
    pub vsync: bool,
    /// Background color (linear RGB)
    pub clear_color: [f32; 3],

    // === HUD ===
    /// Log frames-per-second and population once per second
    pub report_fps: bool,

    // === Simulation ===
    pub sandbox: SandboxConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            vsync: true,
            clear_color: CLEAR_COLOR,
            report_fps: true,
            sandbox: SandboxConfig::default(),
        }
    }
}

impl Settings {
    /// Check everything that must hold before a window is opened
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.clear_color.iter().all(|c| (0.0..=1.0).contains(c)),
            "clear color channels must be in [0, 1], got {:?}",
            self.clear_color
        );
        self.sandbox.validate()
    }

    /// Present mode matching the vsync preference
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }

    /// Logical window size in pixels
    pub fn window_size(&self) -> (f64, f64) {
        (
            self.sandbox.bounds.x as f64,
            self.sandbox.bounds.y as f64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.title, "Shapes Sandbox");
        assert_eq!(settings.window_size(), (800.0, 600.0));
        assert_eq!(settings.sandbox.min_shapes, 100);
        assert_eq!(settings.clear_color, [0.1, 0.1, 0.1]);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_present_mode() {
        let mut settings = Settings::default();
        assert_eq!(settings.present_mode(), wgpu::PresentMode::AutoVsync);
        settings.vsync = false;
        assert_eq!(settings.present_mode(), wgpu::PresentMode::AutoNoVsync);
    }

    #[test]
    fn test_validate_rejects_bad_clear_color() {
        let settings = Settings {
            clear_color: [0.1, 1.5, 0.1],
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_checks_sandbox() {
        let mut settings = Settings::default();
        settings.sandbox.size_max = settings.sandbox.size_min;
        assert!(settings.validate().is_err());
    }
}
