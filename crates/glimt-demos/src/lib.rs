//! Shared helpers for the demo binaries.

use anyhow::{Context as _, Result};

/// Reads the first usable system font. Covers the layouts of the
/// common Linux distributions; demos that draw text fail fast with a
/// clear message when none is present.
pub fn find_system_font() -> Result<Vec<u8>> {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ];
    for path in CANDIDATES {
        if let Ok(bytes) = std::fs::read(path) {
            log::debug!("using system font {path}");
            return Ok(bytes);
        }
    }
    Err(anyhow::anyhow!("no usable system font found")).context("font discovery failed")
}
