use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use eframe::egui::ColorImage;
use image::{ImageFormat, RgbaImage};

/// Convert an egui framebuffer capture into an `image` buffer.
pub fn to_rgba_image(capture: &ColorImage) -> Result<RgbaImage> {
    let [width, height] = capture.size;
    let bytes: Vec<u8> = capture
        .pixels
        .iter()
        .flat_map(|pixel| pixel.to_srgba_unmultiplied())
        .collect();

    match RgbaImage::from_raw(width as u32, height as u32, bytes) {
        Some(img) => Ok(img),
        None => bail!("Screenshot buffer does not match {}x{}", width, height),
    }
}

/// Write the capture as a PNG. Returns the path written.
pub fn save_png(capture: &ColorImage, path: &Path) -> Result<PathBuf> {
    let img = to_rgba_image(capture)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }
    img.save_with_format(path, ImageFormat::Png)
        .context(format!("Failed to write PNG: {}", path.display()))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_converts_to_rgba() {
        let capture =
            ColorImage::from_rgba_unmultiplied([2, 1], &[0, 0, 0, 255, 255, 140, 0, 255]);
        let img = to_rgba_image(&capture).unwrap();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(1, 0).0, [255, 140, 0, 255]);
    }

    #[test]
    fn png_is_written_to_disk() {
        let capture = ColorImage::from_rgba_unmultiplied([4, 3], &[0; 4 * 3 * 4]);
        let path = std::env::temp_dir()
            .join("tudor_dashboard_export_test")
            .join("TUDOR_DASHBOARD_2026-02-10.png");
        let written = save_png(&capture, &path).unwrap();
        assert!(written.exists());
        assert_eq!(image::open(&written).unwrap().width(), 4);
    }
}
