//! Composition of the installer background.
//!
//! The canvas starts white, gets the vertical gradient, then the title and
//! subtitle captions, and is finally written out as an RGB PNG.

use crate::{Caption, DmgBackgroundError, DmgBackgroundResult, VerticalGradient};
use derivative::Derivative;
use derive_setters::Setters;
use image::{ImageFormat, Rgb, RgbImage};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_OUTPUT_PATH: &str = "native/resources/dmg_background.png";

#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BackgroundConfig {
    #[derivative(Default(value = "500"))]
    pub width: u32,

    #[derivative(Default(value = "300"))]
    pub height: u32,

    pub gradient: VerticalGradient,

    #[derivative(Default(value = "Caption::title()"))]
    pub title: Caption,

    #[derivative(Default(value = "Caption::subtitle()"))]
    pub subtitle: Caption,

    #[derivative(Default(value = "PathBuf::from(DEFAULT_OUTPUT_PATH)"))]
    pub output: PathBuf,
}

impl BackgroundConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct BackgroundGenerator {
    config: BackgroundConfig,
}

impl BackgroundGenerator {
    pub fn new(config: BackgroundConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    /// Compose the image in memory.
    pub fn render(&self) -> DmgBackgroundResult<RgbImage> {
        let BackgroundConfig {
            width,
            height,
            gradient,
            title,
            subtitle,
            ..
        } = &self.config;

        if *width == 0 || *height == 0 {
            return Err(DmgBackgroundError::InvalidParameter(format!(
                "canvas size must be non-zero, got {width}x{height}"
            )));
        }

        let mut canvas = RgbImage::from_pixel(*width, *height, Rgb([255, 255, 255]));
        gradient.fill(&mut canvas);

        let layout = title.draw(&mut canvas);
        log::info!(
            "title drawn at ({}, {}) with {} font",
            layout.x,
            layout.y,
            if layout.builtin_font { "built-in" } else { "system" }
        );

        let layout = subtitle.draw(&mut canvas);
        log::info!(
            "subtitle drawn at ({}, {}) with {} font",
            layout.x,
            layout.y,
            if layout.builtin_font { "built-in" } else { "system" }
        );

        Ok(canvas)
    }

    /// Render and write the PNG, returning the path written.
    pub fn generate(&self) -> DmgBackgroundResult<PathBuf> {
        let canvas = self.render()?;
        write_png(&canvas, &self.config.output)?;
        Ok(self.config.output.clone())
    }
}

/// Write `image` as PNG, creating missing parent directories and replacing
/// any existing file.
pub fn write_png(image: &RgbImage, path: impl AsRef<Path>) -> DmgBackgroundResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    image.save_with_format(path, ImageFormat::Png)?;
    log::info!(
        "wrote {}x{} png to {}",
        image.width(),
        image.height(),
        path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FontChain;

    fn builtin_config() -> BackgroundConfig {
        BackgroundConfig::new()
            .with_title(Caption::title().with_fonts(FontChain::builtin_only()))
            .with_subtitle(Caption::subtitle().with_fonts(FontChain::builtin_only()))
    }

    #[test]
    fn test_default_config() {
        let config = BackgroundConfig::default();
        assert_eq!(config.width, 500);
        assert_eq!(config.height, 300);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.title.text, "Autobuild");
        assert_eq!(config.subtitle.text, "Drag to Applications folder");
    }

    #[test]
    fn test_render_dimensions_and_background() {
        let canvas = BackgroundGenerator::new(builtin_config()).render().unwrap();
        assert_eq!(canvas.dimensions(), (500, 300));

        // corners are never covered by text
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([240, 250, 255]));
        assert_eq!(*canvas.get_pixel(499, 0), Rgb([240, 250, 255]));
        assert_eq!(*canvas.get_pixel(0, 299), Rgb([254, 255, 255]));
    }

    #[test]
    fn test_render_draws_both_captions() {
        let config = builtin_config();
        let canvas = BackgroundGenerator::new(config.clone()).render().unwrap();

        for color in [
            config.title.color,
            config.title.shadow_color,
            config.subtitle.color,
            config.subtitle.shadow_color,
        ] {
            assert!(canvas.pixels().any(|p| *p == color), "missing {color:?}");
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let generator = BackgroundGenerator::new(builtin_config());
        assert_eq!(generator.render().unwrap(), generator.render().unwrap());
    }

    #[test]
    fn test_zero_size_rejected() {
        let generator = BackgroundGenerator::new(builtin_config().with_width(0));
        assert!(matches!(
            generator.render(),
            Err(DmgBackgroundError::InvalidParameter(_))
        ));
    }
}
