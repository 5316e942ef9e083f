//! Font resolution for captions.
//!
//! A [`FontChain`] is an ordered list of font files. Resolving it at a size
//! returns the first candidate that reads and parses, and otherwise the
//! bitmap font compiled into the crate, so resolution itself never fails.

use crate::{DmgBackgroundError, DmgBackgroundResult};
use ab_glyph::{Font, FontArc, GlyphId, PxScale, Rect, ScaleFont, point};
use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X13},
    pixelcolor::Rgb888,
    prelude::*,
    text::{Baseline, Text, renderer::TextRenderer},
};
use image::{Rgb, RgbImage};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

pub const ARIAL_PATH: &str = "/System/Library/Fonts/Arial.ttf";
pub const HELVETICA_PATH: &str = "/System/Library/Fonts/Helvetica.ttc";

#[derive(Clone)]
pub enum ResolvedFont {
    Outline {
        font: FontArc,
        scale: PxScale,
        source: PathBuf,
    },
    Builtin(&'static MonoFont<'static>),
}

impl fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedFont::Outline { scale, source, .. } => f
                .debug_struct("Outline")
                .field("scale", scale)
                .field("source", source)
                .finish(),
            ResolvedFont::Builtin(font) => f
                .debug_tuple("Builtin")
                .field(&font.character_size)
                .finish(),
        }
    }
}

impl ResolvedFont {
    pub fn builtin() -> Self {
        ResolvedFont::Builtin(&FONT_6X13)
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, ResolvedFont::Builtin(_))
    }

    /// Path of the font file, `None` for the built-in font
    pub fn source(&self) -> Option<&Path> {
        match self {
            ResolvedFont::Outline { source, .. } => Some(source),
            ResolvedFont::Builtin(_) => None,
        }
    }

    /// Rendered `(width, height)` of `text` in pixels. Outline fonts report
    /// the ink box of the glyphs, the built-in font its character cells.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        match self {
            ResolvedFont::Outline { font, scale, .. } => match ink_bounds(font, *scale, text) {
                Some(bounds) => (
                    (bounds.max.x - bounds.min.x) as u32,
                    (bounds.max.y - bounds.min.y) as u32,
                ),
                None => (0, 0),
            },
            ResolvedFont::Builtin(font) => {
                let style = MonoTextStyle::new(*font, Rgb888::BLACK);
                let size = style
                    .measure_string(text, Point::zero(), Baseline::Top)
                    .bounding_box
                    .size;
                (size.width, size.height)
            }
        }
    }

    /// Draw `text` with `(x, y)` on its ascender line (outline fonts) or the
    /// top of its cells (built-in font). Pixels outside the canvas are dropped.
    pub fn draw(&self, canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, text: &str) {
        match self {
            ResolvedFont::Outline { font, scale, .. } => {
                imageproc::drawing::draw_text_mut(canvas, color, x, y, *scale, font, text);
            }
            ResolvedFont::Builtin(font) => {
                let style = MonoTextStyle::new(*font, Rgb888::new(color[0], color[1], color[2]));
                let mut target = CanvasTarget { image: canvas };
                _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
                    .draw(&mut target);
            }
        }
    }
}

/// Union of the glyph pixel bounds, laid out the same way
/// `imageproc::drawing::draw_text_mut` places them.
fn ink_bounds(font: &FontArc, scale: PxScale, text: &str) -> Option<Rect> {
    let scaled = font.as_scaled(scale);
    let mut caret = 0.0;
    let mut prev: Option<GlyphId> = None;
    let mut bounds: Option<Rect> = None;

    for c in text.chars() {
        let glyph_id = scaled.glyph_id(c);
        let glyph = glyph_id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(glyph_id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        if let Some(prev) = prev {
            caret += scaled.kern(glyph_id, prev);
        }
        prev = Some(glyph_id);

        let bb = outlined.px_bounds();
        bounds = Some(match bounds {
            Some(acc) => Rect {
                min: point(acc.min.x.min(bb.min.x), acc.min.y.min(bb.min.y)),
                max: point(acc.max.x.max(bb.max.x), acc.max.y.max(bb.max.y)),
            },
            None => bb,
        });
    }

    bounds
}

/// Load an outline font file (`.ttf`, `.otf` or the first face of a `.ttc`)
/// at an em size of `size` pixels.
pub fn load_outline(path: impl AsRef<Path>, size: f32) -> DmgBackgroundResult<ResolvedFont> {
    let path = path.as_ref();

    if !(size.is_finite() && size > 0.0) {
        return Err(DmgBackgroundError::InvalidParameter(format!(
            "font size must be positive, got {size}"
        )));
    }

    let data = fs::read(path)?;
    let font = FontArc::try_from_vec(data)
        .map_err(|e| DmgBackgroundError::InvalidFont(format!("{}: {e}", path.display())))?;

    // PxScale is the ascent-to-descent height, not the em size.
    let scale = match font.units_per_em() {
        Some(units_per_em) if units_per_em > 0.0 => {
            PxScale::from(size * font.height_unscaled() / units_per_em)
        }
        _ => PxScale::from(size),
    };

    Ok(ResolvedFont::Outline {
        font,
        scale,
        source: path.to_path_buf(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontChain {
    pub candidates: Vec<PathBuf>,
}

impl FontChain {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn title() -> Self {
        Self::new(vec![PathBuf::from(ARIAL_PATH), PathBuf::from(HELVETICA_PATH)])
    }

    pub fn subtitle() -> Self {
        Self::new(vec![PathBuf::from(ARIAL_PATH)])
    }

    pub fn builtin_only() -> Self {
        Self::default()
    }

    pub fn resolve(&self, size: f32) -> ResolvedFont {
        self.candidates
            .iter()
            .find_map(|path| match load_outline(path, size) {
                Ok(font) => {
                    log::debug!("using font {} at {size}px", path.display());
                    Some(font)
                }
                Err(e) => {
                    log::debug!("skip font {}: {e}", path.display());
                    None
                }
            })
            .unwrap_or_else(|| {
                log::debug!("no font file usable at {size}px, using built-in font");
                ResolvedFont::builtin()
            })
    }
}

struct CanvasTarget<'a> {
    image: &'a mut RgbImage,
}

impl DrawTarget for CanvasTarget<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.image.dimensions();

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
                continue;
            }

            self.image
                .put_pixel(x as u32, y as u32, Rgb([color.r(), color.g(), color.b()]));
        }

        Ok(())
    }
}

impl OriginDimensions for CanvasTarget<'_> {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}
