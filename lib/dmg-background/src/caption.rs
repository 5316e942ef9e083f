use crate::font::FontChain;
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgb, RgbImage};

/// Vertical placement relative to the canvas midline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Bottom edge of the text sits `gap` pixels above the midline
    AboveMidline { gap: i32 },
    /// Top edge of the text sits `gap` pixels below the midline
    BelowMidline { gap: i32 },
}

impl Placement {
    pub fn top(&self, canvas_height: u32, text_height: u32) -> i32 {
        let midline = (canvas_height / 2) as i32;

        match *self {
            Placement::AboveMidline { gap } => midline - text_height as i32 - gap,
            Placement::BelowMidline { gap } => midline + gap,
        }
    }
}

/// Left edge that centers `text_width` on `canvas_width`, rounded toward zero.
pub fn centered_x(canvas_width: u32, text_width: u32) -> i32 {
    (canvas_width as i32 - text_width as i32) / 2
}

/// Where a caption ended up on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionLayout {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub builtin_font: bool,
}

/// A line of horizontally centered text with a drop shadow.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct Caption {
    #[derivative(Default(value = "String::new()"))]
    pub text: String,

    /// Em size in pixels
    #[derivative(Default(value = "16.0"))]
    pub size: f32,

    #[derivative(Default(value = "Rgb([0, 0, 0])"))]
    pub color: Rgb<u8>,

    #[derivative(Default(value = "Rgb([128, 128, 128])"))]
    pub shadow_color: Rgb<u8>,

    /// Shadow displacement from the foreground, in pixels (dx, dy)
    #[derivative(Default(value = "(1, 1)"))]
    pub shadow_offset: (i32, i32),

    #[derivative(Default(value = "Placement::BelowMidline { gap: 0 }"))]
    pub placement: Placement,

    #[derivative(Default(value = "FontChain::builtin_only()"))]
    pub fonts: FontChain,
}

impl Caption {
    pub fn new(text: impl Into<String>) -> Self {
        Self::default().with_text(text.into())
    }

    pub fn title() -> Self {
        Self::new("Autobuild")
            .with_size(24.0)
            .with_color(Rgb([50, 50, 50]))
            .with_shadow_color(Rgb([100, 100, 100]))
            .with_shadow_offset((2, 2))
            .with_placement(Placement::AboveMidline { gap: 10 })
            .with_fonts(FontChain::title())
    }

    pub fn subtitle() -> Self {
        Self::new("Drag to Applications folder")
            .with_size(16.0)
            .with_color(Rgb([80, 80, 80]))
            .with_shadow_color(Rgb([120, 120, 120]))
            .with_shadow_offset((1, 1))
            .with_placement(Placement::BelowMidline { gap: 10 })
            .with_fonts(FontChain::subtitle())
    }

    /// Resolve the font, then draw the shadow followed by the foreground so
    /// the foreground is never covered.
    pub fn draw(&self, canvas: &mut RgbImage) -> CaptionLayout {
        let font = self.fonts.resolve(self.size);
        let (width, height) = font.measure(&self.text);

        let x = centered_x(canvas.width(), width);
        let y = self.placement.top(canvas.height(), height);

        log::debug!(
            "caption \"{}\": {width}x{height} at ({x}, {y}), font {:?}",
            self.text,
            font.source()
        );

        if !self.text.is_empty() {
            let (dx, dy) = self.shadow_offset;
            font.draw(canvas, self.shadow_color, x + dx, y + dy, &self.text);
            font.draw(canvas, self.color, x, y, &self.text);
        }

        CaptionLayout {
            x,
            y,
            width,
            height,
            builtin_font: font.is_builtin(),
        }
    }
}
