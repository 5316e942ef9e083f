use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgb, RgbImage};

/// Top-to-bottom tonal ramp painted one full row at a time.
#[derive(Debug, Clone, Copy, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct VerticalGradient {
    /// Scalar value of the first row
    #[derivative(Default(value = "240"))]
    pub base: u8,

    /// Amount added across the full height
    #[derivative(Default(value = "15"))]
    pub span: u32,

    /// Added to the row scalar per channel (R, G, B), saturating at 255
    #[derivative(Default(value = "(0, 10, 20)"))]
    pub channel_offsets: (u8, u8, u8),
}

impl VerticalGradient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row scalar `base + span * y / height`, truncated.
    pub fn value_at(&self, y: u32, height: u32) -> u8 {
        if height == 0 {
            return self.base;
        }

        let step = self.span as u64 * y as u64 / height as u64;
        (self.base as u64 + step).min(u8::MAX as u64) as u8
    }

    pub fn color_at(&self, y: u32, height: u32) -> Rgb<u8> {
        let t = self.value_at(y, height);
        let (r, g, b) = self.channel_offsets;

        Rgb([t.saturating_add(r), t.saturating_add(g), t.saturating_add(b)])
    }

    pub fn fill(&self, image: &mut RgbImage) {
        let height = image.height();

        for (y, row) in image.enumerate_rows_mut() {
            let color = self.color_at(y, height);
            for (_, _, pixel) in row {
                *pixel = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range_and_monotonicity() {
        let gradient = VerticalGradient::new();
        let height = 300;

        let mut last = 0;
        for y in 0..height {
            let t = gradient.value_at(y, height);
            assert!((240..=255).contains(&t), "row {y} out of range: {t}");
            assert!(t >= last, "row {y} darker than the row above");
            last = t;
        }

        assert_eq!(gradient.value_at(0, height), 240);
        assert_eq!(gradient.value_at(20, height), 241);
        assert_eq!(gradient.value_at(299, height), 254);
    }

    #[test]
    fn test_color_saturates() {
        let gradient = VerticalGradient::new();

        assert_eq!(gradient.color_at(0, 300), Rgb([240, 250, 255]));
        assert_eq!(gradient.color_at(299, 300), Rgb([254, 255, 255]));
    }

    #[test]
    fn test_fill_paints_whole_rows() {
        let gradient = VerticalGradient::new()
            .with_base(10)
            .with_span(100)
            .with_channel_offsets((0, 1, 2));
        let mut image = RgbImage::new(7, 10);
        gradient.fill(&mut image);

        for y in 0..10 {
            let expected = Rgb([10 + 10 * y as u8, 11 + 10 * y as u8, 12 + 10 * y as u8]);
            for x in 0..7 {
                assert_eq!(*image.get_pixel(x, y), expected);
            }
        }
    }

    #[test]
    fn test_zero_height() {
        let gradient = VerticalGradient::new();
        assert_eq!(gradient.value_at(0, 0), 240);
    }
}
