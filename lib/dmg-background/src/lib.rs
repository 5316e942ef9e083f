pub mod caption;
pub mod font;
pub mod generator;
pub mod gradient;

pub use caption::{Caption, CaptionLayout, Placement, centered_x};
pub use font::{FontChain, ResolvedFont, load_outline};
pub use generator::{BackgroundConfig, BackgroundGenerator, DEFAULT_OUTPUT_PATH, write_png};
pub use gradient::VerticalGradient;
pub use image::{Rgb, RgbImage};

pub type DmgBackgroundResult<T> = Result<T, DmgBackgroundError>;

#[derive(thiserror::Error, Debug)]
pub enum DmgBackgroundError {
    #[error("Invalid font: {0}")]
    InvalidFont(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
