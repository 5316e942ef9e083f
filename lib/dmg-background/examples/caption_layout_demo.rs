use dmg_background::{Caption, FontChain, Rgb, RgbImage, VerticalGradient, write_png};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut canvas = RgbImage::from_pixel(500, 300, Rgb([255, 255, 255]));
    VerticalGradient::new().fill(&mut canvas);

    for caption in [Caption::title(), Caption::subtitle()] {
        let caption = caption.with_fonts(FontChain::builtin_only());
        let layout = caption.draw(&mut canvas);
        println!("{:?}: {:?}", caption.text, layout);
    }

    write_png(&canvas, "tmp/caption_layout.png")?;
    println!("Created tmp/caption_layout.png");

    Ok(())
}
