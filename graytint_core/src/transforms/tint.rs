use crate::models::{Image, Pixel};

/// Converts every pixel to its gray level (plain channel average, not
/// luma-weighted) and scales it by the tint, channel by channel. Output
/// alpha is the source alpha scaled by the tint alpha. All float to int
/// conversions truncate the fractional part.
pub fn tint_image(source: &Image, tint: &Pixel) -> Image {
    debug!("applying tint {:?} to {}x{} image", tint, source.width, source.height);

    let tint_red = normalized(tint.red);
    let tint_green = normalized(tint.green);
    let tint_blue = normalized(tint.blue);
    let tint_alpha = normalized(tint.alpha);

    let mut result = Image::new(source.width, source.height);

    for y in 0..source.height {
        for x in 0..source.width {
            let pixel = source.get_pixel(x, y);
            let gray = (pixel.red as u16 + pixel.green as u16 + pixel.blue as u16) as f32 / 3.0;

            // source alpha is deliberately left unnormalized here, matching
            // the original arithmetic of this filter
            result.set_pixel(x, y, Pixel::from_rgba(
                (gray * tint_red) as u8,
                (gray * tint_green) as u8,
                (gray * tint_blue) as u8,
                (pixel.alpha as f32 * tint_alpha) as u8,
            ));
        }
    }

    result
}

fn normalized(channel: u8) -> f32 {
    channel as f32 / 255.0
}
