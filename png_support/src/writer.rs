use std::io::Cursor;

use graytint_core::models::{Image, ImageIOError, ImageWriter};

pub struct PNGWriter {
}

impl PNGWriter {

    pub fn new() -> Self {
        PNGWriter {}
    }
}

impl ImageWriter for PNGWriter {

    fn write(&self, image: &Image) -> Result<Vec<u8>, ImageIOError> {
        let mut encoded = image::RgbaImage::new(image.width as u32, image.height as u32);
        for (x, y, pixel) in encoded.enumerate_pixels_mut() {
            let source = image.get_pixel(x as usize, y as usize);
            *pixel = image::Rgba([source.red, source.green, source.blue, source.alpha]);
        }

        let mut data = Cursor::new(Vec::new());
        encoded.write_to(&mut data, image::ImageFormat::Png)
            .map_err(|err| ImageIOError::FailedToWrite {
                description: format!("failed to encode png: {}", err),
            })?;

        Ok(data.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use graytint_core::models::Pixel;

    use super::*;

    #[test]
    fn written_png_decodes_back() {
        let source = Image::test_image_with_alpha();

        let data = PNGWriter::new().write(&source)
            .expect("failed to write test image");

        let decoded = image::load_from_memory_with_format(&data, image::ImageFormat::Png)
            .expect("failed to decode written png")
            .to_rgba8();

        assert_eq!(decoded.width(), 4);
        assert_eq!(decoded.height(), 4);
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 0]);
        assert_eq!(decoded.get_pixel(1, 1).0, [3, 155, 229, 255]);
        assert_eq!(decoded.get_pixel(2, 2).0, [3, 155, 229, 50]);
    }

    #[test]
    fn writes_single_pixel_image() {
        let mut source = Image::new(1, 1);
        source.set_pixel(0, 0, Pixel::from_rgb(12, 34, 56));

        let data = PNGWriter::new().write(&source)
            .expect("failed to write single pixel image");

        // PNG magic
        assert_eq!(&data[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
