use graytint_core::models::{Image, ImageIOError, ImageReader, Pixel};

pub struct JPEGReader {
}

impl JPEGReader {

    pub fn new() -> Self {
        JPEGReader {}
    }
}

impl ImageReader for JPEGReader {

    fn read(&self, data: &Vec<u8>) -> Result<Image, ImageIOError> {
        // jpeg carries no alpha, to_rgba8 fills the channel with 255
        let decoded = image::load_from_memory_with_format(data, image::ImageFormat::Jpeg)
            .map_err(|err| ImageIOError::FailedToRead {
                description: format!("failed to decode jpeg: {}", err),
            })?
            .to_rgba8();

        let mut result = Image::new(decoded.width() as usize, decoded.height() as usize);
        for (x, y, pixel) in decoded.enumerate_pixels() {
            result.set_pixel(x as usize, y as usize, Pixel::from_rgba(pixel[0], pixel[1], pixel[2], pixel[3]));
        }

        Ok(result)
    }
}
