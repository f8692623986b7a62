use graytint_core::models::{Image, ImageIOError, ImageReader, Pixel};

pub struct PNGReader {
}

impl PNGReader {

    pub fn new() -> Self {
        PNGReader {}
    }
}

impl ImageReader for PNGReader {

    fn read(&self, data: &Vec<u8>) -> Result<Image, ImageIOError> {
        let decoded = image::load_from_memory_with_format(data, image::ImageFormat::Png)
            .map_err(|err| ImageIOError::FailedToRead {
                description: format!("failed to decode png: {}", err),
            })?
            .to_rgba8();

        let mut result = Image::new(decoded.width() as usize, decoded.height() as usize);
        for (x, y, pixel) in decoded.enumerate_pixels() {
            result.set_pixel(x as usize, y as usize, Pixel::from_rgba(pixel[0], pixel[1], pixel[2], pixel[3]));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_png_produced_by_codec() {
        let mut encoded = image::RgbaImage::new(2, 2);
        encoded.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        encoded.put_pixel(1, 0, image::Rgba([0, 255, 0, 255]));
        encoded.put_pixel(0, 1, image::Rgba([0, 0, 255, 255]));
        encoded.put_pixel(1, 1, image::Rgba([255, 255, 255, 128]));

        let mut data = std::io::Cursor::new(Vec::new());
        encoded.write_to(&mut data, image::ImageFormat::Png)
            .expect("failed to encode test png");

        let result = PNGReader::new().read(&data.into_inner())
            .expect("failed to read test png");

        assert_eq!(result.width, 2);
        assert_eq!(result.height, 2);
        assert_eq!(result.get_pixel(0, 0), Pixel::from_rgb(255, 0, 0));
        assert_eq!(result.get_pixel(1, 0), Pixel::from_rgb(0, 255, 0));
        assert_eq!(result.get_pixel(0, 1), Pixel::from_rgb(0, 0, 255));
        assert_eq!(result.get_pixel(1, 1), Pixel::from_rgba(255, 255, 255, 128));
    }

    #[test]
    fn read_corrupt_data_fails() {
        let data = vec![0x89, 0x50, 0x4E, 0x47, 0x00, 0x01, 0x02, 0x03];

        assert!(PNGReader::new().read(&data).is_err());
    }
}
