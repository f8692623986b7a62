use graytint_core::models::ImageReader;
use jpeg_support::reader::JPEGReader;
use png_support::reader::PNGReader;
use webp_support::reader::WebpReader;

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImageFormat {
    PNG,
    JPEG,
    WEBP,
}

impl ImageFormat {

    /// Detects the source format by content, not by file extension.
    pub fn detect(data: &[u8]) -> Option<ImageFormat> {
        if data.starts_with(&PNG_MAGIC) {
            Some(ImageFormat::PNG)
        } else if data.starts_with(&JPEG_MAGIC) {
            Some(ImageFormat::JPEG)
        } else if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            Some(ImageFormat::WEBP)
        } else {
            None
        }
    }

    pub fn format_name(&self) -> &'static str {
        match self {
            ImageFormat::PNG => "png",
            ImageFormat::JPEG => "jpeg",
            ImageFormat::WEBP => "webp",
        }
    }

    pub fn reader(&self) -> Box<dyn ImageReader> {
        match self {
            ImageFormat::PNG => Box::new(PNGReader::new()),
            ImageFormat::JPEG => Box::new(JPEGReader::new()),
            ImageFormat::WEBP => Box::new(WebpReader::new()),
        }
    }
}
