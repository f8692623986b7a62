pub mod color;
pub mod image;
pub mod io;
pub mod pixel;

pub use self::color::{parse_color, ColorParseError};
pub use self::image::Image;
pub use self::io::{ImageIOError, ImageReader, ImageWriter};
pub use self::pixel::Pixel;
