use super::pixel::Pixel;

#[derive(Clone)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Pixel>, // starting at top left pixel of the image, pos = y * width + x
}

impl Image {

    pub fn new(width: usize, height: usize) -> Self {
        Image {
            width,
            height,
            pixels: vec![Pixel::zero(); width * height],
        }
    }

    pub fn test_image() -> Self {
        let mut image = Self::new(4, 4);

        let white = Pixel::white();
        let blue = Pixel::from_rgb(3, 155, 229);
        let red = Pixel::from_rgb(221, 47, 47);

        image.fill(white);
        image.set_pixel(1, 1, blue);
        image.set_pixel(2, 1, blue);
        image.set_pixel(1, 2, blue);
        image.set_pixel(2, 2, red);

        image
    }

    pub fn test_image_with_alpha() -> Self {
        let mut image = Self::new(4, 4);

        image.fill(Pixel::from_rgba(255, 255, 255, 0));
        image.set_pixel(1, 1, Pixel::from_rgba(3, 155, 229, 255));
        image.set_pixel(2, 1, Pixel::from_rgba(3, 155, 229, 150));
        image.set_pixel(1, 2, Pixel::from_rgba(3, 155, 229, 100));
        image.set_pixel(2, 2, Pixel::from_rgba(3, 155, 229, 50));

        image
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) {
        self.pixels[y * self.width + x] = pixel;
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Pixel {
        self.pixels[y * self.width + x]
    }

    pub fn fill(&mut self, color: Pixel) {
        for y in 0..self.height {
            for x in 0..self.width {
                self.set_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_image_is_black() {
        let image = Image::new(3, 2);

        assert_eq!(image.width, 3);
        assert_eq!(image.height, 2);
        assert_eq!(image.pixels.len(), 6);
        assert!(image.pixels.iter().all(|pixel| *pixel == Pixel::black()));
    }

    #[test]
    fn set_and_get_pixel() {
        let mut image = Image::new(4, 4);
        image.set_pixel(2, 3, Pixel::from_rgba(1, 2, 3, 4));

        assert_eq!(image.get_pixel(2, 3), Pixel::from_rgba(1, 2, 3, 4));
        assert_eq!(image.get_pixel(3, 2), Pixel::black());
    }
}
