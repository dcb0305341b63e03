use crate::*;
use std::path::Path;

pub const MAX_PIXELS: usize = 1 << 28;

pub struct Image {
    w: u32,
    h: u32,
    buf: Vec<RGB>,
}

impl Image {
    pub fn new(w: u32, h: u32) -> Result<Self> {
        let len = (w as usize)
            .checked_mul(h as usize)
            .filter(|&len| len <= MAX_PIXELS)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "image size {}x{} exceeds {} pixels",
                    w, h, MAX_PIXELS
                ))
            })?;
        Ok(Image {
            w,
            h,
            buf: vec![RGB::black(); len],
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.w as usize + x as usize
    }

    pub fn at(&self, x: u32, y: u32) -> &RGB {
        &self.buf[self.index(x, y)]
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut RGB {
        let i = self.index(x, y);
        &mut self.buf[i]
    }

    pub fn set(&mut self, x: u32, y: u32, color: RGB) {
        if x < self.w && y < self.h {
            *self.at_mut(x, y) = color;
        }
    }

    pub fn w(&self) -> u32 {
        self.w
    }
    pub fn h(&self) -> u32 {
        self.h
    }

    pub fn to_rgb8(&self) -> ::image::RgbImage {
        ::image::RgbImage::from_fn(self.w, self.h, |x, y| ::image::Rgb(self.at(x, y).to_8bit()))
    }

    /// 8 bits per channel; the format follows the extension of `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_rgb8().save(path)?;
        log::info!("image saved as {}", path.display());
        Ok(())
    }
}

#[test]
fn test_set_and_quantize() {
    let mut image = Image::new(3, 2).unwrap();
    image.set(2, 1, RGB::new(1.0, 0.5, 0.0));
    image.set(3, 0, RGB::all(1.0));
    image.set(0, 2, RGB::all(1.0));
    assert_eq!(*image.at(2, 1), RGB::new(1.0, 0.5, 0.0));
    assert_eq!(*image.at(0, 0), RGB::black());

    let rgb8 = image.to_rgb8();
    assert_eq!(rgb8.dimensions(), (3, 2));
    assert_eq!(rgb8.get_pixel(2, 1).0, [255, 127, 0]);
    assert_eq!(rgb8.get_pixel(1, 1).0, [0, 0, 0]);
}

#[test]
fn test_save_ppm() {
    let mut image = Image::new(4, 4).unwrap();
    image.set(1, 1, RGB::all(1.0));
    let path = std::env::temp_dir().join(format!("whitrace-test-{}.ppm", std::process::id()));
    image.save(&path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"P6"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_oversized_image_is_rejected() {
    assert!(matches!(Image::new(65536, 65537), Err(Error::InvalidArgument(_))));
    assert!(matches!(Image::new(u32::MAX, u32::MAX), Err(Error::InvalidArgument(_))));

    let mut image = Image::new(70000, 2).unwrap();
    image.set(69999, 1, RGB::all(1.0));
    assert_eq!(*image.at(69999, 1), RGB::all(1.0));
    assert_eq!(*image.at(69999, 0), RGB::black());
}
