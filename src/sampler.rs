//! Point sampling of RGB triples from wheel bitmaps.
//!
//! A failed read is an expected outcome here (the pointer left the image,
//! the bitmap isn't loaded yet), so [`get_target_color`] swaps in a fallback
//! instead of returning an error.

use image::{DynamicImage, GenericImageView, RgbImage, RgbaImage};

use crate::color::Rgb;
use crate::error::SampleError;

/// A 2D pixel source that can be point-sampled by integer coordinate.
///
/// Implementations must not panic on out-of-range coordinates; they return
/// [`SampleError::OutOfBounds`] instead.
pub trait PixelSource {
    /// Read the first three channels of the pixel at `(x, y)`.
    fn sample(&self, x: i32, y: i32) -> Result<Rgb, SampleError>;
}

/// Convert signed coordinates to in-bounds unsigned ones.
fn checked_coords(x: i32, y: i32, width: u32, height: u32) -> Result<(u32, u32), SampleError> {
    match (u32::try_from(x), u32::try_from(y)) {
        (Ok(ux), Ok(uy)) if ux < width && uy < height => Ok((ux, uy)),
        _ => Err(SampleError::OutOfBounds {
            x,
            y,
            width,
            height,
        }),
    }
}

impl PixelSource for RgbImage {
    fn sample(&self, x: i32, y: i32) -> Result<Rgb, SampleError> {
        let (ux, uy) = checked_coords(x, y, self.width(), self.height())?;
        let [r, g, b] = self.get_pixel(ux, uy).0;
        Ok(Rgb::new(r, g, b))
    }
}

impl PixelSource for RgbaImage {
    fn sample(&self, x: i32, y: i32) -> Result<Rgb, SampleError> {
        let (ux, uy) = checked_coords(x, y, self.width(), self.height())?;
        let [r, g, b, _] = self.get_pixel(ux, uy).0;
        Ok(Rgb::new(r, g, b))
    }
}

impl PixelSource for DynamicImage {
    fn sample(&self, x: i32, y: i32) -> Result<Rgb, SampleError> {
        let (width, height) = self.dimensions();
        let (ux, uy) = checked_coords(x, y, width, height)?;
        let [r, g, b, _] = self.get_pixel(ux, uy).0;
        Ok(Rgb::new(r, g, b))
    }
}

/// An absent image handle is a sampling failure, not a panic.
impl<T: PixelSource> PixelSource for Option<T> {
    fn sample(&self, x: i32, y: i32) -> Result<Rgb, SampleError> {
        match self {
            Some(source) => source.sample(x, y),
            None => Err(SampleError::NoImage),
        }
    }
}

/// Return the RGB color of `image` at the given coordinates, or `fallback`
/// unchanged if the pixel can't be read.
pub fn get_target_color<P>(image: &P, target_x: i32, target_y: i32, fallback: Rgb) -> Rgb
where
    P: PixelSource + ?Sized,
{
    match image.sample(target_x, target_y) {
        Ok(rgb) => rgb,
        Err(err) => {
            log::debug!("sampling ({target_x}, {target_y}) failed, using {fallback}: {err}");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenImage;

    impl PixelSource for BrokenImage {
        fn sample(&self, _x: i32, _y: i32) -> Result<Rgb, SampleError> {
            Err(SampleError::NoImage)
        }
    }

    fn checker() -> RgbImage {
        RgbImage::from_fn(4, 3, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgb([255, 0, 0])
            } else {
                image::Rgb([0, 0, 255])
            }
        })
    }

    #[test]
    fn reads_in_bounds_pixels() {
        let img = checker();
        assert_eq!(img.sample(0, 0), Ok(Rgb::new(255, 0, 0)));
        assert_eq!(img.sample(1, 0), Ok(Rgb::new(0, 0, 255)));
        assert_eq!(img.sample(3, 2), Ok(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn reports_out_of_bounds() {
        let img = checker();
        assert_eq!(
            img.sample(4, 0),
            Err(SampleError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            })
        );
        assert!(img.sample(-1, 1).is_err());
        assert!(img.sample(0, 3).is_err());
    }

    #[test]
    fn rgba_and_dynamic_drop_alpha() {
        let rgba = RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 0]));
        assert_eq!(rgba.sample(1, 1), Ok(Rgb::new(10, 20, 30)));

        let dynamic = DynamicImage::ImageRgba8(rgba);
        assert_eq!(dynamic.sample(0, 1), Ok(Rgb::new(10, 20, 30)));
        assert!(dynamic.sample(2, 0).is_err());
    }

    #[test]
    fn falls_back_on_failure() {
        let fallback = Rgb::new(1, 2, 3);
        assert_eq!(get_target_color(&BrokenImage, 0, 0, fallback), fallback);
        assert_eq!(get_target_color(&checker(), 50, 50, fallback), fallback);
        assert_eq!(get_target_color(&checker(), -5, 0, fallback), fallback);

        let missing: Option<RgbImage> = None;
        assert_eq!(get_target_color(&missing, 0, 0, fallback), fallback);
    }

    #[test]
    fn passes_through_successful_reads() {
        let img = Some(checker());
        assert_eq!(
            get_target_color(&img, 0, 0, Rgb::BLACK),
            Rgb::new(255, 0, 0)
        );
    }

    #[test]
    fn works_through_trait_objects() {
        let source: &dyn PixelSource = &BrokenImage;
        assert_eq!(get_target_color(source, 0, 0, Rgb::WHITE), Rgb::WHITE);
    }
}
