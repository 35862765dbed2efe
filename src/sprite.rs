//! Sprite decoding for the image panel

use image::{GenericImageView, RgbaImage};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Largest edge kept after decoding.
pub const SPRITE_MAX_EDGE: u32 = 96;

/// Alpha at or below this counts as background.
const ALPHA_CUTOFF: u8 = 16;

/// Decoded RGBA thumbnail, row-major
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpriteData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl SpriteData {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        let px = self.rgba.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Nearest-neighbour sample when scaling the sprite to `out_w` x `out_h`.
    /// Background pixels come back as `None`.
    pub fn sample(&self, x: u32, y: u32, out_w: u32, out_h: u32) -> Option<[u8; 3]> {
        if out_w == 0 || out_h == 0 {
            return None;
        }
        let src_x = (x * self.width) / out_w;
        let src_y = (y * self.height) / out_h;
        let [r, g, b, a] = self.pixel(src_x, src_y)?;
        if a <= ALPHA_CUTOFF {
            None
        } else {
            Some([r, g, b])
        }
    }

    /// Size in pixels that fits `cols` x `rows` half-block cells while
    /// keeping the aspect ratio. Each cell holds two stacked pixels.
    pub fn fit(&self, cols: u16, rows: u16) -> (u32, u32) {
        let max_w = u32::from(cols);
        let max_h = u32::from(rows) * 2;
        if self.width == 0 || self.height == 0 || max_w == 0 || max_h == 0 {
            return (0, 0);
        }
        if max_w * self.height <= max_h * self.width {
            let h = (max_w * self.height / self.width).max(1);
            (max_w, h)
        } else {
            let w = (max_h * self.width / self.height).max(1);
            (w, max_h)
        }
    }
}

pub fn decode_sprite(bytes: &[u8]) -> Result<SpriteData, String> {
    let image = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let (width, height) = image.dimensions();
    let image = if width > SPRITE_MAX_EDGE || height > SPRITE_MAX_EDGE {
        image.thumbnail(SPRITE_MAX_EDGE, SPRITE_MAX_EDGE)
    } else {
        image
    };
    let rgba = trim_background(image.to_rgba8());
    let (width, height) = rgba.dimensions();
    Ok(SpriteData {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Crop fully transparent margins; PokeAPI sprites carry wide padding.
fn trim_background(image: RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    let mut min_x = width;
    let mut min_y = height;
    let mut max_x = 0;
    let mut max_y = 0;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] > ALPHA_CUTOFF {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }
    if min_x > max_x || min_y > max_y {
        return image;
    }
    image::imageops::crop_imm(&image, min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
        .to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(image: &RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn decode_trims_transparent_margin() {
        let mut image = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]));
        for x in 2..5 {
            for y in 3..5 {
                image.put_pixel(x, y, Rgba([255, 200, 0, 255]));
            }
        }
        let sprite = decode_sprite(&png_bytes(&image)).unwrap();
        assert_eq!((sprite.width, sprite.height), (3, 2));
        assert_eq!(sprite.pixel(0, 0), Some([255, 200, 0, 255]));
        assert_eq!(sprite.pixel(3, 0), None);
    }

    #[test]
    fn decode_downscales_large_images() {
        let image = RgbaImage::from_pixel(192, 96, Rgba([10, 20, 30, 255]));
        let sprite = decode_sprite(&png_bytes(&image)).unwrap();
        assert_eq!((sprite.width, sprite.height), (96, 48));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_sprite(b"not an image").is_err());
    }

    #[test]
    fn fit_keeps_aspect_ratio() {
        let sprite = SpriteData {
            width: 40,
            height: 20,
            rgba: vec![0; 40 * 20 * 4],
        };
        // 20 cols x 20 rows = 20 x 40 pixels; width bound
        assert_eq!(sprite.fit(20, 20), (20, 10));
        // 80 cols x 5 rows = 80 x 10 pixels; height bound
        assert_eq!(sprite.fit(80, 5), (20, 10));
        assert_eq!(sprite.fit(0, 5), (0, 0));
    }

    #[test]
    fn sample_treats_transparency_as_background() {
        let sprite = SpriteData {
            width: 2,
            height: 1,
            rgba: vec![1, 2, 3, 255, 9, 9, 9, 0],
        };
        assert_eq!(sprite.sample(0, 0, 4, 2), Some([1, 2, 3]));
        assert_eq!(sprite.sample(3, 1, 4, 2), None);
    }
}
