//! Bilinear sampling and source-over blending on RGBA buffers
//!
//! Colours are handled as premultiplied floating point in `[0, 1]` while
//! interpolating, so transparent neighbours do not darken edges.

use image::{Rgba, RgbaImage};

/// Premultiplied RGBA colour with channels in `[0, 1]`
pub type Premultiplied = [f64; 4];

fn premultiply(pixel: Rgba<u8>) -> Premultiplied {
    let [r, g, b, a] = pixel.0.map(|channel| f64::from(channel) / 255.0);
    [r * a, g * a, b * a, a]
}

fn texel(image: &RgbaImage, x: i64, y: i64) -> Premultiplied {
    let max_x = i64::from(image.width()) - 1;
    let max_y = i64::from(image.height()) - 1;
    let clamped_x = x.clamp(0, max_x.max(0)) as u32;
    let clamped_y = y.clamp(0, max_y.max(0)) as u32;
    image
        .get_pixel_checked(clamped_x, clamped_y)
        .map_or([0.0; 4], |pixel| premultiply(*pixel))
}

/// Sample `image` at continuous pixel coordinates
///
/// Pixel centres sit at half-integer coordinates; samples beyond the edge
/// repeat the border pixels.
pub fn sample_bilinear(image: &RgbaImage, u: f64, v: f64) -> Premultiplied {
    let x = u - 0.5;
    let y = v - 0.5;
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (ix, iy) = (x0 as i64, y0 as i64);

    let top_left = texel(image, ix, iy);
    let top_right = texel(image, ix + 1, iy);
    let bottom_left = texel(image, ix, iy + 1);
    let bottom_right = texel(image, ix + 1, iy + 1);

    let mut result = [0.0; 4];
    for (channel, value) in result.iter_mut().enumerate() {
        let pick = |texel: &Premultiplied| texel.get(channel).copied().unwrap_or(0.0);
        let top = (pick(&top_right) - pick(&top_left)).mul_add(fx, pick(&top_left));
        let bottom = (pick(&bottom_right) - pick(&bottom_left)).mul_add(fx, pick(&bottom_left));
        *value = (bottom - top).mul_add(fy, top);
    }
    result
}

/// Composite `source` scaled by `coverage` over `destination`
pub fn blend_over(destination: &mut Rgba<u8>, source: Premultiplied, coverage: f64) {
    let coverage = coverage.clamp(0.0, 1.0);
    let [src_r, src_g, src_b, src_a] = source.map(|channel| channel * coverage);
    let [dst_r, dst_g, dst_b, dst_a] = premultiply(*destination);

    let keep = 1.0 - src_a;
    let out_a = dst_a.mul_add(keep, src_a);
    if out_a <= 0.0 {
        *destination = Rgba([0, 0, 0, 0]);
        return;
    }

    let to_byte = |premultiplied: f64| ((premultiplied / out_a) * 255.0).round().clamp(0.0, 255.0) as u8;
    *destination = Rgba([
        to_byte(dst_r.mul_add(keep, src_r)),
        to_byte(dst_g.mul_add(keep, src_g)),
        to_byte(dst_b.mul_add(keep, src_b)),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ]);
}
