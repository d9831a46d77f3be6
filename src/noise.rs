//! 2D gradient noise.
//!
//! Uses the same lattice hash as the fragment shader so CPU and GPU agree on
//! the shape of the lines (up to float precision).

use std::f32::consts::SQRT_2;

fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Perlin-style gradient noise, roughly in -1.0..=1.0 and exactly zero on
/// integer lattice points.
pub fn perlin2d(x: f32, y: f32) -> f32 {
    let (ix, iy) = (x.floor(), y.floor());
    let (fx, fy) = (x - ix, y - iy);

    // Lattice corners wrapped into a 71-cell domain and offset before hashing.
    let mut corners = [ix, iy, ix + 1.0, iy + 1.0];
    for (n, c) in corners.iter_mut().enumerate() {
        *c -= (*c * (1.0 / 71.0)).floor() * 71.0;
        *c += if n % 2 == 0 { 26.0 } else { 161.0 };
        *c *= *c;
    }
    let [x0, y0, x1, y1] = corners;
    // Order: (0,0) (1,0) (0,1) (1,1)
    let hashes = [x0 * y0, x1 * y0, x0 * y1, x1 * y1];
    let offsets = [(fx, fy), (fx - 1.0, fy), (fx, fy - 1.0), (fx - 1.0, fy - 1.0)];

    let mut grads = [0.0f32; 4];
    for (g, (h, (dx, dy))) in grads.iter_mut().zip(hashes.iter().zip(offsets)) {
        let gx = fract(h * (1.0 / 951.135_664)) - 0.49999;
        let gy = fract(h * (1.0 / 642.949_883)) - 0.49999;
        *g = (gx * dx + gy * dy) / (gx * gx + gy * gy).sqrt() * SQRT_2;
    }

    let (bx, by) = (fade(fx), fade(fy));
    grads[0] * (1.0 - bx) * (1.0 - by)
        + grads[1] * bx * (1.0 - by)
        + grads[2] * (1.0 - bx) * by
        + grads[3] * bx * by
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_hits_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert!((fade(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn deterministic() {
        assert_eq!(perlin2d(3.7, -1.25).to_bits(), perlin2d(3.7, -1.25).to_bits());
    }
}
