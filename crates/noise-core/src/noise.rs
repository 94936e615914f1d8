use glam::Vec2;

use crate::FrameParams;

// ---------------------------------------------------------------------------
// Sine hash — CPU mirror of the `hash` function in shaders/noise.wgsl
// ---------------------------------------------------------------------------

// Classic sine-hash family: two projection vectors, a large sine scale, and
// the fold direction that collapses the pair back to a scalar.
const DOT_A: Vec2 = Vec2::new(127.1, 311.7);
const DOT_B: Vec2 = Vec2::new(269.5, 183.3);
const SINE_SCALE: f32 = 43758.5453;
const FOLD: Vec2 = Vec2::new(1.0, 7.0);

/// GPU `fract` semantics: `x - floor(x)`, always in \[0, 1).
///
/// Deliberately not `f32::fract`, which keeps the sign of its argument and
/// would diverge from the shader for negative inputs.
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Map a 2D coordinate and a seed to a pseudo-random scalar in \[0, 1).
///
/// Cheap and visually plausible, nothing more: the sines of two fixed
/// projections of `p` are blown up by a large constant, folded to a scalar,
/// and wrapped into the unit interval. Deterministic for identical inputs.
pub fn hash(p: Vec2, seed: f32) -> f32 {
    let q = Vec2::new(p.dot(DOT_A), p.dot(DOT_B)) + Vec2::splat(seed);
    let s = Vec2::new(q.x.sin(), q.y.sin()) * SINE_SCALE;
    fract(s.dot(FOLD).sin() * 0.5 + 0.5)
}

/// The fragment rule: interpolated UV → pixel coordinate → greyscale value.
/// Mirrors `fs_main` in the WGSL module (minus the broadcast to RGBA).
pub fn shade(params: &FrameParams, uv: Vec2) -> f32 {
    hash(params.pixel_coord(uv), params.seed())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    // --- fract -----------------------------------------------------------------

    #[test]
    fn fract_of_positive() {
        assert!((fract(1.25) - 0.25).abs() < EPS);
    }

    #[test]
    fn fract_of_negative_wraps_up() {
        // GPU semantics: fract(-0.25) = -0.25 - (-1.0) = 0.75
        assert!((fract(-0.25) - 0.75).abs() < EPS);
    }

    #[test]
    fn fract_stays_in_unit_interval() {
        for x in [-3.7f32, -1.0, -0.1, 0.0, 0.5, 1.0, 2.9, 1234.567] {
            let f = fract(x);
            assert!((0.0..1.0).contains(&f), "fract({x}) = {f}");
        }
    }

    // --- hash ------------------------------------------------------------------

    #[test]
    fn hash_is_deterministic() {
        let p = Vec2::new(123.0, 456.0);
        assert_eq!(hash(p, 7.0), hash(p, 7.0));
    }

    #[test]
    fn hash_changes_with_seed() {
        // Fixed pixel, consecutive frames: the noise pattern must move.
        let p = Vec2::new(10.0, 10.0);
        assert_ne!(hash(p, 0.0), hash(p, 1.0));
    }

    #[test]
    fn hash_seed_sweep_is_diverse() {
        let p = Vec2::new(10.0, 10.0);
        let values: std::collections::HashSet<_> =
            (0..8).map(|f| hash(p, f as f32).to_bits()).collect();
        assert!(values.len() >= 7, "only {} distinct values", values.len());
    }

    #[test]
    fn hash_stays_near_unit_interval() {
        // Structurally fract(..) ∈ [0, 1); allow a whisker for rounding.
        for x in 0..32 {
            for y in 0..32 {
                let v = hash(Vec2::new(x as f32, y as f32), 0.0);
                assert!(v >= -1e-5 && v <= 1.0 + 1e-5, "hash({x},{y}) = {v}");
                assert!(v.is_finite());
            }
        }
    }

    #[test]
    fn hash_grid_values_are_diverse() {
        // 32×32 integer grid at seed 0: essentially every pixel should get
        // its own value, and the average should sit near mid-grey.
        let mut sum = 0.0f64;
        let mut seen = std::collections::HashSet::new();
        for x in 0..32 {
            for y in 0..32 {
                let v = hash(Vec2::new(x as f32, y as f32), 0.0);
                sum += v as f64;
                seen.insert(v.to_bits());
            }
        }
        assert!(seen.len() > 1000, "only {} distinct values", seen.len());
        let mean = sum / 1024.0;
        assert!((0.35..0.65).contains(&mean), "grid mean {mean}");
    }

    #[test]
    fn hash_is_total_over_large_coordinates() {
        // Pixel coordinates for a 4K target still hash to something finite.
        let v = hash(Vec2::new(3840.0, 2160.0), 123456.0);
        assert!(v.is_finite());
    }

    // --- shade -----------------------------------------------------------------

    #[test]
    fn shade_matches_hash_of_pixel_coord() {
        let params = FrameParams::new(800.0, 600.0).unwrap();
        let uv = Vec2::splat(0.5);
        assert_eq!(
            shade(&params, uv),
            hash(Vec2::new(400.0, 300.0), params.seed())
        );
    }

    #[test]
    fn shade_single_pixel_surface_is_finite() {
        // 1×1 target, frame 0: the lone pixel still gets a usable value.
        let params = FrameParams::new(1.0, 1.0).unwrap();
        let v = shade(&params, Vec2::splat(0.5));
        assert!(v.is_finite() && !v.is_nan());
        assert!(v >= -1e-5 && v <= 1.0 + 1e-5, "got {v}");
    }

    #[test]
    fn shade_changes_between_frames() {
        let mut params = FrameParams::new(800.0, 600.0).unwrap();
        let uv = Vec2::splat(0.25);
        let first = shade(&params, uv);
        params.advance();
        assert_ne!(first, shade(&params, uv));
    }
}
