//! Flat-buffer vector kernel.
//!
//! Three-component vector arithmetic over a shared contiguous `[f32]`
//! buffer, addressed by particle index. Particle `i` occupies elements
//! `3*i .. 3*i+3`. Keeping all particles in one flat buffer (instead of
//! per-particle allocations) keeps the solver's inner loops cache-friendly
//! and lets the position buffer be handed to a renderer unchanged.

use glam::Vec3;

/// Sets vector `i` of `buf` to zero.
#[inline]
pub fn set_zero(buf: &mut [f32], i: usize) {
    let at = 3 * i;
    buf[at] = 0.0;
    buf[at + 1] = 0.0;
    buf[at + 2] = 0.0;
}

/// Scales vector `i` of `buf` in place.
#[inline]
pub fn scale(buf: &mut [f32], i: usize, s: f32) {
    let at = 3 * i;
    buf[at] *= s;
    buf[at + 1] *= s;
    buf[at + 2] *= s;
}

/// Copies vector `j` of `src` into vector `i` of `dst`.
#[inline]
pub fn copy(dst: &mut [f32], i: usize, src: &[f32], j: usize) {
    let di = 3 * i;
    let sj = 3 * j;
    dst[di] = src[sj];
    dst[di + 1] = src[sj + 1];
    dst[di + 2] = src[sj + 2];
}

/// Adds `s` times vector `j` of `src` to vector `i` of `dst`.
#[inline]
pub fn add_scaled(dst: &mut [f32], i: usize, src: &[f32], j: usize, s: f32) {
    let di = 3 * i;
    let sj = 3 * j;
    dst[di] += src[sj] * s;
    dst[di + 1] += src[sj + 1] * s;
    dst[di + 2] += src[sj + 2] * s;
}

/// Sets vector `i` of `dst` to `s * (a[j] - b[k])`.
#[inline]
pub fn set_diff(dst: &mut [f32], i: usize, a: &[f32], j: usize, b: &[f32], k: usize, s: f32) {
    let di = 3 * i;
    let aj = 3 * j;
    let bk = 3 * k;
    dst[di] = (a[aj] - b[bk]) * s;
    dst[di + 1] = (a[aj + 1] - b[bk + 1]) * s;
    dst[di + 2] = (a[aj + 2] - b[bk + 2]) * s;
}

/// Squared length of vector `i` of `buf`.
#[inline]
pub fn length_sq(buf: &[f32], i: usize) -> f32 {
    let at = 3 * i;
    let x = buf[at];
    let y = buf[at + 1];
    let z = buf[at + 2];
    x * x + y * y + z * z
}

/// Squared distance between vector `i` of `a` and vector `j` of `b`.
#[inline]
pub fn dist_sq(a: &[f32], i: usize, b: &[f32], j: usize) -> f32 {
    let ai = 3 * i;
    let bj = 3 * j;
    let x = a[ai] - b[bj];
    let y = a[ai + 1] - b[bj + 1];
    let z = a[ai + 2] - b[bj + 2];
    x * x + y * y + z * z
}

/// Sets vector `i` of `dst` to the cross product of vectors `j` of `a`
/// and `k` of `b`.
#[inline]
pub fn set_cross(dst: &mut [f32], i: usize, a: &[f32], j: usize, b: &[f32], k: usize) {
    let di = 3 * i;
    let aj = 3 * j;
    let bk = 3 * k;
    dst[di] = a[aj + 1] * b[bk + 2] - a[aj + 2] * b[bk + 1];
    dst[di + 1] = a[aj + 2] * b[bk] - a[aj] * b[bk + 2];
    dst[di + 2] = a[aj] * b[bk + 1] - a[aj + 1] * b[bk];
}

/// Reads vector `i` of `buf` as a `glam::Vec3`.
#[inline]
pub fn read(buf: &[f32], i: usize) -> Vec3 {
    let at = 3 * i;
    Vec3::new(buf[at], buf[at + 1], buf[at + 2])
}

/// Writes a `glam::Vec3` into vector `i` of `buf`.
#[inline]
pub fn write(buf: &mut [f32], i: usize, v: Vec3) {
    let at = 3 * i;
    buf[at] = v.x;
    buf[at + 1] = v.y;
    buf[at + 2] = v.z;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_scaled_targets_only_one_slot() {
        let mut dst = vec![0.0; 9];
        let src = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        add_scaled(&mut dst, 1, &src, 2, 2.0);
        assert_eq!(&dst[0..3], &[0.0, 0.0, 0.0]);
        assert_eq!(&dst[3..6], &[14.0, 16.0, 18.0]);
        assert_eq!(&dst[6..9], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn cross_matches_glam() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 5.0, 6.0];
        let mut out = vec![0.0; 3];
        set_cross(&mut out, 0, &a, 0, &b, 0);
        let expected = Vec3::new(1.0, 2.0, 3.0).cross(Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(read(&out, 0), expected);
    }
}
