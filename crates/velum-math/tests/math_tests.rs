//! Integration tests for velum-math.

use velum_math::kernel;
use velum_math::Vec3;

#[test]
fn set_zero_and_length() {
    let mut buf = vec![3.0, 4.0, 0.0, 1.0, 1.0, 1.0];
    assert_eq!(kernel::length_sq(&buf, 0), 25.0);
    kernel::set_zero(&mut buf, 0);
    assert_eq!(kernel::length_sq(&buf, 0), 0.0);
    // Neighboring vector untouched
    assert_eq!(kernel::length_sq(&buf, 1), 3.0);
}

#[test]
fn copy_between_buffers() {
    let src = vec![0.0, 0.0, 0.0, 7.0, 8.0, 9.0];
    let mut dst = vec![0.0; 6];
    kernel::copy(&mut dst, 0, &src, 1);
    assert_eq!(&dst[0..3], &[7.0, 8.0, 9.0]);
}

#[test]
fn set_diff_with_scale() {
    let a = vec![4.0, 6.0, 8.0];
    let b = vec![1.0, 2.0, 3.0];
    let mut out = vec![0.0; 3];
    kernel::set_diff(&mut out, 0, &a, 0, &b, 0, 2.0);
    assert_eq!(&out[..], &[6.0, 8.0, 10.0]);
}

#[test]
fn dist_sq_between_slots() {
    let a = vec![0.0, 0.0, 0.0];
    let b = vec![0.0, 0.0, 0.0, 3.0, 4.0, 0.0];
    assert_eq!(kernel::dist_sq(&a, 0, &b, 1), 25.0);
}

#[test]
fn read_write_roundtrip() {
    let mut buf = vec![0.0; 6];
    let v = Vec3::new(1.5, -2.5, 3.5);
    kernel::write(&mut buf, 1, v);
    assert_eq!(kernel::read(&buf, 1), v);
    assert_eq!(kernel::read(&buf, 0), Vec3::ZERO);
}

#[test]
fn scale_in_place() {
    let mut buf = vec![1.0, -2.0, 4.0];
    kernel::scale(&mut buf, 0, 0.5);
    assert_eq!(&buf[..], &[0.5, -1.0, 2.0]);
}
