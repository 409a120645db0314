pub struct PixelUnit;
pub type PixelLength = euclid::Length<i32, PixelUnit>;
pub type Vertex = euclid::Point3D<f32, PixelUnit>;
pub type Size = euclid::Size2D<usize, PixelUnit>;

/// Whole pixels from a 26.6 fixed point value.
#[inline]
pub fn from_26_6(value: i64) -> PixelLength {
    PixelLength::new((value >> 6) as i32)
}
