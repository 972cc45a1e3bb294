use num::{Float, NumCast, Zero};
use rand::distributions::uniform::SampleUniform;
use std::{
    fmt::{Debug, Display, LowerExp},
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// Floating point type used for coordinates, distances and inertia.
///
/// Implemented for [`f32`] and [`f64`]. Conversions from literals and counts go through
/// [`Primitive::cast_f64`] and [`Primitive::cast_usize`], which cannot fail for these types.
pub trait Primitive: Add + AddAssign + Sum + Sub + SubAssign + Zero + Float + NumCast + SampleUniform
                + PartialOrd + Copy + Default + Display + Debug + LowerExp + 'static {
    fn cast_f64(v: f64) -> Self;
    fn cast_usize(v: usize) -> Self;
    fn as_f64(self) -> f64;
}
impl Primitive for f32 {
    #[inline(always)] fn cast_f64(v: f64) -> Self { v as f32 }
    #[inline(always)] fn cast_usize(v: usize) -> Self { v as f32 }
    #[inline(always)] fn as_f64(self) -> f64 { self as f64 }
}
impl Primitive for f64 {
    #[inline(always)] fn cast_f64(v: f64) -> Self { v }
    #[inline(always)] fn cast_usize(v: usize) -> Self { v as f64 }
    #[inline(always)] fn as_f64(self) -> f64 { self }
}
