use crate::{memory::*, Bounds, Point};
use rand::prelude::*;

/// Draw from a normal distribution using the Box-Muller transform.
/// Both uniform draws are taken from (0, 1); an exact 0 is redrawn so the logarithm stays finite.
pub(crate) fn sample_normal<T: Primitive>(mean: T, std_dev: T, rnd: &mut dyn RngCore) -> T {
    let mut open_unit = || loop {
        let u: T = rnd.gen_range(T::zero()..T::one());
        if u > T::zero() {
            break u;
        }
    };
    let (u1, u2) = (open_unit(), open_unit());
    let two = T::cast_f64(2.0);
    let mag = (-two * u1.ln()).sqrt();
    mean + mag * (two * T::cast_f64(std::f64::consts::PI) * u2).cos() * std_dev
}

#[inline(always)] pub fn calculate<T: Primitive>(count: usize, bounds: &Bounds<T>, rnd: &mut dyn RngCore) -> Vec<Point<T>> {
    let (mean_x, mean_y) = bounds.midpoint();
    let six = T::cast_f64(6.0);
    let (std_dev_x, std_dev_y) = (bounds.width / six, bounds.height / six);
    (0..count)
        .map(|_| Point::new(
            sample_normal(mean_x, std_dev_x, rnd),
            sample_normal(mean_y, std_dev_y, rnd)))
        .collect()
}
