use crate::{memory::*, Bounds, Point};
use rand::prelude::*;

#[inline(always)] pub fn calculate<T: Primitive>(count: usize, bounds: &Bounds<T>, rnd: &mut dyn RngCore) -> Vec<Point<T>> {
    (0..count)
        .map(|_| Point::new(
            rnd.gen_range(T::zero()..bounds.width),
            rnd.gen_range(T::zero()..bounds.height)))
        .collect()
}
