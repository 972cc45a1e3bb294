use crate::{memory::*, Centroid, ClusteringRun, KMeansConfig};
use rand::prelude::*;

#[inline(always)] pub fn calculate<T: Primitive>(run: &mut ClusteringRun<T>, k: usize, config: &KMeansConfig<'_, T>) {
    let bounds = run.bounds;
    let mut rnd = config.rnd.borrow_mut();
    run.centroids = (0..k)
        .map(|_| Centroid::new(
            rnd.gen_range(T::zero()..bounds.width),
            rnd.gen_range(T::zero()..bounds.height)))
        .collect();
}
