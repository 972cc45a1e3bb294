use crate::{memory::*, Centroid, ClusteringRun, KMeansConfig};
use tracing::warn;

#[inline(always)]
pub fn calculate<T: Primitive>(run: &mut ClusteringRun<T>, k: usize, _config: &KMeansConfig<'_, T>, computed: Vec<Centroid<T>>) {
    if computed.len() != k {
        warn!(given = computed.len(), k, "precomputed centroid count does not match k");
    }
    run.centroids = computed.into_iter().take(k).collect();
}

#[cfg(test)]
mod tests {
    use crate::helpers::testing::*;
    use crate::{ClusteringRun, KMeansConfig};

    #[test]
    fn train_with_precomputed_centroids() {
        let samples = points::<f32>(&[(0.0, 0.0), (1.0, 0.0), (10.0, 0.0), (11.0, 0.0), (20.0, 0.0), (21.0, 0.0)]);
        let mut run = ClusteringRun::new(samples, bounds(30.0, 1.0));
        let conf = KMeansConfig::default();
        run.start(2, ClusteringRun::init_precomputed(centroids(&[(0.0, 0.0), (21.0, 0.0)])), &conf);
        run.run_to_convergence(&conf);

        // 10.0 is closer to 0.0 than to 21.0, 11.0 is not
        assert_eq!(run.clusters(), &[vec![0, 1, 2], vec![3, 4, 5]]);
        assert_approx_eq!(run.centroids()[0].x, 11.0 / 3.0, 1e-5);
        assert_approx_eq!(run.centroids()[1].x, 52.0 / 3.0, 1e-5);
        assert_eq!(run.centroids()[1].y, 0.0);
    }

    #[test]
    fn surplus_centroids_are_dropped() {
        let mut run = ClusteringRun::new(points::<f64>(&[(0.0, 0.0)]), bounds(30.0, 30.0));
        let conf = KMeansConfig::default();
        run.initialize_centroids(2, ClusteringRun::init_precomputed(centroids(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)])), &conf);
        assert_eq!(run.k(), 2);
        assert_eq!(run.centroids(), &centroids::<f64>(&[(1.0, 1.0), (2.0, 2.0)])[..]);
    }
}
