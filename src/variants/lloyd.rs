use crate::{memory::*, Centroid, ClusteringRun, KMeansConfig, RunState};
use std::cmp::Ordering;
use tracing::trace;

pub(crate) struct Lloyd<T> where T: Primitive {
	_p: std::marker::PhantomData<T>
}
impl<T> Lloyd<T> where T: Primitive {
    /// Assign each point to the centroid with the smallest euclidean distance (first one wins on ties),
    /// then regroup the points by their new label.
    pub(crate) fn update_cluster_assignments(run: &mut ClusteringRun<T>) {
        let ClusteringRun { points, centroids, clusters, .. } = run;

        clusters.iter_mut().for_each(|c| c.clear());
        clusters.resize_with(centroids.len(), Vec::new);
        points.iter_mut().enumerate()
            .for_each(|(pi, p)| {
                p.cluster = centroids.iter()
                    .map(|c| p.distance(c))
                    .enumerate()
                    .min_by(|(_,d0), (_,d1)| d0.partial_cmp(d1).unwrap_or(Ordering::Equal))
                    .map(|(ci, _)| ci);
                if let Some(ci) = p.cluster {
                    clusters[ci].push(pi);
                }
            });
    }

    /// Replace each non-empty cluster's centroid by the mean of its points.
    /// Empty clusters keep their previous centroid, so there is never a division by zero.
    pub(crate) fn update_centroids(run: &mut ClusteringRun<T>, threshold: T) -> bool {
        let ClusteringRun { points, centroids, clusters, .. } = run;

        let mut moved = false;
        centroids.iter_mut()
            .zip(clusters.iter())
            .enumerate()
            .for_each(|(ci, (centroid, members))| {
                if members.is_empty() {
                    trace!(cluster = ci, "empty cluster keeps its centroid");
                    return;
                }
                let (sum_x, sum_y) = members.iter()
                    .map(|&pi| &points[pi])
                    .fold((T::zero(), T::zero()), |(sx, sy), p| (sx + p.x, sy + p.y));
                let cnt = T::cast_usize(members.len());
                let new_centroid = Centroid::new(sum_x / cnt, sum_y / cnt);

                if centroid.distance(&new_centroid) > threshold {
                    moved = true;
                }
                *centroid = new_centroid;
            });
        moved
    }

    #[inline(always)] pub fn calculate(run: &mut ClusteringRun<T>, config: &KMeansConfig<'_, T>) -> RunState {
        while run.state == RunState::Running {
            if run.step(config).is_none() {
                break;
            }
        }
        run.state
    }
}
