use crate::{
    error::{KMeansError, Result},
    memory::*, Bounds, ClusteringRun, ClusteringSnapshot, KMeansConfig, Point, RunState,
};
use std::ops::RangeInclusive;
use tracing::debug;

/// Outcome of the clustering for one k of an [`ElbowCurve`].
///
/// ## Fields
/// - **k**: The amount of clusters that were requested
/// - **inertia**: Sum of squared distances from all points to their centroid after the run finished
/// - **iterations**: Amount of iterations the run needed
/// - **state**: Final state of the run (converged, or stopped at the iteration cap)
/// - **snapshot**: The terminal clustering, so it can be restored as the active clustering later
#[derive(Clone, Debug, PartialEq)]
pub struct ElbowRecord<T: Primitive> {
    pub k: usize,
    pub inertia: T,
    pub iterations: usize,
    pub state: RunState,
    pub snapshot: ClusteringSnapshot<T>,
}

/// Inertia-vs-k series for one point set, together with the terminal clustering of every k.
///
/// Each k is clustered by an independent run over its own copy of the points. Since centroid
/// initialization is random, building the curve twice will in general not yield the same inertias;
/// the curve is one realization.
#[derive(Clone, Debug)]
pub struct ElbowCurve<T: Primitive> {
    records: Vec<ElbowRecord<T>>,
    k_range: RangeInclusive<usize>,
    selected_k: Option<usize>,
}
impl<T: Primitive> ElbowCurve<T> {
    /// A curve without records.
    pub fn empty(k_range: RangeInclusive<usize>) -> Self {
        Self { records: Vec::new(), k_range, selected_k: None }
    }

    /// Cluster **points** once for every k in **k_range**, each run until it converged or hit the
    /// iteration cap of **config**.
    ///
    /// The runs use a generator derived from the one in **config**, and never call its callbacks.
    /// An empty point set yields an empty curve.
    pub fn build(points: &[Point<T>], bounds: &Bounds<T>, k_range: RangeInclusive<usize>, config: &KMeansConfig<'_, T>) -> Self {
        let mut curve = Self::empty(k_range);
        curve.rebuild(points, bounds, config);
        curve
    }

    /// Replace all records by a freshly computed curve for **points**. The selection is cleared.
    pub fn rebuild(&mut self, points: &[Point<T>], bounds: &Bounds<T>, config: &KMeansConfig<'_, T>) {
        self.selected_k = None;
        if points.is_empty() {
            self.records.clear();
            return;
        }

        let batch_config = config.detached();
        self.records = self.k_range.clone()
            .map(|k| {
                let mut run = ClusteringRun::new(points.to_vec(), *bounds);
                run.start(k, ClusteringRun::init_random_uniform, &batch_config);
                let state = run.run_to_convergence(&batch_config);
                ElbowRecord {
                    k,
                    inertia: run.inertia(),
                    iterations: run.iteration(),
                    state,
                    snapshot: run.snapshot(),
                }
            })
            .collect();
        debug!(points = points.len(), records = self.records.len(), "elbow curve built");
    }

    pub fn records(&self) -> &[ElbowRecord<T>] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn k_range(&self) -> &RangeInclusive<usize> { &self.k_range }
    /// The k whose clustering was restored last, if any since the last rebuild.
    pub fn selected_k(&self) -> Option<usize> { self.selected_k }

    pub fn get(&self, k: usize) -> Option<&ElbowRecord<T>> {
        self.records.iter().find(|r| r.k == k)
    }

    /// `(k, inertia)` pairs in ascending k order.
    pub fn inertias(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.records.iter().map(|r| (r.k, r.inertia))
    }

    /// Replace points, centroids and k of **run** by copies of the clustering stored for **k**,
    /// and mark **k** as selected.
    pub fn restore_into(&mut self, k: usize, run: &mut ClusteringRun<T>) -> Result<()> {
        let record = self.get(k).ok_or(KMeansError::NoElbowRecord { k })?;
        run.restore(&record.snapshot, record.iterations);
        self.selected_k = Some(k);
        Ok(())
    }
}
