use crate::{memory::*, variants::Lloyd, Bounds, Centroid, KMeansConfig, Point};
use std::fmt;
use tracing::{debug, info, trace, warn};

/// Why a run stopped stepping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishReason {
    /// The last centroid update moved no centroid further than the convergence threshold.
    Converged,
    /// The iteration cap was reached while centroids were still moving.
    IterationCap,
    /// The run's state was replaced by a cached terminal clustering (see [`crate::ElbowCurve::restore_into`]).
    Restored,
}

/// Convergence state of a [`ClusteringRun`].
///
/// - **Initial**: no centroids yet, or the clustering was just reset
/// - **Running**: centroids exist and points have been assigned at least once, stepping is permitted
/// - **Finished**: no further stepping is permitted without a reset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Initial,
    Running,
    Finished(FinishReason),
}
impl RunState {
    pub fn is_finished(&self) -> bool {
        matches!(self, RunState::Finished(_))
    }
}
impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Initial => write!(f, "initial"),
            RunState::Running => write!(f, "running"),
            RunState::Finished(FinishReason::Converged) => write!(f, "finished (converged)"),
            RunState::Finished(FinishReason::IterationCap) => write!(f, "finished (iteration cap)"),
            RunState::Finished(FinishReason::Restored) => write!(f, "finished (restored)"),
        }
    }
}

/// Result of a single [`ClusteringRun::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether any centroid moved further than the convergence threshold
    pub moved: bool,
    /// Iteration counter after the step
    pub iteration: usize,
    /// State of the run after the step
    pub state: RunState,
}

/// Deep copy of a clustering's points (including labels) and centroids.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusteringSnapshot<T: Primitive> {
    pub points: Vec<Point<T>>,
    pub centroids: Vec<Centroid<T>>,
}


/// One k-means clustering: the point set, the centroid sequence and the assignment of points to centroids.
/// All mutations of a clustering are done through this structure; independent runs (like the ones
/// computed for the elbow curve) own independent copies of their points.
///
/// The cluster label of every point is either `None` or a valid index into [`ClusteringRun::centroids`],
/// and [`ClusteringRun::clusters`] always mirrors those labels. Both views are rebuilt together.
///
/// ## Generics
/// - **T**: Underlying primitive type used for coordinates and distances
#[derive(Clone, Debug)]
pub struct ClusteringRun<T: Primitive> {
    pub(crate) points: Vec<Point<T>>,
    pub(crate) centroids: Vec<Centroid<T>>,
    pub(crate) clusters: Vec<Vec<usize>>,
    pub(crate) iteration: usize,
    pub(crate) state: RunState,
    pub(crate) bounds: Bounds<T>,
}
impl<T: Primitive> ClusteringRun<T> {
    /// Create a new run over the given points. Any labels the points carry are discarded.
    pub fn new(mut points: Vec<Point<T>>, bounds: Bounds<T>) -> Self {
        points.iter_mut().for_each(|p| p.cluster = None);
        Self {
            points,
            centroids: Vec::new(),
            clusters: Vec::new(),
            iteration: 0,
            state: RunState::Initial,
            bounds,
        }
    }

    /// Create a run without any points.
    pub fn empty(bounds: Bounds<T>) -> Self {
        Self::new(Vec::new(), bounds)
    }

    pub fn points(&self) -> &[Point<T>] { &self.points }
    pub fn centroids(&self) -> &[Centroid<T>] { &self.centroids }
    /// Point indices grouped by cluster label.
    pub fn clusters(&self) -> &[Vec<usize>] { &self.clusters }
    /// Amount of centroids of the active centroid sequence.
    pub fn k(&self) -> usize { self.centroids.len() }
    pub fn iteration(&self) -> usize { self.iteration }
    pub fn state(&self) -> RunState { self.state }
    pub fn bounds(&self) -> &Bounds<T> { &self.bounds }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Discard centroids and assignments. The point set is kept, all points become unassigned.
    pub fn reset(&mut self) {
        self.centroids.clear();
        self.clear_assignment();
        self.iteration = 0;
        self.state = RunState::Initial;
        debug!(points = self.points.len(), "clustering reset");
    }

    fn clear_assignment(&mut self) {
        self.points.iter_mut().for_each(|p| p.cluster = None);
        self.clusters.clear();
        self.clusters.resize_with(self.centroids.len(), Vec::new);
    }

    /// Replace the centroid sequence with **k** centroids, produced by the given initialization method.
    /// All points become unassigned, the run stays in (or returns to) [`RunState::Initial`].
    ///
    /// With `k == 0` this silently yields a run without centroids; callers are expected to enforce `k >= 1`.
    pub fn initialize_centroids<F>(&mut self, k: usize, init: F, config: &KMeansConfig<'_, T>)
                where for<'c> F: FnOnce(&mut ClusteringRun<T>, usize, &KMeansConfig<'c, T>) {
        if k == 0 {
            warn!("initializing clustering without centroids (k = 0)");
        }
        self.centroids.clear();
        init(self, k, config);
        self.clear_assignment();
        self.iteration = 0;
        self.state = RunState::Initial;
        trace!(k = self.centroids.len(), "centroids initialized");
    }

    /// Assign every point to its nearest centroid and rebuild the cluster grouping.
    pub fn assign(&mut self) {
        Lloyd::update_cluster_assignments(self);
    }

    /// Move every non-empty cluster's centroid to the mean of its points.
    /// Centroids of empty clusters are left where they are.
    ///
    /// ## Returns
    /// **true** if any centroid moved further than **threshold**
    pub fn update_centroids(&mut self, threshold: T) -> bool {
        Lloyd::update_centroids(self, threshold)
    }

    /// Initialize **k** centroids, do the first assignment and start stepping.
    pub fn start<F>(&mut self, k: usize, init: F, config: &KMeansConfig<'_, T>)
                where for<'c> F: FnOnce(&mut ClusteringRun<T>, usize, &KMeansConfig<'c, T>) {
        self.initialize_centroids(k, init, config);
        self.assign();
        self.state = RunState::Running;
        debug!(k = self.k(), points = self.points.len(), "clustering started");
        (config.init_done)(self);
    }

    /// Perform one iteration: update the centroids, then re-assign all points.
    ///
    /// When no centroid moved, the run is finished as converged. When centroids moved, but the
    /// iteration cap of **config** was reached, the run is finished as well.
    /// The converged callback of **config** is called on the transition into the finished state.
    ///
    /// ## Returns
    /// `None` (without touching the run) if the run is not in [`RunState::Running`].
    pub fn step(&mut self, config: &KMeansConfig<'_, T>) -> Option<StepOutcome> {
        match self.state {
            RunState::Running => {}
            RunState::Initial | RunState::Finished(_) => return None,
        }

        self.iteration += 1;
        let moved = self.update_centroids(config.threshold);
        self.assign();

        if !moved {
            self.state = RunState::Finished(FinishReason::Converged);
        } else if self.iteration >= config.max_iter {
            self.state = RunState::Finished(FinishReason::IterationCap);
        }
        trace!(iteration = self.iteration, moved, state = %self.state, "step done");

        (config.iteration_done)(self, self.iteration, moved);
        if let RunState::Finished(reason) = self.state {
            info!(iterations = self.iteration, ?reason, "clustering finished");
            (config.converged)(self, self.iteration);
        }
        Some(StepOutcome { moved, iteration: self.iteration, state: self.state })
    }

    /// Step until the run is finished. Does nothing if the run is not running.
    ///
    /// ## Returns
    /// The state of the run afterwards.
    pub fn run_to_convergence(&mut self, config: &KMeansConfig<'_, T>) -> RunState {
        Lloyd::calculate(self, config)
    }

    /// Sum of squared distances from every assigned point to its centroid.
    pub fn inertia(&self) -> T {
        self.points.iter()
            .filter_map(|p| p.cluster.map(|ci| p.squared_distance(&self.centroids[ci])))
            .fold(T::zero(), |acc, d| acc + d)
    }

    /// Deep copy of points (with labels) and centroids.
    pub fn snapshot(&self) -> ClusteringSnapshot<T> {
        ClusteringSnapshot { points: self.points.clone(), centroids: self.centroids.clone() }
    }

    /// Replace points, centroids and therefore k with a copy of **snapshot**. This is a full substitution,
    /// not a merge. The grouping is rebuilt from the restored labels, and the run is finished, since
    /// snapshots hold terminal clusterings.
    ///
    /// Labels that do not refer to a centroid of the snapshot are dropped.
    pub fn restore(&mut self, snapshot: &ClusteringSnapshot<T>, iterations: usize) {
        self.points = snapshot.points.clone();
        self.centroids = snapshot.centroids.clone();
        let k = self.centroids.len();
        self.clusters = vec![Vec::new(); k];
        for (pi, p) in self.points.iter_mut().enumerate() {
            match p.cluster {
                Some(ci) if ci < k => self.clusters[ci].push(pi),
                _ => p.cluster = None,
            }
        }
        self.iteration = iterations;
        self.state = RunState::Finished(FinishReason::Restored);
        debug!(k, points = self.points.len(), "clustering restored from snapshot");
    }


    /// Random initialization method
    ///
    /// ## Description
    /// Draws **k** centroids uniformly at random from the run's bounds.
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass a reference to it, to [`ClusteringRun::start`]
    /// or [`ClusteringRun::initialize_centroids`].
    pub fn init_random_uniform(run: &mut ClusteringRun<T>, k: usize, config: &KMeansConfig<'_, T>) {
        crate::inits::randomuniform::calculate(run, k, config);
    }

    /// Precomputed initialization method
    ///
    /// ## Description
    /// Uses the given centroid positions (at most **k** of them) as initial centroids.
    pub fn init_precomputed(computed: Vec<Centroid<T>>)
            -> impl for<'c> FnOnce(&mut ClusteringRun<T>, usize, &KMeansConfig<'c, T>) {
        move |run, k, config| crate::inits::precomputed::calculate(run, k, config, computed)
    }
}
