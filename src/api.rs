use crate::{memory::*, ClusteringRun};
use std::cell::RefCell;
use rand::prelude::*;

pub type InitDoneCallbackFn<'a, T> = &'a dyn Fn(&ClusteringRun<T>);
pub type IterationDoneCallbackFn<'a, T> = &'a dyn Fn(&ClusteringRun<T>, usize, bool);
pub type ConvergedCallbackFn<'a, T> = &'a dyn Fn(&ClusteringRun<T>, usize);

/// Default minimum centroid displacement (in canvas units) that counts as movement.
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.1;
/// Default iteration cap for automatic and batch runs.
pub const DEFAULT_MAX_ITER: usize = 100;

/// This is a structure holding various configuration options for k-means runs, such as
/// the random number generator to use, the convergence rule, or a couple of callbacks that can be set
/// to get status information from a running clustering.
///
/// For a more detailed information about all possible options, have a look at [`KMeansConfigBuilder`].
pub struct KMeansConfig<'a, T: Primitive> {
    /// Callback that is called, when the centroids were initialized and the first assignment happened
    /// ## Arguments
    /// - **run**: Current [`ClusteringRun`] after the initialization
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each step
    /// ## Arguments
    /// - **run**: Current [`ClusteringRun`] after the step
    /// - **iteration**: Number of the finished iteration
    /// - **moved**: Whether any centroid moved further than the convergence threshold
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// Callback that is called exactly once, when a run transitions into its finished state
    /// ## Arguments
    /// - **run**: The finished [`ClusteringRun`]
    /// - **iterations**: Amount of iterations the run needed
    pub(crate) converged: ConvergedCallbackFn<'a, T>,
    /// Random number generator to use
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
    /// Centroid displacement above which a centroid counts as moved
    pub(crate) threshold: T,
    /// Iteration count after which a run is stopped, even if centroids still move
    pub(crate) max_iter: usize,
}
impl<'a, T: Primitive> Default for KMeansConfig<'a, T> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_, _, _| {},
            converged: &|_, _| {},
            rnd: Box::new(RefCell::new(rand::thread_rng())),
            threshold: T::cast_f64(DEFAULT_CONVERGENCE_THRESHOLD),
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}
impl<'a, T: Primitive> KMeansConfig<'a, T> {
    /// Use the [`KMeansConfigBuilder`] to build a [`KMeansConfig`] instance.
    pub fn build() -> KMeansConfigBuilder<'a, T> {
        KMeansConfigBuilder { config: KMeansConfig::default() }
    }

    pub fn threshold(&self) -> T { self.threshold }
    pub fn max_iter(&self) -> usize { self.max_iter }

    /// Create a configuration with the same convergence rule but without any callbacks, and with its own
    /// random number generator, seeded from this configuration's generator.
    /// Batch runs (like the elbow curve) use this, so they neither notify subscribers of the live run,
    /// nor share random state with it.
    pub(crate) fn detached(&self) -> KMeansConfig<'static, T> {
        let seed = self.rnd.borrow_mut().next_u64();
        KMeansConfig::build()
            .convergence_threshold(self.threshold)
            .max_iter(self.max_iter)
            .random_generator(rand::rngs::StdRng::seed_from_u64(seed))
            .build()
    }
}
impl<'a, T: Primitive> std::fmt::Debug for KMeansConfig<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KMeansConfig")
            .field("threshold", &self.threshold)
            .field("max_iter", &self.max_iter)
            .finish_non_exhaustive()
    }
}

pub struct KMeansConfigBuilder<'a, T: Primitive> {
    config: KMeansConfig<'a, T>
}
impl<'a, T: Primitive> KMeansConfigBuilder<'a, T> {
    /// Set the callback that should be called after the centroid initialization and first assignment.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Set the callback that should be called after each step of a running clustering.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Set the callback that should be called once a run finished (converged or hit the iteration cap).
    pub fn converged(mut self, converged: ConvergedCallbackFn<'a, T>) -> Self {
        self.config.converged = converged; self
    }
    /// Set the random number generator that should be used for point generation and centroid initialization.
    /// Use a seeded generator for deterministically repeatable results.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd)); self
    }
    /// Set the minimum centroid displacement that still counts as movement.
    /// ## Default
    /// `0.1` (canvas units)
    pub fn convergence_threshold(mut self, threshold: T) -> Self {
        self.config.threshold = threshold; self
    }
    /// Set the iteration cap.
    /// ## Default
    /// `100`
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.config.max_iter = max_iter; self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> KMeansConfig<'a, T> { self.config }
}
