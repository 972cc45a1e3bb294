use crate::{
    error::{KMeansError, Result},
    generate, memory::*, AnimationLoop, Centroid, ClusteringRun, DistributionMethod, ElbowCurve, FrameTicket,
    KMeansConfig, Point, RunState, SessionSettings, StepOutcome,
};
use tracing::debug;

/// What a manual [`Session::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStep {
    /// The clustering was not started yet: centroids were initialized and points assigned
    Started,
    /// One iteration was performed
    Stepped(StepOutcome),
    /// The clustering is finished, nothing happened
    Idle,
}

/// Result of an accepted animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameOutcome {
    pub step: StepOutcome,
    /// Ticket of the next frame, `None` once the run is finished
    pub next_frame: Option<FrameTicket>,
}

/// Which user actions are currently permitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub start: bool,
    pub step: bool,
    pub generate: bool,
}

/// Interactive clustering session: one live point set with its clustering, the elbow curve of that
/// point set and the animation driving the clustering.
///
/// All mutating operations cancel a running animation before they touch any state.
///
/// ## Example
/// ```rust
/// use kmeans_elbow::*;
/// use rand::SeedableRng;
///
/// let conf = KMeansConfig::build()
///     .random_generator(rand::rngs::StdRng::seed_from_u64(7))
///     .build();
/// let mut session: Session<'_, f64> = Session::new(SessionSettings::default(), conf).unwrap();
/// session.generate(DistributionMethod::Clusters, 200);
///
/// let mut ticket = session.start_animation().unwrap();
/// while let Some(frame) = session.on_frame(ticket) {
///     match frame.next_frame {
///         Some(next) => ticket = next,
///         None => break,
///     }
/// }
/// assert!(session.state().is_finished());
/// assert_eq!(session.elbow().len(), 10);
/// ```
#[derive(Debug)]
pub struct Session<'a, T: Primitive> {
    settings: SessionSettings<T>,
    config: KMeansConfig<'a, T>,
    run: ClusteringRun<T>,
    elbow: ElbowCurve<T>,
    animation: AnimationLoop,
    method: DistributionMethod,
    count: usize,
    k: usize,
}
impl<'a, T: Primitive> Session<'a, T> {
    /// Create a session without points. Fails if **settings** are invalid.
    pub fn new(settings: SessionSettings<T>, config: KMeansConfig<'a, T>) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            run: ClusteringRun::empty(settings.bounds),
            elbow: ElbowCurve::empty(settings.k_range.clone()),
            animation: AnimationLoop::new(),
            method: settings.default_method,
            count: settings.clamp_count(settings.default_count),
            k: settings.clamp_k(settings.default_k),
            settings,
            config,
        })
    }

    pub fn settings(&self) -> &SessionSettings<T> { &self.settings }
    pub fn config(&self) -> &KMeansConfig<'a, T> { &self.config }
    pub fn run(&self) -> &ClusteringRun<T> { &self.run }
    pub fn elbow(&self) -> &ElbowCurve<T> { &self.elbow }
    pub fn points(&self) -> &[Point<T>] { self.run.points() }
    pub fn centroids(&self) -> &[Centroid<T>] { self.run.centroids() }
    pub fn clusters(&self) -> &[Vec<usize>] { self.run.clusters() }
    pub fn state(&self) -> RunState { self.run.state() }
    pub fn iteration(&self) -> usize { self.run.iteration() }
    /// The selected amount of clusters, used by the next start.
    pub fn k(&self) -> usize { self.k }
    pub fn method(&self) -> DistributionMethod { self.method }
    /// Amount of points the next generation produces.
    pub fn count(&self) -> usize { self.count }
    /// Amount of points of the live point set.
    pub fn point_count(&self) -> usize { self.run.points().len() }
    pub fn is_animating(&self) -> bool { self.animation.is_active() }

    /// Replace the point set by **count** new points drawn from **method**, and rebuild the elbow curve
    /// for them. **count** is clamped into the configured range.
    ///
    /// ## Returns
    /// The clamped amount of points
    pub fn generate(&mut self, method: DistributionMethod, count: usize) -> usize {
        self.animation.cancel();
        let count = self.settings.clamp_count(count);
        let points = generate(method, count, &self.settings.bounds, &self.config);
        self.run = ClusteringRun::new(points, self.settings.bounds);
        self.elbow.rebuild(self.run.points(), &self.settings.bounds, &self.config);
        self.method = method;
        self.count = count;
        count
    }

    /// [`Session::generate`] with the current method and count.
    pub fn regenerate(&mut self) -> usize {
        self.generate(self.method, self.count)
    }

    /// Select the distribution used by the next generation. The live point set is kept.
    pub fn set_method(&mut self, method: DistributionMethod) {
        self.method = method;
    }

    /// Change the amount of points. If a point set exists, a new one with the clamped amount is generated.
    ///
    /// ## Returns
    /// The clamped amount of points
    pub fn set_point_count(&mut self, count: usize) -> usize {
        self.count = self.settings.clamp_count(count);
        if !self.run.is_empty() {
            self.regenerate();
        }
        self.count
    }

    /// Initialize k random centroids and do the first assignment. A finished or running clustering is
    /// started over.
    pub fn start(&mut self) -> Result<()> {
        if self.run.is_empty() {
            return Err(KMeansError::NoPoints);
        }
        self.animation.cancel();
        self.run.start(self.k, ClusteringRun::init_random_uniform, &self.config);
        Ok(())
    }

    /// Advance the clustering manually. A clustering that was not started yet is started.
    pub fn step(&mut self) -> Result<SessionStep> {
        if self.run.is_empty() {
            return Err(KMeansError::NoPoints);
        }
        self.animation.cancel();
        match self.run.state() {
            RunState::Initial => {
                self.start()?;
                Ok(SessionStep::Started)
            },
            RunState::Running => Ok(self.run.step(&self.config).map_or(SessionStep::Idle, SessionStep::Stepped)),
            RunState::Finished(_) => Ok(SessionStep::Idle),
        }
    }

    /// Change the amount of clusters. **k** is clamped into the configured range; an existing clustering
    /// is reset, while the points are kept.
    ///
    /// ## Returns
    /// The clamped k
    pub fn select_k(&mut self, k: usize) -> usize {
        self.animation.cancel();
        self.k = self.settings.clamp_k(k);
        if !self.run.is_empty() {
            self.run.reset();
        }
        debug!(k = self.k, "k selected");
        self.k
    }

    /// Make the clustering stored in the elbow curve for **k** the live clustering, and select **k**.
    pub fn restore_elbow_selection(&mut self, k: usize) -> Result<()> {
        if self.run.is_empty() {
            return Err(KMeansError::NoPoints);
        }
        self.animation.cancel();
        self.elbow.restore_into(k, &mut self.run)?;
        self.k = k;
        Ok(())
    }

    /// Discard centroids and assignments, keeping the point set.
    pub fn reset_clustering(&mut self) {
        self.animation.cancel();
        self.run.reset();
    }

    /// Discard the point set, the clustering and the elbow curve.
    pub fn clear(&mut self) {
        self.animation.cancel();
        self.run = ClusteringRun::empty(self.settings.bounds);
        self.elbow = ElbowCurve::empty(self.settings.k_range.clone());
        debug!("session cleared");
    }

    /// Start stepping the clustering once per frame. A clustering that is not running is started first.
    ///
    /// ## Returns
    /// The ticket of the first frame, to be passed to [`Session::on_frame`]
    pub fn start_animation(&mut self) -> Result<FrameTicket> {
        if self.run.is_empty() {
            return Err(KMeansError::NoPoints);
        }
        self.animation.cancel();
        if self.run.state() != RunState::Running {
            self.start()?;
        }
        Ok(self.animation.request())
    }

    /// Perform the step belonging to the frame **ticket**.
    ///
    /// ## Returns
    /// `None` if **ticket** is stale (the animation was cancelled or restarted in the meantime)
    pub fn on_frame(&mut self, ticket: FrameTicket) -> Option<FrameOutcome> {
        if !self.animation.accept(ticket) {
            return None;
        }
        let step = self.run.step(&self.config)?;
        let next_frame = match step.state {
            RunState::Running => Some(self.animation.request()),
            RunState::Initial | RunState::Finished(_) => None,
        };
        Some(FrameOutcome { step, next_frame })
    }

    /// Stop the animation. Does nothing if no animation is running.
    pub fn cancel_animation(&mut self) -> bool {
        self.animation.cancel()
    }

    pub fn controls(&self) -> Controls {
        let animating = self.animation.is_active();
        let has_points = !self.run.is_empty();
        let state = self.run.state();
        Controls {
            start: has_points && !animating && matches!(state, RunState::Initial | RunState::Finished(_)),
            step: has_points && !animating && !state.is_finished(),
            generate: !animating,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::FinishReason;
    use rand::prelude::*;
    use std::cell::Cell;

    fn seeded<T: Primitive>(seed: u64) -> KMeansConfig<'static, T> {
        KMeansConfig::build().random_generator(rand::rngs::StdRng::seed_from_u64(seed)).build()
    }

    fn session<T: Primitive>(seed: u64) -> Session<'static, T> {
        Session::new(SessionSettings::default(), seeded(seed)).unwrap()
    }

    fn animate_to_end<T: Primitive>(session: &mut Session<'_, T>) -> usize {
        let mut frames = 0;
        let mut ticket = session.start_animation().unwrap();
        while let Some(frame) = session.on_frame(ticket) {
            frames += 1;
            match frame.next_frame {
                Some(next) => ticket = next,
                None => break,
            }
        }
        frames
    }

    #[test]
    fn operations_without_points() {
        let mut session = session::<f64>(1);
        assert_eq!(session.start(), Err(KMeansError::NoPoints));
        assert_eq!(session.step(), Err(KMeansError::NoPoints));
        assert_eq!(session.start_animation(), Err(KMeansError::NoPoints));
        assert_eq!(session.restore_elbow_selection(3), Err(KMeansError::NoPoints));
        assert_eq!(session.state(), RunState::Initial);
        assert!(session.elbow().is_empty());
        assert_eq!(session.controls(), Controls { start: false, step: false, generate: true });
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let settings = SessionSettings::<f32>::new().with_bounds(-1.0, 10.0);
        assert!(matches!(Session::new(settings, seeded(1)), Err(KMeansError::InvalidBounds { .. })));
        let settings = SessionSettings::<f64>::new().with_k_range(0..=3);
        assert_eq!(Session::new(settings, seeded(1)).err(), Some(KMeansError::InvalidRange { name: "k", start: 0, end: 3 }));
    }

    #[test] fn manual_stepping_f32() { manual_stepping::<f32>(); }
    #[test] fn manual_stepping_f64() { manual_stepping::<f64>(); }

    fn manual_stepping<T: Primitive>() {
        let mut session = session::<T>(4);
        assert_eq!(session.generate(DistributionMethod::Uniform, 100), 100);
        assert_eq!(session.point_count(), 100);
        assert_eq!(session.elbow().len(), 10);

        assert_eq!(session.step(), Ok(SessionStep::Started));
        assert_eq!(session.state(), RunState::Running);
        assert_eq!(session.centroids().len(), 3);

        let mut steps = 0;
        loop {
            match session.step().unwrap() {
                SessionStep::Stepped(outcome) => {
                    steps += 1;
                    assert_eq!(outcome.iteration, steps);
                },
                SessionStep::Idle => break,
                SessionStep::Started => panic!("clustering was started twice"),
            }
        }
        assert!(session.state().is_finished());
        assert!(steps <= 100);
        assert_eq!(session.iteration(), steps);
        assert_eq!(session.step(), Ok(SessionStep::Idle));
        assert_eq!(session.controls(), Controls { start: true, step: false, generate: true });
    }

    #[test]
    fn count_is_clamped() {
        let mut session = session::<f64>(2);
        assert_eq!(session.generate(DistributionMethod::Gaussian, 3), 10);
        assert_eq!(session.point_count(), 10);
        assert_eq!(session.set_point_count(5000), 1000);
        assert_eq!(session.point_count(), 1000);
        assert_eq!(session.method(), DistributionMethod::Gaussian);

        session.clear();
        assert_eq!(session.set_point_count(50), 50);
        assert_eq!(session.point_count(), 0);
        assert_eq!(session.regenerate(), 50);
        assert_eq!(session.point_count(), 50);
    }

    #[test]
    fn select_k_resets_clustering() {
        let mut session = session::<f64>(3);
        assert_eq!(session.select_k(0), 1);
        assert_eq!(session.select_k(42), 10);
        session.generate(DistributionMethod::Clusters, 200);
        session.start().unwrap();
        session.step().unwrap();
        let coords: Vec<_> = session.points().iter().map(|p| (p.x, p.y)).collect();

        assert_eq!(session.select_k(5), 5);
        assert_eq!(session.state(), RunState::Initial);
        assert!(session.centroids().is_empty());
        assert!(session.points().iter().all(|p| p.cluster.is_none()));
        assert_eq!(coords, session.points().iter().map(|p| (p.x, p.y)).collect::<Vec<_>>());

        session.start().unwrap();
        assert_eq!(session.centroids().len(), 5);
    }

    #[test]
    fn animation_runs_to_end() {
        let mut session = session::<f64>(5);
        session.generate(DistributionMethod::Clusters, 300);
        let frames = animate_to_end(&mut session);
        assert!(frames >= 1);
        assert!(session.state().is_finished());
        assert_eq!(session.iteration(), frames);
        assert!(!session.is_animating());
        assert!(session.controls().start);
    }

    #[test]
    fn stale_frames_are_ignored() {
        let mut session = session::<f64>(6);
        session.generate(DistributionMethod::Uniform, 300);
        session.select_k(8);
        let ticket = session.start_animation().unwrap();
        assert_eq!(session.controls(), Controls { start: false, step: false, generate: false });

        // a reset while a frame is pending must win over that frame
        session.reset_clustering();
        assert!(!session.is_animating());
        assert_eq!(session.on_frame(ticket), None);
        assert_eq!(session.state(), RunState::Initial);
        assert_eq!(session.iteration(), 0);

        // restarting supersedes the old loop
        let old = session.start_animation().unwrap();
        let new = session.start_animation().unwrap();
        assert_eq!(session.on_frame(old), None);
        assert!(session.on_frame(new).is_some());

        // cancelling is idempotent
        session.cancel_animation();
        assert!(!session.cancel_animation());
        assert!(!session.is_animating());
    }

    #[test]
    fn manual_step_cancels_animation() {
        let mut session = session::<f64>(7);
        session.generate(DistributionMethod::Uniform, 500);
        session.select_k(10);
        let ticket = session.start_animation().unwrap();
        let before = session.iteration();
        match session.step().unwrap() {
            SessionStep::Stepped(outcome) => assert_eq!(outcome.iteration, before + 1),
            other => assert!(session.state().is_finished(), "unexpected {:?}", other),
        }
        assert!(!session.is_animating());
        assert_eq!(session.on_frame(ticket), None);
    }

    #[test]
    fn converged_fires_once_per_run() {
        let finished = Cell::new(0);
        let on_converged = |run: &ClusteringRun<f64>, iterations: usize| {
            assert!(run.state().is_finished());
            assert_eq!(run.iteration(), iterations);
            finished.set(finished.get() + 1);
        };
        let conf = KMeansConfig::build()
            .random_generator(rand::rngs::StdRng::seed_from_u64(8))
            .converged(&on_converged)
            .build();
        let mut session = Session::new(SessionSettings::default(), conf).unwrap();
        session.generate(DistributionMethod::Clusters, 250);
        // building the elbow curve does not notify
        assert_eq!(finished.get(), 0);

        animate_to_end(&mut session);
        assert_eq!(finished.get(), 1);
        assert_eq!(session.step(), Ok(SessionStep::Idle));
        assert_eq!(finished.get(), 1);

        session.restore_elbow_selection(4).unwrap();
        assert_eq!(finished.get(), 1);

        session.start().unwrap();
        while let Ok(SessionStep::Stepped(_)) = session.step() {}
        assert_eq!(finished.get(), 2);
    }

    #[test]
    fn restore_from_elbow() {
        let mut session = session::<f32>(9);
        session.generate(DistributionMethod::Clusters, 150);
        session.start().unwrap();

        session.restore_elbow_selection(6).unwrap();
        let record = session.elbow().get(6).unwrap().clone();
        assert_eq!(session.k(), 6);
        assert_eq!(session.run().snapshot(), record.snapshot);
        assert_eq!(session.iteration(), record.iterations);
        assert_eq!(session.state(), RunState::Finished(FinishReason::Restored));
        assert_eq!(session.elbow().selected_k(), Some(6));

        assert_eq!(session.restore_elbow_selection(11), Err(KMeansError::NoElbowRecord { k: 11 }));
        assert_eq!(session.k(), 6);

        session.regenerate();
        assert_eq!(session.elbow().selected_k(), None);
    }
}
