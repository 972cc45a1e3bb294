//! # kmeans-elbow - API documentation
//!
//! kmeans-elbow is a small rust library for exploring k-means clustering on two-dimensional point sets,
//! one step at a time.
//!
//! ## Design target
//! Its main target is observability rather than throughput. Every state a k-means run passes through
//! (initialized centroids, each assignment, each centroid update) can be inspected, stepped manually, or
//! driven frame by frame by an animation. Next to the live run, the library computes the elbow curve
//! (inertia over k) of the current point set, and keeps the terminal clustering of every k, so it can be
//! restored as the live clustering later.
//!
//! ## Building blocks
//! - [`generate`]: Point sets drawn from a [`DistributionMethod`] (uniform, gaussian, or a gaussian mixture)
//! - [`ClusteringRun`]: One clustering, stepped with Lloyd's algorithm until it converged or hit the iteration cap
//! - [`ElbowCurve`]: One converged run per k, with its inertia and a snapshot of the terminal clustering
//! - [`Session`]: Ties all of the above together, the way an interactive frontend drives them
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! Stepping a single clustering manually:
//!
//! ```rust
//! use kmeans_elbow::*;
//!
//! fn main() {
//!     let conf = KMeansConfig::default();
//!     let bounds = Bounds::new(600.0f64, 400.0).unwrap();
//!
//!     let points = generate(DistributionMethod::Clusters, 300, &bounds, &conf);
//!     let mut run = ClusteringRun::new(points, bounds);
//!     run.start(4, ClusteringRun::init_random_uniform, &conf);
//!
//!     while let Some(outcome) = run.step(&conf) {
//!         println!("Iteration {} - Inertia: {:.2} ({})", outcome.iteration, run.inertia(), outcome.state);
//!     }
//!     println!("Centroids: {:?}", run.centroids());
//! }
//! ```
//!
//! ## Example (using the status event callbacks)
//! ```rust
//! use kmeans_elbow::*;
//!
//! fn main() {
//!     let conf = KMeansConfig::build()
//!         .init_done(&|run| println!("Initialization completed ({} centroids).", run.k()))
//!         .iteration_done(&|run, nr, moved|
//!             println!("Iteration {} - Inertia: {:.2} | Centroids moved: {}", nr, run.inertia(), moved))
//!         .converged(&|_, iterations| println!("Clustering converged after {} iterations.", iterations))
//!         .build();
//!
//!     let mut session = Session::new(SessionSettings::<f64>::default(), conf).unwrap();
//!     session.generate(DistributionMethod::Uniform, 100);
//!     while let Ok(SessionStep::Started | SessionStep::Stepped(_)) = session.step() {}
//!
//!     for (k, inertia) in session.elbow().inertias() {
//!         println!("k = {:2} | Inertia: {:.2}", k, inertia);
//!     }
//! }
//! ```
//!
//! ## Short API-Overview / Description
//! All randomness, the convergence rule and the status callbacks are configured through a [`KMeansConfig`],
//! built with [`KMeansConfig::build`]. A run is in one of the states of [`RunState`]: stepping is only
//! permitted while it is running, and a run finishes once no centroid moved further than the convergence
//! threshold, or once the iteration cap was reached.
//!
//! Centroid initialization methods are static methods within the [`ClusteringRun`] struct, which are simply
//! passed in as reference (e.g. [`ClusteringRun::init_random_uniform`]).

#[macro_use] mod helpers;
mod memory;
mod error;
mod point;
mod api;
mod run;
mod variants;
mod inits;
mod generators;
mod elbow;
mod animation;
mod settings;
mod session;

pub use animation::{AnimationLoop, FrameTicket};
pub use api::{KMeansConfig, KMeansConfigBuilder, DEFAULT_CONVERGENCE_THRESHOLD, DEFAULT_MAX_ITER};
pub use elbow::{ElbowCurve, ElbowRecord};
pub use error::{KMeansError, Result};
pub use generators::{generate, DistributionMethod};
pub use memory::Primitive;
pub use point::{Bounds, Centroid, Point};
pub use run::{ClusteringRun, ClusteringSnapshot, FinishReason, RunState, StepOutcome};
pub use session::{Controls, FrameOutcome, Session, SessionStep};
pub use settings::SessionSettings;
