use crate::{error::KMeansError, memory::*, Bounds, KMeansConfig, Point};
use std::{fmt, str::FromStr};
use tracing::info;

mod gaussian;
mod mixture;
mod uniform;

/// Probability distribution the points of a new point set are drawn from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DistributionMethod {
    /// Both coordinates uniformly distributed over the bounds
    #[default]
    Uniform,
    /// One isotropic gaussian, centered in the middle of the bounds
    Gaussian,
    /// A mixture of 2 to 5 gaussians with random centers
    Clusters,
}
impl DistributionMethod {
    pub const ALL: [DistributionMethod; 3] = [DistributionMethod::Uniform, DistributionMethod::Gaussian, DistributionMethod::Clusters];

    pub fn name(&self) -> &'static str {
        match self {
            DistributionMethod::Uniform => "uniform",
            DistributionMethod::Gaussian => "gaussian",
            DistributionMethod::Clusters => "clusters",
        }
    }
}
impl fmt::Display for DistributionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for DistributionMethod {
    type Err = KMeansError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistributionMethod::ALL.iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| KMeansError::UnknownDistribution(s.to_string()))
    }
}

/// Generate **count** unassigned points within **bounds**, drawn from the given distribution.
///
/// **count** is not validated here; user-facing callers clamp it (see [`crate::SessionSettings`]).
/// Randomness is taken from the random number generator of **config**.
pub fn generate<T: Primitive>(method: DistributionMethod, count: usize, bounds: &Bounds<T>, config: &KMeansConfig<'_, T>) -> Vec<Point<T>> {
    let mut rnd = config.rnd.borrow_mut();
    let points = match method {
        DistributionMethod::Uniform => uniform::calculate(count, bounds, &mut *rnd),
        DistributionMethod::Gaussian => gaussian::calculate(count, bounds, &mut *rnd),
        DistributionMethod::Clusters => mixture::calculate(count, bounds, &mut *rnd),
    };
    info!(%method, count = points.len(), "point set generated");
    points
}
