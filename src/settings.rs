use crate::{
    error::{KMeansError, Result},
    helpers, memory::*, Bounds, DistributionMethod,
};
use std::ops::RangeInclusive;

/// Bounds of the user-facing parameters of a [`crate::Session`].
///
/// Out-of-range values for k and the point count are never rejected; they are clamped into
/// [`SessionSettings::k_range`] and [`SessionSettings::count_range`].
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSettings<T: Primitive> {
    /// Canvas the points and centroids live on
    pub bounds: Bounds<T>,
    /// Selectable amounts of clusters; the elbow curve covers the same range
    pub k_range: RangeInclusive<usize>,
    /// Allowed amounts of points per point set
    pub count_range: RangeInclusive<usize>,
    pub default_k: usize,
    pub default_count: usize,
    pub default_method: DistributionMethod,
}
impl<T: Primitive> Default for SessionSettings<T> {
    fn default() -> Self {
        Self {
            bounds: Bounds { width: T::cast_f64(600.0), height: T::cast_f64(400.0) },
            k_range: 1..=10,
            count_range: 10..=1000,
            default_k: 3,
            default_count: 100,
            default_method: DistributionMethod::Uniform,
        }
    }
}
impl<T: Primitive> SessionSettings<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, width: T, height: T) -> Self {
        self.bounds = Bounds { width, height };
        self
    }

    pub fn with_k_range(mut self, k_range: RangeInclusive<usize>) -> Self {
        self.k_range = k_range;
        self
    }

    pub fn with_count_range(mut self, count_range: RangeInclusive<usize>) -> Self {
        self.count_range = count_range;
        self
    }

    pub fn with_default_k(mut self, k: usize) -> Self {
        self.default_k = k;
        self
    }

    pub fn with_default_count(mut self, count: usize) -> Self {
        self.default_count = count;
        self
    }

    pub fn with_default_method(mut self, method: DistributionMethod) -> Self {
        self.default_method = method;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        for (name, range) in [("k", &self.k_range), ("point count", &self.count_range)] {
            if range.is_empty() || *range.start() == 0 {
                return Err(KMeansError::InvalidRange { name, start: *range.start(), end: *range.end() });
            }
        }
        Ok(())
    }

    pub fn clamp_k(&self, k: usize) -> usize {
        helpers::clamp_inclusive(k, &self.k_range)
    }

    pub fn clamp_count(&self, count: usize) -> usize {
        helpers::clamp_inclusive(count, &self.count_range)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = SessionSettings::<f64>::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.k_range, 1..=10);
        assert_eq!(settings.count_range, 10..=1000);
        assert_eq!(settings.bounds, Bounds { width: 600.0, height: 400.0 });
    }

    #[test]
    fn clamping() {
        let settings = SessionSettings::<f32>::new().with_k_range(2..=8);
        assert_eq!(settings.clamp_k(0), 2);
        assert_eq!(settings.clamp_k(5), 5);
        assert_eq!(settings.clamp_k(80), 8);
        assert_eq!(settings.clamp_count(3), 10);
        assert_eq!(settings.clamp_count(1001), 1000);
    }

    #[test]
    fn invalid_settings() {
        let settings = SessionSettings::<f64>::new().with_bounds(0.0, 100.0);
        assert_eq!(settings.validate(), Err(KMeansError::InvalidBounds { width: 0.0, height: 100.0 }));
        #[allow(clippy::reversed_empty_ranges)]
        let settings = SessionSettings::<f64>::new().with_count_range(100..=10);
        assert_eq!(settings.validate(), Err(KMeansError::InvalidRange { name: "point count", start: 100, end: 10 }));
        // a run without centroids is no clustering
        let settings = SessionSettings::<f64>::new().with_k_range(0..=3);
        assert_eq!(settings.validate(), Err(KMeansError::InvalidRange { name: "k", start: 0, end: 3 }));
        let settings = SessionSettings::<f32>::new().with_count_range(0..=10);
        assert_eq!(settings.validate(), Err(KMeansError::InvalidRange { name: "point count", start: 0, end: 10 }));
    }
}
