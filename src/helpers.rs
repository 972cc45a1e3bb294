/// Clamp `val` into the inclusive range `[min, max]`. Used for user-facing counts and k.
pub(crate) fn clamp_inclusive(val: usize, range: &std::ops::RangeInclusive<usize>) -> usize {
    val.max(*range.start()).min(*range.end())
}

#[cfg(test)]
macro_rules! assert_approx_eq {
	($left: expr, $right: expr, $tol: expr) => ({
		match ($left, $right, $tol) {
			(left_val , right_val, tol_val) => {
				let delta = (left_val - right_val).abs();
				if !(delta < tol_val) {
					panic!(
						"assertion failed: `(left ≈ right)` \
						(left: `{}`, right: `{}`) \
						with ∆={:1.1e} (allowed ∆={:e})",
						left_val , right_val, delta, tol_val
					)
				}
			}
		}
	});
	($left: expr, $right: expr) => (assert_approx_eq!(($left), ($right), 1e-15))
}

#[cfg(test)]
pub(crate) mod testing {
	use crate::{Bounds, Centroid, ClusteringRun, Point, Primitive};

	/// Build unassigned points from `(x, y)` pairs.
	pub fn points<T: Primitive>(coords: &[(f64, f64)]) -> Vec<Point<T>> {
		coords.iter().map(|&(x, y)| Point::new(T::cast_f64(x), T::cast_f64(y))).collect()
	}

	pub fn centroids<T: Primitive>(coords: &[(f64, f64)]) -> Vec<Centroid<T>> {
		coords.iter().map(|&(x, y)| Centroid::new(T::cast_f64(x), T::cast_f64(y))).collect()
	}

	pub fn bounds<T: Primitive>(width: f64, height: f64) -> Bounds<T> {
		Bounds { width: T::cast_f64(width), height: T::cast_f64(height) }
	}

	/// Check that the per-point labels and the grouping view describe the same assignment.
	pub fn assert_grouping_consistent<T: Primitive>(run: &ClusteringRun<T>) {
		assert_eq!(run.clusters().len(), run.centroids().len());
		let mut seen = vec![false; run.points().len()];
		for (ci, members) in run.clusters().iter().enumerate() {
			for &pi in members {
				assert_eq!(run.points()[pi].cluster, Some(ci),
					"point {} is grouped into cluster {} but labelled {:?}", pi, ci, run.points()[pi].cluster);
				assert!(!seen[pi], "point {} appears in more than one cluster", pi);
				seen[pi] = true;
			}
		}
		for (pi, p) in run.points().iter().enumerate() {
			if let Some(ci) = p.cluster {
				assert!(ci < run.k(), "label {} out of range for k = {}", ci, run.k());
				assert!(seen[pi], "point {} is labelled {} but missing from the grouping", pi, ci);
			}
		}
	}
}



#[cfg(test)]
mod tests {
	#[test]
    fn clamp_inclusive() {
		let range = 10..=1000;
		assert_eq!(super::clamp_inclusive(0, &range), 10);
		assert_eq!(super::clamp_inclusive(10, &range), 10);
		assert_eq!(super::clamp_inclusive(500, &range), 500);
		assert_eq!(super::clamp_inclusive(1000, &range), 1000);
		assert_eq!(super::clamp_inclusive(5000, &range), 1000);
    }
}
