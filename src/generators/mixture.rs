use crate::{memory::*, Bounds, Point};
use super::gaussian::sample_normal;
use rand::prelude::*;

/// Amount of mixture components for a point set of **count** points: one per 30 points, between 2 and 5.
pub(crate) fn center_count(count: usize) -> usize {
    (count / 30).clamp(2, 5)
}

#[inline(always)] pub fn calculate<T: Primitive>(count: usize, bounds: &Bounds<T>, rnd: &mut dyn RngCore) -> Vec<Point<T>> {
    let centers: Vec<(T, T)> = (0..center_count(count))
        .map(|_| (rnd.gen_range(T::zero()..bounds.width), rnd.gen_range(T::zero()..bounds.height)))
        .collect();
    let fifteen = T::cast_f64(15.0);
    let (std_dev_x, std_dev_y) = (bounds.width / fifteen, bounds.height / fifteen);

    (0..count)
        .map(|_| {
            let (cx, cy) = centers[rnd.gen_range(0..centers.len())];
            Point::new(sample_normal(cx, std_dev_x, rnd), sample_normal(cy, std_dev_y, rnd))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_counts() {
        assert_eq!(center_count(10), 2);
        assert_eq!(center_count(59), 2);
        assert_eq!(center_count(60), 2);
        assert_eq!(center_count(90), 3);
        assert_eq!(center_count(149), 4);
        assert_eq!(center_count(150), 5);
        assert_eq!(center_count(1000), 5);
    }

    #[test]
    fn points_gather_around_few_centers() {
        let mut rnd = rand::rngs::StdRng::seed_from_u64(3);
        let bounds = Bounds { width: 600.0f64, height: 600.0 };
        let points = calculate(300, &bounds, &mut rnd);
        assert_eq!(points.len(), 300);
        assert!(points.iter().all(|p| p.is_finite()));
        // With 5 components of std dev 40, almost every point has many close neighbours
        let crowded = points.iter()
            .filter(|p| points.iter().filter(|q| (p.x - q.x).hypot(p.y - q.y) < 80.0).count() > 10)
            .count();
        assert!(crowded > 240, "only {} points in dense regions", crowded);
    }
}
