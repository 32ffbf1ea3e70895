use crate::Float;
use ndarray::{ArrayBase, ArrayView1, Data, Ix1, Ix2};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A position on the canvas. Used both for data samples and for centroids.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point<F> {
    pub fn new(x: F, y: F) -> Self {
        Point { x, y }
    }

    /// Reads a point out of a `(x, y)` row of a points or centroids matrix.
    pub fn from_row(row: ArrayView1<F>) -> Self {
        Point::new(row[0], row[1])
    }

    pub fn distance(&self, other: &Point<F>) -> F {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl<F: Float> From<(F, F)> for Point<F> {
    fn from((x, y): (F, F)) -> Self {
        Point::new(x, y)
    }
}

impl<F: Float> From<Point<F>> for [F; 2] {
    fn from(p: Point<F>) -> Self {
        [p.x, p.y]
    }
}

/// Euclidean distance between two observations.
pub fn distance<F: Float>(
    a: &ArrayBase<impl Data<Elem = F>, Ix1>,
    b: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> F {
    a.iter()
        .zip(b.iter())
        .map(|(&a, &b)| (a - b) * (a - b))
        .sum::<F>()
        .sqrt()
}

/// Given a matrix of centroids with shape (n_centroids, 2) and an observation,
/// return the index of the closest centroid together with its distance.
///
/// Centroids are scanned in index order and only a strictly smaller distance replaces the
/// current best, so among equidistant centroids the lowest index wins.
///
/// Returns `None` when there are no centroids.
pub fn closest_centroid<F: Float>(
    // (n_centroids, 2)
    centroids: &ArrayBase<impl Data<Elem = F>, Ix2>,
    // (2)
    observation: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> Option<(usize, F)> {
    let mut closest: Option<(usize, F)> = None;

    for (centroid_index, centroid) in centroids.rows().into_iter().enumerate() {
        let dist = distance(&centroid, observation);
        let is_closer = match closest {
            Some((_, minimum_distance)) => dist < minimum_distance,
            None => true,
        };
        if is_closer {
            closest = Some((centroid_index, dist));
        }
    }
    closest
}

/// Truncates `value` toward zero and clamps it into `[lo, hi]`.
pub(crate) fn clamp_to_canvas<F: Float>(value: F, lo: u32, hi: u32) -> F {
    let (lo, hi) = (F::cast(lo), F::cast(hi));
    let value = value.trunc();
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn distance_is_euclidean() {
        assert_abs_diff_eq!(distance(&array![0., 0.], &array![3., 4.]), 5.);
        assert_abs_diff_eq!(
            Point::new(1.0f32, 1.0).distance(&Point::new(4., 5.)),
            5.0f32
        );
    }

    #[test]
    fn equidistant_centroids_pick_the_lowest_index() {
        let centroids = array![[10., 0.], [-10., 0.]];
        let (index, dist) = closest_centroid(&centroids, &array![0., 0.]).unwrap();
        assert_eq!(index, 0);
        assert_abs_diff_eq!(dist, 10.);

        let centroids = array![[5., 5.], [0., 10.], [10., 0.], [0., 10.]];
        let (index, _) = closest_centroid(&centroids, &array![0., 10.]).unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn oracle_test_for_closest_centroid() {
        let centroids = array![[0., 0.], [1., 2.], [20., 0.], [0., 20.],];
        let observations = array![[1., 0.6], [20., 2.], [20., 0.], [7., 20.],];
        let expected = [0, 2, 2, 3];

        for (observation, &expected) in observations.rows().into_iter().zip(expected.iter()) {
            assert_eq!(
                closest_centroid(&centroids, &observation).map(|(i, _)| i),
                Some(expected)
            );
        }
    }

    #[test]
    fn no_centroids_no_closest() {
        let centroids = ndarray::Array2::<f64>::zeros((0, 2));
        assert_eq!(closest_centroid(&centroids, &array![1., 1.]), None);
    }

    #[test]
    fn clamping_truncates_then_bounds() {
        assert_abs_diff_eq!(clamp_to_canvas(123.9, 50, 550), 123.);
        assert_abs_diff_eq!(clamp_to_canvas(-12.3, 50, 550), 50.);
        assert_abs_diff_eq!(clamp_to_canvas(49.99, 50, 550), 50.);
        assert_abs_diff_eq!(clamp_to_canvas(550.7, 50, 550), 550.);
        assert_abs_diff_eq!(clamp_to_canvas(9000., 50, 550), 550.);
    }
}
