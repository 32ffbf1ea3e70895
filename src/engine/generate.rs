//! Synthetic dataset generation for a demonstration run.
//!
//! Points are scattered in gaussian "blobs" around a list of seed centers, clamped to the
//! canvas, shuffled, and the initial centroids are sampled among them.

use crate::geometry::clamp_to_canvas;
use crate::{CanvasValidParams, Float, Point};
use log::trace;
use ndarray::{Array2, Axis};
use ndarray_rand::rand::seq::{index, SliceRandom};
use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::StandardNormal;

/// Number of points generated around each of the `n_clusters` seed centers.
///
/// Every seed gets `n_points / n_clusters` points and the first `n_points % n_clusters`
/// seeds get one extra point each. Without clusters there is nothing to distribute.
pub fn group_sizes(n_points: usize, n_clusters: usize) -> Vec<usize> {
    if n_clusters == 0 {
        return Vec::new();
    }
    let (per_cluster, remaining) = (n_points / n_clusters, n_points % n_clusters);
    (0..n_clusters)
        .map(|i| per_cluster + usize::from(i < remaining))
        .collect()
}

/// Picks `n_clusters` seed centers: the canonical ones first, then random integer positions
/// drawn uniformly within the seed margin.
pub(crate) fn seed_centers<F: Float>(
    canvas: &CanvasValidParams,
    n_clusters: usize,
    rng: &mut impl Rng,
) -> Vec<Point<F>> {
    let ((x_lo, x_hi), (y_lo, y_hi)) = canvas.seed_bounds();
    let mut seeds: Vec<Point<F>> = canvas
        .base_centers()
        .iter()
        .take(n_clusters)
        .map(|&(x, y)| Point::new(F::cast(x), F::cast(y)))
        .collect();

    while seeds.len() < n_clusters {
        let x = rng.gen_range(x_lo..=x_hi);
        let y = rng.gen_range(y_lo..=y_hi);
        trace!("drew extra seed center #{} at ({}, {})", seeds.len(), x, y);
        seeds.push(Point::new(F::cast(x), F::cast(y)));
    }
    seeds
}

/// Generates `n_points` observations around `seeds`, with shape `(n_points, 2)`.
///
/// Each coordinate is the seed coordinate plus a gaussian offset of standard deviation
/// `canvas.spread()`, truncated to an integer and clamped into the canvas margins. The rows
/// are shuffled so that their order does not reveal which seed they came from.
pub(crate) fn scatter_points<F: Float>(
    canvas: &CanvasValidParams,
    seeds: &[Point<F>],
    n_points: usize,
    rng: &mut impl Rng,
) -> Array2<F> {
    let (x_lo, x_hi) = canvas.x_bounds();
    let (y_lo, y_hi) = canvas.y_bounds();
    let spread = canvas.spread();

    let mut rows: Vec<[F; 2]> = Vec::with_capacity(n_points);
    for (seed, size) in seeds.iter().zip(group_sizes(n_points, seeds.len())) {
        for _ in 0..size {
            let offset_x: f64 = rng.sample::<f64, _>(StandardNormal) * spread;
            let offset_y: f64 = rng.sample::<f64, _>(StandardNormal) * spread;
            rows.push([
                clamp_to_canvas(seed.x + F::cast(offset_x), x_lo, x_hi),
                clamp_to_canvas(seed.y + F::cast(offset_y), y_lo, y_hi),
            ]);
        }
    }
    rows.shuffle(rng);

    Array2::from_shape_fn((rows.len(), 2), |(i, j)| rows[i][j])
}

/// Samples `n_clusters` initial centroids among `points`, uniformly and without replacement.
///
/// When there are more clusters than points every point becomes a centroid and the extra
/// centroids are drawn again among the points, so some centroids coincide. Without any point
/// the seed centers, clamped into the canvas, stand in as centroids.
pub(crate) fn initial_centroids<F: Float>(
    canvas: &CanvasValidParams,
    points: &Array2<F>,
    seeds: &[Point<F>],
    n_clusters: usize,
    rng: &mut impl Rng,
) -> Array2<F> {
    let n_samples = points.nrows();

    if n_samples == 0 {
        let (x_lo, x_hi) = canvas.x_bounds();
        let (y_lo, y_hi) = canvas.y_bounds();
        return Array2::from_shape_fn((n_clusters, 2), |(i, j)| match j {
            0 => clamp_to_canvas(seeds[i].x, x_lo, x_hi),
            _ => clamp_to_canvas(seeds[i].y, y_lo, y_hi),
        });
    }

    let mut indices = index::sample(rng, n_samples, n_clusters.min(n_samples)).into_vec();
    while indices.len() < n_clusters {
        indices.push(rng.gen_range(0..n_samples));
    }
    points.select(Axis(0), &indices)
}
