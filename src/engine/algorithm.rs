use super::generate::{initial_centroids, scatter_points, seed_centers};
use super::snapshot::Snapshot;
use crate::command::Command;
use crate::geometry::closest_centroid;
use crate::{CanvasParams, CanvasValidParams, Float, Point};
use log::{debug, info};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Zip};
use ndarray_rand::rand::rngs::SmallRng;
use ndarray_rand::rand::{Rng, SeedableRng};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// The cluster a point belongs to: the index of a centroid, or [`UNASSIGNED`].
pub type Label = Option<usize>;

/// Label of a point that has not gone through an assignment pass yet.
pub const UNASSIGNED: Label = None;

/// Which operation last touched the engine.
///
/// The engine records the phase for display purposes only: any operation can be called at any
/// time.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Initialized,
    Assigned,
    Updated,
}

/// A k-means run that advances one pass at a time.
///
/// The engine owns three collections:
/// - the points, a `(n_points, 2)` matrix generated by [`initialize`](Self::initialize);
/// - the centroids, a `(n_clusters, 2)` matrix where row `j` is cluster `j`;
/// - the labels, one per point, either [`UNASSIGNED`] or the index of a centroid.
///
/// Unlike a regular k-means fit there is no loop: every call to
/// [`assign_step`](Self::assign_step) or [`update_step`](Self::update_step) performs exactly one
/// pass, leaving it to the caller to render the partition in between and decide when to stop.
///
/// ## Tutorial
///
/// ```
/// use kmeans_stepper::{CanvasParams, ClusterEngine, ParamGuard, UNASSIGNED};
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// // Our random number generator, seeded for reproducibility
/// let rng = SmallRng::seed_from_u64(42);
/// let canvas = CanvasParams::new(600, 600).margin(50).check().expect("valid canvas");
/// let mut engine = ClusterEngine::<f64, _>::new(canvas, rng);
///
/// // 100 points scattered around 3 seed centers, nothing assigned yet
/// engine.initialize(100, 3);
/// assert_eq!(engine.points().nrows(), 100);
/// assert_eq!(engine.centroids().nrows(), 3);
/// assert!(engine.labels().iter().all(|&label| label == UNASSIGNED));
///
/// // One click on "assign", then one click on "update"
/// engine.assign_step();
/// assert!(engine.labels().iter().all(|label| label.is_some()));
/// engine.update_step();
///
/// let sizes = engine.cluster_sizes();
/// assert_eq!(sizes.iter().sum::<usize>(), 100);
/// ```
#[derive(Clone, Debug)]
pub struct ClusterEngine<F: Float, R: Rng = SmallRng> {
    canvas: CanvasValidParams,
    rng: R,
    seed_centers: Vec<Point<F>>,
    points: Array2<F>,
    centroids: Array2<F>,
    labels: Array1<Label>,
    phase: Phase,
}

impl<F: Float> ClusterEngine<F, SmallRng> {
    /// Default canvas configuration, to be adjusted and checked before building an engine.
    pub fn params() -> CanvasParams {
        CanvasParams::default()
    }

    /// Engine seeded from the operating system, for interactive use.
    pub fn from_entropy(canvas: CanvasValidParams) -> Self {
        Self::new(canvas, SmallRng::from_entropy())
    }

    /// Engine producing the same sequence of demonstrations for the same `seed`.
    pub fn seeded(canvas: CanvasValidParams, seed: u64) -> Self {
        Self::new(canvas, SmallRng::seed_from_u64(seed))
    }
}

impl<F: Float, R: Rng> ClusterEngine<F, R> {
    /// An empty engine drawing its randomness from `rng`.
    pub fn new(canvas: CanvasValidParams, rng: R) -> Self {
        ClusterEngine {
            canvas,
            rng,
            seed_centers: Vec::new(),
            points: Array2::zeros((0, 2)),
            centroids: Array2::zeros((0, 2)),
            labels: Array1::from_elem(0, UNASSIGNED),
            phase: Phase::Uninitialized,
        }
    }

    /// Generates a fresh dataset of `n_points` observations around `n_clusters` seed centers
    /// and picks `n_clusters` of them as initial centroids. Every label is reset to
    /// [`UNASSIGNED`].
    ///
    /// The previous state is discarded. Asking for more clusters than points yields duplicate
    /// centroids; asking for no cluster at all yields an empty engine.
    pub fn initialize(&mut self, n_points: usize, n_clusters: usize) {
        let seed_centers = seed_centers(&self.canvas, n_clusters, &mut self.rng);
        let points = scatter_points(&self.canvas, &seed_centers, n_points, &mut self.rng);
        let centroids = initial_centroids(
            &self.canvas,
            &points,
            &seed_centers,
            n_clusters,
            &mut self.rng,
        );

        info!(
            "initialized {} points around {} seed centers",
            points.nrows(),
            seed_centers.len()
        );

        self.labels = Array1::from_elem(points.nrows(), UNASSIGNED);
        self.seed_centers = seed_centers;
        self.points = points;
        self.centroids = centroids;
        self.phase = Phase::Initialized;
    }

    /// Assignment pass: labels every point with the index of its closest centroid (euclidean
    /// distance, lowest index on ties).
    ///
    /// Without points or centroids this is a no-op.
    pub fn assign_step(&mut self) {
        if self.points.nrows() == 0 || self.centroids.nrows() == 0 {
            debug!("assignment pass skipped: nothing to assign");
            return;
        }

        let centroids = &self.centroids;
        let mut relabelled = 0;
        Zip::from(self.points.rows())
            .and(&mut self.labels)
            .for_each(|point, label| {
                if let Some((closest, _)) = closest_centroid(centroids, &point) {
                    if *label != Some(closest) {
                        relabelled += 1;
                    }
                    *label = Some(closest);
                }
            });

        debug!(
            "assignment pass relabelled {} of {} points",
            relabelled,
            self.points.nrows()
        );
        self.phase = Phase::Assigned;
    }

    /// Update pass: moves every centroid to the mean of the points currently labelled with its
    /// index, truncated toward zero to integer canvas coordinates.
    ///
    /// A centroid without members keeps its position. Labels are left untouched, so they may
    /// disagree with the new centroids until the next assignment pass.
    pub fn update_step(&mut self) {
        let n_clusters = self.centroids.nrows();
        if n_clusters == 0 {
            debug!("update pass skipped: no centroids");
            return;
        }

        let mut sums: Array2<F> = Array2::zeros((n_clusters, 2));
        let mut counts: Array1<usize> = Array1::zeros(n_clusters);
        Zip::from(self.points.rows())
            .and(&self.labels)
            .for_each(|point, label| {
                if let Some(cluster) = label.filter(|&c| c < n_clusters) {
                    let mut sum = sums.row_mut(cluster);
                    sum += &point;
                    counts[cluster] += 1;
                }
            });

        Zip::from(self.centroids.rows_mut())
            .and(sums.rows())
            .and(&counts)
            .for_each(|mut centroid, sum, &count| {
                if count > 0 {
                    let count = F::cast(count);
                    Zip::from(&mut centroid)
                        .and(&sum)
                        .for_each(|c, &s| *c = (s / count).trunc());
                }
            });

        debug!(
            "update pass moved {} centroids, {} empty clusters kept in place",
            counts.iter().filter(|&&c| c > 0).count(),
            counts.iter().filter(|&&c| c == 0).count()
        );
        self.phase = Phase::Updated;
    }

    /// Runs the operation a user interface asked for.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Initialize {
                n_points,
                n_clusters,
            } => self.initialize(n_points, n_clusters),
            Command::AssignStep => self.assign_step(),
            Command::UpdateStep => self.update_step(),
        }
    }

    /// Return the points as a matrix with shape `(n_points, 2)`.
    pub fn points(&self) -> ArrayView2<F> {
        self.points.view()
    }

    /// Return the centroids as a matrix with shape `(n_clusters, 2)`.
    pub fn centroids(&self) -> ArrayView2<F> {
        self.centroids.view()
    }

    /// Return one label per point, aligned with the rows of [`points`](Self::points).
    pub fn labels(&self) -> ArrayView1<Label> {
        self.labels.view()
    }

    /// Return the anchors the current points were generated around.
    pub fn seed_centers(&self) -> &[Point<F>] {
        &self.seed_centers
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn canvas(&self) -> &CanvasValidParams {
        &self.canvas
    }

    pub fn n_points(&self) -> usize {
        self.points.nrows()
    }

    pub fn n_clusters(&self) -> usize {
        self.centroids.nrows()
    }

    pub fn point(&self, index: usize) -> Option<Point<F>> {
        (index < self.points.nrows()).then(|| Point::from_row(self.points.row(index)))
    }

    pub fn centroid(&self, index: usize) -> Option<Point<F>> {
        (index < self.centroids.nrows()).then(|| Point::from_row(self.centroids.row(index)))
    }

    /// Iterates over every point together with its label.
    pub fn iter(&self) -> impl Iterator<Item = (Point<F>, Label)> + '_ {
        self.points
            .rows()
            .into_iter()
            .zip(self.labels.iter())
            .map(|(row, &label)| (Point::from_row(row), label))
    }

    /// Return the number of points currently labelled with each centroid index.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.n_clusters()];
        for cluster in self.labels.iter().flatten() {
            if let Some(size) = sizes.get_mut(*cluster) {
                *size += 1;
            }
        }
        sizes
    }

    /// Owned copy of the current state, for renderers living elsewhere.
    pub fn snapshot(&self) -> Snapshot<F> {
        Snapshot {
            points: self.iter().map(|(p, _)| p).collect(),
            labels: self.labels.to_vec(),
            centroids: self
                .centroids
                .rows()
                .into_iter()
                .map(Point::from_row)
                .collect(),
            seed_centers: self.seed_centers.clone(),
            phase: self.phase,
        }
    }
}
