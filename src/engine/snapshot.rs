use super::algorithm::{Label, Phase};
use crate::palette::{self, Rgb};
use crate::{Float, Point};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// An owned copy of the engine state at one point in time.
///
/// `points[i]` carries `labels[i]`, and `centroids[j]` is the centroid of cluster `j`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<F> {
    pub points: Vec<Point<F>>,
    pub labels: Vec<Label>,
    pub centroids: Vec<Point<F>>,
    pub seed_centers: Vec<Point<F>>,
    pub phase: Phase,
}

impl<F: Float> Snapshot<F> {
    /// Points paired with the colour they should be drawn with.
    pub fn colored_points(&self) -> impl Iterator<Item = (Point<F>, Rgb)> + '_ {
        self.points
            .iter()
            .zip(self.labels.iter())
            .map(|(&point, &label)| (point, palette::color_for(label)))
    }

    /// Centroids paired with the colour of their cluster.
    pub fn colored_centroids(&self) -> impl Iterator<Item = (Point<F>, Rgb)> + '_ {
        self.centroids
            .iter()
            .enumerate()
            .map(|(j, &centroid)| (centroid, palette::color_for(Some(j))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::UNASSIGNED;
    use crate::palette::{CLUSTER_COLORS, UNASSIGNED_COLOR};

    fn snapshot() -> Snapshot<f64> {
        Snapshot {
            points: vec![Point::new(60., 60.), Point::new(70., 70.)],
            labels: vec![UNASSIGNED, Some(1)],
            centroids: vec![Point::new(60., 60.), Point::new(70., 70.)],
            seed_centers: vec![],
            phase: Phase::Assigned,
        }
    }

    #[test]
    fn points_are_colored_by_label() {
        let colors: Vec<Rgb> = snapshot().colored_points().map(|(_, c)| c).collect();
        assert_eq!(colors, vec![UNASSIGNED_COLOR, CLUSTER_COLORS[1]]);
    }

    #[test]
    fn centroids_are_colored_by_index() {
        let colors: Vec<Rgb> = snapshot().colored_centroids().map(|(_, c)| c).collect();
        assert_eq!(colors, vec![CLUSTER_COLORS[0], CLUSTER_COLORS[1]]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_to_json() {
        let snapshot = snapshot();
        let json = serde_json::to_string(&snapshot).expect("snapshot serialized");
        let loaded: Snapshot<f64> = serde_json::from_str(&json).expect("snapshot deserialized");
        assert_eq!(loaded, snapshot);
    }
}
