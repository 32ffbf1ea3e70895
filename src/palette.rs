//! Colours used to render a partition.
//!
//! Every cluster gets an entry of [`CLUSTER_COLORS`], cycling when there are more clusters
//! than colours. Points that have not been assigned yet are drawn in [`UNASSIGNED_COLOR`].

use crate::engine::Label;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const CLUSTER_COLORS: [Rgb; 9] = [
    Rgb(255, 0, 0),
    Rgb(0, 255, 0),
    Rgb(0, 0, 255),
    Rgb(255, 255, 0),
    Rgb(255, 0, 255),
    Rgb(0, 255, 255),
    Rgb(128, 0, 0),
    Rgb(0, 128, 0),
    Rgb(0, 0, 128),
];

pub const UNASSIGNED_COLOR: Rgb = Rgb(0, 0, 0);

/// Radius of a point marker, in canvas units.
pub const POINT_RADIUS: u32 = 4;

/// Radius of a centroid marker, drawn with an outline to stand out from the points.
pub const CENTROID_RADIUS: u32 = 8;

pub fn color_for(label: Label) -> Rgb {
    match label {
        Some(cluster) => CLUSTER_COLORS[cluster % CLUSTER_COLORS.len()],
        None => UNASSIGNED_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unassigned_is_neutral() {
        assert_eq!(color_for(None), UNASSIGNED_COLOR);
        assert!(!CLUSTER_COLORS.contains(&UNASSIGNED_COLOR));
    }

    #[test]
    fn colors_cycle_past_the_palette() {
        assert_eq!(color_for(Some(0)), Rgb(255, 0, 0));
        assert_eq!(color_for(Some(8)), Rgb(0, 0, 128));
        assert_eq!(color_for(Some(9)), color_for(Some(0)));
        assert_eq!(color_for(Some(22)), color_for(Some(4)));
    }
}
