use crate::error::CanvasParamsError;
use crate::param_guard::ParamGuard;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Canonical seed centers, laid out for the default 600x600 plot area.
pub const DEFAULT_BASE_CENTERS: [(u32, u32); 9] = [
    (200, 200),
    (200, 400),
    (400, 300),
    (400, 150),
    (400, 450),
    (300, 300),
    (150, 300),
    (350, 200),
    (350, 400),
];

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// The geometry of the drawing region the [engine](crate::ClusterEngine) generates points on.
pub struct CanvasValidParams {
    /// Width of the drawing region, in canvas units.
    width: u32,
    /// Height of the drawing region, in canvas units.
    height: u32,
    /// Generated points are clamped to `[margin, dimension - margin]` on each axis.
    margin: u32,
    /// Extra seed centers are drawn from `[seed_margin, dimension - seed_margin]`.
    seed_margin: u32,
    /// Standard deviation of the gaussian offset applied around a seed center.
    spread: f64,
    /// Seed centers used, in order, before random ones are drawn.
    base_centers: Vec<(u32, u32)>,
}

#[derive(Clone, Debug, PartialEq)]
/// A helper struct used to construct a set of [valid canvas parameters](CanvasValidParams)
/// (using the builder pattern).
pub struct CanvasParams(CanvasValidParams);

impl Default for CanvasParams {
    fn default() -> Self {
        Self::new(600, 600)
    }
}

impl CanvasParams {
    /// `new` lets us configure a canvas of `width` by `height` units.
    ///
    /// Defaults are provided if optional parameters are not specified:
    /// * `margin = 50`
    /// * `seed_margin = 150`
    /// * `spread = 50.0`
    /// * `base_centers = DEFAULT_BASE_CENTERS`
    pub fn new(width: u32, height: u32) -> Self {
        Self(CanvasValidParams {
            width,
            height,
            margin: 50,
            seed_margin: 150,
            spread: 50.0,
            base_centers: DEFAULT_BASE_CENTERS.to_vec(),
        })
    }

    /// Change the value of `margin`
    pub fn margin(mut self, margin: u32) -> Self {
        self.0.margin = margin;
        self
    }

    /// Change the value of `seed_margin`
    pub fn seed_margin(mut self, seed_margin: u32) -> Self {
        self.0.seed_margin = seed_margin;
        self
    }

    /// Change the value of `spread`
    pub fn spread(mut self, spread: f64) -> Self {
        self.0.spread = spread;
        self
    }

    /// Replace the canonical seed centers
    pub fn base_centers(mut self, base_centers: Vec<(u32, u32)>) -> Self {
        self.0.base_centers = base_centers;
        self
    }
}

impl ParamGuard for CanvasParams {
    type Checked = CanvasValidParams;
    type Error = CanvasParamsError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        let p = &self.0;
        let too_wide = |m: u32| 2 * u64::from(m) > u64::from(p.width.min(p.height));

        if p.width == 0 {
            Err(CanvasParamsError::Width)
        } else if p.height == 0 {
            Err(CanvasParamsError::Height)
        } else if too_wide(p.margin) {
            Err(CanvasParamsError::Margin {
                margin: p.margin,
                width: p.width,
                height: p.height,
            })
        } else if too_wide(p.seed_margin) {
            Err(CanvasParamsError::SeedMargin {
                seed_margin: p.seed_margin,
                width: p.width,
                height: p.height,
            })
        } else if !p.spread.is_finite() || p.spread < 0. {
            Err(CanvasParamsError::Spread(p.spread))
        } else if let Some((index, &(x, y))) = p
            .base_centers
            .iter()
            .enumerate()
            .find(|(_, center)| center.0 > p.width || center.1 > p.height)
        {
            Err(CanvasParamsError::BaseCenter { index, x, y })
        } else {
            Ok(p)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl CanvasValidParams {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    pub fn seed_margin(&self) -> u32 {
        self.seed_margin
    }

    /// Standard deviation of the per-axis gaussian offset around a seed center.
    pub fn spread(&self) -> f64 {
        self.spread
    }

    pub fn base_centers(&self) -> &[(u32, u32)] {
        &self.base_centers
    }

    /// Inclusive range generated x coordinates are clamped to.
    pub fn x_bounds(&self) -> (u32, u32) {
        (self.margin, self.width - self.margin)
    }

    /// Inclusive range generated y coordinates are clamped to.
    pub fn y_bounds(&self) -> (u32, u32) {
        (self.margin, self.height - self.margin)
    }

    /// Inclusive ranges random seed centers are drawn from, as `(x_bounds, y_bounds)`.
    pub fn seed_bounds(&self) -> ((u32, u32), (u32, u32)) {
        (
            (self.seed_margin, self.width - self.seed_margin),
            (self.seed_margin, self.height - self.seed_margin),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{CanvasParams, CanvasValidParams, DEFAULT_BASE_CENTERS};
    use crate::error::CanvasParamsError;
    use crate::ParamGuard;

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<CanvasParams>();
        has_autotraits::<CanvasValidParams>();
    }

    #[test]
    fn defaults_match_the_plot_area() {
        let params = CanvasParams::default().check_unwrap();
        assert_eq!(params.width(), 600);
        assert_eq!(params.height(), 600);
        assert_eq!(params.x_bounds(), (50, 550));
        assert_eq!(params.y_bounds(), (50, 550));
        assert_eq!(params.seed_bounds(), ((150, 450), (150, 450)));
        assert_eq!(params.base_centers(), &DEFAULT_BASE_CENTERS[..]);
    }

    #[test]
    fn width_cannot_be_zero() {
        let res = CanvasParams::new(0, 10).check();
        assert!(matches!(res, Err(CanvasParamsError::Width)))
    }

    #[test]
    fn height_cannot_be_zero() {
        let res = CanvasParams::new(10, 0).check();
        assert!(matches!(res, Err(CanvasParamsError::Height)))
    }

    #[test]
    fn margin_must_leave_room() {
        let res = CanvasParams::new(600, 80).margin(41).check();
        assert!(matches!(res, Err(CanvasParamsError::Margin { margin: 41, .. })));

        let res = CanvasParams::new(600, 80)
            .margin(40)
            .seed_margin(10)
            .base_centers(vec![])
            .check();
        assert!(res.is_ok());
    }

    #[test]
    fn seed_margin_must_leave_room() {
        let res = CanvasParams::new(200, 200).seed_margin(101).check();
        assert!(matches!(
            res,
            Err(CanvasParamsError::SeedMargin {
                seed_margin: 101,
                ..
            })
        ))
    }

    #[test]
    fn spread_has_to_be_finite_and_non_negative() {
        let res = CanvasParams::default().spread(-1.).check();
        assert!(matches!(res, Err(CanvasParamsError::Spread(_))));

        let res = CanvasParams::default().spread(f64::NAN).check();
        assert!(matches!(res, Err(CanvasParamsError::Spread(_))));

        assert!(CanvasParams::default().spread(0.).check().is_ok());
    }

    #[test]
    fn base_centers_must_be_on_canvas() {
        let res = CanvasParams::new(300, 300).seed_margin(100).check();
        assert_eq!(
            res,
            Err(CanvasParamsError::BaseCenter {
                index: 1,
                x: 200,
                y: 400
            })
        );
    }

    #[test]
    fn check_ref_agrees_with_check() {
        let params = CanvasParams::new(400, 300)
            .margin(20)
            .spread(10.)
            .base_centers(vec![(100, 100), (300, 200)]);
        let by_ref = params.check_ref().map(Clone::clone);
        assert!(by_ref.is_ok());
        assert_eq!(by_ref, params.check());
    }
}
