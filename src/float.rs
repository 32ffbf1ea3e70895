use std::fmt;
use std::iter::Sum;
use std::ops::AddAssign;

use num_traits::{FromPrimitive, NumAssignOps, NumCast};
use rand::distributions::uniform::SampleUniform;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. Point and centroid coordinates are
/// stored with this type.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + NumAssignOps
    + for<'a> AddAssign<&'a Self>
    + SampleUniform
    + ndarray::ScalarOperand
    + approx::AbsDiffEq<Epsilon = Self>
    + 'static
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}
