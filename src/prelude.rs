//! kmeans-stepper prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! functions that you can import easily as a group.
//!

#[doc(no_inline)]
pub use crate::error::{Error, Result};

#[doc(no_inline)]
pub use crate::param_guard::ParamGuard;

#[doc(no_inline)]
pub use crate::engine::{ClusterEngine, Label, Phase, Snapshot, UNASSIGNED};

#[doc(no_inline)]
pub use crate::hyperparams::{CanvasParams, CanvasValidParams};

#[doc(no_inline)]
pub use crate::command::Command;

#[doc(no_inline)]
pub use crate::{Float, Point};
