//! `kmeans-stepper` drives an interactive, one-click-at-a-time demonstration of the
//! k-means clustering algorithm.
//!
//! ## The big picture
//!
//! A classical k-means implementation loops assignment and update steps until convergence.
//! When teaching the algorithm that loop is exactly what we want to take apart: every click
//! of a button should perform a single pass and the partition should be redrawn in between.
//!
//! This crate provides the engine behind such a demonstration. A user interface (a window,
//! a terminal, a web page...) owns a [`ClusterEngine`] and calls into it:
//!
//! * [`initialize`](ClusterEngine::initialize) generates a synthetic 2D dataset made of
//!   gaussian blobs around a set of seed centers and picks the initial centroids;
//! * [`assign_step`](ClusterEngine::assign_step) labels every point with its nearest centroid;
//! * [`update_step`](ClusterEngine::update_step) moves every centroid to the mean of its members.
//!
//! The state can then be read back (points, labels, centroids) to render the current partition,
//! coloured through the [`palette`].
//!
//! ## Current state
//!
//! The engine works in two dimensions on a fixed rectangular canvas, configured through
//! [`CanvasParams`]. Randomness is injected, so that a seeded generator reproduces the exact
//! same demonstration. Operations can be queued to an engine living on its own thread
//! through an [`EngineWorker`].
//!
//! Convergence detection and cluster quality metrics are deliberately absent: deciding when to
//! stop is left to the person clicking.
pub mod error;
mod float;
mod geometry;
mod hyperparams;
pub mod palette;
mod param_guard;
pub mod prelude;

mod command;
mod engine;
mod worker;

#[cfg(feature = "benchmarks")]
pub mod benchmarks;

pub use command::{parse_positive, Command};
pub use engine::*;
pub use error::{CanvasParamsError, Error, Result};
pub use float::Float;
pub use geometry::{closest_centroid, distance, Point};
pub use hyperparams::*;
pub use param_guard::ParamGuard;
pub use worker::EngineWorker;
