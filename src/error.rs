//! Error types in kmeans-stepper
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// An error when building the canvas configuration with an invalid parameter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CanvasParamsError {
    #[error("canvas width cannot be 0")]
    Width,
    #[error("canvas height cannot be 0")]
    Height,
    #[error("margin {margin} leaves no drawable area on a {width}x{height} canvas")]
    Margin { margin: u32, width: u32, height: u32 },
    #[error("seed margin {seed_margin} leaves no room for seed centers on a {width}x{height} canvas")]
    SeedMargin {
        seed_margin: u32,
        width: u32,
        height: u32,
    },
    #[error("spread must be finite and non-negative, got {0}")]
    Spread(f64),
    #[error("base center #{index} ({x}, {y}) lies outside the canvas")]
    BaseCenter { index: usize, x: u32, y: u32 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// When any of the canvas parameters are set the wrong value
    #[error("invalid canvas parameter: {0}")]
    InvalidParams(#[from] CanvasParamsError),
    /// When a value typed by the user is not a positive integer
    #[error("invalid {field}: expected a positive integer, got {value:?}")]
    InvalidInput { field: &'static str, value: String },
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    /// When the thread owning the engine is gone
    #[error("the engine worker has shut down")]
    WorkerDisconnected,
}
