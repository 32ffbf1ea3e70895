mod algorithm;
mod generate;
mod snapshot;

pub use algorithm::*;
pub use generate::group_sizes;
pub use snapshot::*;
