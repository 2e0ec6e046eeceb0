pub mod error;
pub mod io;
pub mod orf;
pub mod pipeline;
pub mod seq;

pub use error::{OrfError, OrfResult};
pub use pipeline::{run, RunSummary};
