pub mod cli;
pub mod error;
pub mod git;
pub mod heat;
pub mod logging;
pub mod model;
pub mod registry;
pub mod scan;
pub mod util;

pub use error::{ContribError, Result};
