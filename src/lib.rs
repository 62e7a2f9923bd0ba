pub mod cleaner;
pub mod conventional;
pub mod domain;
pub mod error;
pub mod git;
pub mod switcher;
pub mod ui;

pub use error::{GitChoresError, Result};
