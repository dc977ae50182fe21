pub mod camera;
mod error;
pub mod session;
pub mod text;
pub mod viewport;

pub use crate::error::{Error, Result};
