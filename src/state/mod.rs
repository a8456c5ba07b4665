//! Application state module

mod app_state;
pub mod forms;
mod submission;

pub use app_state::*;
pub use submission::*;
