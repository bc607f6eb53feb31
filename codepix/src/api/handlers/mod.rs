pub mod ai;
pub mod health;

pub use health::{health_check, root};
