pub(crate) mod health;
pub mod options;
pub mod recognize;

pub use health::health_check;
