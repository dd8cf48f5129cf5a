pub mod confusion;
pub mod metrics;
pub mod scenario;
