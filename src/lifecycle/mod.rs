pub mod dashboard;
pub mod tracing;

pub use dashboard::Dashboard;
pub use self::tracing::setup_tracing;
