pub mod aggregate;
mod dataset;
mod loader;
mod report;
mod session;

#[cfg(test)]
pub(crate) mod tests;

pub use dataset::{Dataset, FilteredView};
pub use loader::{load_dataset, read_records};
pub use report::{Metrics, Report};
pub use session::Session;
