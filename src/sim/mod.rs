pub mod driver;
pub mod executor;

pub use driver::run_batch;
pub use executor::execute;
