pub mod error;
pub mod ports;
pub mod validation;

pub use error::ApplicationResult;
