pub mod csv_service;
pub mod report_service;

pub use csv_service::*;
pub use report_service::*;
