//! # sp500-wma - S&P 500 Monthly Weighted Moving Average Analysis
//!
//! A small analysis library and CLI for historical S&P 500 price data:
//! - Monthly volume-weighted average prices from raw CSV history
//! - Trailing 4-month weighted moving average (weights 4/3/2/1)
//! - Best and worst month selection with a plain-text report
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> Result<(), sp500_wma::error::PipelineError> {
//!     let summary = sp500_wma::pipeline::run(
//!         Path::new("sp500_history.csv"),
//!         Path::new("sp500_output.txt"),
//!     )?;
//!     println!("Analyzed {} months", summary.months);
//!     Ok(())
//! }
//! ```

// Core modules - these contain the main functionality
pub mod analysis;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;

// Prelude for convenient imports
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! Import this module to get the most commonly used types and functions:
    //! ```rust
    //! use sp500_wma::prelude::*;
    //! ```

    pub use crate::analysis::{aggregate_monthly, find_extremes, weighted_moving_average};
    pub use crate::error::PipelineError;
    pub use crate::models::{MonthKey, MonthlyAverage, MonthlyExtremes, MovingAveragePoint};
    pub use crate::pipeline::{run, PipelineSummary};
}

// Re-export some commonly used utilities
pub use utils::{init_logger, Logger, Timer};
