pub mod extremes;
pub mod monthly;
pub mod weighted_ma;

pub use extremes::*;
pub use monthly::*;
pub use weighted_ma::*;
