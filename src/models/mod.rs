pub mod month_key;
pub mod monthly;

pub use month_key::*;
pub use monthly::*;
