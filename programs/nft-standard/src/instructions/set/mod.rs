pub mod exclude_from_set;
pub mod include_in_set;

pub use exclude_from_set::*;
pub use include_in_set::*;
