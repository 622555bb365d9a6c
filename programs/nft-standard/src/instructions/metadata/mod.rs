pub mod create_onchain_metadata;
pub mod update_reference_metadata;

pub use create_onchain_metadata::*;
pub use update_reference_metadata::*;
