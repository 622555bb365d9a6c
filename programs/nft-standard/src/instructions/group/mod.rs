pub mod create_authorities_group;
pub mod update_group_authority;

pub use create_authorities_group::*;
pub use update_group_authority::*;
