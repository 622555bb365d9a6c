#![allow(ambiguous_glob_reexports)]

pub mod group;
pub mod metadata;
pub mod mint;
pub mod set;

pub use group::*;
pub use metadata::*;
pub use mint::*;
pub use set::*;
