pub mod mint_nft;

pub use mint_nft::*;
