//! Test helpers for NFT Standard tests
//!
//! NOTE: This module is written for mollusk-svm 0.5.1 / litesvm 0.7 with solana-sdk 2.2
//! - All imports from solana_sdk::* (not modular crates like solana_pubkey)
//! - Token accounts MUST have owner explicitly set to token program

pub mod serialization;

pub use errors::*;

use litesvm::LiteSVM;
use mollusk_svm::Mollusk;
use mollusk_svm_programs_token::token2022;
use std::path::PathBuf;

/// Directory holding the compiled program (workspace_root/target/deploy)
fn deploy_dir() -> PathBuf {
    // From programs/nft-standard/, go up 2 levels to workspace root
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent() // programs/
        .unwrap()
        .parent() // workspace root
        .unwrap()
        .join("target/deploy")
}

/// Setup Mollusk with the program and Token-2022
///
/// Uses SBF_OUT_DIR to tell Mollusk where to find the program binary.
pub fn setup_mollusk() -> Mollusk {
    std::env::set_var("SBF_OUT_DIR", deploy_dir());

    let mut mollusk = Mollusk::new(&instructions::PROGRAM_ID, "nft_standard");

    // Token-2022 owns every mint the program reads
    token2022::add_program(&mut mollusk);

    mollusk
}

/// Initialize LiteSVM with the program loaded (Token-2022 ships with LiteSVM)
pub fn setup_litesvm() -> LiteSVM {
    let mut svm = LiteSVM::new();

    let program_path = deploy_dir().join("nft_standard.so");
    svm.add_program_from_file(instructions::PROGRAM_ID, program_path.to_str().unwrap())
        .expect("Failed to load nft_standard program. Run 'anchor build' first.");

    svm
}
