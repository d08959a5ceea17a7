// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification rules for the custodial liquidity pool.
//
// STRUCTURE:
//
// - model.rs         : Ghost state and state snapshots
// - custody_specs.rs : Deposit/withdraw entry-point rules
// - peg_specs.rs     : Ledger predicate rules
//
// USAGE:
// - Unit tests: cargo test -p liquidity-pool
// - Certora build: cargo build --features certora -p liquidity-pool
// - Verification: certoraSorobanProver liquidity_pool.conf
//
// ============================================================================

pub mod model;

pub mod custody_specs;
pub mod peg_specs;
