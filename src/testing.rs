//! Shared test tooling: the universal stage contract.
pub mod stage_contract;
