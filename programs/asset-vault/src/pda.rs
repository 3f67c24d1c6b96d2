//! Address derivation helpers for off-chain callers.
//!
//! On-chain the same derivations are enforced by `seeds`/`bump` account
//! constraints; these helpers let clients and tests compute the addresses
//! without any on-chain state.

use anchor_lang::prelude::*;

use crate::constants::{VAULT_AUTHORITY_SEED, VAULT_SEED};
use crate::error::VaultError;

/// Derive the owner authority PDA for this program.
///
/// Deterministic: the same program id always yields the same (address, bump).
pub fn find_vault_authority_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[VAULT_AUTHORITY_SEED], program_id)
        .ok_or_else(|| error!(VaultError::DerivationExhausted))
}

/// Derive the vault token account PDA for the given asset mint.
pub fn find_vault_address(asset_mint: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[VAULT_SEED, asset_mint.as_ref()], program_id)
        .ok_or_else(|| error!(VaultError::DerivationExhausted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        let mint = Pubkey::new_unique();

        let (authority_a, authority_bump_a) = find_vault_authority_address(&crate::ID).unwrap();
        let (authority_b, authority_bump_b) = find_vault_authority_address(&crate::ID).unwrap();
        assert_eq!(authority_a, authority_b);
        assert_eq!(authority_bump_a, authority_bump_b);

        let (vault_a, vault_bump_a) = find_vault_address(&mint, &crate::ID).unwrap();
        let (vault_b, vault_bump_b) = find_vault_address(&mint, &crate::ID).unwrap();
        assert_eq!(vault_a, vault_b);
        assert_eq!(vault_bump_a, vault_bump_b);
    }

    #[test]
    fn test_distinct_mints_get_distinct_vaults() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let mint = Pubkey::new_unique();
            let (vault, _) = find_vault_address(&mint, &crate::ID).unwrap();
            assert!(seen.insert(vault), "vault address collision for {mint}");
        }
    }

    #[test]
    fn test_authority_and_vault_tags_never_collide() {
        let (authority, _) = find_vault_authority_address(&crate::ID).unwrap();
        for _ in 0..1000 {
            let mint = Pubkey::new_unique();
            let (vault, _) = find_vault_address(&mint, &crate::ID).unwrap();
            assert_ne!(vault, authority);
        }
    }

    #[test]
    fn test_bump_reproduces_off_curve_address() {
        let mint = Pubkey::new_unique();
        let (vault, bump) = find_vault_address(&mint, &crate::ID).unwrap();

        let reproduced =
            Pubkey::create_program_address(&[VAULT_SEED, mint.as_ref(), &[bump]], &crate::ID)
                .unwrap();
        assert_eq!(reproduced, vault);
        assert!(!vault.is_on_curve());
    }

    #[test]
    fn test_authority_bump_reproduces_off_curve_address() {
        let (authority, bump) = find_vault_authority_address(&crate::ID).unwrap();

        let reproduced =
            Pubkey::create_program_address(&[VAULT_AUTHORITY_SEED, &[bump]], &crate::ID).unwrap();
        assert_eq!(reproduced, authority);
        assert!(!authority.is_on_curve());
    }
}
