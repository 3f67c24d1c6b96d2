use anchor_lang::prelude::*;

use crate::constants::VAULT_AUTHORITY_SEED;

/// Program-wide owner authority record.
///
/// A singleton PDA at `[VAULT_AUTHORITY_SEED]`. Every vault token account is
/// owned by this PDA, so only instructions that sign with its seeds can move
/// funds out of a vault. The record itself never holds a private key.
#[account]
pub struct VaultAuthority {
    /// Creation guard. Set exactly once by `initialize`; a second
    /// `initialize` call fails instead of overwriting.
    pub initialized: bool,
    /// PDA bump seed, recorded at initialization for signer-seed reuse
    pub bump: u8,
    /// Reserved for future upgrades
    pub _reserved: [u8; 32],
}

impl VaultAuthority {
    pub const LEN: usize = 8 + // discriminator
        1 +  // initialized
        1 +  // bump
        32; // _reserved

    pub const SEED_PREFIX: &'static [u8] = VAULT_AUTHORITY_SEED;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_matches_serialized_layout() {
        let record = VaultAuthority {
            initialized: true,
            bump: 254,
            _reserved: [0u8; 32],
        };
        let mut data = Vec::new();
        record.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), VaultAuthority::LEN);
    }
}
