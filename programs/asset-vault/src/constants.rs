/// Seed tag for the program-wide owner authority PDA. Changing either tag
/// silently changes every derived address, so both are frozen.
pub const VAULT_AUTHORITY_SEED: &[u8] = b"SPL_ACCOUNT_VAULT";

/// Seed tag prefix for per-mint vault token accounts.
pub const VAULT_SEED: &[u8] = b"SPL_PDA_VAULT";
