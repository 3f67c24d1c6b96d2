use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Owner authority is already initialized")]
    AlreadyInitialized,

    #[msg("Vault token account is not controlled by the owner authority")]
    AuthorityMismatch,

    #[msg("Insufficient token balance in depositor account")]
    InsufficientFunds,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Depositor token account mint does not match the vault asset")]
    MintMismatch,

    #[msg("No valid program address for the given seeds")]
    DerivationExhausted,
}
