use anchor_lang::prelude::*;

#[event]
pub struct AuthorityInitialized {
    pub authority: Pubkey,
    pub payer: Pubkey,
    pub bump: u8,
}

#[event]
pub struct DepositReceived {
    pub vault: Pubkey,
    pub depositor: Pubkey,
    pub asset_mint: Pubkey,
    pub amount: u64,
    /// Vault ledger balance after the transfer landed
    pub vault_balance: u64,
}
