use anchor_lang::prelude::*;

use crate::{
    constants::VAULT_AUTHORITY_SEED, error::VaultError, events::AuthorityInitialized,
    state::VaultAuthority,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    // init_if_needed: a re-initialization attempt must reach the handler,
    // where the creation guard rejects it
    #[account(
        init_if_needed,
        payer = payer,
        space = VaultAuthority::LEN,
        seeds = [VAULT_AUTHORITY_SEED],
        bump
    )]
    pub vault_authority: Account<'info, VaultAuthority>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let vault_authority = &mut ctx.accounts.vault_authority;

    require!(!vault_authority.initialized, VaultError::AlreadyInitialized);

    vault_authority.initialized = true;
    vault_authority.bump = ctx.bumps.vault_authority;
    vault_authority._reserved = [0u8; 32];

    emit!(AuthorityInitialized {
        authority: vault_authority.key(),
        payer: ctx.accounts.payer.key(),
        bump: vault_authority.bump,
    });

    msg!("Owner authority initialized: {}", vault_authority.key());

    Ok(())
}
