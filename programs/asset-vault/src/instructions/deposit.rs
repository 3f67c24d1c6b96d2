use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::{
    constants::{VAULT_AUTHORITY_SEED, VAULT_SEED},
    error::VaultError,
    events::DepositReceived,
    state::VaultAuthority,
};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        seeds = [VAULT_AUTHORITY_SEED],
        bump = vault_authority.bump,
        constraint = vault_authority.initialized,
    )]
    pub vault_authority: Account<'info, VaultAuthority>,

    #[account(mint::token_program = token_program)]
    pub asset_mint: InterfaceAccount<'info, Mint>,

    // One vault per mint, provisioned on first deposit. The token account
    // authority is the owner authority PDA, never the depositor.
    #[account(
        init_if_needed,
        payer = depositor,
        seeds = [VAULT_SEED, asset_mint.key().as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = vault_authority,
        token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        constraint = depositor_token_account.mint == asset_mint.key() @ VaultError::MintMismatch,
        constraint = depositor_token_account.owner == depositor.key(),
    )]
    pub depositor_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, VaultError::InvalidAmount);

    // A pre-existing account at the derived address must already be
    // controlled by the owner authority
    require_keys_eq!(
        ctx.accounts.vault.owner,
        ctx.accounts.vault_authority.key(),
        VaultError::AuthorityMismatch
    );

    require!(
        ctx.accounts.depositor_token_account.amount >= amount,
        VaultError::InsufficientFunds
    );

    // Authorized by the depositor's own signature; the vault side needs no
    // signer for inbound transfers
    transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                mint: ctx.accounts.asset_mint.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
        ctx.accounts.asset_mint.decimals,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(DepositReceived {
        vault: ctx.accounts.vault.key(),
        depositor: ctx.accounts.depositor.key(),
        asset_mint: ctx.accounts.asset_mint.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    msg!(
        "Deposited {} of {} into vault {}",
        amount,
        ctx.accounts.asset_mint.key(),
        ctx.accounts.vault.key()
    );

    Ok(())
}
