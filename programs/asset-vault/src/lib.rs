use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

use instructions::*;

declare_id!("24SVcuivGvZ7TpGejyGTEmHHhtGcgyJjQmvCBXkK3MiJ");

#[program]
pub mod asset_vault {
    use super::*;

    /// Establish the program-wide owner authority. May only succeed once;
    /// every vault token account created afterwards is controlled by it.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Move `amount` of the given asset from the depositor's token account
    /// into the per-mint vault, provisioning the vault on first use.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }
}
