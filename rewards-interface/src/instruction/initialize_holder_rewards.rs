// holder-rewards-interface — typed instruction builders and parsers for the
//                            holder rewards program
// © 2025 by the holder-rewards-interface contributors
//
// This program is free software; you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation; either version 2 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program; if not, see <https://www.gnu.org/licenses/>.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;

use super::Variant;
use crate::accounts::{AccountCursor, AccountRole};
use crate::Result;

/// Creates the holder rewards account of a token account.
///
/// Accounts:
///
/// | # | Role                  | Access                                |
/// |---|-----------------------|---------------------------------------|
/// | 0 | `holder_rewards_pool` | readonly                              |
/// | 1 | `holder_rewards`      | writable                              |
/// | 2 | `token_account`       | readonly                              |
/// | 3 | `mint`                | readonly                              |
/// | 4 | `system_program`      | readonly, defaults to system program  |
///
/// Data: `[2]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitializeHolderRewards;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    BorshSerialize,
    BorshDeserialize,
)]
pub struct InitializeHolderRewardsArgs;

/// Addresses of [`InitializeHolderRewards`] accounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializeHolderRewardsInput {
    pub holder_rewards_pool: Pubkey,
    pub holder_rewards: Pubkey,
    pub token_account: Pubkey,
    pub mint: Pubkey,
    pub system_program: Option<Pubkey>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitializeHolderRewardsAccounts {
    pub holder_rewards_pool: AccountMeta,
    pub holder_rewards: AccountMeta,
    pub token_account: AccountMeta,
    pub mint: AccountMeta,
    pub system_program: AccountMeta,
}

impl Variant for InitializeHolderRewards {
    const NAME: &'static str = "InitializeHolderRewards";
    const DISCRIMINATOR: u8 = 2;
    const ROLES: &'static [AccountRole] = &[
        AccountRole::readonly("holder_rewards_pool"),
        AccountRole::writable("holder_rewards"),
        AccountRole::readonly("token_account"),
        AccountRole::readonly("mint"),
        AccountRole::readonly("system_program")
            .default_to(solana_program::system_program::ID),
    ];

    type Args = InitializeHolderRewardsArgs;
    type Input = InitializeHolderRewardsInput;
    type Accounts = InitializeHolderRewardsAccounts;

    fn addresses(input: &Self::Input) -> Vec<Option<Pubkey>> {
        vec![
            Some(input.holder_rewards_pool),
            Some(input.holder_rewards),
            Some(input.token_account),
            Some(input.mint),
            input.system_program,
        ]
    }

    fn bind(cursor: &mut AccountCursor<'_>) -> Result<Self::Accounts> {
        Ok(InitializeHolderRewardsAccounts {
            holder_rewards_pool: cursor.next_account()?,
            holder_rewards: cursor.next_account()?,
            token_account: cursor.next_account()?,
            mint: cursor.next_account()?,
            system_program: cursor.next_account()?,
        })
    }
}

impl InitializeHolderRewards {
    /// Builds the instruction calling `program_id`.
    pub fn build(
        program_id: &Pubkey,
        input: &InitializeHolderRewardsInput,
    ) -> Result<Instruction> {
        super::build::<Self>(program_id, input, &InitializeHolderRewardsArgs)
    }
}

impl InitializeHolderRewardsInput {
    /// Fills the program derived accounts from token account and mint.
    pub fn for_token_account(
        program_id: &Pubkey,
        token_account: Pubkey,
        mint: Pubkey,
    ) -> Self {
        use crate::pda;
        Self {
            holder_rewards_pool:
                pda::get_holder_rewards_pool_address_with_program_id(
                    &mint, program_id,
                ),
            holder_rewards: pda::get_holder_rewards_address_with_program_id(
                &token_account,
                program_id,
            ),
            token_account,
            mint,
            system_program: None,
        }
    }
}

/// Creates an [`InitializeHolderRewards`] instruction for the default program
/// id.
pub fn initialize_holder_rewards(
    holder_rewards_pool: &Pubkey,
    holder_rewards: &Pubkey,
    token_account: &Pubkey,
    mint: &Pubkey,
) -> Result<Instruction> {
    InitializeHolderRewards::build(&crate::ID, &InitializeHolderRewardsInput {
        holder_rewards_pool: *holder_rewards_pool,
        holder_rewards: *holder_rewards,
        token_account: *token_account,
        mint: *mint,
        system_program: None,
    })
}
