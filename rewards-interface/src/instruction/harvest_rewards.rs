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

/// Moves rewards accumulated by a token account from the holder rewards pool
/// to the token account’s holder.
///
/// Accounts:
///
/// | # | Role                  | Access   |
/// |---|-----------------------|----------|
/// | 0 | `holder_rewards_pool` | writable |
/// | 1 | `holder_rewards`      | writable |
/// | 2 | `token_account`       | writable |
/// | 3 | `mint`                | readonly |
///
/// Data: `[3]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HarvestRewards;

/// Arguments of [`HarvestRewards`]; the instruction takes none.
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
pub struct HarvestRewardsArgs;

/// Addresses of [`HarvestRewards`] accounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HarvestRewardsInput {
    /// Holder rewards pool account of the mint.
    pub holder_rewards_pool: Pubkey,
    /// Holder rewards account of the token account.
    pub holder_rewards: Pubkey,
    /// Token account.
    pub token_account: Pubkey,
    /// Token mint.
    pub mint: Pubkey,
}

/// Accounts of a parsed [`HarvestRewards`] instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarvestRewardsAccounts {
    pub holder_rewards_pool: AccountMeta,
    pub holder_rewards: AccountMeta,
    pub token_account: AccountMeta,
    pub mint: AccountMeta,
}

impl Variant for HarvestRewards {
    const NAME: &'static str = "HarvestRewards";
    const DISCRIMINATOR: u8 = 3;
    const ROLES: &'static [AccountRole] = &[
        AccountRole::writable("holder_rewards_pool"),
        AccountRole::writable("holder_rewards"),
        AccountRole::writable("token_account"),
        AccountRole::readonly("mint"),
    ];

    type Args = HarvestRewardsArgs;
    type Input = HarvestRewardsInput;
    type Accounts = HarvestRewardsAccounts;

    fn addresses(input: &Self::Input) -> Vec<Option<Pubkey>> {
        vec![
            Some(input.holder_rewards_pool),
            Some(input.holder_rewards),
            Some(input.token_account),
            Some(input.mint),
        ]
    }

    fn bind(cursor: &mut AccountCursor<'_>) -> Result<Self::Accounts> {
        Ok(HarvestRewardsAccounts {
            holder_rewards_pool: cursor.next_account()?,
            holder_rewards: cursor.next_account()?,
            token_account: cursor.next_account()?,
            mint: cursor.next_account()?,
        })
    }
}

impl HarvestRewards {
    /// Builds the instruction calling `program_id`.
    pub fn build(
        program_id: &Pubkey,
        input: &HarvestRewardsInput,
    ) -> Result<Instruction> {
        super::build::<Self>(program_id, input, &HarvestRewardsArgs)
    }
}

impl HarvestRewardsInput {
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
        }
    }
}

/// Creates a [`HarvestRewards`] instruction for the default program id.
pub fn harvest_rewards(
    holder_rewards_pool: &Pubkey,
    holder_rewards: &Pubkey,
    token_account: &Pubkey,
    mint: &Pubkey,
) -> Result<Instruction> {
    HarvestRewards::build(&crate::ID, &HarvestRewardsInput {
        holder_rewards_pool: *holder_rewards_pool,
        holder_rewards: *holder_rewards,
        token_account: *token_account,
        mint: *mint,
    })
}
