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

/// Moves lamports from the payer into the holder rewards pool making them
/// available to token holders.
///
/// Accounts:
///
/// | # | Role                  | Access                                |
/// |---|-----------------------|---------------------------------------|
/// | 0 | `payer`               | writable, signer                      |
/// | 1 | `holder_rewards_pool` | writable                              |
/// | 2 | `mint`                | readonly                              |
/// | 3 | `system_program`      | readonly, defaults to system program  |
///
/// Data: `[1, amount: u64 LE]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DistributeRewards;

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
pub struct DistributeRewardsArgs {
    /// Amount of lamports to distribute.
    pub amount: u64,
}

/// Addresses of [`DistributeRewards`] accounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributeRewardsInput {
    pub payer: Pubkey,
    pub holder_rewards_pool: Pubkey,
    pub mint: Pubkey,
    /// System program; [`solana_program::system_program::ID`] if not given.
    pub system_program: Option<Pubkey>,
}

/// Accounts of a parsed [`DistributeRewards`] instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributeRewardsAccounts {
    pub payer: AccountMeta,
    pub holder_rewards_pool: AccountMeta,
    pub mint: AccountMeta,
    pub system_program: AccountMeta,
}

impl Variant for DistributeRewards {
    const NAME: &'static str = "DistributeRewards";
    const DISCRIMINATOR: u8 = 1;
    const ROLES: &'static [AccountRole] = &[
        AccountRole::writable("payer").signer(),
        AccountRole::writable("holder_rewards_pool"),
        AccountRole::readonly("mint"),
        AccountRole::readonly("system_program")
            .default_to(solana_program::system_program::ID),
    ];

    type Args = DistributeRewardsArgs;
    type Input = DistributeRewardsInput;
    type Accounts = DistributeRewardsAccounts;

    fn addresses(input: &Self::Input) -> Vec<Option<Pubkey>> {
        vec![
            Some(input.payer),
            Some(input.holder_rewards_pool),
            Some(input.mint),
            input.system_program,
        ]
    }

    fn bind(cursor: &mut AccountCursor<'_>) -> Result<Self::Accounts> {
        Ok(DistributeRewardsAccounts {
            payer: cursor.next_account()?,
            holder_rewards_pool: cursor.next_account()?,
            mint: cursor.next_account()?,
            system_program: cursor.next_account()?,
        })
    }
}

impl DistributeRewards {
    /// Builds the instruction calling `program_id`.
    pub fn build(
        program_id: &Pubkey,
        input: &DistributeRewardsInput,
        amount: u64,
    ) -> Result<Instruction> {
        super::build::<Self>(program_id, input, &DistributeRewardsArgs {
            amount,
        })
    }
}

/// Creates a [`DistributeRewards`] instruction for the default program id.
pub fn distribute_rewards(
    payer: &Pubkey,
    holder_rewards_pool: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> Result<Instruction> {
    let input = DistributeRewardsInput {
        payer: *payer,
        holder_rewards_pool: *holder_rewards_pool,
        mint: *mint,
        system_program: None,
    };
    DistributeRewards::build(&crate::ID, &input, amount)
}
