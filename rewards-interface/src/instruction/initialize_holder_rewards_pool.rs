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

/// Creates the holder rewards pool of a mint together with the transfer hook’s
/// extra account metas.
///
/// Accounts:
///
/// | # | Role                  | Access                                |
/// |---|-----------------------|---------------------------------------|
/// | 0 | `holder_rewards_pool` | writable                              |
/// | 1 | `extra_account_metas` | writable                              |
/// | 2 | `mint`                | readonly                              |
/// | 3 | `mint_authority`      | readonly, signer                      |
/// | 4 | `system_program`      | readonly, defaults to system program  |
///
/// Data: `[0]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitializeHolderRewardsPool;

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
pub struct InitializeHolderRewardsPoolArgs;

/// Addresses of [`InitializeHolderRewardsPool`] accounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializeHolderRewardsPoolInput {
    pub holder_rewards_pool: Pubkey,
    pub extra_account_metas: Pubkey,
    pub mint: Pubkey,
    pub mint_authority: Pubkey,
    pub system_program: Option<Pubkey>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitializeHolderRewardsPoolAccounts {
    pub holder_rewards_pool: AccountMeta,
    pub extra_account_metas: AccountMeta,
    pub mint: AccountMeta,
    pub mint_authority: AccountMeta,
    pub system_program: AccountMeta,
}

impl Variant for InitializeHolderRewardsPool {
    const NAME: &'static str = "InitializeHolderRewardsPool";
    const DISCRIMINATOR: u8 = 0;
    const ROLES: &'static [AccountRole] = &[
        AccountRole::writable("holder_rewards_pool"),
        AccountRole::writable("extra_account_metas"),
        AccountRole::readonly("mint"),
        AccountRole::readonly("mint_authority").signer(),
        AccountRole::readonly("system_program")
            .default_to(solana_program::system_program::ID),
    ];

    type Args = InitializeHolderRewardsPoolArgs;
    type Input = InitializeHolderRewardsPoolInput;
    type Accounts = InitializeHolderRewardsPoolAccounts;

    fn addresses(input: &Self::Input) -> Vec<Option<Pubkey>> {
        vec![
            Some(input.holder_rewards_pool),
            Some(input.extra_account_metas),
            Some(input.mint),
            Some(input.mint_authority),
            input.system_program,
        ]
    }

    fn bind(cursor: &mut AccountCursor<'_>) -> Result<Self::Accounts> {
        Ok(InitializeHolderRewardsPoolAccounts {
            holder_rewards_pool: cursor.next_account()?,
            extra_account_metas: cursor.next_account()?,
            mint: cursor.next_account()?,
            mint_authority: cursor.next_account()?,
            system_program: cursor.next_account()?,
        })
    }
}

impl InitializeHolderRewardsPool {
    /// Builds the instruction calling `program_id`.
    pub fn build(
        program_id: &Pubkey,
        input: &InitializeHolderRewardsPoolInput,
    ) -> Result<Instruction> {
        super::build::<Self>(program_id, input, &InitializeHolderRewardsPoolArgs)
    }
}

impl InitializeHolderRewardsPoolInput {
    /// Fills the program derived accounts from the mint.
    pub fn for_mint(
        program_id: &Pubkey,
        mint: Pubkey,
        mint_authority: Pubkey,
    ) -> Self {
        use crate::pda;
        Self {
            holder_rewards_pool:
                pda::get_holder_rewards_pool_address_with_program_id(
                    &mint, program_id,
                ),
            extra_account_metas: pda::get_extra_account_metas_address(
                &mint, program_id,
            ),
            mint,
            mint_authority,
            system_program: None,
        }
    }
}

/// Creates an [`InitializeHolderRewardsPool`] instruction for the default
/// program id.
pub fn initialize_holder_rewards_pool(
    holder_rewards_pool: &Pubkey,
    extra_account_metas: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
) -> Result<Instruction> {
    let input = InitializeHolderRewardsPoolInput {
        holder_rewards_pool: *holder_rewards_pool,
        extra_account_metas: *extra_account_metas,
        mint: *mint,
        mint_authority: *mint_authority,
        system_program: None,
    };
    InitializeHolderRewardsPool::build(&crate::ID, &input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::instruction::{build_with_remaining, parse};

    #[test]
    fn test_build() {
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let input = InitializeHolderRewardsPoolInput::for_mint(
            &crate::ID,
            mint,
            authority,
        );
        let ix = initialize_holder_rewards_pool(
            &input.holder_rewards_pool,
            &input.extra_account_metas,
            &mint,
            &authority,
        )
        .unwrap();
        assert_eq!(vec![0], ix.data);
        assert_eq!(
            vec![
                AccountMeta::new(input.holder_rewards_pool, false),
                AccountMeta::new(input.extra_account_metas, false),
                AccountMeta::new_readonly(mint, false),
                AccountMeta::new_readonly(authority, true),
                AccountMeta::new_readonly(
                    solana_program::system_program::ID,
                    false
                ),
            ],
            ix.accounts
        );
    }

    #[test]
    fn test_parse_with_remaining() {
        let input = InitializeHolderRewardsPoolInput::for_mint(
            &crate::ID,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        );
        let extra = vec![
            AccountMeta::new(Pubkey::new_unique(), true),
            AccountMeta::new_readonly(Pubkey::new_unique(), false),
        ];
        let ix = build_with_remaining::<InitializeHolderRewardsPool>(
            &crate::ID,
            &input,
            &InitializeHolderRewardsPoolArgs,
            extra.clone(),
        )
        .unwrap();
        assert_eq!(7, ix.accounts.len());

        let parsed = parse::<InitializeHolderRewardsPool>(&ix).unwrap();
        assert_eq!(
            AccountMeta::new_readonly(input.mint_authority, true),
            parsed.accounts.mint_authority
        );
        assert_eq!(extra, parsed.remaining_accounts);
    }
}
