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

//! Addresses of the program derived accounts.

use solana_program::pubkey::Pubkey;

/// Seed prefix of a token account’s holder rewards account.
/// Seeds: `"holder" + token_account_address`.
pub const SEED_PREFIX_HOLDER_REWARDS: &[u8] = b"holder";

/// Seed prefix of a mint’s holder rewards pool account.
/// Seeds: `"holder_pool" + mint_address`.
pub const SEED_PREFIX_HOLDER_REWARDS_POOL: &[u8] = b"holder_pool";

/// Seed prefix of the transfer hook’s extra account metas account.
/// Seeds: `"extra-account-metas" + mint_address`.
pub const SEED_PREFIX_EXTRA_ACCOUNT_METAS: &[u8] = b"extra-account-metas";

/// Derives address of the holder rewards account of given token account.
pub fn get_holder_rewards_address(token_account: &Pubkey) -> Pubkey {
    get_holder_rewards_address_with_program_id(token_account, &crate::ID)
}

/// Like [`get_holder_rewards_address`] but for program deployed at
/// `program_id`.
pub fn get_holder_rewards_address_with_program_id(
    token_account: &Pubkey,
    program_id: &Pubkey,
) -> Pubkey {
    find(SEED_PREFIX_HOLDER_REWARDS, token_account, program_id)
}

/// Derives address of the holder rewards pool account of given mint.
pub fn get_holder_rewards_pool_address(mint: &Pubkey) -> Pubkey {
    get_holder_rewards_pool_address_with_program_id(mint, &crate::ID)
}

/// Like [`get_holder_rewards_pool_address`] but for program deployed at
/// `program_id`.
pub fn get_holder_rewards_pool_address_with_program_id(
    mint: &Pubkey,
    program_id: &Pubkey,
) -> Pubkey {
    find(SEED_PREFIX_HOLDER_REWARDS_POOL, mint, program_id)
}

/// Derives address of the extra account metas account of given mint.
pub fn get_extra_account_metas_address(
    mint: &Pubkey,
    program_id: &Pubkey,
) -> Pubkey {
    find(SEED_PREFIX_EXTRA_ACCOUNT_METAS, mint, program_id)
}

fn find(prefix: &[u8], key: &Pubkey, program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[prefix, key.as_ref()], program_id).0
}
