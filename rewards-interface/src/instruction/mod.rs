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

//! Building and parsing instructions of the holder rewards program.
//!
//! | Discriminator | Instruction                         |
//! |---------------|-------------------------------------|
//! | 0             | [`InitializeHolderRewardsPool`]     |
//! | 1             | [`DistributeRewards`]               |
//! | 2             | [`InitializeHolderRewards`]         |
//! | 3             | [`HarvestRewards`]                  |
//!
//! Each instruction is a [`Variant`].  [`build`] and [`parse`] work for any of
//! them; per-instruction modules only declare the role table and typed account
//! structs.  [`RewardsInstruction`] identifies an instruction of unknown type
//! by its discriminator.

use core::fmt;

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;

use crate::accounts::{
    AccountCursor, AccountInputs, AccountMetaFactory, AccountRole,
};
use crate::codec::{self, InstructionData};
use crate::{Error, Result};

mod distribute_rewards;
mod harvest_rewards;
mod initialize_holder_rewards;
mod initialize_holder_rewards_pool;

pub use distribute_rewards::*;
pub use harvest_rewards::*;
pub use initialize_holder_rewards::*;
pub use initialize_holder_rewards_pool::*;

/// An instruction of the program.
pub trait Variant {
    /// Human readable name of the instruction.
    const NAME: &'static str;

    /// First byte of instruction data.
    const DISCRIMINATOR: u8;

    /// Account roles in the order the accounts are passed to the program.
    const ROLES: &'static [AccountRole];

    /// Arguments encoded after the discriminator.
    type Args: BorshSerialize
        + BorshDeserialize
        + Clone
        + fmt::Debug
        + PartialEq;

    /// Addresses caller provides when building the instruction.
    type Input;

    /// Account metas of a parsed instruction, one field per role.
    type Accounts: Clone + fmt::Debug + PartialEq;

    /// Returns addresses from `input` in [`Self::ROLES`] order.  `None`
    /// entries are resolved according to the role’s presence.
    fn addresses(input: &Self::Input) -> Vec<Option<Pubkey>>;

    /// Takes accounts from the cursor and binds them to roles.
    fn bind(cursor: &mut AccountCursor<'_>) -> Result<Self::Accounts>;
}


/// Builds instruction `V` calling `program_id`.
pub fn build<V: Variant>(
    program_id: &Pubkey,
    input: &V::Input,
    args: &V::Args,
) -> Result<Instruction> {
    build_with_remaining::<V>(program_id, input, args, [])
}

/// Builds instruction `V` calling `program_id` with additional accounts.
///
/// `remaining` accounts are passed after all the accounts of the role table in
/// the order given.
pub fn build_with_remaining<V: Variant>(
    program_id: &Pubkey,
    input: &V::Input,
    args: &V::Args,
    remaining: impl IntoIterator<Item = AccountMeta>,
) -> Result<Instruction> {
    let addresses = V::addresses(input);
    assemble::<V>(
        program_id,
        |index, _| addresses.get(index).copied().flatten(),
        args,
        remaining,
    )
}

/// Builds instruction `V` calling `program_id` taking account addresses by
/// role name.
///
/// Fails with [`Error::MissingAccount`] if a required role has no address in
/// `inputs`.
pub fn build_from_inputs<V: Variant>(
    program_id: &Pubkey,
    inputs: &AccountInputs<'_>,
    args: &V::Args,
    remaining: impl IntoIterator<Item = AccountMeta>,
) -> Result<Instruction> {
    assemble::<V>(program_id, |_, role| inputs.get(role.name), args, remaining)
}

fn assemble<V: Variant>(
    program_id: &Pubkey,
    address_of: impl FnMut(usize, &AccountRole) -> Option<Pubkey>,
    args: &V::Args,
    remaining: impl IntoIterator<Item = AccountMeta>,
) -> Result<Instruction> {
    let mut accounts =
        AccountMetaFactory::new(program_id).resolve_all(V::ROLES, address_of)?;
    accounts.extend(remaining);
    let data = codec::encode_data::<V>(args);
    log::debug!(
        "Built {} instruction for {program_id} with {} accounts",
        V::NAME,
        accounts.len(),
    );
    Ok(Instruction { program_id: *program_id, accounts, data })
}


/// Typed view of an instruction.
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed<V: Variant> {
    pub program_id: Pubkey,
    pub accounts: V::Accounts,
    /// Accounts following the ones in the role table.
    pub remaining_accounts: Vec<AccountMeta>,
    pub data: InstructionData<V::Args>,
}

/// Parses instruction as variant `V`.
///
/// Fails with [`Error::InsufficientAccounts`] if the instruction has fewer
/// accounts than `V` has roles; in that case the data isn’t looked at.  Fails
/// with [`Error::MalformedPayload`] if the data is too short.
///
/// The discriminator and the program id aren’t checked.  Use
/// [`RewardsInstruction::parse`] if the type of the instruction isn’t known.
pub fn parse<V: Variant>(instruction: &Instruction) -> Result<Parsed<V>> {
    let mut cursor = AccountCursor::new(&instruction.accounts, V::ROLES)?;
    let accounts = V::bind(&mut cursor)?;
    let remaining_accounts = cursor.into_remaining().to_vec();
    let data = codec::decode_data::<V>(&instruction.data)?;
    log::debug!(
        "Parsed {} instruction with {} remaining accounts",
        V::NAME,
        remaining_accounts.len(),
    );
    Ok(Parsed {
        program_id: instruction.program_id,
        accounts,
        remaining_accounts,
        data,
    })
}


/// All instructions of the program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RewardsInstruction {
    InitializeHolderRewardsPool,
    DistributeRewards,
    InitializeHolderRewards,
    HarvestRewards,
}

/// An instruction of any type parsed by [`RewardsInstruction::parse`].
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedRewardsInstruction {
    InitializeHolderRewardsPool(Parsed<InitializeHolderRewardsPool>),
    DistributeRewards(Parsed<DistributeRewards>),
    InitializeHolderRewards(Parsed<InitializeHolderRewards>),
    HarvestRewards(Parsed<HarvestRewards>),
}

impl RewardsInstruction {
    pub const ALL: [Self; 4] = [
        Self::InitializeHolderRewardsPool,
        Self::DistributeRewards,
        Self::InitializeHolderRewards,
        Self::HarvestRewards,
    ];

    pub fn discriminator(self) -> u8 {
        match self {
            Self::InitializeHolderRewardsPool => {
                InitializeHolderRewardsPool::DISCRIMINATOR
            }
            Self::DistributeRewards => DistributeRewards::DISCRIMINATOR,
            Self::InitializeHolderRewards => {
                InitializeHolderRewards::DISCRIMINATOR
            }
            Self::HarvestRewards => HarvestRewards::DISCRIMINATOR,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::InitializeHolderRewardsPool => {
                InitializeHolderRewardsPool::NAME
            }
            Self::DistributeRewards => DistributeRewards::NAME,
            Self::InitializeHolderRewards => InitializeHolderRewards::NAME,
            Self::HarvestRewards => HarvestRewards::NAME,
        }
    }

    pub fn roles(self) -> &'static [AccountRole] {
        match self {
            Self::InitializeHolderRewardsPool => {
                InitializeHolderRewardsPool::ROLES
            }
            Self::DistributeRewards => DistributeRewards::ROLES,
            Self::InitializeHolderRewards => InitializeHolderRewards::ROLES,
            Self::HarvestRewards => HarvestRewards::ROLES,
        }
    }

    /// Identifies instruction by the first byte of its data.
    pub fn identify(data: &[u8]) -> Result<Self> {
        let discriminator = *data.first().ok_or(Error::MalformedPayload)?;
        Self::ALL
            .into_iter()
            .find(|variant| variant.discriminator() == discriminator)
            .ok_or(Error::UnknownInstruction { discriminator })
    }

    /// Identifies and parses an instruction.
    pub fn parse(instruction: &Instruction) -> Result<ParsedRewardsInstruction> {
        Ok(match Self::identify(&instruction.data)? {
            Self::InitializeHolderRewardsPool => {
                ParsedRewardsInstruction::InitializeHolderRewardsPool(parse(
                    instruction,
                )?)
            }
            Self::DistributeRewards => {
                ParsedRewardsInstruction::DistributeRewards(parse(instruction)?)
            }
            Self::InitializeHolderRewards => {
                ParsedRewardsInstruction::InitializeHolderRewards(parse(
                    instruction,
                )?)
            }
            Self::HarvestRewards => {
                ParsedRewardsInstruction::HarvestRewards(parse(instruction)?)
            }
        })
    }
}

impl fmt::Display for RewardsInstruction {
    fn fmt(&self, fmtr: &mut fmt::Formatter) -> fmt::Result {
        fmtr.write_str(self.name())
    }
}

impl ParsedRewardsInstruction {
    /// Returns type of the instruction.
    pub fn kind(&self) -> RewardsInstruction {
        match self {
            Self::InitializeHolderRewardsPool(_) => {
                RewardsInstruction::InitializeHolderRewardsPool
            }
            Self::DistributeRewards(_) => RewardsInstruction::DistributeRewards,
            Self::InitializeHolderRewards(_) => {
                RewardsInstruction::InitializeHolderRewards
            }
            Self::HarvestRewards(_) => RewardsInstruction::HarvestRewards,
        }
    }
}
