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

//! Client-side interface of the holder rewards program.
//!
//! The holder rewards program tracks rewards accumulated by token holders.
//! Every instruction of the program follows the same calling convention: an
//! ordered list of accounts, each occupying a fixed logical role, and
//! instruction data starting with a single discriminator byte which selects
//! the instruction.
//!
//! This library describes each instruction as a [`instruction::Variant`]: its
//! discriminator, its account role table and the shape of its arguments.
//! Generic [`instruction::build`] and [`instruction::parse`] functions turn
//! typed inputs into a Solana [`Instruction`] and back.  [`codec`] exposes the
//! instruction data encoding on its own for transaction inspection tools.
//!
//! ```ignore
//! let ix = HarvestRewards::build(&rewards_interface::ID, &HarvestRewardsInput {
//!     holder_rewards_pool,
//!     holder_rewards,
//!     token_account,
//!     mint,
//! })?;
//! assert_eq!(&[3][..], ix.data.as_slice());
//!
//! let parsed = instruction::parse::<HarvestRewards>(&ix)?;
//! assert_eq!(mint, parsed.accounts.mint.pubkey);
//! ```
//!
//! [`Instruction`]: solana_program::instruction::Instruction
//!
//! ## Features
#![doc = document_features::document_features!()]

solana_program::declare_id!("Ek6cPv6VSKzYAydGKvrmLTnrAoYEbsftJfdLzAontR95");

pub mod accounts;
pub mod codec;
mod error;
pub mod instruction;
pub mod pda;
#[cfg(feature = "state")]
pub mod state;

pub use error::Error;

/// Result type used throughout the crate.
pub type Result<T = (), E = Error> = core::result::Result<T, E>;
