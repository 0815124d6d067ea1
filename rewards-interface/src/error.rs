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

use solana_program::program_error::ProgramError;

/// Failure building, parsing or decoding an instruction.
///
/// All of them are caller errors: the operations are pure transformations so
/// retrying with the same input yields the same result.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// A mandatory account role was given no address when building an
    /// instruction.
    #[display("no address given for mandatory `{role}` account")]
    MissingAccount { role: &'static str },

    /// Instruction has fewer accounts than its role table declares.
    #[display("not enough accounts: expected at least {expected}, got {actual}")]
    InsufficientAccounts { expected: usize, actual: usize },

    /// Instruction data is shorter than the variant’s layout.
    #[display("malformed instruction data")]
    MalformedPayload,

    /// Instruction data starts with a discriminator no variant uses.
    #[display("unknown instruction discriminator {discriminator}")]
    UnknownInstruction { discriminator: u8 },
}

impl From<Error> for ProgramError {
    fn from(err: Error) -> Self {
        match err {
            Error::MissingAccount { .. } |
            Error::InsufficientAccounts { .. } => Self::NotEnoughAccountKeys,
            Error::MalformedPayload | Error::UnknownInstruction { .. } => {
                Self::InvalidInstructionData
            }
        }
    }
}
