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

//! Instruction data encoding.
//!
//! Instruction data is a single discriminator byte followed by the variant’s
//! arguments serialised with Borsh, i.e. fields in declaration order with
//! fixed-width little-endian integers:
//!
//! ```text
//! [discriminator: u8][args: variant specific]
//! ```
//!
//! The discriminator is never supplied by the caller.  [`encode_data`] always
//! writes [`Variant::DISCRIMINATOR`].  [`decode_data`] on the other hand
//! reports whatever discriminator it finds; checking it is up to
//! [`crate::instruction::RewardsInstruction::identify`].

use borsh::{BorshDeserialize, BorshSerialize};

use crate::instruction::Variant;
use crate::{Error, Result};

/// Decoded instruction data.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize,
)]
pub struct InstructionData<A> {
    pub discriminator: u8,
    pub args: A,
}

impl<A: BorshSerialize> InstructionData<A> {
    /// Serialises the data back into bytes using the discriminator stored in
    /// the object.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::new();
        // Serialising into a vector cannot fail.
        self.serialize(&mut data).unwrap();
        data
    }
}

/// Encodes instruction data for variant `V`.
pub fn encode_data<V: Variant>(args: &V::Args) -> Vec<u8> {
    let mut data = vec![V::DISCRIMINATOR];
    // Serialising into a vector cannot fail.
    args.serialize(&mut data).unwrap();
    data
}

/// Decodes instruction data as variant `V`.
///
/// Returns [`Error::MalformedPayload`] if `data` is too short.  Trailing bytes
/// are ignored.  The discriminator isn’t checked against `V`.
pub fn decode_data<V: Variant>(data: &[u8]) -> Result<InstructionData<V::Args>> {
    let (&discriminator, mut rest) =
        data.split_first().ok_or(Error::MalformedPayload)?;
    let args = V::Args::deserialize(&mut rest)
        .map_err(|_| Error::MalformedPayload)?;
    Ok(InstructionData { discriminator, args })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::instruction::{
        DistributeRewards, DistributeRewardsArgs, HarvestRewards,
        HarvestRewardsArgs, InitializeHolderRewards,
        InitializeHolderRewardsArgs, InitializeHolderRewardsPool,
        InitializeHolderRewardsPoolArgs,
    };

    #[test]
    fn test_encode() {
        assert_eq!(
            vec![0],
            encode_data::<InitializeHolderRewardsPool>(
                &InitializeHolderRewardsPoolArgs
            )
        );
        assert_eq!(
            vec![1, 0x2a, 1, 0, 0, 0, 0, 0, 0],
            encode_data::<DistributeRewards>(&DistributeRewardsArgs {
                amount: 0x12a
            })
        );
        assert_eq!(
            vec![2],
            encode_data::<InitializeHolderRewards>(
                &InitializeHolderRewardsArgs
            )
        );
        assert_eq!(vec![3], encode_data::<HarvestRewards>(&HarvestRewardsArgs));
    }

    #[test]
    fn test_decode() {
        assert_eq!(
            Ok(InstructionData { discriminator: 3, args: HarvestRewardsArgs }),
            decode_data::<HarvestRewards>(&[3])
        );
        assert_eq!(
            Ok(InstructionData {
                discriminator: 1,
                args: DistributeRewardsArgs { amount: u64::MAX },
            }),
            decode_data::<DistributeRewards>(&[1, 255, 255, 255, 255, 255, 255, 255, 255])
        );
    }

    #[test]
    fn test_decode_ignores_discriminator_and_trailing_bytes() {
        assert_eq!(
            Ok(InstructionData { discriminator: 7, args: HarvestRewardsArgs }),
            decode_data::<HarvestRewards>(&[7, 1, 2])
        );
    }

    #[test]
    fn test_decode_short() {
        assert_eq!(
            Err(Error::MalformedPayload),
            decode_data::<HarvestRewards>(&[])
        );
        assert_eq!(
            Err(Error::MalformedPayload),
            decode_data::<DistributeRewards>(&[1, 0, 0, 0, 0, 0, 0, 0])
        );
    }

    #[test]
    fn test_reencode() {
        let bytes = [1, 8, 7, 6, 5, 4, 3, 2, 1];
        let data = decode_data::<DistributeRewards>(&bytes).unwrap();
        assert_eq!(&bytes[..], data.to_bytes().as_slice());
    }

    proptest! {
        #[test]
        fn prop_distribute_rewards_roundtrip(amount in any::<u64>()) {
            let args = DistributeRewardsArgs { amount };
            let bytes = encode_data::<DistributeRewards>(&args);
            prop_assert_eq!(9, bytes.len());
            let data = decode_data::<DistributeRewards>(&bytes).unwrap();
            prop_assert_eq!(DistributeRewards::DISCRIMINATOR, data.discriminator);
            prop_assert_eq!(args, data.args);
            prop_assert_eq!(bytes, data.to_bytes());
        }
    }
}
