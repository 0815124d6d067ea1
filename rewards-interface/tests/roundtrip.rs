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

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rewards_interface::accounts::AccountRole;
use rewards_interface::codec::{decode_data, encode_data, InstructionData};
use rewards_interface::instruction::{
    self, harvest_rewards, DistributeRewards, DistributeRewardsInput,
    HarvestRewards, HarvestRewardsArgs, HarvestRewardsInput,
    ParsedRewardsInstruction, RewardsInstruction, Variant,
};
use rewards_interface::Error;
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;

fn pubkey() -> impl Strategy<Value = Pubkey> {
    any::<[u8; 32]>().prop_map(Pubkey::new_from_array)
}

fn account_meta() -> impl Strategy<Value = AccountMeta> {
    (pubkey(), any::<bool>(), any::<bool>()).prop_map(
        |(pubkey, is_signer, is_writable)| AccountMeta {
            pubkey,
            is_signer,
            is_writable,
        },
    )
}

fn check_flags(roles: &[AccountRole], accounts: &[AccountMeta]) {
    assert!(accounts.len() >= roles.len());
    for (role, meta) in roles.iter().zip(accounts) {
        assert_eq!(role.is_writable, meta.is_writable, "{}", role.name);
        assert_eq!(role.is_signer, meta.is_signer, "{}", role.name);
    }
}

#[test]
fn harvest_rewards_scenario() {
    let [a, b, c, d]: [Pubkey; 4] = core::array::from_fn(|_| Pubkey::new_unique());
    let ix = harvest_rewards(&a, &b, &c, &d).unwrap();
    assert_eq!(
        vec![
            AccountMeta::new(a, false),
            AccountMeta::new(b, false),
            AccountMeta::new(c, false),
            AccountMeta::new_readonly(d, false),
        ],
        ix.accounts
    );
    assert_eq!(vec![0x03], ix.data);

    let parsed = instruction::parse::<HarvestRewards>(&ix).unwrap();
    assert_eq!(rewards_interface::ID, parsed.program_id);
    assert_eq!(a, parsed.accounts.holder_rewards_pool.pubkey);
    assert_eq!(b, parsed.accounts.holder_rewards.pubkey);
    assert_eq!(c, parsed.accounts.token_account.pubkey);
    assert_eq!(d, parsed.accounts.mint.pubkey);
    assert_eq!(
        InstructionData { discriminator: 3, args: HarvestRewardsArgs },
        parsed.data
    );
}

#[test]
fn harvest_rewards_three_accounts() {
    let ix = Instruction {
        program_id: rewards_interface::ID,
        accounts: (0..3)
            .map(|_| AccountMeta::new(Pubkey::new_unique(), false))
            .collect(),
        data: vec![3],
    };
    assert_eq!(
        Err(Error::InsufficientAccounts { expected: 4, actual: 3 }),
        instruction::parse::<HarvestRewards>(&ix)
    );
    assert_eq!(
        Err(Error::InsufficientAccounts { expected: 4, actual: 3 }),
        RewardsInstruction::parse(&ix)
    );
}

#[test]
fn harvest_rewards_encoding() {
    assert_eq!(vec![0x03], encode_data::<HarvestRewards>(&HarvestRewardsArgs));
    assert_eq!(3, HarvestRewards::DISCRIMINATOR);
}

#[test]
fn dispatch_detects_wrong_variant() {
    let input = DistributeRewardsInput {
        payer: Pubkey::new_unique(),
        holder_rewards_pool: Pubkey::new_unique(),
        mint: Pubkey::new_unique(),
        system_program: None,
    };
    let ix = DistributeRewards::build(&rewards_interface::ID, &input, 5).unwrap();

    // Parsing as the wrong variant succeeds and keeps the real discriminator.
    let parsed = instruction::parse::<HarvestRewards>(&ix).unwrap();
    assert_eq!(1, parsed.data.discriminator);

    match RewardsInstruction::parse(&ix).unwrap() {
        ParsedRewardsInstruction::DistributeRewards(parsed) => {
            assert_eq!(5, parsed.data.args.amount);
        }
        other => panic!("unexpected {other:?}"),
    }
}

proptest! {
    #[test]
    fn prop_harvest_rewards_roundtrip(
        keys in proptest::array::uniform4(pubkey()),
        program_id in pubkey(),
        remaining in proptest::collection::vec(account_meta(), 0..4),
    ) {
        let input = HarvestRewardsInput {
            holder_rewards_pool: keys[0],
            holder_rewards: keys[1],
            token_account: keys[2],
            mint: keys[3],
        };
        let ix = instruction::build_with_remaining::<HarvestRewards>(
            &program_id,
            &input,
            &HarvestRewardsArgs,
            remaining.clone(),
        ).unwrap();
        prop_assert_eq!(4 + remaining.len(), ix.accounts.len());
        check_flags(HarvestRewards::ROLES, &ix.accounts);
        prop_assert_eq!(&remaining[..], &ix.accounts[4..]);

        let parsed = instruction::parse::<HarvestRewards>(&ix).unwrap();
        prop_assert_eq!(program_id, parsed.program_id);
        prop_assert_eq!(input.holder_rewards_pool, parsed.accounts.holder_rewards_pool.pubkey);
        prop_assert_eq!(input.holder_rewards, parsed.accounts.holder_rewards.pubkey);
        prop_assert_eq!(input.token_account, parsed.accounts.token_account.pubkey);
        prop_assert_eq!(input.mint, parsed.accounts.mint.pubkey);
        prop_assert_eq!(HarvestRewards::DISCRIMINATOR, parsed.data.discriminator);
        prop_assert_eq!(remaining, parsed.remaining_accounts);
    }

    #[test]
    fn prop_distribute_rewards_roundtrip(
        keys in proptest::array::uniform3(pubkey()),
        amount in any::<u64>(),
    ) {
        let input = DistributeRewardsInput {
            payer: keys[0],
            holder_rewards_pool: keys[1],
            mint: keys[2],
            system_program: None,
        };
        let ix = DistributeRewards::build(&rewards_interface::ID, &input, amount).unwrap();
        check_flags(DistributeRewards::ROLES, &ix.accounts);

        let data = decode_data::<DistributeRewards>(&ix.data).unwrap();
        prop_assert_eq!(amount, data.args.amount);
        prop_assert_eq!(ix.data, data.to_bytes());
    }

    #[test]
    fn prop_short_account_lists_fail(len in 0usize..4, data in any::<Vec<u8>>()) {
        let ix = Instruction {
            program_id: rewards_interface::ID,
            accounts: (0..len)
                .map(|_| AccountMeta::new(Pubkey::new_unique(), false))
                .collect(),
            data,
        };
        prop_assert_eq!(
            Err(Error::InsufficientAccounts { expected: 4, actual: len }),
            instruction::parse::<HarvestRewards>(&ix)
        );
    }
}
