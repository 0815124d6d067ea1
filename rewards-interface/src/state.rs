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

//! Layouts of the program’s accounts.

use bytemuck::{Pod, Zeroable};

/// Tracks rewards accumulated by a single token account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct HolderRewards {
    /// The last seen total rewards amount in the holder rewards pool.
    pub last_seen_total_rewards: u64,
    /// Rewards which can be harvested by the holder.
    pub unharvested_rewards: u64,
}

/// Tracks rewards accumulated by the system for a mint.
///
/// Rewards ready to be distributed are stored directly on this account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct HolderRewardsPool {
    /// Total holder rewards available for distribution.
    pub total_rewards: u64,
}

impl HolderRewards {
    /// Interprets account data as holder rewards.
    ///
    /// Returns `None` if the data has a wrong length.  Alignment is not
    /// required.
    pub fn from_account_data(data: &[u8]) -> Option<Self> {
        bytemuck::try_pod_read_unaligned(data).ok()
    }
}

impl HolderRewardsPool {
    /// Interprets account data as holder rewards pool.
    ///
    /// Returns `None` if the data has a wrong length.  Alignment is not
    /// required.
    pub fn from_account_data(data: &[u8]) -> Option<Self> {
        bytemuck::try_pod_read_unaligned(data).ok()
    }
}
