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

//! Account roles and their resolution into account metas.
//!
//! Each instruction declares a fixed, ordered table of [`AccountRole`]s.  The
//! position of a role in the table is its index in the instruction’s account
//! list.  When building an instruction, [`AccountMetaFactory`] turns each role
//! and the address the caller picked for it into an [`AccountMeta`]; when
//! parsing, [`AccountCursor`] hands out accounts in table order.

use solana_program::instruction::AccountMeta;
use solana_program::pubkey::Pubkey;

use crate::{Error, Result};

/// Whether caller needs to provide an address for an account role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    /// The address must be given.  Building fails with
    /// [`Error::MissingAccount`] otherwise.
    Required,

    /// The account may be omitted.  Omitted account is replaced by the
    /// program id passed as read-only non-signer account which the program
    /// interprets as ‘no account’.
    Optional,

    /// The account may be omitted in which case the given address is used.
    /// Typically used for well-known programs such as the system program.
    Default(Pubkey),
}

/// A logical account slot of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountRole {
    /// Name of the role, e.g. `"mint"`.
    pub name: &'static str,
    pub is_writable: bool,
    pub is_signer: bool,
    pub presence: Presence,
}

impl AccountRole {
    /// A mandatory writable non-signer role.
    pub const fn writable(name: &'static str) -> Self {
        Self {
            name,
            is_writable: true,
            is_signer: false,
            presence: Presence::Required,
        }
    }

    /// A mandatory read-only non-signer role.
    pub const fn readonly(name: &'static str) -> Self {
        Self {
            name,
            is_writable: false,
            is_signer: false,
            presence: Presence::Required,
        }
    }

    /// Marks the role as requiring a signature.
    pub const fn signer(self) -> Self { Self { is_signer: true, ..self } }

    /// Marks the role as optional; see [`Presence::Optional`].
    pub const fn optional(self) -> Self {
        Self { presence: Presence::Optional, ..self }
    }

    /// Marks the role as defaulting to given address.
    pub const fn default_to(self, address: Pubkey) -> Self {
        Self { presence: Presence::Default(address), ..self }
    }

    /// Returns account meta for the account occupying this role.
    ///
    /// The access flags always come from the role; there’s no way for the
    /// caller to override them.
    pub fn meta(&self, pubkey: Pubkey) -> AccountMeta {
        AccountMeta {
            pubkey,
            is_signer: self.is_signer,
            is_writable: self.is_writable,
        }
    }
}


/// Turns account roles and caller-chosen addresses into account metas.
#[derive(Clone, Copy, Debug)]
pub struct AccountMetaFactory<'a> {
    program_id: &'a Pubkey,
}

impl<'a> AccountMetaFactory<'a> {
    /// Constructs a factory for instructions calling `program_id`.
    ///
    /// The program id is used as placeholder for omitted optional accounts.
    pub fn new(program_id: &'a Pubkey) -> Self { Self { program_id } }

    /// Resolves a single role.
    ///
    /// If `address` is `None`, the role’s [`Presence`] decides what happens.
    /// A missing required account results in [`Error::MissingAccount`].
    pub fn resolve(
        &self,
        role: &AccountRole,
        address: Option<Pubkey>,
    ) -> Result<AccountMeta> {
        let meta = match (address, role.presence) {
            (Some(pubkey), _) | (None, Presence::Default(pubkey)) => {
                role.meta(pubkey)
            }
            (None, Presence::Optional) => {
                AccountMeta::new_readonly(*self.program_id, false)
            }
            (None, Presence::Required) => {
                return Err(Error::MissingAccount { role: role.name })
            }
        };
        log::trace!("{} → {}", role.name, meta.pubkey);
        Ok(meta)
    }

    /// Resolves all roles in order.  `address_of` is asked for the address of
    /// each role.
    pub fn resolve_all(
        &self,
        roles: &[AccountRole],
        mut address_of: impl FnMut(usize, &AccountRole) -> Option<Pubkey>,
    ) -> Result<Vec<AccountMeta>> {
        roles
            .iter()
            .enumerate()
            .map(|(index, role)| self.resolve(role, address_of(index, role)))
            .collect()
    }
}


/// Addresses of an instruction’s accounts keyed by role name.
///
/// This is the untyped counterpart of the per-instruction account structs,
/// useful for tools which pick accounts by name at run time.  Names which
/// don’t match any role of the instruction being built are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountInputs<'a> {
    entries: Vec<(&'a str, Pubkey)>,
}

impl<'a> AccountInputs<'a> {
    pub fn new() -> Self { Self::default() }

    /// Sets address for given role replacing previous value if any.
    pub fn set(&mut self, role: &'a str, pubkey: Pubkey) {
        match self.entries.iter_mut().find(|(name, _)| *name == role) {
            Some(entry) => entry.1 = pubkey,
            None => self.entries.push((role, pubkey)),
        }
    }

    /// Like [`Self::set`] but consumes and returns `self`.
    pub fn with(mut self, role: &'a str, pubkey: Pubkey) -> Self {
        self.set(role, pubkey);
        self
    }

    /// Returns address given for the role.
    pub fn get(&self, role: &str) -> Option<Pubkey> {
        self.entries
            .iter()
            .find_map(|(name, pubkey)| (*name == role).then_some(*pubkey))
    }
}

impl<'a> FromIterator<(&'a str, Pubkey)> for AccountInputs<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, Pubkey)>>(iter: I) -> Self {
        let mut inputs = Self::new();
        for (role, pubkey) in iter {
            inputs.set(role, pubkey);
        }
        inputs
    }
}


/// Cursor handing out an instruction’s accounts in role order.
#[derive(Clone, Debug)]
pub struct AccountCursor<'a> {
    accounts: &'a [AccountMeta],
    position: usize,
}

impl<'a> AccountCursor<'a> {
    /// Constructs a cursor over `accounts` checking that there is at least
    /// one account for each of the `roles`.
    ///
    /// Returns [`Error::InsufficientAccounts`] if there are fewer accounts
    /// than roles.
    pub fn new(accounts: &'a [AccountMeta], roles: &[AccountRole]) -> Result<Self> {
        if accounts.len() < roles.len() {
            return Err(Error::InsufficientAccounts {
                expected: roles.len(),
                actual: accounts.len(),
            });
        }
        Ok(Self { accounts, position: 0 })
    }

    /// Returns the next account and advances the cursor.
    pub fn next_account(&mut self) -> Result<AccountMeta> {
        let account = self.accounts.get(self.position).ok_or(
            Error::InsufficientAccounts {
                expected: self.position + 1,
                actual: self.accounts.len(),
            },
        )?;
        self.position += 1;
        Ok(account.clone())
    }

    /// Consumes the cursor and returns accounts which haven’t been handed
    /// out.
    pub fn into_remaining(self) -> &'a [AccountMeta] {
        &self.accounts[self.position..]
    }
}
