//! Immutable per-type member tables.
//!
//! # Role
//!
//! An [`EnumTable`] is built once from an [`EnumDecl`] and never mutated. It
//! owns the forward table (ordinal → synonyms) and the reverse indices used by
//! resolution: one spanning every name of every member, and one per declared
//! field.
//!
//! # Invariants
//!
//! - Ordinals are dense: `0..len()`.
//! - Every member has at least one name; with fields declared, exactly one
//!   name per field.
//! - A name shared by several members maps to the winner chosen by the
//!   table's [`DuplicatePolicy`]; the collision is recorded, never raised.
//! - Field lookups settle a name repeated within one field with the same
//!   policy, so positional and keyed lookups of that name agree.

mod build;

use rustc_hash::FxHashMap as HashMap;

use crate::decl::{DuplicatePolicy, EnumDecl};
use crate::error::UnknownAttributeError;

/// A name declared by more than one member, and how it was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
	pub name: &'static str,
	/// Field whose index saw the collision, `None` for the table-wide index.
	pub field: Option<&'static str>,
	/// Ordinal the name resolves to.
	pub kept: u32,
	/// Ordinal that lost the name.
	pub dropped: u32,
	pub policy: DuplicatePolicy,
}

/// Built definition of one enumerated type.
#[derive(Debug)]
pub struct EnumTable {
	label: &'static str,
	members: &'static [&'static [&'static str]],
	fields: &'static [&'static str],
	by_name: HashMap<&'static str, u32>,
	by_field: HashMap<&'static str, FieldIndex>,
	collisions: Vec<Collision>,
}

/// Position of a field within each member tuple, plus its name lookup.
#[derive(Debug)]
pub(crate) struct FieldIndex {
	pub(crate) position: usize,
	pub(crate) by_name: HashMap<&'static str, u32>,
}

impl EnumTable {
	/// Builds a table, validating the declaration.
	pub fn build(decl: EnumDecl) -> Result<Self, crate::ConfigError> {
		build::build(decl)
	}

	/// Builds a table that lives for the rest of the process.
	///
	/// Tables reached through [`crate::MultiEnum`] are memoized by
	/// [`crate::registry`]; this is for declarations assembled at runtime.
	pub fn leak(decl: EnumDecl) -> Result<&'static Self, crate::ConfigError> {
		Ok(Box::leak(Box::new(Self::build(decl)?)))
	}

	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Number of members.
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Always false for a built table.
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// Declared field names, empty when the type has none.
	pub fn fields(&self) -> &'static [&'static str] {
		self.fields
	}

	/// Synonyms of `ordinal`, canonical name first.
	pub fn names(&self, ordinal: u32) -> Option<&'static [&'static str]> {
		self.members.get(ordinal as usize).copied()
	}

	/// Canonical name of `ordinal`.
	pub fn canonical(&self, ordinal: u32) -> Option<&'static str> {
		self.names(ordinal).and_then(|names| names.first().copied())
	}

	/// Looks up a name across every member and field.
	#[inline]
	pub fn ordinal_of(&self, name: &str) -> Option<u32> {
		self.by_name.get(name).copied()
	}

	/// Position of `field` within each member tuple.
	#[inline]
	pub fn field_position(&self, field: &str) -> Option<usize> {
		self.by_field.get(field).map(|index| index.position)
	}

	/// Looks up a name at one field's position only.
	///
	/// Returns `None` both for unknown fields and for unknown names; use
	/// [`Self::field_position`] to tell them apart.
	#[inline]
	pub fn ordinal_in_field(&self, field: &str, name: &str) -> Option<u32> {
		self.by_field.get(field)?.by_name.get(name).copied()
	}

	/// Synonym of `ordinal` under `field`.
	pub fn field_name(&self, ordinal: u32, field: &str) -> Result<&'static str, UnknownAttributeError> {
		let unknown = || UnknownAttributeError {
			label: self.label,
			attribute: field.to_string(),
		};
		let position = self.field_position(field).ok_or_else(unknown)?;
		self.names(ordinal)
			.and_then(|names| names.get(position).copied())
			.ok_or_else(unknown)
	}

	/// Names declared by more than one member.
	pub fn collisions(&self) -> &[Collision] {
		&self.collisions
	}

	/// Every name in the reverse index, in no particular order.
	pub(crate) fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.by_name.keys().copied()
	}

	pub(crate) fn field_index(&self, field: &str) -> Option<(&'static str, &FieldIndex)> {
		self.by_field.get_key_value(field).map(|(name, index)| (*name, index))
	}
}

#[cfg(test)]
mod tests;
