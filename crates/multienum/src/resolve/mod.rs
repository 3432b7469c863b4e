//! Argument resolution.
//!
//! # Role
//!
//! Turns caller arguments into exactly one member of an [`EnumTable`].
//!
//! # Algorithm
//!
//! 1. **Normalize:** every argument becomes a candidate ordinal, positional
//!    arguments first, then keyed ones, each in the order given. The first
//!    argument that cannot be normalized aborts resolution.
//! 2. **Agree:** all candidates must be equal. With no arguments at all there
//!    is nothing to agree on and resolution fails.
//! 3. **Reuse:** when the first positional argument is an [`Instance`] of the
//!    same table, that handle is returned instead of a fresh one. Instances in
//!    any other position only contribute their ordinal.
//!
//! Keyed arguments look at a single field's position, while positional names
//! go through the table-wide index. A positional name therefore matches a
//! synonym under any field without the caller naming it.

use smallvec::SmallVec;

use crate::args::{Arg, Args};
use crate::error::{ConflictParty, ResolveError};
use crate::instance::Instance;
use crate::table::EnumTable;

/// Largest edit distance for which an unknown name gets a suggestion.
const SUGGEST_DISTANCE: usize = 2;

impl EnumTable {
	/// Resolves `args` to one member.
	pub fn resolve(&'static self, args: &Args<'_>) -> Result<Instance, ResolveError> {
		let mut candidates: SmallVec<[u32; 4]> = SmallVec::with_capacity(args.len());
		for arg in &args.positional {
			candidates.push(self.candidate(arg)?);
		}
		for &(field, name) in &args.keyed {
			candidates.push(self.keyed_candidate(field, name)?);
		}

		let ordinal = self.agree(&candidates)?;

		if let Some(Arg::Instance(first)) = args.positional.first()
			&& first.same_table(self)
			&& first.ordinal() == ordinal
		{
			return Ok(Instance::clone(first));
		}
		Ok(Instance::new(self, ordinal))
	}

	/// Resolves a single ordinal.
	pub fn resolve_ordinal(&'static self, ordinal: i64) -> Result<Instance, ResolveError> {
		self.resolve(&Args::new().arg(ordinal))
	}

	/// Resolves a single name from any field.
	pub fn resolve_name(&'static self, name: &str) -> Result<Instance, ResolveError> {
		self.resolve(&Args::new().arg(name))
	}

	/// Resolves a single name from one field.
	pub fn resolve_field(&'static self, field: &str, name: &str) -> Result<Instance, ResolveError> {
		self.resolve(&Args::new().field(field, name))
	}

	fn candidate(&self, arg: &Arg<'_>) -> Result<u32, ResolveError> {
		match *arg {
			Arg::Ordinal(ordinal) => self.check_ordinal(ordinal),
			Arg::Instance(instance) if instance.same_table(self) => Ok(instance.ordinal()),
			// Values of another type are matched by their canonical name.
			Arg::Instance(instance) => self.named_candidate(instance.name()),
			Arg::Name(name) => self.named_candidate(name),
		}
	}

	fn check_ordinal(&self, ordinal: i128) -> Result<u32, ResolveError> {
		u32::try_from(ordinal)
			.ok()
			.filter(|&o| (o as usize) < self.len())
			.ok_or(ResolveError::OutOfRange {
				label: self.label(),
				ordinal,
				len: self.len(),
			})
	}

	fn named_candidate(&self, name: &str) -> Result<u32, ResolveError> {
		self.ordinal_of(name).ok_or_else(|| ResolveError::UnknownName {
			label: self.label(),
			name: name.to_string(),
			suggestion: self.suggest(name),
		})
	}

	fn keyed_candidate(&self, field: &str, name: &str) -> Result<u32, ResolveError> {
		let (field, index) = self.field_index(field).ok_or_else(|| ResolveError::UnknownField {
			label: self.label(),
			field: field.to_string(),
		})?;
		index
			.by_name
			.get(name)
			.copied()
			.ok_or_else(|| ResolveError::UnknownNameInField {
				label: self.label(),
				field,
				name: name.to_string(),
			})
	}

	fn agree(&self, candidates: &[u32]) -> Result<u32, ResolveError> {
		let (&first, rest) = candidates.split_first().ok_or(ResolveError::NoValue { label: self.label() })?;
		if let Some(&other) = rest.iter().find(|&&c| c != first) {
			tracing::trace!(enum_type = self.label(), first, other, "conflicting construction arguments");
			return Err(ResolveError::Conflict {
				label: self.label(),
				first: self.party(first),
				second: self.party(other),
			});
		}
		Ok(first)
	}

	fn party(&self, ordinal: u32) -> ConflictParty {
		ConflictParty {
			ordinal,
			name: self.canonical(ordinal).unwrap_or_default(),
		}
	}

	/// Closest known name, for error messages.
	fn suggest(&self, name: &str) -> Option<&'static str> {
		self.keys()
			.map(|key| (strsim::levenshtein(name, key), key))
			.filter(|&(distance, _)| distance <= SUGGEST_DISTANCE)
			.min()
			.map(|(_, key)| key)
	}
}
