//! Integer-backed enumerations reachable through multiple synonym names.
//!
//! Each member of an enumerated type has an ordinal (its integer value) and an
//! ordered tuple of synonyms, the first of which is its canonical name. Types
//! may also declare *fields*: named positions within every member's tuple
//! (for example one per language), which give keyed lookups and per-field
//! accessors.
//!
//! # Layers
//!
//! | Type | Role |
//! |------|------|
//! | [`EnumDecl`] | Static declaration: members, optional fields, duplicate policy. |
//! | [`EnumTable`] | Immutable table built from a declaration, with reverse indices. |
//! | [`Args`] | Positional and field-keyed construction arguments. |
//! | [`Instance`] | A resolved member; cheap to clone, compared by ordinal. |
//! | [`MultiEnum`] | Typed surface for a concrete type, table memoized per type. |
//!
//! Concrete types are usually declared with [`multi_enum!`].
//!
//! # Resolution
//!
//! Every argument (an ordinal, a synonym, a field-keyed synonym, or an
//! existing value) is normalized to an ordinal and all of them must agree.
//! When the first positional argument is already a value of the type, that
//! same handle is returned. See [`EnumTable::resolve`].
//!
//! # Duplicate names
//!
//! Two members declaring the same name is not an error. The name resolves to
//! the member picked by [`DuplicatePolicy`] (last declared wins by default)
//! and the collision is recorded in [`EnumTable::collisions`].

mod args;
mod decl;
mod error;
mod instance;
mod macros;
pub mod registry;
mod resolve;
mod table;
mod typed;

pub use args::{Arg, Args};
pub use decl::{DuplicatePolicy, EnumDecl};
pub use error::{ConfigError, ConflictParty, Error, ResolveError, UnknownAttributeError};
pub use instance::Instance;
pub use table::{Collision, EnumTable};
pub use typed::MultiEnum;

#[doc(hidden)]
pub mod __private {
	pub use paste::paste;

	/// Names a generated field accessor would shadow or clash with.
	pub const RESERVED_FIELDS: &[&str] = &[
		"as_instance",
		"by_field",
		"decl",
		"field",
		"field_at",
		"from_field",
		"from_instance",
		"len",
		"members",
		"name",
		"names",
		"new",
		"ordinal",
		"ptr_eq",
		"resolve",
		"same_table",
		"table",
	];

	pub const fn is_reserved_field(field: &str) -> bool {
		let mut idx = 0;
		while idx < RESERVED_FIELDS.len() {
			if str_eq(RESERVED_FIELDS[idx], field) {
				return true;
			}
			idx += 1;
		}
		false
	}

	const fn str_eq(a: &str, b: &str) -> bool {
		let (a, b) = (a.as_bytes(), b.as_bytes());
		if a.len() != b.len() {
			return false;
		}
		let mut idx = 0;
		while idx < a.len() {
			if a[idx] != b[idx] {
				return false;
			}
			idx += 1;
		}
		true
	}
}

#[cfg(test)]
mod tests;
