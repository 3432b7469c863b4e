//! Error taxonomy for declaration, resolution, and field access.

/// A malformed declaration, detected when the table is built.
///
/// A type whose declaration fails here is unusable: every construction
/// through the typed surface reports the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	#[error("{label}: no members declared")]
	NoMembers { label: &'static str },

	#[error("{label}: member {ordinal} declares no names")]
	EmptyMember { label: &'static str, ordinal: usize },

	#[error("{label}: member {ordinal} declares {got} names but {expected} fields are declared")]
	FieldCountMismatch {
		label: &'static str,
		ordinal: usize,
		expected: usize,
		got: usize,
	},

	#[error("{label}: field {field:?} declared more than once")]
	DuplicateField { label: &'static str, field: &'static str },

	#[error("{label}: {count} members exceed the ordinal range")]
	TooManyMembers { label: &'static str, count: usize },
}

/// A member reported inside a [`ResolveError::Conflict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictParty {
	pub ordinal: u32,
	pub name: &'static str,
}

impl std::fmt::Display for ConflictParty {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} ({})", self.ordinal, self.name)
	}
}

/// Failure to turn construction arguments into a single member.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
	#[error("{label}: unknown name {name:?}{}", did_you_mean(.suggestion))]
	UnknownName {
		label: &'static str,
		name: String,
		suggestion: Option<&'static str>,
	},

	#[error("{label}: unknown field {field:?}")]
	UnknownField { label: &'static str, field: String },

	#[error("{label}: no member is named {name:?} in field {field:?}")]
	UnknownNameInField {
		label: &'static str,
		field: &'static str,
		name: String,
	},

	#[error("{label}: ordinal {ordinal} out of range (0..{len})")]
	OutOfRange { label: &'static str, ordinal: i128, len: usize },

	#[error("{label}: no value given")]
	NoValue { label: &'static str },

	#[error("{label}: arguments resolve to conflicting values {first} and {second}")]
	Conflict {
		label: &'static str,
		first: ConflictParty,
		second: ConflictParty,
	},
}

fn did_you_mean(suggestion: &Option<&'static str>) -> String {
	suggestion
		.map(|s| format!(" (did you mean {s:?}?)"))
		.unwrap_or_default()
}

/// Access to a field accessor the type does not declare.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{label}: no field named {attribute:?}")]
pub struct UnknownAttributeError {
	pub label: &'static str,
	pub attribute: String,
}

/// Any failure surfaced by the typed construction surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error(transparent)]
	Resolve(#[from] ResolveError),

	#[error(transparent)]
	UnknownAttribute(#[from] UnknownAttributeError),
}
