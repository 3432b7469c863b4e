//! Declarations of enumerated types.

/// Tie-break for a name declared by more than one member.
///
/// Duplicate names across members are not an error. The policy only makes the
/// outcome deterministic; the losing member stays reachable through its other
/// names and by ordinal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Keep the mapping from the lowest ordinal that declared the name.
	FirstWins,
	/// Overwrite with the mapping from the highest ordinal that declared the name.
	#[default]
	LastWins,
}

impl std::fmt::Display for DuplicatePolicy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::FirstWins => write!(f, "first_wins"),
			Self::LastWins => write!(f, "last_wins"),
		}
	}
}

/// Static description of one enumerated type.
///
/// `members[i]` is the synonym tuple of the member with ordinal `i`; its first
/// name is the canonical one. When `fields` is set, every member must declare
/// exactly one name per field, and the name at position `j` belongs to
/// `fields[j]`.
///
/// # Example
///
/// ```
/// use multienum::EnumDecl;
///
/// let decl = EnumDecl::new("Number", &[&["zero", "zip"], &["one", "ace"]])
/// 	.with_fields(&["english", "slang"]);
/// assert_eq!(decl.members().len(), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EnumDecl {
	label: &'static str,
	members: &'static [&'static [&'static str]],
	fields: Option<&'static [&'static str]>,
	duplicate_policy: DuplicatePolicy,
}

impl EnumDecl {
	/// Creates a declaration without fields, using [`DuplicatePolicy::LastWins`].
	pub const fn new(label: &'static str, members: &'static [&'static [&'static str]]) -> Self {
		Self {
			label,
			members,
			fields: None,
			duplicate_policy: DuplicatePolicy::LastWins,
		}
	}

	/// Declares the field names, one per position in each member's tuple.
	pub const fn with_fields(mut self, fields: &'static [&'static str]) -> Self {
		self.fields = Some(fields);
		self
	}

	/// Sets the duplicate name handling policy.
	pub const fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.duplicate_policy = policy;
		self
	}

	pub fn label(&self) -> &'static str {
		self.label
	}

	pub fn members(&self) -> &'static [&'static [&'static str]] {
		self.members
	}

	pub fn fields(&self) -> Option<&'static [&'static str]> {
		self.fields
	}

	pub fn duplicate_policy(&self) -> DuplicatePolicy {
		self.duplicate_policy
	}
}
