use super::*;
use crate::ConfigError;

const NUMBERS: &[&[&str]] = &[
	&["zero", "zip", "zéro", "cero"],
	&["one", "ace", "une", "uno"],
	&["two", "deuce", "deux", "dos"],
];
const LANGUAGES: &[&str] = &["english", "slang", "french", "spanish"];

fn numbers() -> EnumTable {
	EnumTable::build(EnumDecl::new("Number", NUMBERS).with_fields(LANGUAGES)).unwrap()
}

#[test]
fn test_name_index_spans_all_synonyms() {
	let table = numbers();
	for (ordinal, names) in NUMBERS.iter().enumerate() {
		for name in names.iter() {
			assert_eq!(table.ordinal_of(name), Some(ordinal as u32), "{name}");
		}
	}
	assert_eq!(table.ordinal_of("three"), None);
}

#[test]
fn test_field_positions_follow_declaration() {
	let table = numbers();
	assert_eq!(table.field_position("english"), Some(0));
	assert_eq!(table.field_position("spanish"), Some(3));
	assert_eq!(table.field_position("german"), None);
	assert_eq!(table.fields(), LANGUAGES);
}

#[test]
fn test_field_lookup_is_position_scoped() {
	let table = numbers();
	assert_eq!(table.ordinal_in_field("slang", "deuce"), Some(2));
	// "uno" is a name, but not a slang one.
	assert_eq!(table.ordinal_in_field("slang", "uno"), None);
	assert_eq!(table.ordinal_in_field("german", "eins"), None);
}

#[test]
fn test_field_name() {
	let table = numbers();
	assert_eq!(table.field_name(1, "spanish").unwrap(), "uno");
	let err = table.field_name(1, "german").unwrap_err();
	assert_eq!(err.attribute, "german");
	assert_eq!(err.label, "Number");
}

#[test]
fn test_canonical_is_first_name() {
	let table = numbers();
	assert_eq!(table.canonical(2), Some("two"));
	assert_eq!(table.names(0), Some(NUMBERS[0]));
	assert_eq!(table.canonical(3), None);
}

#[test]
fn test_no_fields_declared() {
	let table = EnumTable::build(EnumDecl::new("Bare", &[&["a", "alpha"], &["b"]])).unwrap();
	assert!(table.fields().is_empty());
	assert_eq!(table.ordinal_of("alpha"), Some(0));
	assert!(table.field_name(0, "first").is_err());
}

#[test]
fn test_rejects_empty_members() {
	let err = EnumTable::build(EnumDecl::new("Empty", &[])).unwrap_err();
	assert_eq!(err, ConfigError::NoMembers { label: "Empty" });
}

#[test]
fn test_rejects_member_without_names() {
	let err = EnumTable::build(EnumDecl::new("Hole", &[&["a"], &[]])).unwrap_err();
	assert_eq!(err, ConfigError::EmptyMember { label: "Hole", ordinal: 1 });
}

#[test]
fn test_rejects_field_count_mismatch() {
	let decl = EnumDecl::new("Short", &[&["a", "x"], &["b"]]).with_fields(&["first", "second"]);
	let err = EnumTable::build(decl).unwrap_err();
	assert_eq!(
		err,
		ConfigError::FieldCountMismatch {
			label: "Short",
			ordinal: 1,
			expected: 2,
			got: 1,
		}
	);
}

#[test]
fn test_rejects_duplicate_field() {
	let decl = EnumDecl::new("Twice", &[&["a", "x"]]).with_fields(&["first", "first"]);
	let err = EnumTable::build(decl).unwrap_err();
	assert_eq!(err, ConfigError::DuplicateField { label: "Twice", field: "first" });
}

#[test]
fn test_duplicate_name_last_wins_by_default() {
	let table = EnumTable::build(EnumDecl::new("Dup", &[&["a", "shared"], &["b", "shared"], &["c"]])).unwrap();
	assert_eq!(table.ordinal_of("shared"), Some(1));
	assert_eq!(
		table.collisions(),
		&[Collision {
			name: "shared",
			field: None,
			kept: 1,
			dropped: 0,
			policy: DuplicatePolicy::LastWins,
		}]
	);
	// The losing member stays reachable through its other names.
	assert_eq!(table.ordinal_of("a"), Some(0));
}

#[test]
fn test_duplicate_name_first_wins() {
	let decl = EnumDecl::new("Dup", &[&["a", "shared"], &["b", "shared"]]).with_duplicate_policy(DuplicatePolicy::FirstWins);
	let table = EnumTable::build(decl).unwrap();
	assert_eq!(table.ordinal_of("shared"), Some(0));
	assert_eq!(table.collisions().len(), 1);
	assert_eq!(table.collisions()[0].dropped, 1);
}

#[test]
fn test_repeated_synonym_within_member_is_not_a_collision() {
	let table = EnumTable::build(EnumDecl::new("Echo", &[&["zero", "zero"], &["one", "one"]])).unwrap();
	assert!(table.collisions().is_empty());
	assert_eq!(table.ordinal_of("one"), Some(1));
}

#[test]
fn test_field_lookup_follows_policy() {
	for (policy, winner) in [(DuplicatePolicy::LastWins, 1), (DuplicatePolicy::FirstWins, 0)] {
		let decl = EnumDecl::new("Dup", &[&["a", "same"], &["b", "same"]])
			.with_fields(&["letter", "tag"])
			.with_duplicate_policy(policy);
		let table = EnumTable::build(decl).unwrap();
		assert_eq!(table.ordinal_of("same"), Some(winner), "{policy}");
		assert_eq!(table.ordinal_in_field("tag", "same"), Some(winner), "{policy}");

		let fields: Vec<_> = table.collisions().iter().map(|c| c.field).collect();
		assert_eq!(fields, vec![None, Some("tag")], "{policy}");
	}
}
