use std::thread;

use super::*;
use crate::{EnumDecl, Instance};

crate::multi_enum! {
	struct Suit {
		members: [["clubs"], ["diamonds"], ["hearts"], ["spades"]],
	}
}

crate::multi_enum! {
	struct Lonely {
		members: [["only"]],
	}
}

// Touched by the concurrency test alone, so its first use really is a race.
crate::multi_enum! {
	struct Raced {
		members: [["heads"], ["tails"]],
	}
}

/// Field count does not match the declared fields; implemented by hand since
/// the macro cannot express it.
struct Broken(Instance);

impl MultiEnum for Broken {
	const LABEL: &'static str = "Broken";

	fn decl() -> EnumDecl {
		EnumDecl::new(Self::LABEL, &[&["a", "x"], &["b"]]).with_fields(&["first", "second"])
	}

	fn from_instance(instance: Instance) -> Self {
		Self(instance)
	}

	fn as_instance(&self) -> &Instance {
		&self.0
	}
}

#[test]
fn test_table_is_built_once() {
	let first = table_of::<Suit>().unwrap();
	let second = table_of::<Suit>().unwrap();
	assert!(std::ptr::eq(first, second));
	assert!(is_built::<Suit>());
}

#[test]
fn test_concurrent_first_use_builds_once() {
	assert!(!is_built::<Raced>());
	let addrs: Vec<usize> = thread::scope(|scope| {
		let handles: Vec<_> = (0..8)
			.map(|_| scope.spawn(|| table_of::<Raced>().unwrap() as *const EnumTable as usize))
			.collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});
	assert!(addrs.windows(2).all(|w| w[0] == w[1]));
	assert_eq!(table_of::<Raced>().unwrap().len(), 2);
}

#[test]
fn test_rejected_declaration_is_cached() {
	let err = table_of::<Broken>().unwrap_err();
	assert!(matches!(err, ConfigError::FieldCountMismatch { ordinal: 1, .. }));
	assert!(is_built::<Broken>());
	assert_eq!(table_of::<Broken>().unwrap_err(), err);
	assert!(matches!(Broken::new(0), Err(crate::Error::Config(_))));
}

#[test]
fn test_types_get_distinct_tables() {
	let suit = table_of::<Suit>().unwrap();
	let lonely = table_of::<Lonely>().unwrap();
	assert!(!std::ptr::eq(suit, lonely));
	assert_eq!(suit.len(), 4);
	assert_eq!(lonely.len(), 1);
}
