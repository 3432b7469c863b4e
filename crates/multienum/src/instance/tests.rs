use std::collections::HashSet;

use super::*;
use crate::EnumDecl;

fn colors() -> &'static EnumTable {
	EnumTable::leak(
		EnumDecl::new("Color", &[&["red", "rouge"], &["green", "vert"], &["blue", "bleu"]]).with_fields(&["english", "french"]),
	)
	.unwrap()
}

#[test]
fn test_accessors() {
	let green = Instance::new(colors(), 1);
	assert_eq!(green.ordinal(), 1);
	assert_eq!(green.name(), "green");
	assert_eq!(green.names(), &["green", "vert"]);
	assert_eq!(green.field("french").unwrap(), "vert");
	assert_eq!(green.to_string(), "green");
	assert_eq!(format!("{green:?}"), "'green'");
}

#[test]
fn test_unknown_field_attribute() {
	let blue = Instance::new(colors(), 2);
	let err = blue.field("spanish").unwrap_err();
	assert_eq!(err.to_string(), "Color: no field named \"spanish\"");
}

#[test]
fn test_equality_is_by_ordinal_not_identity() {
	let table = colors();
	let a = Instance::new(table, 2);
	let b = Instance::new(table, 2);
	assert_eq!(a, b);
	assert!(!Instance::ptr_eq(&a, &b));
	assert!(Instance::ptr_eq(&a, &a.clone()));

	let set: HashSet<Instance> = [a, b, Instance::new(table, 0)].into_iter().collect();
	assert_eq!(set.len(), 2);
}

#[test]
fn test_numeric_interop() {
	let table = colors();
	let red = Instance::new(table, 0);
	let blue = Instance::new(table, 2);
	assert!(red < blue);
	assert_eq!(blue, 2i32);
	assert_eq!(blue, 2u64);
	assert!(blue > 1i64);
	assert!(red < 5usize);
	assert_eq!(i64::from(&blue), 2);
	assert_eq!(usize::from(&blue), 2);
	assert_eq!(u32::from(&red), 0);
}
