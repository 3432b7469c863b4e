use rustc_hash::FxHashMap as HashMap;

use super::{Collision, EnumTable, FieldIndex};
use crate::decl::{DuplicatePolicy, EnumDecl};
use crate::error::ConfigError;

pub(super) fn build(decl: EnumDecl) -> Result<EnumTable, ConfigError> {
	let label = decl.label();
	let members = decl.members();
	let fields = decl.fields().unwrap_or(&[]);
	let policy = decl.duplicate_policy();

	validate(label, members, decl.fields())?;

	let key_hint: usize = members.iter().map(|names| names.len()).sum();
	let mut by_name: HashMap<&'static str, u32> = HashMap::with_capacity_and_hasher(key_hint, Default::default());
	let mut collisions = Vec::new();

	for (idx, names) in members.iter().enumerate() {
		for &name in names.iter() {
			if let Some(collision) = bind(&mut by_name, name, idx as u32, policy, None) {
				tracing::debug!(enum_type = label, key = name, kept = collision.kept, dropped = collision.dropped, %policy, "duplicate member name");
				collisions.push(collision);
			}
		}
	}

	let mut by_field = HashMap::with_capacity_and_hasher(fields.len(), Default::default());
	for (position, &field) in fields.iter().enumerate() {
		let mut index = FieldIndex {
			position,
			by_name: HashMap::with_capacity_and_hasher(members.len(), Default::default()),
		};
		for (idx, names) in members.iter().enumerate() {
			let name = names[position];
			if let Some(collision) = bind(&mut index.by_name, name, idx as u32, policy, Some(field)) {
				tracing::debug!(enum_type = label, field, key = name, kept = collision.kept, dropped = collision.dropped, %policy, "duplicate name within field");
				collisions.push(collision);
			}
		}
		by_field.insert(field, index);
	}

	tracing::debug!(
		enum_type = label,
		members = members.len(),
		fields = fields.len(),
		keys = by_name.len(),
		collisions = collisions.len(),
		"built enum table"
	);

	Ok(EnumTable {
		label,
		members,
		fields,
		by_name,
		by_field,
		collisions,
	})
}

/// Maps `name` to `ordinal`, settling an existing mapping from another member
/// with `policy`. Both the table-wide and the per-field indices go through
/// here, so a duplicated name resolves to the same member either way.
fn bind(
	index: &mut HashMap<&'static str, u32>,
	name: &'static str,
	ordinal: u32,
	policy: DuplicatePolicy,
	field: Option<&'static str>,
) -> Option<Collision> {
	match index.get(name).copied() {
		None => {
			index.insert(name, ordinal);
			None
		}
		// Synonyms repeated inside one member are harmless.
		Some(existing) if existing == ordinal => None,
		Some(existing) => {
			let (kept, dropped) = match policy {
				DuplicatePolicy::FirstWins => (existing, ordinal),
				DuplicatePolicy::LastWins => (ordinal, existing),
			};
			index.insert(name, kept);
			Some(Collision {
				name,
				field,
				kept,
				dropped,
				policy,
			})
		}
	}
}

fn validate(
	label: &'static str,
	members: &'static [&'static [&'static str]],
	fields: Option<&'static [&'static str]>,
) -> Result<(), ConfigError> {
	if members.is_empty() {
		return Err(ConfigError::NoMembers { label });
	}
	if u32::try_from(members.len()).is_err() {
		return Err(ConfigError::TooManyMembers {
			label,
			count: members.len(),
		});
	}

	if let Some(fields) = fields {
		for (idx, &field) in fields.iter().enumerate() {
			if fields[..idx].contains(&field) {
				return Err(ConfigError::DuplicateField { label, field });
			}
		}
	}

	for (ordinal, names) in members.iter().enumerate() {
		if names.is_empty() {
			return Err(ConfigError::EmptyMember { label, ordinal });
		}
		if let Some(fields) = fields
			&& names.len() != fields.len()
		{
			return Err(ConfigError::FieldCountMismatch {
				label,
				ordinal,
				expected: fields.len(),
				got: names.len(),
			});
		}
	}

	Ok(())
}
