//! Materialized enumerated values.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::UnknownAttributeError;
use crate::table::EnumTable;

/// One member of an [`EnumTable`], as handed out by resolution.
///
/// Cloning is cheap and keeps reference identity; [`Instance::ptr_eq`] tells
/// whether two handles came from the same construction. Equality, ordering,
/// and hashing go by ordinal only, like the integer the value stands for.
#[derive(Clone)]
pub struct Instance {
	slot: Arc<Slot>,
}

struct Slot {
	ordinal: u32,
	table: &'static EnumTable,
}

impl Instance {
	/// Caller guarantees `ordinal < table.len()`.
	pub(crate) fn new(table: &'static EnumTable, ordinal: u32) -> Self {
		debug_assert!((ordinal as usize) < table.len());
		Self {
			slot: Arc::new(Slot { ordinal, table }),
		}
	}

	#[inline]
	pub fn ordinal(&self) -> u32 {
		self.slot.ordinal
	}

	#[inline]
	pub fn table(&self) -> &'static EnumTable {
		self.slot.table
	}

	/// Canonical (first) name.
	pub fn name(&self) -> &'static str {
		self.names()[0]
	}

	/// Every synonym, canonical name first.
	pub fn names(&self) -> &'static [&'static str] {
		self.table().names(self.ordinal()).unwrap_or(&[])
	}

	/// Synonym under `field`.
	pub fn field(&self, field: &str) -> Result<&'static str, UnknownAttributeError> {
		self.table().field_name(self.ordinal(), field)
	}

	/// Synonym at a field position known to be valid for the table.
	#[doc(hidden)]
	pub fn field_at(&self, position: usize) -> &'static str {
		self.names()[position]
	}

	/// Returns true if both handles are the same construction.
	pub fn ptr_eq(a: &Self, b: &Self) -> bool {
		Arc::ptr_eq(&a.slot, &b.slot)
	}

	/// Returns true if this instance was resolved from `table`.
	pub fn same_table(&self, table: &EnumTable) -> bool {
		std::ptr::eq(self.table(), table)
	}
}

impl fmt::Display for Instance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl fmt::Debug for Instance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "'{}'", self.name())
	}
}

impl PartialEq for Instance {
	fn eq(&self, other: &Self) -> bool {
		self.ordinal() == other.ordinal()
	}
}

impl Eq for Instance {}

impl PartialOrd for Instance {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Instance {
	fn cmp(&self, other: &Self) -> Ordering {
		self.ordinal().cmp(&other.ordinal())
	}
}

impl Hash for Instance {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.ordinal().hash(state);
	}
}

macro_rules! impl_int_interop {
	($($int:ty),* $(,)?) => {$(
		impl PartialEq<$int> for Instance {
			fn eq(&self, other: &$int) -> bool {
				<$int>::try_from(self.ordinal()).is_ok_and(|ordinal| ordinal == *other)
			}
		}

		impl PartialOrd<$int> for Instance {
			fn partial_cmp(&self, other: &$int) -> Option<Ordering> {
				Some(i128::from(self.ordinal()).cmp(&(*other as i128)))
			}
		}
	)*};
}

impl_int_interop!(i32, i64, u32, u64, usize);

impl From<&Instance> for u32 {
	fn from(instance: &Instance) -> Self {
		instance.ordinal()
	}
}

impl From<&Instance> for i64 {
	fn from(instance: &Instance) -> Self {
		i64::from(instance.ordinal())
	}
}

impl From<&Instance> for usize {
	fn from(instance: &Instance) -> Self {
		instance.ordinal() as usize
	}
}

#[cfg(test)]
mod tests;
