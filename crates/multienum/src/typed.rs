//! Typed surface for concrete enumerated types.

use crate::args::{Arg, Args};
use crate::decl::EnumDecl;
use crate::error::{ConfigError, Error};
use crate::instance::Instance;
use crate::table::EnumTable;

/// A concrete enumerated type backed by an [`Instance`].
///
/// Implementors supply the declaration and the newtype plumbing; the
/// [`multi_enum!`](crate::multi_enum) macro writes both. Every construction
/// goes through the table memoized for the type by [`crate::registry`].
pub trait MultiEnum: Sized + 'static {
	/// Type name used in errors and logs.
	const LABEL: &'static str;

	fn decl() -> EnumDecl;

	/// Wraps an instance resolved from [`Self::table`].
	///
	/// Plumbing for the provided methods; an instance of any other table breaks
	/// the type's accessors.
	#[doc(hidden)]
	fn from_instance(instance: Instance) -> Self;

	fn as_instance(&self) -> &Instance;

	/// The type's table, built on first use.
	fn table() -> Result<&'static EnumTable, ConfigError> {
		crate::registry::table_of::<Self>()
	}

	/// Resolves positional and field-keyed arguments to one value.
	fn resolve(args: &Args<'_>) -> Result<Self, Error> {
		let instance = Self::table()?.resolve(args)?;
		Ok(Self::from_instance(instance))
	}

	/// Resolves a single positional argument.
	fn new<'a>(arg: impl Into<Arg<'a>>) -> Result<Self, Error> {
		Self::resolve(&Args::new().arg(arg))
	}

	/// Resolves a name declared under `field`.
	fn from_field(field: &str, name: &str) -> Result<Self, Error> {
		Self::resolve(&Args::new().field(field, name))
	}

	/// Every member, in ordinal order.
	fn members() -> Result<Vec<Self>, ConfigError> {
		let table = Self::table()?;
		Ok((0..table.len() as u32)
			.map(|ordinal| Self::from_instance(Instance::new(table, ordinal)))
			.collect())
	}

	/// Number of members.
	fn len() -> Result<usize, ConfigError> {
		Ok(Self::table()?.len())
	}
}
