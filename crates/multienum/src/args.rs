//! Construction arguments.

use smallvec::SmallVec;

use crate::instance::Instance;

/// One positional construction argument.
#[derive(Debug, Clone, Copy)]
pub enum Arg<'a> {
	/// Used directly as the ordinal. Wide enough to hold any integer argument
	/// unchanged, so range errors report what the caller passed.
	Ordinal(i128),
	/// Any synonym of any member.
	Name(&'a str),
	/// An existing value; reused as-is when it is the first positional argument.
	Instance(&'a Instance),
}

macro_rules! impl_from_int {
	($($int:ty),* $(,)?) => {$(
		impl From<$int> for Arg<'_> {
			fn from(value: $int) -> Self {
				Arg::Ordinal(i128::from(value))
			}
		}
	)*};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<usize> for Arg<'_> {
	fn from(value: usize) -> Self {
		// usize is at most 64 bits on every supported target.
		Arg::Ordinal(value as i128)
	}
}

impl<'a> From<&'a str> for Arg<'a> {
	fn from(name: &'a str) -> Self {
		Arg::Name(name)
	}
}

impl<'a> From<&'a String> for Arg<'a> {
	fn from(name: &'a String) -> Self {
		Arg::Name(name)
	}
}

impl<'a> From<&'a Instance> for Arg<'a> {
	fn from(instance: &'a Instance) -> Self {
		Arg::Instance(instance)
	}
}

/// Positional and field-keyed arguments for one construction.
///
/// Order is kept: only the first positional argument can be reused as the
/// result, and errors are reported for the first offending argument.
///
/// ```
/// use multienum::Args;
///
/// let args = Args::new().arg("two").field("spanish", "dos");
/// assert_eq!(args.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Args<'a> {
	pub(crate) positional: SmallVec<[Arg<'a>; 2]>,
	pub(crate) keyed: SmallVec<[(&'a str, &'a str); 2]>,
}

impl<'a> Args<'a> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a positional argument.
	pub fn arg(mut self, arg: impl Into<Arg<'a>>) -> Self {
		self.push(arg);
		self
	}

	/// Appends a field-keyed argument.
	pub fn field(mut self, field: &'a str, name: &'a str) -> Self {
		self.push_field(field, name);
		self
	}

	pub fn push(&mut self, arg: impl Into<Arg<'a>>) {
		self.positional.push(arg.into());
	}

	pub fn push_field(&mut self, field: &'a str, name: &'a str) {
		self.keyed.push((field, name));
	}

	/// Total number of arguments, positional and keyed.
	pub fn len(&self) -> usize {
		self.positional.len() + self.keyed.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl<'a, A: Into<Arg<'a>>> FromIterator<A> for Args<'a> {
	fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
		Self {
			positional: iter.into_iter().map(Into::into).collect(),
			keyed: SmallVec::new(),
		}
	}
}
