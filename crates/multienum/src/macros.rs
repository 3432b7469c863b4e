/// Declares a concrete enumerated type.
///
/// Generates a newtype over [`Instance`](crate::Instance) implementing
/// [`MultiEnum`](crate::MultiEnum), with `Display`, `Debug`, `FromStr`,
/// `TryFrom<i64>`, integer conversions, and `Deref<Target = Instance>`.
///
/// With `fields` declared, it also generates a `<Name>Field` enum (one variant
/// per field, in camel case, whose discriminant is the field's position) and
/// one accessor method per field.
///
/// Accessors are inherent methods, so a field may not share a name with a
/// [`MultiEnum`](crate::MultiEnum) function or an
/// [`Instance`](crate::Instance) method (`new`, `len`, `table`, `resolve`,
/// `members`, `from_field`, `name`, `names`, `field`, `ordinal`, `by_field`
/// and the like). Such a declaration fails to compile.
///
/// ```
/// use multienum::{MultiEnum, multi_enum};
///
/// multi_enum! {
/// 	pub struct Number {
/// 		fields: [english, slang, french, spanish],
/// 		members: [
/// 			["zero", "zip", "zéro", "cero"],
/// 			["one", "ace", "une", "uno"],
/// 			["two", "deuce", "deux", "dos"],
/// 		],
/// 	}
/// }
///
/// let one = Number::new("one").unwrap();
/// assert_eq!(i64::from(&one), 1);
/// assert_eq!(one.spanish(), "uno");
/// assert_eq!(Number::from_field("slang", "deuce").unwrap().name(), "two");
/// ```
#[macro_export]
macro_rules! multi_enum {
	(
		$(#[$attr:meta])*
		$vis:vis struct $name:ident {
			$(fields: [$($field:ident),+ $(,)?],)?
			$(policy: $policy:ident,)?
			members: [$([$($synonym:literal),+ $(,)?]),+ $(,)?] $(,)?
		}
	) => {
		$(#[$attr])*
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
		$vis struct $name($crate::Instance);

		impl $crate::MultiEnum for $name {
			const LABEL: &'static str = stringify!($name);

			fn decl() -> $crate::EnumDecl {
				const MEMBERS: &[&[&str]] = &[$(&[$($synonym),+]),+];
				$crate::EnumDecl::new(stringify!($name), MEMBERS)
					$(.with_fields(&[$(stringify!($field)),+]))?
					$(.with_duplicate_policy($crate::DuplicatePolicy::$policy))?
			}

			fn from_instance(instance: $crate::Instance) -> Self {
				debug_assert!(
					<Self as $crate::MultiEnum>::table().is_ok_and(|table| instance.same_table(table)),
					concat!("instance does not belong to ", stringify!($name)),
				);
				Self(instance)
			}

			fn as_instance(&self) -> &$crate::Instance {
				&self.0
			}
		}

		impl ::std::ops::Deref for $name {
			type Target = $crate::Instance;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				::std::fmt::Display::fmt(&self.0, f)
			}
		}

		impl ::std::fmt::Debug for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				write!(f, "{}({:?})", stringify!($name), self.0)
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = $crate::Error;

			fn from_str(name: &str) -> ::std::result::Result<Self, Self::Err> {
				<Self as $crate::MultiEnum>::new(name)
			}
		}

		impl ::std::convert::TryFrom<i64> for $name {
			type Error = $crate::Error;

			fn try_from(ordinal: i64) -> ::std::result::Result<Self, Self::Error> {
				<Self as $crate::MultiEnum>::new(ordinal)
			}
		}

		impl ::std::cmp::PartialEq<i64> for $name {
			fn eq(&self, other: &i64) -> bool {
				self.0 == *other
			}
		}

		impl<'a> ::std::convert::From<&'a $name> for $crate::Arg<'a> {
			fn from(value: &'a $name) -> Self {
				$crate::Arg::Instance(&value.0)
			}
		}

		impl ::std::convert::From<&$name> for i64 {
			fn from(value: &$name) -> Self {
				i64::from(&value.0)
			}
		}

		impl ::std::convert::From<&$name> for u32 {
			fn from(value: &$name) -> Self {
				value.0.ordinal()
			}
		}

		impl ::std::convert::From<&$name> for usize {
			fn from(value: &$name) -> Self {
				usize::from(&value.0)
			}
		}

		$($crate::__private::paste! {
			$(
				const _: () = assert!(
					!$crate::__private::is_reserved_field(stringify!($field)),
					concat!("field name `", stringify!($field), "` is reserved by multi_enum!"),
				);
			)+

			#[doc = concat!("Fields declared by [`", stringify!($name), "`], in tuple order.")]
			#[allow(dead_code)]
			#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
			$vis enum [<$name Field>] {
				$([<$field:camel>]),+
			}

			#[allow(dead_code)]
			impl [<$name Field>] {
				pub const ALL: &'static [Self] = &[$(Self::[<$field:camel>]),+];

				pub const fn name(self) -> &'static str {
					match self {
						$(Self::[<$field:camel>] => stringify!($field)),+
					}
				}

				pub const fn position(self) -> usize {
					self as usize
				}
			}

			#[allow(dead_code)]
			impl $name {
				$(
					#[doc = concat!("Synonym under the `", stringify!($field), "` field.")]
					pub fn $field(&self) -> &'static str {
						self.0.field_at([<$name Field>]::[<$field:camel>].position())
					}
				)+

				/// Synonym under `field`.
				pub fn by_field(&self, field: [<$name Field>]) -> &'static str {
					self.0.field_at(field.position())
				}
			}
		})?
	};
}
