//! Process-wide memoization of built tables.
//!
//! Each concrete [`MultiEnum`] type gets its table built on first use and kept
//! for the rest of the process. Lookups after the first only take a shared
//! read lock. The first build of a type holds an upgradable read, so two
//! threads racing on the same type cannot both build it.
//!
//! A declaration that fails validation is cached as well: the type stays
//! unusable and every caller sees the same [`ConfigError`].

use std::any::TypeId;
use std::sync::OnceLock;

use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use rustc_hash::FxHashMap as HashMap;

use crate::error::ConfigError;
use crate::table::EnumTable;
use crate::typed::MultiEnum;

type Built = Result<&'static EnumTable, ConfigError>;

static TABLES: OnceLock<RwLock<HashMap<TypeId, Built>>> = OnceLock::new();

fn tables() -> &'static RwLock<HashMap<TypeId, Built>> {
	TABLES.get_or_init(|| RwLock::new(HashMap::default()))
}

/// Returns the table of `E`, building it on first use.
pub fn table_of<E: MultiEnum>() -> Result<&'static EnumTable, ConfigError> {
	let key = TypeId::of::<E>();
	if let Some(built) = tables().read().get(&key) {
		return built.clone();
	}

	let guard = tables().upgradable_read();
	if let Some(built) = guard.get(&key) {
		return built.clone();
	}

	let built = EnumTable::leak(E::decl());
	if let Err(e) = &built {
		tracing::warn!(enum_type = E::LABEL, error = %e, "enum declaration rejected");
	}
	RwLockUpgradableReadGuard::upgrade(guard).insert(key, built.clone());
	built
}

/// Returns true once `E` has been built (or rejected).
pub fn is_built<E: MultiEnum>() -> bool {
	tables().read().contains_key(&TypeId::of::<E>())
}

#[cfg(test)]
mod tests;
