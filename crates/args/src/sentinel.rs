//! Identity-compared placeholder markers.
//!
//! [`REQUIRED`] and [`OPTIONAL`] are the only two [`Sentinel`] instances that
//! will ever exist. They are compared by address, so no ordinary value (and
//! not the other marker) can ever be mistaken for one.

use core::fmt;
use core::hash::{Hash, Hasher};

/// A unique placeholder standing in for "no value was supplied here".
///
/// The type has no public constructor and is neither `Clone` nor `Copy`; the
/// only way to obtain one is through the [`REQUIRED`] and [`OPTIONAL`] statics.
pub struct Sentinel {
	name: &'static str,
}

static REQUIRED_MARKER: Sentinel = Sentinel { name: "REQUIRED" };
static OPTIONAL_MARKER: Sentinel = Sentinel { name: "OPTIONAL" };

/// Marks a parameter or field that must receive a concrete value before use.
pub static REQUIRED: &Sentinel = &REQUIRED_MARKER;

/// Marks a parameter or field intentionally left unset.
///
/// Entries holding this marker are dropped when arguments are prepared for a
/// downstream call, letting that call apply its own default.
pub static OPTIONAL: &Sentinel = &OPTIONAL_MARKER;

/// Short alias for [`REQUIRED`]; the same instance.
pub use self::REQUIRED as REQ;

/// Short alias for [`OPTIONAL`]; the same instance.
pub use self::OPTIONAL as OPT;

impl Sentinel {
	/// Returns `true` if `self` and `other` are the same instance.
	#[inline]
	pub fn is(&self, other: &Sentinel) -> bool {
		core::ptr::eq(self, other)
	}

	/// Returns `true` for the [`REQUIRED`] marker.
	#[inline]
	pub fn is_required(&self) -> bool {
		self.is(REQUIRED)
	}

	/// Returns `true` for the [`OPTIONAL`] marker.
	#[inline]
	pub fn is_optional(&self) -> bool {
		self.is(OPTIONAL)
	}

	/// Marker name, `"REQUIRED"` or `"OPTIONAL"`.
	pub fn name(&self) -> &'static str {
		self.name
	}
}

impl PartialEq for Sentinel {
	fn eq(&self, other: &Self) -> bool {
		self.is(other)
	}
}

impl Eq for Sentinel {}

impl Hash for Sentinel {
	fn hash<H: Hasher>(&self, state: &mut H) {
		core::ptr::hash(self, state);
	}
}

impl fmt::Debug for Sentinel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

impl fmt::Display for Sentinel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}
