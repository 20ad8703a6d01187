//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into id-ordered `Vec`s via `id.0 as usize`, but callers
//! should prefer the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a facility in the world's facility list.
    pub struct FacilityId(u32);
}

typed_id! {
    /// Index of a vehicle within its owning facility's fleet.
    pub struct VehicleId(u32);
}

typed_id! {
    /// Globally unique order identifier, allocated monotonically by the
    /// `OrderBook`.  Monotonic allocation makes id order double as placement
    /// order, which the FIFO assignment tie-break relies on.
    pub struct OrderId(u64);
}

typed_id! {
    /// Opaque product identifier.  The SKU catalog itself is an external
    /// collaborator; the engine only moves and counts quantities per SKU.
    /// `u16` keeps stock maps compact (max 65,535 SKUs).
    pub struct SkuId(u16);
}
