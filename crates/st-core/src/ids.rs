//! Strongly typed, zero-cost identifier wrappers.
//!
//! Agents and perceivable bodies live in parallel `Vec`s, so an ID is just an
//! index with a type attached — the wrapper exists so an `AgentId` can never
//! be used where an `EntityId` belongs.  The inner integer stays `pub` for
//! the rare site that needs raw access (trace rows, display); everything else
//! goes through [`index`](AgentId::index) / [`from_index`](AgentId::from_index).

use std::fmt;

/// Declare a typed index wrapper with an `INVALID` sentinel.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID"; numerically the type's MAX, so
            /// it can never collide with a real slot index.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for slot indexing.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Build an ID from a slot index.
            ///
            /// # Panics
            /// Panics in debug mode if `n` does not fit the inner type.
            #[inline]
            pub fn from_index(n: usize) -> Self {
                debug_assert!(n <= <$inner>::MAX as usize);
                $name(n as $inner)
            }
        }

        impl Default for $name {
            /// Defaults to `INVALID` so an unwired ID is loudly invalid
            /// instead of silently pointing at slot 0.
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
    /// Index of an AI agent in the simulation's parallel state arrays.
    pub struct AgentId(u32);
}

typed_id! {
    /// Identity of a perceivable body in the world — the player, an agent's
    /// own body, or a noise-making prop.  Used as the noise source tag and
    /// as the tracked-candidate reference; never dereferenced directly.
    pub struct EntityId(u32);
}
