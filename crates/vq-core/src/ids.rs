//! Strongly typed identifier wrappers.
//!
//! Customer ids double as indices into the per-run event history, so the
//! inner integer is `pub` and `.index()` is provided.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[derive(serde::Serialize, serde::Deserialize)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// The id immediately after `self`.
            #[inline]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Identifies a customer within one run.  Id 0 is reserved for the
    /// server's own on/off events; real customers start at 1.
    pub struct CustomerId(u32);
}

typed_id! {
    /// Zero-based index of a repetition within one parameter combination.
    pub struct RepetitionId(u32);
}

impl CustomerId {
    /// Pseudo-customer owning every `ServerOff` / `ServerOn` event.
    pub const SERVER: CustomerId = CustomerId(0);

    /// The first real customer of a run.
    pub const FIRST: CustomerId = CustomerId(1);

    #[inline]
    pub fn is_server(self) -> bool {
        self == Self::SERVER
    }
}
