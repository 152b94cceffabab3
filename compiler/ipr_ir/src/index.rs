//! Compact `u32` handles into append-only slabs.

/// Convert a slab length to a `u32` handle index.
///
/// # Panics
/// Panics if `len` does not fit in a `u32`. Slabs are never allowed to grow
/// past four billion entries; hitting this means the representation is
/// corrupt or absurdly large.
#[inline]
pub fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{what} exceeded u32::MAX entries ({len})"))
}

/// Define a `u32` index handle.
///
/// Handles are `Copy`, compare by index, and are only meaningful for the
/// slab (and therefore the representation) that issued them.
#[macro_export]
macro_rules! define_index {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        $vis struct $name(u32);

        impl $name {
            /// Create from a raw u32 value.
            #[inline]
            pub const fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            /// Create from a slab position.
            #[inline]
            pub fn from_index(index: usize) -> Self {
                Self($crate::to_u32(index, stringify!($name)))
            }

            /// Get the raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Get the slab position.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}
