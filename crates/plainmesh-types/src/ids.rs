//! Row identifiers for mesh entities.
//!
//! A vertex id is a row of `geometry`, a triangle id a row of
//! `topology`. Both are `u32`, matching the width of topology entries.

use std::fmt;

macro_rules! row_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $name {
            /// Row position for slice indexing.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u32> for $name {
            fn from(row: u32) -> Self {
                Self(row)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

row_id!(
    /// Row of the mesh geometry.
    VertexId,
    "v"
);
row_id!(
    /// Row of the mesh topology.
    TriangleId,
    "t"
);
