//! Entity identifiers.
//!
//! Dense integer ids assigned by [`Curriculum`](super::Curriculum) in
//! insertion order. They double as indices into the scheduler's entity
//! vectors and as the stable ordering key that keeps attempt-to-attempt
//! behavior deterministic under a fixed seed.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub u32);

        impl $name {
            /// Index into the owning entity vector.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

id_type!(
    /// Identifier of a student batch.
    BatchId,
    "B"
);
id_type!(
    /// Identifier of a faculty member.
    FacultyId,
    "F"
);
id_type!(
    /// Identifier of a subject.
    SubjectId,
    "S"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(BatchId(0).to_string(), "B0");
        assert_eq!(FacultyId(3).to_string(), "F3");
        assert_eq!(SubjectId(12).to_string(), "S12");
    }

    #[test]
    fn test_id_ordering() {
        assert!(BatchId(0) < BatchId(1));
        assert_eq!(SubjectId(4).index(), 4);
    }
}
