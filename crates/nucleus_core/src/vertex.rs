use std::fmt::Debug;
use std::ops::{Add, AddAssign, Sub};

/// An integer type usable as a vertex (and, for incidence maps, clique)
/// identifier.
///
/// Carries only plain arithmetic and no atomic-increment members: this
/// engine is single-threaded, so there is no parallel CSR construction to
/// support.
pub trait VertexId:
    Copy
    + Ord
    + Debug
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn new(value: usize) -> Self;

    fn index(self) -> usize;

    fn zero() -> Self;

    fn one() -> Self {
        Self::new(1)
    }

    /// Parses a decimal integer from the front of `bytes`, returning the
    /// value and the number of bytes consumed.
    fn parse(bytes: &[u8]) -> (Self, usize);
}

macro_rules! impl_vertex_id {
    ($ty:ty) => {
        impl VertexId for $ty {
            #[inline]
            fn new(value: usize) -> Self {
                assert!(value <= <$ty>::MAX as usize, "vertex id overflow");
                value as $ty
            }

            #[inline]
            fn index(self) -> usize {
                self as usize
            }

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn parse(bytes: &[u8]) -> (Self, usize) {
                atoi::FromRadix10::from_radix_10(bytes)
            }
        }
    };
}

impl_vertex_id!(u32);
impl_vertex_id!(u64);
impl_vertex_id!(usize);
