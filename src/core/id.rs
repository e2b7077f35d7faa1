//! Identities of nodes in a graph.
//!
//! Nodes carry no payload. They are identified by an integer chosen by the
//! caller, any type implementing [`NodeId`] can be used. The crate provides
//! implementations for all unsigned primitive integers.
//!
//! The identities do not need to be contiguous. However, the algorithms index
//! their bookkeeping structures by the identity when it is profitable (see
//! [`Marking`](crate::algo::strong_components::Marking)), so a compact range
//! of identities starting at zero is the most efficient choice.

use std::{fmt::Debug, hash::Hash};

/// An integer identity of a node.
///
/// All values in the range `0..=max` for some upper bound `max` should be
/// valid identities and [`as_usize`](NodeId::as_usize) must map distinct
/// identities to distinct integers. The conversion is used for indexing into
/// dense bit sets, so identities that map to huge integers are allowed, but
/// make the dense representation expensive.
///
/// # Examples
///
/// ```
/// use depgraph::core::NodeId;
///
/// assert_eq!(42u16.as_usize(), 42);
/// assert_eq!(u32::from_usize(7), 7u32);
/// ```
pub trait NodeId: Copy + Ord + Hash + Debug {
    /// Converts the identity into the corresponding `usize`.
    fn as_usize(&self) -> usize;

    /// Converts an `usize` into the corresponding identity.
    ///
    /// Values that do not fit the type are truncated.
    fn from_usize(id: usize) -> Self;
}

macro_rules! impl_node_id {
    ($($int:ty),*) => {
        $(
            impl NodeId for $int {
                #[inline]
                fn as_usize(&self) -> usize {
                    *self as usize
                }

                #[inline]
                fn from_usize(id: usize) -> Self {
                    id as $int
                }
            }
        )*
    };
}

impl_node_id!(u8, u16, u32, u64, usize);
