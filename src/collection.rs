//! Capabilities the container checks are generic over.
//!
//! The checks come in two flavours that must not be confused:
//!
//! - *Identity* checks ([`slice_not_nil`], [`map_not_nil`],
//!   [`channel_not_nil`]) take an `Option` and only fail on `None`. An empty
//!   but present container passes.
//! - *Content* checks ([`slice_not_empty`], [`map_not_empty`],
//!   [`slice_len`], [`map_len`]) look at [`Collection::len`]. `Option<C>`
//!   implements [`Collection`] with `None` counting as zero elements, so an
//!   absent container fails a content check just like an empty one.
//!
//! [`Sequence`] and [`Mapping`] only exist so that a map cannot be handed to
//! a slice check by accident. Sets count as mappings of their keys.
//!
//! [`slice_not_nil`]: crate::Asserter::slice_not_nil
//! [`map_not_nil`]: crate::Asserter::map_not_nil
//! [`channel_not_nil`]: crate::Asserter::channel_not_nil
//! [`slice_not_empty`]: crate::Asserter::slice_not_empty
//! [`map_not_empty`]: crate::Asserter::map_not_empty
//! [`slice_len`]: crate::Asserter::slice_len
//! [`map_len`]: crate::Asserter::map_len

use alloc::{
    boxed::Box,
    collections::{BTreeMap, BTreeSet, VecDeque},
    vec::Vec,
};
use std::{
    collections::{HashMap, HashSet},
    sync::mpsc,
};

/// Anything with an element count.
pub trait Collection {
    /// The number of elements.
    fn len(&self) -> usize;

    /// Whether there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered collection of elements.
pub trait Sequence: Collection {}

/// A keyed collection.
pub trait Mapping: Collection {}

/// A channel endpoint.
///
/// Channels have no length the checks can observe, so only the identity
/// check [`channel_not_nil`](crate::Asserter::channel_not_nil) applies.
pub trait Channel {}

impl<C: Collection + ?Sized> Collection for &C {
    fn len(&self) -> usize {
        C::len(self)
    }
}

impl<C: Collection + ?Sized> Collection for &mut C {
    fn len(&self) -> usize {
        C::len(self)
    }
}

impl<C: Collection> Collection for Option<C> {
    fn len(&self) -> usize {
        self.as_ref().map_or(0, C::len)
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {}
impl<S: Sequence + ?Sized> Sequence for &mut S {}
impl<S: Sequence> Sequence for Option<S> {}

impl<M: Mapping + ?Sized> Mapping for &M {}
impl<M: Mapping + ?Sized> Mapping for &mut M {}
impl<M: Mapping> Mapping for Option<M> {}

impl<C: Channel + ?Sized> Channel for &C {}

impl<T> Collection for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}
impl<T> Sequence for [T] {}

impl<T, const N: usize> Collection for [T; N] {
    fn len(&self) -> usize {
        N
    }
}
impl<T, const N: usize> Sequence for [T; N] {}

impl<T> Collection for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}
impl<T> Sequence for Vec<T> {}

impl<T> Collection for Box<[T]> {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}
impl<T> Sequence for Box<[T]> {}

impl<T> Collection for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}
impl<T> Sequence for VecDeque<T> {}

impl<K, V, S> Collection for HashMap<K, V, S> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }
}
impl<K, V, S> Mapping for HashMap<K, V, S> {}

impl<T, S> Collection for HashSet<T, S> {
    fn len(&self) -> usize {
        HashSet::len(self)
    }
}
impl<T, S> Mapping for HashSet<T, S> {}

impl<K, V> Collection for BTreeMap<K, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}
impl<K, V> Mapping for BTreeMap<K, V> {}

impl<T> Collection for BTreeSet<T> {
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}
impl<T> Mapping for BTreeSet<T> {}

impl<T> Channel for mpsc::Sender<T> {}
impl<T> Channel for mpsc::SyncSender<T> {}
impl<T> Channel for mpsc::Receiver<T> {}

#[cfg(feature = "hashbrown")]
mod hashbrown_impls {
    use super::{Collection, Mapping};

    impl<K, V, S> Collection for hashbrown::HashMap<K, V, S> {
        fn len(&self) -> usize {
            hashbrown::HashMap::len(self)
        }
    }
    impl<K, V, S> Mapping for hashbrown::HashMap<K, V, S> {}

    impl<T, S> Collection for hashbrown::HashSet<T, S> {
        fn len(&self) -> usize {
            hashbrown::HashSet::len(self)
        }
    }
    impl<T, S> Mapping for hashbrown::HashSet<T, S> {}
}

#[cfg(feature = "indexmap")]
mod indexmap_impls {
    use super::{Collection, Mapping};

    impl<K, V, S> Collection for indexmap::IndexMap<K, V, S> {
        fn len(&self) -> usize {
            indexmap::IndexMap::len(self)
        }
    }
    impl<K, V, S> Mapping for indexmap::IndexMap<K, V, S> {}

    impl<T, S> Collection for indexmap::IndexSet<T, S> {
        fn len(&self) -> usize {
            indexmap::IndexSet::len(self)
        }
    }
    impl<T, S> Mapping for indexmap::IndexSet<T, S> {}
}
