use std::fmt;

use crate::Same;

/// One declared dependency: a read from the state plus the equality used to
/// decide whether the read changed.
pub struct Dep<S, V> {
    read: Box<dyn Fn(&S) -> V>,
    equal: Box<dyn Fn(&V, &V) -> bool>,
}

impl<S, V: Same + 'static> Dep<S, V> {
    /// Dependency compared with [`Same`].
    pub fn new(read: impl Fn(&S) -> V + 'static) -> Self {
        Self::with_equality(read, V::same)
    }
}

impl<S, V> Dep<S, V> {
    /// Dependency compared with a custom equality.
    pub fn with_equality(
        read: impl Fn(&S) -> V + 'static,
        equal: impl Fn(&V, &V) -> bool + 'static,
    ) -> Self {
        Self {
            read: Box::new(read),
            equal: Box::new(equal),
        }
    }

    /// Evaluate the read against `state`.
    pub fn read(&self, state: &S) -> V {
        (self.read)(state)
    }

    /// Compare two reads with this dependency's equality.
    pub fn unchanged(&self, previous: &V, current: &V) -> bool {
        (self.equal)(previous, current)
    }
}

impl<S, V> fmt::Debug for Dep<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dep").finish_non_exhaustive()
    }
}

/// A fixed list of dependencies.
///
/// Implemented for tuples of up to eight [`Dep`]s, whose values form a tuple
/// of the same arity, and for `Vec<Dep<S, V>>` for homogeneous lists.
pub trait Dependencies<S> {
    /// The values produced by one read of every dependency.
    type Values;

    /// Read every dependency.
    fn read_all(&self, state: &S) -> Self::Values;

    /// Returns true if every value is unchanged under its dependency's equality.
    fn all_unchanged(&self, previous: &Self::Values, current: &Self::Values) -> bool;
}

macro_rules! impl_dependencies_for_tuple {
    ($(($idx:tt, $V:ident)),+) => {
        impl<S, $($V),+> Dependencies<S> for ($(Dep<S, $V>,)+) {
            type Values = ($($V,)+);

            fn read_all(&self, state: &S) -> Self::Values {
                ($(self.$idx.read(state),)+)
            }

            fn all_unchanged(&self, previous: &Self::Values, current: &Self::Values) -> bool {
                true $(&& self.$idx.unchanged(&previous.$idx, &current.$idx))+
            }
        }
    };
}

impl_dependencies_for_tuple!((0, A));
impl_dependencies_for_tuple!((0, A), (1, B));
impl_dependencies_for_tuple!((0, A), (1, B), (2, C));
impl_dependencies_for_tuple!((0, A), (1, B), (2, C), (3, D));
impl_dependencies_for_tuple!((0, A), (1, B), (2, C), (3, D), (4, E));
impl_dependencies_for_tuple!((0, A), (1, B), (2, C), (3, D), (4, E), (5, F));
impl_dependencies_for_tuple!((0, A), (1, B), (2, C), (3, D), (4, E), (5, F), (6, G));
impl_dependencies_for_tuple!((0, A), (1, B), (2, C), (3, D), (4, E), (5, F), (6, G), (7, H));

impl<S, V> Dependencies<S> for Vec<Dep<S, V>> {
    type Values = Vec<V>;

    fn read_all(&self, state: &S) -> Self::Values {
        self.iter().map(|dep| dep.read(state)).collect()
    }

    fn all_unchanged(&self, previous: &Self::Values, current: &Self::Values) -> bool {
        previous.len() == current.len()
            && self
                .iter()
                .zip(previous.iter().zip(current))
                .all(|(dep, (prev, cur))| dep.unchanged(prev, cur))
    }
}
