//! Memoized derived values.
//!
//! Two selector flavours share the [`Select`] interface:
//!
//! - [`Selector`] declares its dependencies up front as a tuple (or `Vec`) of
//!   [`Dep`]s. Each call reads every dependency and reruns the combiner only
//!   when one of them changed.
//! - [`TrackedSelector`] discovers its dependencies while running. The
//!   combiner reads through a [`Tracker`], and only the reads it actually
//!   made are checked on the next call.
//!
//! Each selector owns a single-entry cache. Dependencies compare with
//! [`crate::Same`] unless built with a custom equality, so containers count
//! as unchanged only when they are the same handle.

mod dependency;
mod memo;
mod tracked;

pub use dependency::{Dep, Dependencies};
pub use memo::{Selector, create_selector};
pub use tracked::{TrackedSelector, Tracker};

/// A derived value computed from a state of type `S`.
pub trait Select<S> {
    type Output;

    fn select(&self, state: &S) -> Self::Output;
}

impl<S, T: Select<S> + ?Sized> Select<S> for &T {
    type Output = T::Output;

    fn select(&self, state: &S) -> Self::Output {
        (**self).select(state)
    }
}
