//! Reference-counted immutable containers.
//!
//! Every container here is a thin handle over an `Rc`. Cloning a handle never
//! copies data and keeps identity, so "return the same reference" is spelled
//! `container.clone()` and checked with `ptr_eq`. Containers expose read
//! access only; all changes go through [`crate::ops`].
//!
//! - [`Seq`] - ordered sequence
//! - [`Set`] - insertion-ordered set
//! - [`Map`] - insertion-ordered key-value map
//!
//! The string-keyed [`crate::Record`] lives next to [`crate::Value`].

pub mod map;
pub mod seq;
pub mod set;

pub use map::Map;
pub use seq::Seq;
pub use set::Set;
