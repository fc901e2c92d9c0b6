//! Update operators.
//!
//! An operator is a pure `Fn(&C) -> C` describing one change to a container.
//! Operators are built by curried constructors (`push(4)`, `partial(patch)`,
//! ...) and applied by calling them with a container.
//!
//! Every operator here obeys the no-op invariant: when the described change
//! has no effect under [`crate::Same`], the returned container is the input
//! handle itself. The documented exceptions are [`push`], [`map_values`],
//! [`map_record_values`] and [`pick_from_record`], which always build a new
//! container.
//!
//! # Families
//!
//! - [`record`] - `partial`, `deep_partial` and map-style record operators
//! - [`seq`] - `push`, `add_to_array`, `remove_from_array`, `update_at`
//! - [`set`] - `add_to_set`, `remove_from_set`
//! - [`map`] - `set_in_map`, `delete_from_map`, `update_in_map`, `merge_map`,
//!   `filter_map`, `map_values`
//! - [`common`] - `add` / `remove` over any [`Membership`] container
//! - [`ident`] - `id_index`, `id_is` lookup helpers
//! - [`compose`] - `pipe` / `compose`

pub mod common;
pub mod compose;
pub mod ident;
pub mod map;
pub mod record;
pub mod seq;
pub mod set;

pub use common::{Membership, add, remove};
pub use compose::{Operator, compose, operator, pipe};
pub use ident::{Identified, id_index, id_is, with_id};
pub use map::{delete_from_map, filter_map, map_values, merge_map, set_in_map, update_in_map};
pub use record::{
    deep_partial, delete_from_record, filter_record, map_record_values, merge_record,
    omit_from_record, partial, pick_from_record, set_in_record, update_in_record,
};
pub use seq::{add_to_array, push, remove_from_array, update_at};
pub use set::{add_to_set, remove_from_set};
