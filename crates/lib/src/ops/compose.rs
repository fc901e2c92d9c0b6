//! Operator composition.
//!
//! [`pipe`] runs operators left to right, [`compose`] right to left. Both
//! thread the container through every step, so the result is the original
//! handle only when every step returned its input unchanged. With no
//! operators both are the identity.
//!
//! The [`pipe!`](crate::pipe) and [`compose!`](crate::compose) macros box
//! their arguments so differently-typed operators can be mixed.

/// A boxed operator over containers of type `C`.
pub type Operator<C> = Box<dyn Fn(&C) -> C>;

/// Box an operator.
pub fn operator<C>(op: impl Fn(&C) -> C + 'static) -> Operator<C> {
    Box::new(op)
}

/// Apply `ops` in order, feeding each result to the next.
///
/// ```
/// use strata::{ops::{operator, partial, pipe}, record};
///
/// let state = record! { "a" => 1, "b" => 2 };
/// let noop = pipe(vec![
///     operator(partial(record! { "a" => 1 })),
///     operator(partial(record! { "a" => 1 })),
/// ]);
/// assert!(noop(&state).ptr_eq(&state));
/// ```
pub fn pipe<C: Clone>(ops: Vec<Operator<C>>) -> impl Fn(&C) -> C {
    move |input| ops.iter().fold(input.clone(), |acc, op| op(&acc))
}

/// Apply `ops` in reverse order, so the last operator runs first.
pub fn compose<C: Clone>(ops: Vec<Operator<C>>) -> impl Fn(&C) -> C {
    move |input| ops.iter().rev().fold(input.clone(), |acc, op| op(&acc))
}

/// Left-to-right composition of operator expressions.
///
/// ```
/// use strata::{ops::{add, push, remove}, pipe, Seq};
///
/// let seq = Seq::from(vec![1, 2, 3]);
/// let step = pipe!(push(4), remove(2), add(4));
/// assert_eq!(step(&seq), [1, 3, 4]);
/// ```
#[macro_export]
macro_rules! pipe {
    ($($op:expr),* $(,)?) => {
        $crate::ops::pipe(::std::vec![$($crate::ops::operator($op)),*])
    };
}

/// Right-to-left composition of operator expressions.
#[macro_export]
macro_rules! compose {
    ($($op:expr),* $(,)?) => {
        $crate::ops::compose(::std::vec![$($crate::ops::operator($op)),*])
    };
}
