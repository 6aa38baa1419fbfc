// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

#[cfg(feature = "std")]
use core::fmt;

use super::base::LinkList;
use crate::ops;

/// The operation set of a list of `T` elements: create, free, push, pop, get (and print with
/// the `std` feature).
///
/// Every operation has a default implementation delegating to [`ops`], so a type only needs to
/// expose its underlying [`LinkList`] via `AsRef`, `AsMut` and `From`. Override any operation
/// to substitute your own while keeping the generated remainder:
///
/// ```ignore
/// struct Scores(LinkList<u32>);
///
/// // AsRef, AsMut and From implementations omitted.
///
/// impl LinkListFunctions<u32> for Scores {
///     fn get(&self, index: usize) -> u32 {
///         self.0.get_ref(index).copied().unwrap_or(u32::MAX)
///     }
/// }
/// ```
///
/// [`LinkList`] itself implements this trait with all default operations.
pub trait LinkListFunctions<T>:
    Sized + AsRef<LinkList<T>> + AsMut<LinkList<T>> + From<LinkList<T>>
{
    fn create() -> Self {
        Self::from(ops::create())
    }

    fn free(self) {
        drop(self)
    }

    fn push(&mut self, value: T) {
        ops::push(self.as_mut(), value)
    }

    fn pop(&mut self, index: usize) -> T
    where
        T: Default,
    {
        ops::pop(self.as_mut(), index)
    }

    fn get(&self, index: usize) -> T
    where
        T: Clone + Default,
    {
        ops::get(self.as_ref(), index)
    }

    #[cfg(feature = "std")]
    fn print(&self)
    where
        T: fmt::Display,
    {
        ops::print(self.as_ref())
    }
}

impl<T> LinkListFunctions<T> for LinkList<T> {}
