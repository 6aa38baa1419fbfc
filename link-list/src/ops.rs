// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! Every list operation as an individual generic function.
//!
//! Use these to assemble your own operation set, or generate named, element-specific wrappers
//! around them with the `link_list_*_function!` macros.

use core::fmt;

use crate::list::{LinkList, Rendered};

/// Creates an empty list. This does not allocate.
pub fn create<T>() -> LinkList<T> {
    LinkList::new()
}

/// Releases every node of `list` and the list itself.
pub fn free<T>(list: LinkList<T>) {
    drop(list)
}

/// Appends `value` to the end of `list`.
pub fn push<T>(list: &mut LinkList<T>, value: T) {
    list.push(value)
}

/// Removes and returns the element at `index`.
///
/// Returns the default value of `T` and leaves `list` unchanged if there is no such element.
pub fn pop<T: Default>(list: &mut LinkList<T>, index: usize) -> T {
    list.pop(index)
}

/// Returns a clone of the element at `index`.
///
/// Returns the default value of `T` if there is no such element.
pub fn get<T: Clone + Default>(list: &LinkList<T>, index: usize) -> T {
    list.get(index)
}

/// Writes `list` as `[a, b, c]` to `writer`, formatting each element with `fmt`.
pub fn write_with<T, W, F>(list: &LinkList<T>, writer: &mut W, fmt: F) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    write!(writer, "{}", Rendered::new(list, fmt))
}

/// Prints `list` as `[a, b, c]` followed by a newline to stdout, formatting each element
/// with `fmt`.
#[cfg(feature = "std")]
pub fn print_with<T, F>(list: &LinkList<T>, fmt: F)
where
    F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    std::println!("{}", Rendered::new(list, fmt));
}

/// Prints `list` as `[a, b, c]` followed by a newline to stdout.
#[cfg(feature = "std")]
pub fn print<T: fmt::Display>(list: &LinkList<T>) {
    std::println!("{}", list);
}
