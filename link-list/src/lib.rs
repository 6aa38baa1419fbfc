// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! Singly linked lists specialized for a single element type, which keep their first element
//! inline in the list header and only allocate a heap node for every further element.
//!
//! Lists can be obtained at three levels of granularity:
//!
//! 1. The complete [`LinkList`] container, or a named family of functions generated via
//!    [`link_list!`] / [`link_list_w_print!`]:
//!
//!    ```ignore
//!    link_list!(i32, int_list);
//!
//!    let mut list = int_list_create();
//!    int_list_push(&mut list, 10);
//!    assert_eq!(int_list_get(&list, 0), 10);
//!    int_list_free(list);
//!    ```
//!
//! 2. The structural building blocks ([`Node`], [`LinkList`]) plus the [`LinkListFunctions`]
//!    operation set, whose default operations can be selectively replaced for your own list type.
//!    [`def_link_list_node!`], [`def_link_list!`] and [`link_list_base_functions!`] generate
//!    the named counterparts.
//!
//! 3. Every operation individually, as a generic function in [`ops`] or generated under a name
//!    of your choice via the `link_list_*_function!` macros.
//!
//! Out-of-range accesses through `pop` and `get` are not signaled, they return the default
//! value of the element type and leave the list untouched.
//! Use [`LinkList::checked_pop`] and [`LinkList::get_ref`] to tell both cases apart.

#![no_std]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

// Required for expanding our generation macros when testing.
#[cfg(test)]
extern crate self as link_list;

#[macro_use]
mod diag;
mod generate;
mod list;
pub mod ops;

pub use generate::*;
pub use list::*;
