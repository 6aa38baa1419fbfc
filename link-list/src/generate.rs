// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generation macros, producing named list families on top of [`LinkList`] and [`ops`].
//!
//! All generated items are `pub`. Names may be given in `snake_case` or `UpperCamelCase`:
//! generated type names are always converted to `UpperCamelCase` and function name prefixes to
//! `snake_case`.
//!
//! [`LinkList`]: crate::LinkList
//! [`ops`]: crate::ops

/// Generates a complete list family for an element type.
///
/// `link_list!(i32, int_list)` generates the types `IntListNode` and `IntList` as well as:
///
/// ```ignore
/// pub fn int_list_create() -> IntList;
/// pub fn int_list_free(list: IntList);
/// pub fn int_list_push(list: &mut IntList, value: i32);
/// pub fn int_list_pop(list: &mut IntList, index: usize) -> i32;
/// pub fn int_list_get(list: &IntList, index: usize) -> i32;
/// ```
pub use link_list_macros::link_list;

/// Same as [`link_list!`], but additionally generates a print function using the given
/// format string for every element.
///
/// `link_list_w_print!(f64, float_list, "{:.2}")` additionally generates
/// `pub fn float_list_print(list: &FloatList)`.
pub use link_list_macros::link_list_w_print;

/// Generates a node type alias: `def_link_list_node!(i32, IntNode)`.
pub use link_list_macros::def_link_list_node;

/// Generates a list type alias and checks at compile time that the given node type stores
/// the same element type: `def_link_list!(i32, IntList, IntNode)`.
pub use link_list_macros::def_link_list;

/// Generates create, free, push, pop and get functions for a list type, prefixed with the
/// `snake_case` list name: `link_list_base_functions!(i32, IntList)`.
pub use link_list_macros::link_list_base_functions;

/// `link_list_create_function!(fun_name, ListType)`
pub use link_list_macros::link_list_create_function;

/// `link_list_free_function!(fun_name, ListType)`
pub use link_list_macros::link_list_free_function;

/// `link_list_push_function!(fun_name, ElementType, ListType)`
pub use link_list_macros::link_list_push_function;

/// `link_list_pop_function!(fun_name, ElementType, ListType)`
pub use link_list_macros::link_list_pop_function;

/// `link_list_get_function!(fun_name, ElementType, ListType)`
pub use link_list_macros::link_list_get_function;

/// `link_list_print_function!(fun_name, ListType, "{}")`
///
/// Requires the `std` feature of this crate.
pub use link_list_macros::link_list_print_function;

#[cfg(test)]
mod tests {
    use crate::{link_list, link_list_w_print, Shape};

    link_list!(i32, int_list);
    #[cfg(feature = "std")]
    link_list_w_print!(f32, FloatList, "{:.2}");

    #[test]
    fn test_generated_family() {
        let mut list: IntList = int_list_create();
        int_list_push(&mut list, 10);
        int_list_push(&mut list, 20);
        int_list_push(&mut list, 30);

        assert_eq!(int_list_get(&list, 2), 30);
        assert_eq!(int_list_pop(&mut list, 1), 20);
        assert_eq!(int_list_pop(&mut list, 5), 0);
        assert_eq!(list.len(), 2);

        int_list_free(list);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_generated_family_from_camel_case_name() {
        let mut list = float_list_create();
        float_list_push(&mut list, 3.14);
        assert_eq!(list.shape(), Shape::Single);
        float_list_print(&list);

        let node_size = core::mem::size_of::<FloatListNode>();
        assert!(node_size >= core::mem::size_of::<f32>());

        assert_eq!(float_list_pop(&mut list, 0), 3.14);
        assert_eq!(float_list_pop(&mut list, 0), 0.0);
        float_list_free(list);
    }
}
