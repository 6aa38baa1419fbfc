// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use alloc::boxed::Box;
use core::iter::{FromIterator, FusedIterator};
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

/// A heap-allocated list node, holding one element beyond the first.
///
/// Nodes are created by [`LinkList::push`] and only ever owned by a single list.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: *mut Node<T>,
}

impl<T> Node<T> {
    /// Boxes an unlinked node for `value` and hands out the raw pointer.
    /// Ownership passes to the list that links the node.
    fn alloc(value: T) -> NonNull<Self> {
        let node = Box::leak(Box::new(Self {
            value,
            next: ptr::null_mut(),
        }));
        trace!("allocated list node at {:p}", node);
        NonNull::from(node)
    }

    /// Reconstructs the `Box` leaked by [`Node::alloc`] and moves the node out of it.
    ///
    /// The caller must have unlinked `node`, it must not be reachable from any list afterwards.
    unsafe fn release(node: NonNull<Self>) -> Self {
        trace!("releasing list node at {:p}", node);
        *Box::from_raw(node.as_ptr())
    }
}

/// The three states of a [`LinkList`], as returned by [`LinkList::shape`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Shape {
    /// The list holds no elements.
    Empty,
    /// The list holds exactly one element, stored inline.
    Single,
    /// The list holds two or more elements, every element beyond the first in its own heap node.
    Chain,
}

pub(crate) enum Repr<T> {
    Empty,
    Single(T),
    Chain(Chain<T>),
}

/// A list with at least two elements.
///
/// `first` holds element 1, `last` the final element whose `next` is always null.
/// `first == last` for a list of exactly two elements.
pub(crate) struct Chain<T> {
    pub(crate) head: T,
    pub(crate) first: NonNull<Node<T>>,
    pub(crate) last: NonNull<Node<T>>,
}

impl<T> Chain<T> {
    /// Walks to the node holding list position `index` (`index >= 1`), stopping at `last`.
    unsafe fn node(&self, index: usize) -> Option<NonNull<Node<T>>> {
        let mut p = self.first;

        for _ in 1..index {
            if p == self.last {
                return None;
            }

            p = NonNull::new_unchecked((*p.as_ptr()).next);
        }

        Some(p)
    }

    /// Removes element 0 by promoting element 1 into the inline slot.
    unsafe fn pop_head(self) -> (Repr<T>, T) {
        let second = Node::release(self.first);

        let repr = match NonNull::new(second.next) {
            Some(first) => Repr::Chain(Chain {
                head: second.value,
                first,
                last: self.last,
            }),
            None => Repr::Single(second.value),
        };

        (repr, self.head)
    }

    /// Removes the element at `index` (`index >= 1`).
    /// Hands back an unchanged chain if the list is too short.
    unsafe fn remove(mut self, index: usize) -> (Repr<T>, Option<T>) {
        // `o` is the predecessor of `p`, where `None` stands for the inline head.
        let mut o = None;
        let mut p = self.first;

        for _ in 1..index {
            if p == self.last {
                return (Repr::Chain(self), None);
            }

            o = Some(p);
            p = NonNull::new_unchecked((*p.as_ptr()).next);
        }

        let was_last = p == self.last;
        let removed = Node::release(p);

        let repr = match o {
            None => match NonNull::new(removed.next) {
                Some(next) => {
                    self.first = next;
                    Repr::Chain(self)
                }
                None => Repr::Single(self.head),
            },
            Some(o) => {
                (*o.as_ptr()).next = removed.next;
                if was_last {
                    self.last = o;
                }
                Repr::Chain(self)
            }
        };

        (repr, Some(removed.value))
    }

    /// Releases every heap node from `first` through `last`.
    /// The inline head is dropped along with `self`.
    unsafe fn release_nodes(&self) {
        let mut current = Some(self.first);

        while let Some(node) = current {
            // Capture the link before the node is gone.
            current = NonNull::new((*node.as_ptr()).next);
            Node::release(node);
        }
    }
}

/// A singly linked list of `T` elements.
///
/// The first element is stored inline, so a list with a single element performs no heap
/// allocation at all. Every further element lives in its own heap [`Node`].
///
/// Dropping the list (or passing it to [`ops::free`]) releases all nodes.
///
/// [`ops::free`]: crate::ops::free
pub struct LinkList<T> {
    pub(crate) repr: Repr<T>,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> LinkList<T> {
    /// Creates an empty list. This does not allocate.
    pub const fn new() -> Self {
        Self {
            repr: Repr::Empty,
            marker: PhantomData,
        }
    }

    /// Removes and returns the element at `index`, or `None` if the list has no such element.
    ///
    /// This operation computes in *O*(*index*) time.
    pub fn checked_pop(&mut self, index: usize) -> Option<T> {
        let (repr, value) = match mem::replace(&mut self.repr, Repr::Empty) {
            Repr::Empty => (Repr::Empty, None),
            Repr::Single(head) if index == 0 => (Repr::Empty, Some(head)),
            Repr::Chain(chain) if index == 0 => {
                let (repr, head) = unsafe { chain.pop_head() };
                (repr, Some(head))
            }
            Repr::Chain(chain) => unsafe { chain.remove(index) },
            single => (single, None),
        };

        self.repr = repr;
        value
    }

    /// Removes all elements and releases their nodes.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn clear(&mut self) {
        if let Repr::Chain(chain) = mem::replace(&mut self.repr, Repr::Empty) {
            unsafe { chain.release_nodes() }
        }
    }

    /// Returns a clone of the element at `index`, or the default value of `T` if the list has
    /// no such element.
    ///
    /// This operation computes in *O*(*index*) time.
    pub fn get(&self, index: usize) -> T
    where
        T: Clone + Default,
    {
        match self.get_ref(index) {
            Some(value) => value.clone(),
            None => {
                debug!("get: index {} is out of range, returning the default value", index);
                T::default()
            }
        }
    }

    /// This operation computes in *O*(*index*) time.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match &mut self.repr {
            Repr::Empty => None,
            Repr::Single(head) => (index == 0).then(|| head),
            Repr::Chain(chain) => {
                if index == 0 {
                    Some(&mut chain.head)
                } else {
                    unsafe {
                        chain
                            .node(index)
                            .map(|node| &mut (*node.as_ptr()).value)
                    }
                }
            }
        }
    }

    /// This operation computes in *O*(*index*) time.
    pub fn get_ref(&self, index: usize) -> Option<&T> {
        match &self.repr {
            Repr::Empty => None,
            Repr::Single(head) => (index == 0).then(|| head),
            Repr::Chain(chain) if index == 0 => Some(&chain.head),
            Repr::Chain(chain) => unsafe {
                chain.node(index).map(|node| &(*node.as_ptr()).value)
            },
        }
    }

    /// This operation computes in *O*(*1*) time.
    pub fn is_empty(&self) -> bool {
        matches!(self.repr, Repr::Empty)
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        let (head, current) = match &self.repr {
            Repr::Empty => (None, ptr::null()),
            Repr::Single(head) => (Some(head), ptr::null()),
            Repr::Chain(chain) => (Some(&chain.head), chain.first.as_ptr() as *const _),
        };

        Iter {
            head,
            current,
            phantom: PhantomData,
        }
    }

    /// Counts the elements. The list does not cache its size.
    ///
    /// This operation computes in *O*(*n*) time.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes and returns the element at `index`, or returns the default value of `T` and
    /// leaves the list unchanged if the list has no such element.
    ///
    /// This operation computes in *O*(*index*) time.
    pub fn pop(&mut self, index: usize) -> T
    where
        T: Default,
    {
        self.checked_pop(index).unwrap_or_else(|| {
            debug!("pop: index {} is out of range, returning the default value", index);
            T::default()
        })
    }

    /// Appends `value` to the end of the list.
    /// Only allocates if the list already holds an element.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn push(&mut self, value: T) {
        self.repr = match mem::replace(&mut self.repr, Repr::Empty) {
            Repr::Empty => Repr::Single(value),
            Repr::Single(head) => {
                let node = Node::alloc(value);
                Repr::Chain(Chain {
                    head,
                    first: node,
                    last: node,
                })
            }
            Repr::Chain(mut chain) => {
                let node = Node::alloc(value);
                unsafe {
                    (*chain.last.as_ptr()).next = node.as_ptr();
                }
                chain.last = node;
                Repr::Chain(chain)
            }
        };
    }

    /// Returns which of the three list states is current.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn shape(&self) -> Shape {
        match self.repr {
            Repr::Empty => Shape::Empty,
            Repr::Single(_) => Shape::Single,
            Repr::Chain(_) => Shape::Chain,
        }
    }
}

impl<T> AsMut<LinkList<T>> for LinkList<T> {
    fn as_mut(&mut self) -> &mut LinkList<T> {
        self
    }
}

impl<T> AsRef<LinkList<T>> for LinkList<T> {
    fn as_ref(&self) -> &LinkList<T> {
        self
    }
}

impl<T> Default for LinkList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for LinkList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for LinkList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

// The list owns its nodes exclusively, just like a `Box<Node<T>>` chain would.
unsafe impl<T: Send> Send for LinkList<T> {}
unsafe impl<T: Sync> Sync for LinkList<T> {}

pub(crate) struct Iter<'a, T> {
    head: Option<&'a T>,
    current: *const Node<T>,
    phantom: PhantomData<&'a LinkList<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if let Some(head) = self.head.take() {
            return Some(head);
        }

        if self.current.is_null() {
            None
        } else {
            unsafe {
                let node = &*self.current;
                self.current = node.next;
                Some(&node.value)
            }
        }
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;

    fn collect<T: Clone>(list: &LinkList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_push_and_get() {
        let mut list = LinkList::new();
        assert_eq!(list.shape(), Shape::Empty);

        for i in 0..10 {
            list.push(i);
        }

        assert_eq!(list.len(), 10);
        assert_eq!(list.shape(), Shape::Chain);

        for i in 0..10 {
            assert_eq!(list.get(i), i);
            assert_eq!(list.get_ref(i), Some(&i));
        }
    }

    #[test]
    fn test_first_push_stays_inline() {
        let mut list = LinkList::new();
        list.push(3.14f32);
        assert_eq!(list.shape(), Shape::Single);
        assert_eq!(list.len(), 1);

        list.push(2.71);
        assert_eq!(list.shape(), Shape::Chain);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_pop_front_in_order() {
        let mut list = (0..10).collect::<LinkList<i32>>();

        for i in 0..10 {
            assert_eq!(list.pop(0), i);
            assert_eq!(list.len() as i32, 9 - i);
        }

        assert!(list.is_empty());
        assert_eq!(list.shape(), Shape::Empty);
    }

    #[test]
    fn test_pop_middle() {
        let mut list = [10, 20, 30].iter().copied().collect::<LinkList<i32>>();

        assert_eq!(list.pop(1), 20);
        assert_eq!(collect(&list), [10, 30]);
        assert_eq!(list.get(0), 10);
        assert_eq!(list.get(1), 30);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_pop_out_of_range() {
        let mut list = [10, 30].iter().copied().collect::<LinkList<i32>>();

        assert_eq!(list.pop(5), 0);
        assert_eq!(list.pop(2), 0);
        assert_eq!(list.checked_pop(2), None);
        assert_eq!(collect(&list), [10, 30]);

        let mut single = LinkList::new();
        single.push(7u64);
        assert_eq!(single.pop(1), 0);
        assert_eq!(single.shape(), Shape::Single);
        assert_eq!(single.get(0), 7);
    }

    #[test]
    fn test_pop_and_get_empty() {
        let mut list = LinkList::<f64>::new();
        assert_eq!(list.pop(0), 0.0);
        assert_eq!(list.pop(3), 0.0);
        assert_eq!(list.get(0), 0.0);
        assert_eq!(list.checked_pop(0), None);
        assert_eq!(list.get_ref(0), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_pop_single() {
        let mut list = LinkList::new();
        list.push(3.14f64);
        assert_eq!(list.shape(), Shape::Single);

        assert_eq!(list.pop(0), 3.14);
        assert_eq!(list.shape(), Shape::Empty);

        assert_eq!(list.pop(0), 0.0);
        assert_eq!(list.shape(), Shape::Empty);
    }

    #[test]
    fn test_get_single_out_of_range() {
        let mut list = LinkList::new();
        list.push(5i8);
        assert_eq!(list.get(0), 5);
        assert_eq!(list.get(1), 0);
        assert_eq!(list.get_ref(1), None);
    }

    #[test]
    fn test_pop_head_of_two_collapses_to_single() {
        let mut list = [1, 2].iter().copied().collect::<LinkList<i32>>();
        assert_eq!(list.pop(0), 1);
        assert_eq!(list.shape(), Shape::Single);
        assert_eq!(list.get(0), 2);

        list.push(3);
        assert_eq!(collect(&list), [2, 3]);
    }

    #[test]
    fn test_pop_tail_then_push() {
        for size in 2..6 {
            let mut list = (0..size).collect::<LinkList<usize>>();

            assert_eq!(list.pop(size - 1), size - 1);
            assert_eq!(list.len(), size - 1);

            list.push(100);
            assert_eq!(list.len(), size);
            assert_eq!(list.get(size - 1), 100);
            assert_eq!(list.get(size - 2), size - 2);
        }
    }

    #[test]
    fn test_pop_second_of_two() {
        let mut list = [1, 2].iter().copied().collect::<LinkList<i32>>();
        assert_eq!(list.pop(1), 2);
        assert_eq!(list.shape(), Shape::Single);

        list.push(4);
        list.push(5);
        assert_eq!(collect(&list), [1, 4, 5]);
    }

    #[test]
    fn test_pop_first_node_of_longer_chain() {
        let mut list = (0..4).collect::<LinkList<i32>>();
        assert_eq!(list.pop(1), 1);
        assert_eq!(collect(&list), [0, 2, 3]);
        assert_eq!(list.pop(2), 3);
        assert_eq!(collect(&list), [0, 2]);

        list.push(9);
        assert_eq!(collect(&list), [0, 2, 9]);
    }

    #[test]
    fn test_pop_inside_heap_chain() {
        let mut list = (0..5).collect::<LinkList<i32>>();
        assert_eq!(list.pop(2), 2);
        assert_eq!(collect(&list), [0, 1, 3, 4]);
        assert_eq!(list.len(), 4);

        list.push(5);
        assert_eq!(collect(&list), [0, 1, 3, 4, 5]);
        assert_eq!(list.get(4), 5);

        assert_eq!(list.pop(3), 4);
        assert_eq!(collect(&list), [0, 1, 3, 5]);
    }

    #[test]
    fn test_get_mut_head_and_nodes_of_chain() {
        let mut list = (1..4).collect::<LinkList<i32>>();
        *list.get_mut(0).unwrap() = 10;
        *list.get_mut(2).unwrap() = 30;
        assert_eq!(collect(&list), [10, 2, 30]);
        assert!(list.get_mut(3).is_none());
    }

    #[test]
    fn test_round_trip_returns_to_empty() {
        let mut list = LinkList::new();

        for round in 0..3 {
            for i in 0..5 {
                list.push(round * 10 + i);
            }
            for i in 0..5 {
                assert_eq!(list.pop(0), round * 10 + i);
            }
            assert_eq!(list.shape(), Shape::Empty);
            assert_eq!(list.len(), 0);
        }
    }

    #[test]
    fn test_get_mut() {
        let mut list = (0..3).collect::<LinkList<i32>>();

        for i in 0..3 {
            *list.get_mut(i).unwrap() *= 10;
        }

        assert!(list.get_mut(3).is_none());
        assert_eq!(collect(&list), [0, 10, 20]);
    }

    #[test]
    fn test_clear() {
        let mut list = (0..5).collect::<LinkList<i32>>();
        list.clear();
        assert!(list.is_empty());

        list.push(1);
        assert_eq!(collect(&list), [1]);
    }

    #[test]
    fn test_elements_are_dropped() {
        let tracker = Rc::new(());

        let mut list = LinkList::new();
        for _ in 0..5 {
            list.push(Rc::clone(&tracker));
        }
        assert_eq!(Rc::strong_count(&tracker), 6);

        drop(list.pop(0));
        drop(list.pop(2));
        drop(list.pop(10));
        assert_eq!(Rc::strong_count(&tracker), 4);

        drop(list);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
