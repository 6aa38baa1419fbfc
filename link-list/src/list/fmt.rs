// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;

use super::base::LinkList;

/// Renders a [`LinkList`] as `[a, b, c]`, formatting every element with a caller-supplied
/// function.
///
/// This is what [`ops::write_with`] and [`ops::print_with`] are built on.
///
/// [`ops::write_with`]: crate::ops::write_with
/// [`ops::print_with`]: crate::ops::print_with
pub struct Rendered<'a, T, F>
where
    F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    list: &'a LinkList<T>,
    fmt: F,
}

impl<'a, T, F> Rendered<'a, T, F>
where
    F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    pub fn new(list: &'a LinkList<T>, fmt: F) -> Self {
        Self { list, fmt }
    }
}

impl<'a, T, F> fmt::Display for Rendered<'a, T, F>
where
    F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (i, value) in self.list.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            (self.fmt)(value, f)?;
        }

        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Rendered::new(self, <T as fmt::Display>::fmt), f)
    }
}
