// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! The list layout and its operation set.
//!
//! A [`LinkList`] is always in one of three states (see [`Shape`]):
//! empty, holding a single element inline, or holding the first element inline plus a chain of
//! heap [`Node`]s for all further elements.
//! Every operation special-cases the inline first element.

mod base;
mod fmt;
mod traits;

pub use base::*;
pub use fmt::*;
pub use traits::*;
