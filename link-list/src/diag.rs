// Copyright 2022 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic records, forwarded to the `log` facade when the `log` feature is enabled
//! and compiled out otherwise.

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        ::log::trace!($($arg)+);
    };
}

macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        ::log::debug!($($arg)+);
    };
}
