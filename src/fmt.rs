//! Logging shims that forward to `defmt` when the `defmt` feature is enabled.
//!
//! Without the feature the macros expand to nothing, but their arguments are
//! still type-checked so log statements cannot rot.

#![allow(unused_macros)]

/// Swallows a format string and its arguments.
macro_rules! consume {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        $( let _ = &$arg; )*
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($arg)*);
        #[cfg(not(feature = "defmt"))]
        let _ = || { consume!($($arg)*); };
    }};
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);
        #[cfg(not(feature = "defmt"))]
        let _ = || { consume!($($arg)*); };
    }};
}

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);
        #[cfg(not(feature = "defmt"))]
        let _ = || { consume!($($arg)*); };
    }};
}
