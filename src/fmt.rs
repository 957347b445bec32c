//! Logging shims.
//!
//! On the target these forward to `defmt`. On the host (unit tests) there is no
//! global logger to link against, so the arguments are only borrowed to keep
//! them "used".

#![allow(unused_macros)]

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::info!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! error {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::error!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            let _ = ($( & $x ),*);
        }
    };
}
