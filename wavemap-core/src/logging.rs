//! Optional logging
//!
//! The core only depends on `log` when the `log` feature is on. These
//! macros forward to it, or expand to nothing on targets without a logger.

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}
