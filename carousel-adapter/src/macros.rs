#[cfg(feature = "tracing")]
macro_rules! ctrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "carousel_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ctrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! cdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "carousel_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! cdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! cwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "carousel_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! cwarn {
    ($($tt:tt)*) => {};
}
