// Thin wrappers so call sites don't need a `cfg` each. Every event carries the
// contained type's name. With the `tracing` feature off these expand to nothing.

macro_rules! trace_event {
    ($ty:ty, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(ty = core::any::type_name::<$ty>(), $($arg)+);
    };
}

macro_rules! debug_event {
    ($ty:ty, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(ty = core::any::type_name::<$ty>(), $($arg)+);
    };
}
