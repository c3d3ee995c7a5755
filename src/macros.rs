//! Feature-gated logging macros.
//!
//! With the `tracing` feature enabled these forward to the matching `tracing`
//! macro; without it they type-check their arguments and compile to nothing.

/// Emits a `debug`-level event, used when a mutation is absorbed as a no-op.
#[cfg(feature = "tracing")]
macro_rules! graph_debug {
    ($($arg:tt)+) => {
        ::tracing::debug!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! graph_debug {
    ($($arg:tt)+) => {
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

/// Emits a `trace`-level event for completed traversals and queries.
#[cfg(feature = "tracing")]
macro_rules! graph_trace {
    ($($arg:tt)+) => {
        ::tracing::trace!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! graph_trace {
    ($($arg:tt)+) => {
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

pub(crate) use graph_debug;
pub(crate) use graph_trace;

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_inline_captures() {
        let src = 3usize;
        let dst = 4usize;
        graph_debug!("ignoring edge {src} -> {dst}");
        graph_trace!("visited {} vertices", src + dst);
    }
}
