//! Logging macros.

/// Evaluates the given expression and logs the given message, suffixed with
/// the evaluation time in milliseconds, at the given [`Level`](crate::Level).
/// Evaluates to the value of the expression.
#[macro_export]
macro_rules! with_timing_logging {
    ($level:expr, $message:expr $(,$arg:expr)*; $expression:expr) => {{
        let _start_time = ::std::time::Instant::now();
        let _result = $expression;
        if $crate::log_enabled!($level) {
            $crate::log!(
                $level,
                concat!($message, " took {:.3} ms")$(,$arg)*,
                _start_time.elapsed().as_secs_f64() * 1e3,
            );
        }
        _result
    }};
}

#[macro_export]
macro_rules! with_timing_info_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {
        $crate::with_timing_logging!($crate::Level::Info, $message $(,$arg)*; $expression)
    };
}

#[macro_export]
macro_rules! with_timing_trace_logging {
    ($message:expr $(,$arg:expr)*; $expression:expr) => {
        $crate::with_timing_logging!($crate::Level::Trace, $message $(,$arg)*; $expression)
    };
}
