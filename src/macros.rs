//! Format-string macros over the process-wide logger.

/// Logs at DEBUG with a format string. Evaluates to the rendered line.
///
/// ```no_run
/// leveled_log::debugf!("cache has {} entries", 12);
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::debugf(::std::format_args!($($arg)+))
    };
}

/// Logs at INFO with a format string. Evaluates to the rendered line.
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::infof(::std::format_args!($($arg)+))
    };
}

/// Logs at NOTICE with a format string. Evaluates to the rendered line.
#[macro_export]
macro_rules! noticef {
    ($($arg:tt)+) => {
        $crate::noticef(::std::format_args!($($arg)+))
    };
}

/// Logs at WARNING with a format string. Evaluates to a
/// [`LogError`](crate::LogError).
#[macro_export]
macro_rules! warningf {
    ($($arg:tt)+) => {
        $crate::warningf(::std::format_args!($($arg)+))
    };
}

/// Logs at ERROR with a format string. Evaluates to a
/// [`LogError`](crate::LogError).
///
/// ```no_run
/// fn open(path: &str) -> Result<(), leveled_log::LogError> {
///     Err(leveled_log::errorf!("cannot open {path}"))
/// }
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::errorf(::std::format_args!($($arg)+))
    };
}

/// Logs at CRITICAL with a format string. Evaluates to a
/// [`LogError`](crate::LogError).
#[macro_export]
macro_rules! criticalf {
    ($($arg:tt)+) => {
        $crate::criticalf(::std::format_args!($($arg)+))
    };
}

/// Logs at FATAL with a format string and exits the process.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::fatalf(::std::format_args!($($arg)+))
    };
}
