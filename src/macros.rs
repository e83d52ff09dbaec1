// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Facade macros capturing the call site.

/// Expand to the name of the enclosing function: the last path segment, with closure
/// layers stripped.
///
/// # Examples
///
/// ```
/// fn do_work() -> &'static str {
///     levelog::function_name!()
/// }
///
/// assert_eq!(do_work(), "do_work");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        $crate::__private::short_function_name(::std::any::type_name_of_val(&f))
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = $logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.log(
                level,
                $crate::record::Location::new(::std::line!(), $crate::function_name!()),
                ::std::format_args!($($arg)+),
            );
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __stream {
    ($logger:expr, $level:expr) => {{
        let logger: &$crate::Logger = $logger;
        logger.set_pending_level($level);
        $crate::Stream::at(logger, ::std::line!(), $crate::function_name!())
    }};
}

/// Log at [`Level::Verbose`](crate::Level::Verbose).
///
/// * `verbose!("format", args..)` emits right away; the arguments are not formatted when the
///   level is disabled.
/// * `verbose!()` opens a [`Stream`](crate::Stream) instead.
///
/// Both forms target [`Logger::instance`](crate::Logger::instance) unless prefixed with
/// `logger: &some_logger`.
///
/// # Examples
///
/// ```
/// let logger = levelog::builder().build();
/// levelog::verbose!(logger: &logger, "cache miss for {}", 42);
/// levelog::verbose!(logger: &logger).put("cache").put("miss");
/// ```
#[macro_export]
macro_rules! verbose {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::__log!($logger, $crate::Level::Verbose, $($arg)+) };
    (logger: $logger:expr) => { $crate::__stream!($logger, $crate::Level::Verbose) };
    () => { $crate::__stream!($crate::Logger::instance(), $crate::Level::Verbose) };
    ($($arg:tt)+) => { $crate::__log!($crate::Logger::instance(), $crate::Level::Verbose, $($arg)+) };
}

/// Log at [`Level::Info`](crate::Level::Info). See [`verbose!`] for the accepted forms.
///
/// # Examples
///
/// ```
/// let logger = levelog::builder().build();
/// levelog::info!(logger: &logger, "connection established");
/// ```
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::__log!($logger, $crate::Level::Info, $($arg)+) };
    (logger: $logger:expr) => { $crate::__stream!($logger, $crate::Level::Info) };
    () => { $crate::__stream!($crate::Logger::instance(), $crate::Level::Info) };
    ($($arg:tt)+) => { $crate::__log!($crate::Logger::instance(), $crate::Level::Info, $($arg)+) };
}

/// Log at [`Level::Warning`](crate::Level::Warning). See [`verbose!`] for the accepted forms.
#[macro_export]
macro_rules! warning {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::__log!($logger, $crate::Level::Warning, $($arg)+) };
    (logger: $logger:expr) => { $crate::__stream!($logger, $crate::Level::Warning) };
    () => { $crate::__stream!($crate::Logger::instance(), $crate::Level::Warning) };
    ($($arg:tt)+) => { $crate::__log!($crate::Logger::instance(), $crate::Level::Warning, $($arg)+) };
}

/// Log at [`Level::Error`](crate::Level::Error). See [`verbose!`] for the accepted forms.
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::__log!($logger, $crate::Level::Error, $($arg)+) };
    (logger: $logger:expr) => { $crate::__stream!($logger, $crate::Level::Error) };
    () => { $crate::__stream!($crate::Logger::instance(), $crate::Level::Error) };
    ($($arg:tt)+) => { $crate::__log!($crate::Logger::instance(), $crate::Level::Error, $($arg)+) };
}

#[doc(hidden)]
pub fn short_function_name(type_name: &'static str) -> &'static str {
    let mut name = type_name.strip_suffix("::f").unwrap_or(type_name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    match name.rfind("::") {
        Some(pos) => &name[pos + 2..],
        None => name,
    }
}
