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

use std::fmt;
use std::panic;
use std::sync::OnceLock;

use crate::Append;
use crate::Filter;
use crate::Level;
use crate::ParseLevelError;
use crate::Stream;
use crate::Trap;
use crate::append;
use crate::color;
use crate::color::Color;
use crate::filter::FilterResult;
use crate::filter::Threshold;
use crate::record::Location;
use crate::record::RecordBuilder;
use crate::trap::DefaultTrap;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// A leveled logger writing accepted messages to a single sink.
///
/// A logger owns a severity gate ([`Threshold`]) and offers two ways to emit:
///
/// * with an explicit level, through [`log`](Logger::log) or the formatting macros;
/// * through a [`Stream`] returned by a leveled facade method such as [`info`](Logger::info).
///   The method records the level as pending and the stream's flush consumes it, so a stream
///   that was not opened by a leveled method (a color stream, or a bare `log` crate call when the
///   logger is installed globally) is attributed to whatever is pending, [`Level::Info`] by
///   default.
///
/// # Examples
///
/// ```
/// use levelog::Level;
///
/// let logger = levelog::builder().threshold(Level::Warning).build();
/// logger.info().put("suppressed");
/// logger.error().put("disk full");
/// ```
#[derive(Debug)]
pub struct Logger {
    gate: Threshold,
    filters: Vec<Box<dyn Filter>>,
    append: Box<dyn Append>,
    trap: Box<dyn Trap>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(
            Threshold::default(),
            vec![],
            Box::new(append::Stderr::default()),
            Box::new(DefaultTrap::default()),
        )
    }
}

impl Logger {
    pub(super) fn new(
        gate: Threshold,
        filters: Vec<Box<dyn Filter>>,
        append: Box<dyn Append>,
        trap: Box<dyn Trap>,
    ) -> Self {
        Self {
            gate,
            filters,
            append,
            trap,
        }
    }

    /// The process-wide logger.
    ///
    /// Created on first access, unless one was installed before with
    /// [`LoggerBuilder::apply`](crate::LoggerBuilder::apply). The default instance writes to
    /// stderr with the threshold read from [`DEFAULT_LEVEL_ENV`](crate::DEFAULT_LEVEL_ENV), or
    /// [`Level::Info`]. With the `bridge-log` feature, the instance also becomes the `log` crate's
    /// global logger if none is set yet.
    pub fn instance() -> &'static Logger {
        match DEFAULT_LOGGER.get() {
            Some(logger) => logger,
            None => {
                let logger = crate::builder()
                    .threshold_from_env(crate::DEFAULT_LEVEL_ENV)
                    .build();
                install(logger).0
            }
        }
    }

    /// The current threshold.
    pub fn threshold(&self) -> Level {
        self.gate.threshold()
    }

    /// Replace the threshold.
    pub fn set_threshold(&self, level: Level) {
        self.gate.set_threshold(level);
    }

    /// Replace the threshold with a level parsed from its name, case-insensitively.
    ///
    /// Accepted names are `verbose`, `info`, `warn`, `warning` and `error`. On error the
    /// threshold is left unchanged; ignore the result for a silent no-op.
    pub fn set_threshold_by_name(&self, name: &str) -> Result<Level, ParseLevelError> {
        self.gate.set_threshold_by_name(name)
    }

    /// Whether a message at `level` would be emitted.
    pub fn is_enabled(&self, level: Level) -> bool {
        if !self.gate.is_enabled(level) {
            return false;
        }

        for filter in &self.filters {
            match filter.enabled(level) {
                FilterResult::Reject => return false,
                FilterResult::Accept => return true,
                FilterResult::Neutral => {}
            }
        }

        true
    }

    /// Whether [`Level::Verbose`] messages would be emitted.
    pub fn is_verbose_enabled(&self) -> bool {
        self.is_enabled(Level::Verbose)
    }

    /// Whether [`Level::Info`] messages would be emitted.
    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(Level::Info)
    }

    /// Whether [`Level::Warning`] messages would be emitted.
    pub fn is_warning_enabled(&self) -> bool {
        self.is_enabled(Level::Warning)
    }

    /// Whether [`Level::Error`] messages would be emitted.
    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(Level::Error)
    }

    /// The level the next implicitly-leveled message is attributed to.
    pub fn pending_level(&self) -> Level {
        self.gate.pending()
    }

    /// Attribute the next implicitly-leveled message to `level`.
    pub fn set_pending_level(&self, level: Level) {
        self.gate.set_pending(level);
    }

    /// Emit a message at an explicit level.
    ///
    /// The pending level is neither read nor reset.
    pub fn log(&self, level: Level, location: Location<'_>, args: fmt::Arguments<'_>) {
        if self.is_enabled(level) {
            self.emit(level, location, args);
        }
    }

    /// Emit a message attributed to the pending level.
    ///
    /// The pending level is consumed and reset to [`Level::Info`] whether or not the message
    /// passes the gate. Never fails: sink errors go to the configured [`Trap`].
    pub fn handle(&self, location: Location<'_>, args: fmt::Arguments<'_>) {
        let level = self.gate.take_pending();
        if self.is_enabled(level) {
            self.emit(level, location, args);
        }
    }

    fn emit(&self, level: Level, location: Location<'_>, args: fmt::Arguments<'_>) {
        let record = RecordBuilder::default()
            .level(level)
            .location(location)
            .args(args)
            .build();

        if let Err(err) = self.append.append(&record) {
            let err = err
                .with_context("level", level)
                .with_context("line", location.line())
                .with_context("function", location.function());
            self.trap.trap(&err);
        }
    }

    /// Flush the sink.
    pub fn flush(&self) {
        if let Err(err) = self.append.flush() {
            self.trap.trap(&err);
        }
    }

    #[track_caller]
    fn leveled(&self, level: Level) -> Stream<'_> {
        self.gate.set_pending(level);
        Stream::caller(self, panic::Location::caller())
    }

    #[track_caller]
    fn colored(&self, color: Color) -> Stream<'_> {
        Stream::caller(self, panic::Location::caller()).seeded(color.escape())
    }

    /// Open a stream attributed to [`Level::Verbose`].
    #[track_caller]
    pub fn verbose(&self) -> Stream<'_> {
        self.leveled(Level::Verbose)
    }

    /// Open a stream attributed to [`Level::Info`].
    #[track_caller]
    pub fn info(&self) -> Stream<'_> {
        self.leveled(Level::Info)
    }

    /// Open a stream attributed to [`Level::Warning`].
    #[track_caller]
    pub fn warning(&self) -> Stream<'_> {
        self.leveled(Level::Warning)
    }

    /// Open a stream attributed to [`Level::Error`].
    #[track_caller]
    pub fn error(&self) -> Stream<'_> {
        self.leveled(Level::Error)
    }

    /// Open a stream starting with the black escape sequence. The pending level is untouched.
    #[track_caller]
    pub fn black(&self) -> Stream<'_> {
        self.colored(Color::Black)
    }

    /// Open a stream starting with the red escape sequence. The pending level is untouched.
    #[track_caller]
    pub fn red(&self) -> Stream<'_> {
        self.colored(Color::Red)
    }

    /// Open a stream starting with the green escape sequence. The pending level is untouched.
    #[track_caller]
    pub fn green(&self) -> Stream<'_> {
        self.colored(Color::Green)
    }

    /// Open a stream starting with the yellow escape sequence. The pending level is untouched.
    #[track_caller]
    pub fn yellow(&self) -> Stream<'_> {
        self.colored(Color::Yellow)
    }

    /// Open a stream starting with the blue escape sequence. The pending level is untouched.
    #[track_caller]
    pub fn blue(&self) -> Stream<'_> {
        self.colored(Color::Blue)
    }

    /// Open a stream starting with the violet escape sequence. The pending level is untouched.
    #[track_caller]
    pub fn violet(&self) -> Stream<'_> {
        self.colored(Color::Violet)
    }

    /// Open a stream starting with the sky blue escape sequence. The pending level is untouched.
    #[track_caller]
    pub fn sky_blue(&self) -> Stream<'_> {
        self.colored(Color::SkyBlue)
    }

    /// Open a stream starting with the white escape sequence. The pending level is untouched.
    #[track_caller]
    pub fn white(&self) -> Stream<'_> {
        self.colored(Color::White)
    }

    /// The escape sequence that resets colors, to append after colored text.
    pub const fn end() -> &'static str {
        color::end()
    }
}

/// Install `logger` as the process-wide instance unless one exists.
///
/// Returns the installed instance, and `logger` back if it lost.
pub(super) fn install(logger: Logger) -> (&'static Logger, Option<Logger>) {
    let mut candidate = Some(logger);
    let installed = DEFAULT_LOGGER.get_or_init(|| candidate.take().unwrap_or_default());
    if candidate.is_none() {
        #[cfg(feature = "bridge-log")]
        super::bridge::install(installed);
    }
    (installed, candidate)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use jiff::tz::TimeZone;

    use super::*;
    use crate::Error;
    use crate::Layout;
    use crate::layout::TextLayout;
    use crate::record::Record;

    #[derive(Debug, Clone, Default)]
    struct Lines(Arc<Mutex<Vec<(Level, String)>>>);

    impl Lines {
        fn take(&self) -> Vec<(Level, String)> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    impl Append for Lines {
        fn append(&self, record: &Record) -> Result<(), Error> {
            let line = format!("[{}] {}", record.function(), record.args());
            self.0.lock().unwrap().push((record.level(), line));
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl Append for Broken {
        fn append(&self, _: &Record) -> Result<(), Error> {
            Err(Error::new("sink unavailable"))
        }

        fn flush(&self) -> Result<(), Error> {
            Err(Error::new("flush unavailable"))
        }
    }

    #[derive(Debug, Clone, Default)]
    struct Collect(Arc<Mutex<Vec<String>>>);

    impl Trap for Collect {
        fn trap(&self, err: &Error) {
            self.0.lock().unwrap().push(err.to_string());
        }
    }

    fn capture(threshold: Level) -> (Logger, Lines) {
        let lines = Lines::default();
        let logger = crate::builder()
            .threshold(threshold)
            .append(lines.clone())
            .build();
        (logger, lines)
    }

    #[test]
    fn stream_flushes_once_on_drop() {
        let (logger, lines) = capture(Level::Verbose);
        logger.warning().function("run").put("a").put(1).put('b');
        assert_eq!(lines.take(), vec![(Level::Warning, "[run] a 1 b".to_string())]);

        let stream = logger.error().function("run").put("now");
        stream.flush();
        assert_eq!(lines.take(), vec![(Level::Error, "[run] now".to_string())]);
    }

    #[test]
    fn stream_supports_write_macro() {
        use std::fmt::Write;

        let (logger, lines) = capture(Level::Verbose);
        let mut stream = logger.info().function("run");
        write!(stream, "{}+{}", 1, 2).unwrap();
        assert_eq!(stream.message(), "1+2");
        stream.put("=3").flush();
        assert_eq!(lines.take(), vec![(Level::Info, "[run] 1+2 =3".to_string())]);
    }

    #[test]
    fn stream_without_macro_reports_source_file() {
        let (logger, lines) = capture(Level::Verbose);
        logger.info().put("here");
        let (_, line) = lines.take().remove(0);
        assert!(line.starts_with(&format!("[{}]", file!())), "{line}");
    }

    #[test]
    fn gate_drops_less_important_messages() {
        let (logger, lines) = capture(Level::Error);
        logger.info().function("run").put("quiet");
        assert!(lines.take().is_empty());

        logger.error().function("run").put("loud");
        assert_eq!(lines.take(), vec![(Level::Error, "[run] loud".to_string())]);
    }

    #[test]
    fn flush_resets_pending_level() {
        let (logger, lines) = capture(Level::Verbose);
        logger.error().function("run").put("first");
        assert_eq!(logger.pending_level(), Level::Info);

        logger.handle(Location::new(1, "bare"), format_args!("second"));
        assert_eq!(
            lines.take(),
            vec![
                (Level::Error, "[run] first".to_string()),
                (Level::Info, "[bare] second".to_string()),
            ]
        );
    }

    #[test]
    fn discarded_flush_also_resets_pending_level() {
        let (logger, lines) = capture(Level::Warning);
        logger.verbose().put("dropped");
        assert_eq!(logger.pending_level(), Level::Info);

        logger.set_threshold(Level::Verbose);
        logger.handle(Location::new(1, "bare"), format_args!("kept"));
        assert_eq!(lines.take(), vec![(Level::Info, "[bare] kept".to_string())]);
    }

    #[test]
    fn color_streams_keep_pending_level() {
        let (logger, lines) = capture(Level::Verbose);
        let warning = logger.warning().function("outer");
        logger.red().function("run").put("hot").put(Logger::end());
        assert_eq!(
            lines.take(),
            vec![(Level::Warning, "[run] \x1b[31mhot \x1b[0m".to_string())]
        );

        // the color stream consumed the pending level
        drop(warning);
        assert_eq!(lines.take(), vec![(Level::Info, "[outer] ".to_string())]);
    }

    #[test]
    fn color_streams_are_seeded() {
        let (logger, lines) = capture(Level::Verbose);
        for (stream, escape) in [
            (logger.black(), "\x1b[30m"),
            (logger.red(), "\x1b[31m"),
            (logger.green(), "\x1b[32m"),
            (logger.yellow(), "\x1b[33m"),
            (logger.blue(), "\x1b[34m"),
            (logger.violet(), "\x1b[35m"),
            (logger.sky_blue(), "\x1b[36m"),
            (logger.white(), "\x1b[37m"),
        ] {
            let stream = stream.function("run").put("x");
            assert_eq!(stream.message(), format!("{escape}x"));
        }

        let lines = lines.take();
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|(level, _)| *level == Level::Info));
    }

    #[test]
    fn explicit_level_ignores_pending() {
        let (logger, lines) = capture(Level::Info);
        logger.set_pending_level(Level::Error);
        logger.log(Level::Warning, Location::new(3, "run"), format_args!("explicit"));
        logger.log(Level::Verbose, Location::new(4, "run"), format_args!("hidden"));

        assert_eq!(lines.take(), vec![(Level::Warning, "[run] explicit".to_string())]);
        assert_eq!(logger.pending_level(), Level::Error);
    }

    #[test]
    fn enabled_predicates_follow_threshold() {
        let (logger, _) = capture(Level::Warning);
        assert!(!logger.is_verbose_enabled());
        assert!(!logger.is_info_enabled());
        assert!(logger.is_warning_enabled());
        assert!(logger.is_error_enabled());

        assert_eq!(logger.set_threshold_by_name("VERBOSE"), Ok(Level::Verbose));
        assert!(logger.is_verbose_enabled());
        assert!(logger.set_threshold_by_name("chatty").is_err());
        assert_eq!(logger.threshold(), Level::Verbose);
    }

    #[test]
    fn extra_filters_narrow_the_gate() {
        let lines = Lines::default();
        let logger = crate::builder()
            .threshold(Level::Verbose)
            .filter(Level::Warning)
            .append(lines.clone())
            .build();

        assert!(!logger.is_info_enabled());
        logger.info().put("filtered");
        logger.warning().function("run").put("kept");
        assert_eq!(lines.take(), vec![(Level::Warning, "[run] kept".to_string())]);
    }

    #[test]
    fn sink_errors_go_to_trap() {
        let trap = Collect::default();
        let logger = crate::builder()
            .append(Broken)
            .trap(trap.clone())
            .build();

        logger.error().function("run").put("lost");
        logger.flush();

        let errors = trap.0.lock().unwrap().clone();
        assert_eq!(errors.len(), 2);
        assert!(
            errors[0].starts_with("sink unavailable, context: { level: ERR, line: "),
            "{}",
            errors[0]
        );
        assert!(errors[0].ends_with(", function: run }"), "{}", errors[0]);
        assert_eq!(errors[1], "flush unavailable");
    }

    #[test]
    fn formats_with_layout() {
        #[derive(Debug, Clone, Default)]
        struct Rendered(Arc<Mutex<Vec<String>>>);

        impl Append for Rendered {
            fn append(&self, record: &Record) -> Result<(), Error> {
                let layout = TextLayout::default().timezone(TimeZone::UTC);
                let bytes = layout.format(record)?;
                self.0.lock().unwrap().push(String::from_utf8_lossy(&bytes).into_owned());
                Ok(())
            }
        }

        let rendered = Rendered::default();
        let logger = crate::builder().append(rendered.clone()).build();
        logger.error().function("run").put("boom");

        let lines = rendered.0.lock().unwrap().clone();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("ERR  | "), "{}", lines[0]);
        assert!(lines[0].ends_with("] run | boom"), "{}", lines[0]);
    }
}
