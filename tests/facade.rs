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

use std::sync::Arc;
use std::sync::Mutex;

use jiff::Timestamp;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use levelog::Append;
use levelog::Error;
use levelog::Layout;
use levelog::Level;
use levelog::Logger;
use levelog::layout::TextLayout;
use levelog::record::Location;
use levelog::record::Record;

#[derive(Debug, Clone, Default)]
struct Capture(Arc<Mutex<Vec<String>>>);

impl Capture {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

impl Append for Capture {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let bytes = TextLayout::default()
            .timezone(TimeZone::UTC)
            .format(record)?;
        self.0
            .lock()
            .unwrap()
            .push(String::from_utf8_lossy(&bytes).into_owned());
        Ok(())
    }
}

fn capture(threshold: Level) -> (Logger, Capture) {
    let capture = Capture::default();
    let logger = levelog::builder()
        .threshold(threshold)
        .append(capture.clone())
        .build();
    (logger, capture)
}

// replace the timestamp with a placeholder and parse it
fn split_time(line: &str) -> (Timestamp, String) {
    let (head, rest) = line.split_at(7);
    let (time, tail) = rest.split_at(19);
    let time = DateTime::strptime("%Y-%m-%d %H:%M:%S", time)
        .unwrap()
        .to_zoned(TimeZone::UTC)
        .unwrap()
        .timestamp();
    (time, format!("{head}<time>{tail}"))
}

fn without_time(lines: Vec<String>) -> Vec<String> {
    lines.iter().map(|line| split_time(line).1).collect()
}

#[test]
fn error_line_layout() {
    let (logger, capture) = capture(Level::Info);
    logger.log(Level::Error, Location::new(10, "run"), format_args!("boom"));

    let lines = capture.take();
    assert_eq!(lines.len(), 1);
    let (time, line) = split_time(&lines[0]);
    assert_eq!(line, "ERR  | <time> - [   10] run | boom");
    assert!((Timestamp::now().as_second() - time.as_second()).abs() < 60);
}

#[test]
fn error_threshold_suppresses_info() {
    let (logger, capture) = capture(Level::Verbose);
    logger.set_threshold(Level::Error);

    logger.info().function("run").put("quiet");
    assert!(capture.take().is_empty());

    logger.error().function("run").put("boom");
    let lines = capture.take();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("ERR  | "), "{}", lines[0]);
    assert!(lines[0].ends_with("] run | boom"), "{}", lines[0]);
}

#[test]
fn threshold_names() {
    let (logger, _) = capture(Level::Info);

    assert_eq!(logger.set_threshold_by_name("WARN"), Ok(Level::Warning));
    assert_eq!(logger.threshold(), Level::Warning);

    logger.set_threshold(Level::Info);
    assert_eq!(logger.set_threshold_by_name("warning"), Ok(Level::Warning));
    assert_eq!(logger.threshold(), Level::Warning);

    assert!(logger.set_threshold_by_name("bogus").is_err());
    assert_eq!(logger.threshold(), Level::Warning);
}

#[test]
fn enabled_iff_at_least_threshold() {
    let (logger, _) = capture(Level::Info);
    for threshold in Level::ALL {
        logger.set_threshold(threshold);
        for level in Level::ALL {
            assert_eq!(
                logger.is_enabled(level),
                level >= threshold,
                "{threshold} {level}"
            );
        }
    }
}

#[test]
fn unqualified_print_after_emission_is_info() {
    let (logger, capture) = capture(Level::Verbose);
    logger.warning().function("run").put("first");
    logger.handle(Location::new(5, "bare"), format_args!("second"));

    let lines = without_time(capture.take());
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("WARN | <time> - ["), "{}", lines[0]);
    assert_eq!(lines[1], "INFO | <time> - [    5] bare | second");
}

#[test]
fn red_after_warning_reports_warn() {
    let (logger, capture) = capture(Level::Verbose);
    let pending = logger.warning();
    logger
        .red()
        .function("run")
        .put("hot")
        .put(Logger::end());

    let lines = without_time(capture.take());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("WARN | <time> - ["), "{}", lines[0]);
    assert!(
        lines[0].ends_with("] run | \x1b[31mhot \x1b[0m"),
        "{}",
        lines[0]
    );

    drop(pending);
    let lines = capture.take();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("INFO | "), "{}", lines[0]);
}

#[test]
fn macros_capture_call_site() {
    let (logger, capture) = capture(Level::Info);

    let line = line!() + 1;
    levelog::warning!(logger: &logger, "retry {} of {}", 2, 3);
    levelog::verbose!(logger: &logger, "hidden {}", 1);
    levelog::error!(logger: &logger).put("stream").put("form");

    assert_eq!(
        without_time(capture.take()),
        vec![
            format!("WARN | <time> - [{line:>5}] macros_capture_call_site | retry 2 of 3"),
            format!(
                "ERR  | <time> - [{:>5}] macros_capture_call_site | stream form",
                line + 2
            ),
        ]
    );
    assert_eq!(logger.pending_level(), Level::Info);
}

#[test]
fn disabled_macro_skips_formatting() {
    struct Expensive<'a>(&'a Mutex<usize>);

    impl std::fmt::Display for Expensive<'_> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            *self.0.lock().unwrap() += 1;
            f.write_str("expensive")
        }
    }

    let (logger, capture) = capture(Level::Warning);
    let count = Mutex::new(0);
    levelog::info!(logger: &logger, "{}", Expensive(&count));
    assert_eq!(*count.lock().unwrap(), 0);

    levelog::error!(logger: &logger, "{}", Expensive(&count));
    assert_eq!(*count.lock().unwrap(), 1);
    assert_eq!(capture.take().len(), 1);
}

#[test]
fn concurrent_streams_emit_whole_lines() {
    let (logger, capture) = capture(Level::Verbose);
    let logger = Arc::new(logger);

    let handles = (0..4)
        .map(|i| {
            let logger = logger.clone();
            std::thread::spawn(move || {
                for j in 0..50 {
                    logger.info().function("worker").put(i).put(j);
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = capture.take();
    assert_eq!(lines.len(), 200);
    assert!(lines.iter().all(|line| line.starts_with("INFO | ")));
    assert!(lines.iter().all(|line| line.contains("] worker | ")));
}
