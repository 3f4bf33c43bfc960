/*
 *   Copyright (c) 2022-2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::ops::Add;

use tracing::dispatcher;

use crate::{DisplayPreference, TracingConfig, WriterConfig, ok};

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Instead of having lots of complex arguments to the [`try_initialize_logging_global`]
/// and [`try_initialize_logging_thread_local`] functions, they both receive a type that
/// implements the [`Into<TracingConfig>`] trait. Here are some examples of what is
/// possible:
///
/// ```no_run
/// use r3bl_mention::{
///     TracingConfig, DisplayPreference, WriterConfig,
///     try_initialize_logging_global, try_initialize_logging_thread_local
/// };
///
/// let level = tracing::Level::DEBUG;
/// let config_1: TracingConfig = level.into();
///
/// let level_filter = tracing_core::LevelFilter::DEBUG;
/// let config_2: TracingConfig = level_filter.into();
///
/// let preferred_display = DisplayPreference::Stderr;
/// let config_3: TracingConfig = preferred_display.into();
///
/// let writer_config = WriterConfig::File("log.txt".to_string());
/// let config_4: TracingConfig = writer_config.into();
///
/// let config_compose: TracingConfig = config_2 + config_3;
///
/// try_initialize_logging_global(config_compose);
/// try_initialize_logging_thread_local(config_1 + config_4);
/// ```
pub mod tracing_config_options {
    use super::{Add, DEFAULT_LOG_FILE_NAME, DisplayPreference, TracingConfig,
                WriterConfig};

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<tracing_core::LevelFilter> for TracingConfig {
        fn from(level_filter: tracing_core::LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// Merge two [`TracingConfig`] instances together. The more verbose level filter
    /// wins.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two [`WriterConfig`] instances together. The `rhs` will clobber the `self`
    /// if it has a "some" value. That is, the value in `rhs` has higher specificity.
    ///
    /// - `{a: "foo"} + {a: "bar"} = {a: "bar"}`.
    /// - `{a: None } + {a: "bar"} = {a: "bar"}`.
    /// - `{a: "foo"} + {a: None } = {a: "foo"}`.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                // No collision merge.
                (None, wc_rhs) => wc_rhs,
                (wc_lhs, None) => wc_lhs,
                (Display(dp_lhs), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
                (File(f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),

                // Collision (rhs has higher specificity).
                (Display(_), Display(dp_rhs)) => Display(dp_rhs),
                (File(_), File(f_rhs)) => File(f_rhs),
                (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp_rhs, f_rhs)) => {
                    DisplayAndFile(dp_rhs, f_rhs)
                }
                (DisplayAndFile(_, f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),
                (DisplayAndFile(dp_lhs, _), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
            }
        }
    }

}

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps, like the `mention` binary.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
/// - Configure this using the [`mod@tracing_config_options`] module (which converts any
///   number of arguments into [`Into<TracingConfig>`].
///
/// Logging is **DISABLED** by **default**. If you don't call this function w/ a value
/// other than [`tracing_core::LevelFilter::OFF`], then logging won't be enabled.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - This is great for tests.
/// - Docs for [Thread local tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
///
/// Logging is **DISABLED** by **default**. Returns [`None`] if the level filter is
/// [`tracing_core::LevelFilter::OFF`]. Otherwise logging stays enabled on this thread
/// until the returned guard is dropped.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_logging_off_returns_no_guard() {
        let guard = try_initialize_logging_thread_local(tracing_core::LevelFilter::OFF)
            .unwrap();
        assert!(guard.is_none());
    }

    #[test]
    #[serial]
    fn test_thread_local_file_logging() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("mention_test.log");
        let file_path_str = file_path.to_str().unwrap().to_string();

        let config = TracingConfig {
            writer_config: WriterConfig::File(file_path_str),
            level_filter: tracing_core::LevelFilter::INFO,
        };

        let guard = try_initialize_logging_thread_local(config).unwrap();
        assert!(guard.is_some());

        tracing::info!(message = "scan finished", prefix = "@");
        tracing::debug!(message = "filtered out");
        drop(guard);

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert!(content.contains("scan finished"));
        assert!(!content.contains("filtered out"));
    }
}
