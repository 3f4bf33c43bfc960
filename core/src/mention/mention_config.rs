/*
 *   Copyright (c) 2026 R3BL LLC
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

use std::{collections::HashMap, path::Path};

use miette::{IntoDiagnostic, WrapErr};
use serde::{Deserialize, Serialize};

use super::{DelimiterSet, MentionMatch, TextHost, find_best_match};
use crate::{CommonResult, Utf16Index};
pub use mention_config_error::MentionConfigError;

/// Everything a query needs besides the text and the caret. It can be built in code,
/// or loaded from JSON, where every field is optional:
///
/// ```json
/// {
///   "prefixes": ["@", "#"],
///   "delimiter_sets": { "#": " \n." },
///   "global_delimiter_set": " \n",
///   "max_space_count_allowed": 0
/// }
/// ```
///
/// ```
/// use r3bl_mention::{DelimiterSet, MentionConfig, utf16_range};
///
/// let config = MentionConfig::default()
///     .with_prefixes(["@", "#"])
///     .with_global_delimiter_set(DelimiterSet::whitespace_and_newlines());
///
/// let it = config.find_best_match("ping @ali", 9).unwrap();
/// assert_eq!(it.word, "@ali");
/// assert_eq!(it.range, utf16_range(5, 4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentionConfig {
    /// Triggers, in priority order (the first one wins a tie).
    pub prefixes: Vec<String>,
    /// Delimiter set for specific prefixes.
    pub delimiter_sets: HashMap<String, DelimiterSet>,
    /// Delimiter set for prefixes that don't have their own.
    pub global_delimiter_set: Option<DelimiterSet>,
    /// 0 means no whitespace is tolerated after the prefix.
    pub max_space_count_allowed: usize,
}

// ╭─────────────────────────────────────────────────────────────────────────────╮
// │                                Builders                                     │
// ╰─────────────────────────────────────────────────────────────────────────────╯

impl MentionConfig {
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    #[must_use]
    pub fn with_prefixes<S: Into<String>>(
        mut self,
        prefixes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.prefixes.extend(prefixes.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_delimiter_set(
        mut self,
        prefix: impl Into<String>,
        delimiter_set: impl Into<DelimiterSet>,
    ) -> Self {
        self.delimiter_sets
            .insert(prefix.into(), delimiter_set.into());
        self
    }

    #[must_use]
    pub fn with_global_delimiter_set(mut self, delimiter_set: impl Into<DelimiterSet>) -> Self {
        self.global_delimiter_set = Some(delimiter_set.into());
        self
    }

    #[must_use]
    pub fn with_max_space_count_allowed(mut self, max_space_count_allowed: usize) -> Self {
        self.max_space_count_allowed = max_space_count_allowed;
        self
    }
}

// ╭─────────────────────────────────────────────────────────────────────────────╮
// │                                 Queries                                     │
// ╰─────────────────────────────────────────────────────────────────────────────╯

impl MentionConfig {
    /// See [`find_best_match`].
    #[must_use]
    pub fn find_best_match(
        &self,
        text: &str,
        caret_end: impl Into<Utf16Index>,
    ) -> Option<MentionMatch> {
        find_best_match(
            text,
            caret_end,
            self.prefixes.as_slice(),
            Some(&self.delimiter_sets),
            self.global_delimiter_set.as_ref(),
            self.max_space_count_allowed,
        )
    }

    /// Runs [`Self::find_best_match`] against the host's text, anchored at the upper
    /// bound of its caret span. A host without a caret has no mention.
    #[must_use]
    pub fn find_in_host(&self, host: &impl TextHost) -> Option<MentionMatch> {
        let caret_span = host.caret_span()?;
        self.find_best_match(host.text(), caret_span.end)
    }

    /// Logs a warning for each setting that can never produce a match, and returns how
    /// many there were. None of these are errors, queries just skip them.
    #[must_use]
    pub fn validate(&self) -> usize {
        let mut warning_count = 0;

        if self.prefixes.is_empty() {
            tracing::warn!(message = "📝 MentionConfig has no prefixes");
            warning_count += 1;
        }

        for prefix in &self.prefixes {
            if prefix.is_empty() {
                tracing::warn!(message = "📝 MentionConfig has an empty prefix");
                warning_count += 1;
            } else if !self.delimiter_sets.contains_key(prefix)
                && self.global_delimiter_set.is_none()
            {
                tracing::warn!(
                    message = "📝 MentionConfig prefix has no delimiter set",
                    prefix = ?prefix
                );
                warning_count += 1;
            }
        }

        for key in self.delimiter_sets.keys() {
            if !self.prefixes.contains(key) {
                tracing::warn!(
                    message = "📝 MentionConfig delimiter set is for an unknown prefix",
                    prefix = ?key
                );
                warning_count += 1;
            }
        }

        warning_count
    }
}

// ╭─────────────────────────────────────────────────────────────────────────────╮
// │                              Serialization                                  │
// ╰─────────────────────────────────────────────────────────────────────────────╯

impl MentionConfig {
    /// # Errors
    ///
    /// Returns [`MentionConfigError::ParseJson`] if `json` is not a valid config.
    pub fn try_from_json_str(json: &str) -> CommonResult<Self> {
        serde_json::from_str(json)
            .into_diagnostic()
            .wrap_err(MentionConfigError::ParseJson)
    }

    /// # Errors
    ///
    /// Returns [`MentionConfigError::SerializeJson`] if serialization fails.
    pub fn try_to_json_string(&self) -> CommonResult<String> {
        serde_json::to_string_pretty(self)
            .into_diagnostic()
            .wrap_err(MentionConfigError::SerializeJson)
    }

    /// Load a JSON config file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`MentionConfigError::ReadFile`] if the file can't be read, and
    /// [`MentionConfigError::ParseJson`] if its content is not a valid config.
    pub fn try_load(path: impl AsRef<Path>) -> CommonResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err(MentionConfigError::ReadFile {
                file_path: path.display().to_string(),
            })?;
        Self::try_from_json_str(&json)
    }
}

pub mod mention_config_error {
    #[derive(thiserror::Error, Debug, miette::Diagnostic)]
    pub enum MentionConfigError {
        #[error("📑 Could not read mention config file: '{file_path}'")]
        #[diagnostic(help("Check that the file exists, and that it can be read"))]
        ReadFile { file_path: String },

        #[error("🔍 Could not parse mention config JSON")]
        #[diagnostic(help(
            "Expected an object w/ optional fields: prefixes, delimiter_sets, \
             global_delimiter_set, max_space_count_allowed"
        ))]
        ParseJson,

        #[error("📦 Could not serialize mention config to JSON")]
        SerializeJson,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TextSnapshot, assert_eq2, caret_span, utf16_range};

    fn fixture() -> MentionConfig {
        MentionConfig::default()
            .with_prefixes(["@", "#"])
            .with_delimiter_set("#", " \n.")
            .with_global_delimiter_set(DelimiterSet::whitespace_and_newlines())
    }

    #[test]
    fn test_builders() {
        let config = MentionConfig::default()
            .with_prefix("@")
            .with_max_space_count_allowed(2)
            .with_delimiter_set("@", " ");
        assert_eq2!(config.prefixes, vec!["@".to_string()]);
        assert_eq2!(config.max_space_count_allowed, 2);
        assert_eq2!(config.delimiter_sets.get("@"), Some(&DelimiterSet::from(" ")));
        assert_eq2!(config.global_delimiter_set, None);
    }

    #[test]
    fn test_find_best_match_uses_per_prefix_sets() {
        let config = fixture();
        assert_eq2!(config.find_best_match("#tag.", 5), None);
        let it = config.find_best_match("@a.b", 4).unwrap();
        assert_eq2!(it.word, "@a.b");
    }

    #[test]
    fn test_find_in_host() {
        let config = fixture();

        let host = TextSnapshot::new("cc @bob and @al");
        assert_eq2!(config.find_in_host(&host), None);

        let host = host.with_caret_at_end();
        let it = config.find_in_host(&host).unwrap();
        assert_eq2!(it.word, "@al");
        assert_eq2!(it.range, utf16_range(12, 3));

        // Selection: only the upper bound matters.
        let host = host.with_caret_span(caret_span(0, 7));
        let it = config.find_in_host(&host).unwrap();
        assert_eq2!(it.word, "@bob");
    }

    #[test]
    fn test_json_round_trip_shape() {
        let json = r##"{
            "prefixes": ["@", "#"],
            "delimiter_sets": { "#": " ." },
            "global_delimiter_set": " \n",
            "max_space_count_allowed": 1
        }"##;
        let config = MentionConfig::try_from_json_str(json).unwrap();
        assert_eq2!(config.prefixes, vec!["@".to_string(), "#".to_string()]);
        assert_eq2!(config.delimiter_sets.get("#"), Some(&DelimiterSet::from(" .")));
        assert_eq2!(config.global_delimiter_set, Some(DelimiterSet::from(" \n")));
        assert_eq2!(config.max_space_count_allowed, 1);

        let again =
            MentionConfig::try_from_json_str(&config.try_to_json_string().unwrap()).unwrap();
        assert_eq2!(again, config);
    }

    #[test]
    fn test_json_missing_fields_use_defaults() {
        let config = MentionConfig::try_from_json_str("{}").unwrap();
        assert_eq2!(config, MentionConfig::default());
    }

    #[test]
    fn test_json_parse_error() {
        let report = MentionConfig::try_from_json_str(r#"{ "prefixes": 42 }"#).unwrap_err();
        assert!(report.to_string().contains("Could not parse mention config JSON"));
    }

    #[test]
    fn test_try_load() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("mention.json");
        std::fs::write(&file_path, r#"{ "prefixes": ["@"] }"#).unwrap();

        let config = MentionConfig::try_load(&file_path).unwrap();
        assert_eq2!(config.prefixes, vec!["@".to_string()]);

        let report = MentionConfig::try_load(dir.path().join("missing.json")).unwrap_err();
        assert!(report.to_string().contains("Could not read mention config file"));
    }

    #[test]
    fn test_validate_counts_warnings() {
        assert_eq2!(fixture().validate(), 0);
        assert_eq2!(MentionConfig::default().validate(), 1);

        let config = MentionConfig::default()
            .with_prefixes(["@", ""])
            .with_delimiter_set("!", " ");
        // Empty prefix, `@` without a set, and a set for an unknown prefix.
        assert_eq2!(config.validate(), 3);
    }
}
