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

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly.
///
/// ```
/// use r3bl_mention::{CommonResult, MentionConfig, throws};
///
/// fn load_and_check(json: &str) -> CommonResult<()> {
///     throws!({
///         let config = MentionConfig::try_from_json_str(json)?;
///         assert_eq!(config.prefixes.len(), 1);
///     });
/// }
///
/// load_and_check(r#"{ "prefixes": ["@"] }"#).unwrap();
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Syntactic sugar to run a conditional statement. Here's an example.
///
/// ```
/// use r3bl_mention::call_if_true;
///
/// const DEBUG: bool = true;
/// call_if_true!(DEBUG, {
///     tracing::debug!(message = "only logged when DEBUG is true");
/// });
/// ```
#[macro_export]
macro_rules! call_if_true {
    ($cond:ident, $block: expr) => {{
        if $cond {
            $block
        }
    }};
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
