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

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! Note that the scanning functions in [`crate::mention`] never return errors. They
//! return [`Option`] instead. The types here are used by the fallible outer surfaces,
//! like loading a [`crate::MentionConfig`] or parsing command line arguments.

use std::{error::Error,
          fmt::{Debug, Display, Formatter, Result}};

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`CommonError`] and any other type of error.
///
/// # Example
///
/// ```
/// use r3bl_mention::{CommonResult, CommonError, CommonErrorType};
///
/// pub fn try_parse_max_space_count(arg: &str) -> CommonResult<usize> {
///     match arg.parse::<usize>() {
///         Ok(it) => Ok(it),
///         Err(_) => {
///             let err_msg = format!("Invalid max space count: {arg:?}");
///             CommonError::new_error_result(CommonErrorType::InvalidArguments, &err_msg)
///         }
///     }
/// }
///
/// assert_eq!(try_parse_max_space_count("2").unwrap(), 2);
/// assert!(try_parse_max_space_count("-1").is_err());
/// ```
pub type CommonResult<T> = miette::Result<T>;

/// Common error struct. Read custom error docs
/// [here](https://learning-rust.github.io/docs/e7.custom_error_types.html).
#[derive(Debug, Clone)]
pub struct CommonError {
    pub error_type: CommonErrorType,
    pub error_message: Option<String>,
}

/// Some common errors that can occur.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonErrorType {
    InvalidArguments,
    ParsingError,
    NotFound,
}

/// Implement [`Error`] trait.
impl Error for CommonError {}

/// Implement [`Display`] trait (needed by [`Error`] trait). This is the same as the
/// [`Debug`] implementation (which is derived above).
impl Display for CommonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { Debug::fmt(self, f) }
}

impl CommonError {
    /// Both [`CommonError::error_type`] and [`CommonError::error_message`] available.
    ///
    /// # Errors
    ///
    /// Always returns an error, this is the point.
    pub fn new_error_result<T>(err_type: CommonErrorType, msg: &str) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: Some(msg.to_string()),
        }))
    }

    /// Only [`CommonError::error_type`] available, and no
    /// [`CommonError::error_message`].
    ///
    /// # Errors
    ///
    /// Always returns an error, this is the point.
    pub fn new_error_result_with_only_type<T>(
        err_type: CommonErrorType,
    ) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: None,
        }))
    }
}
