//! Top-level error type and its process exit codes.
//!
//! MIT License
//!
//! Copyright (c) 2026 66f94eae
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy
//! of this software and associated documentation files (the "Software"), to deal
//! in the Software without restriction, including without limitation the rights
//! to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//! copies of the Software, and to permit persons to whom the Software is
//! furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all
//! copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//! IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//! AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//! LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//! OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//! SOFTWARE.

use thiserror::Error;

use crate::{api::ApiError, conf::ConfError, date::DateParseError};

#[derive(Debug, Error)]
pub enum UgentFoodError {
    #[error(transparent)]
    Date(#[from] DateParseError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Conf(#[from] ConfError),
}

impl UgentFoodError {
    /// Exit code reported to the shell, distinct per failure class
    pub fn exit_code(&self) -> i32 {
        match self {
            UgentFoodError::Date(_) => 1,
            UgentFoodError::Api(ApiError::NoMenuFound(_)) => 3,
            UgentFoodError::Api(_) => 4,
            UgentFoodError::Conf(ConfError::UnsupportedLanguage(_)) => 5,
            UgentFoodError::Conf(ConfError::UnknownSetting { .. }) => 6,
            UgentFoodError::Conf(ConfError::IllegalSettingValue { .. }) => 7,
            UgentFoodError::Conf(_) => 8,
        }
    }
}
