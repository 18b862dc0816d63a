// Validators for identifiers which end up in console URLs and UI labels.
// Limits follow the console's CRD validation, so invalid input is rejected before the console
// silently drops it.

use std::{fmt::Display, sync::LazyLock};

use regex::Regex;
use snafu::Snafu;

const CATALOG_CATEGORY_ID_MAX_LENGTH: usize = 32;
const CATALOG_CATEGORY_ID_FMT: &str = "[A-Za-z0-9_-]+";
const CATALOG_CATEGORY_ID_ERROR_MSG: &str =
    "a catalog category id must consist of URL safe characters (A-Z, a-z, 0-9, '-' or '_')";

const CATALOG_CATEGORY_LABEL_MAX_LENGTH: usize = 64;

static CATALOG_CATEGORY_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{CATALOG_CATEGORY_ID_FMT}$"))
        .expect("failed to compile catalog category id regex")
});

type Result<T = (), E = Errors> = std::result::Result<T, E>;

/// A collection of errors discovered during validation.
#[derive(Debug)]
pub struct Errors(Vec<Error>);

impl Display for Errors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            let prefix = match i {
                0 => "",
                _ => ", ",
            };
            write!(f, "{prefix}{error}")?;
        }
        Ok(())
    }
}
impl std::error::Error for Errors {}

/// A single validation error.
#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(transparent)]
    Regex { source: RegexError },

    #[snafu(display("input is {length} characters long but must be no more than {max_length}"))]
    TooLong { length: usize, max_length: usize },

    #[snafu(display("input must not be empty"))]
    Empty,
}

#[derive(Debug)]
pub struct RegexError {
    /// The primary error message.
    msg: &'static str,

    /// The regex that the input must match.
    regex: &'static str,

    /// Examples of valid inputs (if non-empty).
    examples: &'static [&'static str],
}

impl Display for RegexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            msg,
            regex,
            examples,
        } = self;
        write!(f, "{msg} (")?;
        for (i, example) in examples.iter().enumerate() {
            let prefix = match i {
                0 => "e.g.",
                _ => "or",
            };
            write!(f, "{prefix} {example:?}, ")?;
        }
        write!(f, "regex used for validation is {regex:?})")
    }
}

impl std::error::Error for RegexError {}

/// Returns [`Ok`] if `value` has between one and `max_length` characters.
fn validate_str_length(value: &str, max_length: usize) -> Result<(), Error> {
    let length = value.chars().count();
    if length == 0 {
        EmptySnafu.fail()
    } else if length > max_length {
        TooLongSnafu { length, max_length }.fail()
    } else {
        Ok(())
    }
}

/// Returns [`Ok`] if `value` matches `regex`.
fn validate_str_regex(
    value: &str,
    regex: &'static Regex,
    error_msg: &'static str,
    examples: &'static [&'static str],
) -> Result<(), Error> {
    if regex.is_match(value) {
        Ok(())
    } else {
        Err(RegexError {
            msg: error_msg,
            regex: regex
                .as_str()
                // Clean up start/end-of-line markers
                .trim_start_matches('^')
                .trim_end_matches('$'),
            examples,
        }
        .into())
    }
}

/// Returns [`Ok`] if *all* validations are [`Ok`], otherwise returns all errors.
fn validate_all(validations: impl IntoIterator<Item = Result<(), Error>>) -> Result {
    let errors = validations
        .into_iter()
        .filter_map(Result::err)
        .collect::<Vec<_>>();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Errors(errors))
    }
}

/// Tests whether `value` can be used as the id of a developer catalog (sub)category.
pub fn is_catalog_category_id(value: &str) -> Result {
    validate_all([
        validate_str_length(value, CATALOG_CATEGORY_ID_MAX_LENGTH),
        validate_str_regex(
            value,
            &CATALOG_CATEGORY_ID_REGEX,
            CATALOG_CATEGORY_ID_ERROR_MSG,
            &["languages", "ci-cd", "other_tools"],
        ),
    ])
}

/// Tests whether `value` can be used as the label of a developer catalog (sub)category.
pub fn is_catalog_category_label(value: &str) -> Result {
    validate_all([validate_str_length(value, CATALOG_CATEGORY_LABEL_MAX_LENGTH)])
}
