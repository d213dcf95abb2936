//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
///
/// A variable set to an empty string counts as missing.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name)
        .ok()
        .filter(|val| !val.trim().is_empty())
        .ok_or(Error::MissingEnv(name))
}

/// Get an environment variable, falling back to `default` when unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env(name).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Parse an optional environment variable.
///
/// Unset yields `Ok(None)`; set but unparsable is still an error.
pub fn get_env_opt_parse<T: FromStr>(name: &'static str) -> Result<Option<T>, Error> {
    match get_env_parse(name) {
        Ok(val) => Ok(Some(val)),
        Err(Error::MissingEnv(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
    #[error("environment variable {0} has the wrong format")]
    WrongFormat(&'static str),
}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a distinct variable name; the process environment is shared.

    #[test]
    fn missing_and_blank_are_the_same() {
        env::remove_var("LIB_UTILS_TEST_MISSING");
        assert_eq!(
            get_env("LIB_UTILS_TEST_MISSING"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_MISSING"))
        );

        env::set_var("LIB_UTILS_TEST_BLANK", "  ");
        assert_eq!(get_env_or("LIB_UTILS_TEST_BLANK", "fallback"), "fallback");
    }

    #[test]
    fn optional_parse_distinguishes_unset_from_garbage() {
        env::remove_var("LIB_UTILS_TEST_OPT_UNSET");
        assert_eq!(get_env_opt_parse::<u64>("LIB_UTILS_TEST_OPT_UNSET"), Ok(None));

        env::set_var("LIB_UTILS_TEST_OPT_SET", " 30 ");
        assert_eq!(get_env_opt_parse::<u64>("LIB_UTILS_TEST_OPT_SET"), Ok(Some(30)));

        env::set_var("LIB_UTILS_TEST_OPT_BAD", "thirty");
        assert_eq!(
            get_env_opt_parse::<u64>("LIB_UTILS_TEST_OPT_BAD"),
            Err(Error::WrongFormat("LIB_UTILS_TEST_OPT_BAD"))
        );
    }
}
