/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads and parses an environment variable, falling back to `default`
///
/// Surrounding whitespace is ignored. A value that is present but cannot be
/// parsed is logged and replaced by the default.
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value to use when the variable is unset or unparsable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|e| {
            warn!("Failed to parse {}='{}' ({:?}), using default", env_var, val, e);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, returning `None` when unset or invalid
///
/// # Arguments
/// * `env_var` - Name of the environment variable
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var)
        .ok()
        .and_then(|val| val.trim().parse::<T>().ok())
}
