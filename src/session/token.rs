/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credential proving an authenticated brokerage session
///
/// Serializes as the bare token string and deserializes through
/// [`SessionToken::new`], so a blank token is rejected either way.
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps a token, rejecting empty or whitespace-only input
    ///
    /// # Arguments
    /// * `token` - Token issued by the authentication layer
    ///
    /// # Returns
    /// * `Ok(SessionToken)` - The wrapped token
    /// * `Err(AppError::InvalidInput)` - If the token is blank
    pub fn new(token: impl Into<String>) -> Result<Self, AppError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "session token must not be empty".to_string(),
            ));
        }
        Ok(Self(token))
    }

    /// The raw token, for placing on the wire
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

impl TryFrom<&str> for SessionToken {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        SessionToken::new(value)
    }
}

impl TryFrom<String> for SessionToken {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SessionToken::new(value)
    }
}

impl From<SessionToken> for String {
    fn from(token: SessionToken) -> Self {
        token.0
    }
}
