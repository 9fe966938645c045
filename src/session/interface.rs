/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::error::AppError;
use crate::session::token::SessionToken;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Source of the session token bound to each outgoing request
///
/// Implementations are owned by the authentication layer; the client only
/// reads the current token, once per dispatch.
pub trait SessionProvider: Send + Sync {
    /// Returns the token to bind to the next request
    fn current_session_token(&self) -> Result<SessionToken, AppError>;
}

/// Provider over a single, fixed token
#[derive(Debug, Clone)]
pub struct StaticSession {
    token: SessionToken,
}

impl StaticSession {
    /// Creates a provider that always returns `token`
    pub fn new(token: SessionToken) -> Self {
        Self { token }
    }
}

impl SessionProvider for StaticSession {
    fn current_session_token(&self) -> Result<SessionToken, AppError> {
        Ok(self.token.clone())
    }
}

/// Provider whose token can be rotated while clients keep using it
///
/// Clones share the same slot, so a token replaced through one handle is seen
/// by every client holding another.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    token: Arc<RwLock<Option<SessionToken>>>,
}

impl SharedSession {
    /// Creates a provider without a token; dispatching fails until one is set
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider holding `token`
    pub fn with_token(token: SessionToken) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token))),
        }
    }

    /// Replaces the current token
    pub fn replace(&self, token: SessionToken) -> Result<(), AppError> {
        let mut slot = self
            .token
            .write()
            .map_err(|_| AppError::InvalidInput("session lock poisoned".to_string()))?;
        *slot = Some(token);
        debug!("Session token replaced");
        Ok(())
    }

    /// Drops the current token, for example after a logout
    pub fn clear(&self) -> Result<(), AppError> {
        let mut slot = self
            .token
            .write()
            .map_err(|_| AppError::InvalidInput("session lock poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}

impl SessionProvider for SharedSession {
    fn current_session_token(&self) -> Result<SessionToken, AppError> {
        let slot = self
            .token
            .read()
            .map_err(|_| AppError::InvalidInput("session lock poisoned".to_string()))?;
        slot.clone().ok_or(AppError::Unauthorized)
    }
}
