use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use tradeit_client::client::Client;
use tradeit_client::error::AppError;
use tradeit_client::session::interface::StaticSession;
use tradeit_client::session::token::SessionToken;
use tradeit_client::transport::Transport;

pub const SESSION_TOKEN: &str = "integration-token";

/// Transport answering from a queue of canned bodies and recording every call
#[derive(Default)]
pub struct RecordingTransport {
    answers: Mutex<VecDeque<Value>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl RecordingTransport {
    pub fn answering(answers: Vec<Value>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn dispatch(&self, endpoint: &str, payload: &Value) -> Result<Value, AppError> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_string(), payload.clone()));
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::InvalidInput("no canned answer left".to_string()))
    }
}

pub fn static_session() -> StaticSession {
    StaticSession::new(SessionToken::new(SESSION_TOKEN).unwrap())
}

pub fn recording_client(answers: Vec<Value>) -> Client<StaticSession, RecordingTransport> {
    Client::new(static_session(), RecordingTransport::answering(answers))
}
