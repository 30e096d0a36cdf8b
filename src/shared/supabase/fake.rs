//! Scripted transport for adapter tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{HttpTransport, PreparedRequest, RawResponse, SupabaseClient, SupabaseConfig};

#[derive(Clone, Default)]
pub struct FakeTransport {
    responses: Arc<Mutex<VecDeque<Result<RawResponse, String>>>>,
    requests: Arc<Mutex<Vec<PreparedRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config() -> SupabaseConfig {
        SupabaseConfig {
            url: "https://demo.supabase.co".to_string(),
            anon_key: "anon".to_string(),
            service_role_key: Some("service".to_string()),
            request_timeout: Duration::from_secs(1),
        }
    }

    pub fn client(&self) -> SupabaseClient {
        SupabaseClient::with_transport(Arc::new(self.clone()), &Self::config())
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_with_headers(status, vec![], serde_json::to_vec(&body).unwrap());
    }

    pub fn push_with_headers(&self, status: u16, headers: Vec<(&str, &str)>, body: Vec<u8>) {
        self.responses.lock().unwrap().push_back(Ok(RawResponse {
            status,
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body,
        }));
    }

    pub fn push_failure(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }

    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> PreparedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, String> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted response".to_string()))
    }
}
