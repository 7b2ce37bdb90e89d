//! In-memory capabilities for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::error::{AppError, Result};
use crate::models::Label;
use crate::services::{ImageSource, LabelService, TranslationRequest, TranslationService};

/// Detection stub returning a fixed label list or a fixed error.
pub struct StubLabels {
    response: std::result::Result<Vec<Label>, String>,
}

impl StubLabels {
    pub fn new(labels: Vec<Label>) -> Self {
        Self {
            response: Ok(labels),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl LabelService for StubLabels {
    async fn detect_labels(&self, _image: Vec<u8>) -> Result<Vec<Label>> {
        self.response.clone().map_err(AppError::detection)
    }
}

enum Reply {
    Fixed(String),
    Mapping(HashMap<String, String>),
    Fail(String),
}

/// Translation stub that records every request it receives.
pub struct StubTranslation {
    reply: Reply,
    requests: Mutex<Vec<TranslationRequest>>,
}

impl StubTranslation {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with `text`.
    pub fn fixed(text: &str) -> Self {
        Self::with_reply(Reply::Fixed(text.to_string()))
    }

    /// Answer by looking the input up in `pairs`.
    pub fn mapping(pairs: &[(&str, &str)]) -> Self {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self::with_reply(Reply::Mapping(map))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Reply::Fail(message.to_string()))
    }

    pub fn requests(&self) -> Vec<TranslationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationService for StubTranslation {
    async fn translate_text(&self, request: TranslationRequest) -> Result<String> {
        let text = request.text.clone();
        self.requests.lock().unwrap().push(request);

        match &self.reply {
            Reply::Fixed(answer) => Ok(answer.clone()),
            Reply::Mapping(map) => map
                .get(&text)
                .cloned()
                .ok_or_else(|| AppError::translation(format!("no stub for {text}"))),
            Reply::Fail(message) => Err(AppError::translation(message)),
        }
    }
}

/// Image source stub.
pub struct StubSource {
    bytes: Option<Vec<u8>>,
}

impl StubSource {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: Some(bytes.to_vec()),
        }
    }

    /// A source whose load fails with a not-found I/O error.
    pub fn missing() -> Self {
        Self { bytes: None }
    }
}

#[async_trait]
impl ImageSource for StubSource {
    async fn load(&self) -> Result<Vec<u8>> {
        self.bytes.clone().ok_or_else(|| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "secret/path/cat.jpg not found",
            ))
        })
    }

    fn describe(&self) -> String {
        "stub".to_string()
    }
}

/// Answer exactly one HTTP request on a local port and return its URL.
pub async fn serve_once(status: &str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let head = format!(
        "HTTP/1.1 {status}\r\nContent-Type: image/jpeg\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/dog.jpg")
}
