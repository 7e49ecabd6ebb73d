#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use advice_service::{Advice, AdviceGenerator};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use medivoice_server::{config::ServerLimits, create_app, AppState};
use speech_synthesis_service::{EncodedAudio, SpeechSynthesizer, SynthesisError, SynthesisResult};
use tower::ServiceExt;
use voice_recognition_service::{Transcriber, TranscriptionOutcome};

/// MPEG-1 Layer III frame header
pub const MP3_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];

pub struct FakeTranscriber {
    outcome: TranscriptionOutcome,
    calls: AtomicUsize,
    pub received: Mutex<Vec<Vec<u8>>>,
}

impl FakeTranscriber {
    pub fn returning(outcome: TranscriptionOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transcriber for FakeTranscriber {
    async fn transcribe(&self, audio: &[u8]) -> TranscriptionOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(audio.to_vec());
        self.outcome.clone()
    }

    fn provider_name(&self) -> &'static str {
        "fake-stt"
    }
}

pub enum AdviceBehavior {
    Fixed(String),
    /// Upstream faults exhausted every attempt
    Unavailable,
}

pub struct FakeAdvisor {
    behavior: AdviceBehavior,
    calls: AtomicUsize,
    pub symptoms: Mutex<Vec<String>>,
}

impl FakeAdvisor {
    pub fn new(behavior: AdviceBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            symptoms: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AdviceGenerator for FakeAdvisor {
    async fn generate_advice(&self, symptom: &str) -> Advice {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.symptoms.lock().unwrap().push(symptom.to_string());
        match &self.behavior {
            AdviceBehavior::Fixed(text) => Advice::Generated(text.clone()),
            AdviceBehavior::Unavailable => Advice::Unavailable { attempts: 3 },
        }
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

/// Speaks text as an MP3 frame header followed by the text bytes
pub struct FakeSynthesizer {
    fail: bool,
    pub spoken: Mutex<Vec<String>>,
}

impl FakeSynthesizer {
    pub fn working() -> Self {
        Self {
            fail: false,
            spoken: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            spoken: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.spoken.lock().unwrap().len()
    }
}

#[async_trait]
impl SpeechSynthesizer for FakeSynthesizer {
    async fn synthesize(&self, text: &str) -> SynthesisResult<EncodedAudio> {
        self.spoken.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(SynthesisError::Status {
                status: 503,
                message: "engine down".to_string(),
            });
        }
        let mut bytes = MP3_FRAME_HEADER.to_vec();
        bytes.extend_from_slice(text.as_bytes());
        Ok(EncodedAudio::from_bytes(&bytes))
    }

    fn engine_name(&self) -> &'static str {
        "fake-tts"
    }
}

pub struct TestApp {
    pub app: Router,
    pub transcriber: Arc<FakeTranscriber>,
    pub advisor: Arc<FakeAdvisor>,
    pub synthesizer: Arc<FakeSynthesizer>,
}

impl TestApp {
    pub fn new(advice: AdviceBehavior) -> Self {
        Self::build(
            FakeTranscriber::returning(TranscriptionOutcome::Recognized(
                "I have a headache".to_string(),
            )),
            FakeAdvisor::new(advice),
            FakeSynthesizer::working(),
            ServerLimits::default(),
        )
    }

    pub fn with_advice(text: &str) -> Self {
        Self::new(AdviceBehavior::Fixed(text.to_string()))
    }

    pub fn with_transcription(outcome: TranscriptionOutcome) -> Self {
        Self::build(
            FakeTranscriber::returning(outcome),
            FakeAdvisor::new(AdviceBehavior::Fixed("unused".to_string())),
            FakeSynthesizer::working(),
            ServerLimits::default(),
        )
    }

    pub fn build(
        transcriber: FakeTranscriber,
        advisor: FakeAdvisor,
        synthesizer: FakeSynthesizer,
        limits: ServerLimits,
    ) -> Self {
        let transcriber = Arc::new(transcriber);
        let advisor = Arc::new(advisor);
        let synthesizer = Arc::new(synthesizer);
        let state = AppState::new(
            transcriber.clone(),
            advisor.clone(),
            synthesizer.clone(),
            limits,
        )
        .expect("template should parse");
        Self {
            app: create_app(state),
            transcriber,
            advisor,
            synthesizer,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .uri(uri)
            .method("GET")
            .body(Body::empty())
            .unwrap();
        let (status, body) = self.send(request).await;
        (status, String::from_utf8(body).unwrap())
    }

    pub async fn post_form(&self, body: &str) -> (StatusCode, String) {
        let content_type = Some("application/x-www-form-urlencoded");
        self.post_page(content_type, body.as_bytes().to_vec()).await
    }

    /// POST `/` with the given content type, or none at all
    pub async fn post_page(
        &self,
        content_type: Option<&str>,
        body: Vec<u8>,
    ) -> (StatusCode, String) {
        let mut request = Request::builder().uri("/").method("POST");
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        let request = request.body(Body::from(body)).unwrap();
        let (status, body) = self.send(request).await;
        (status, String::from_utf8(body).unwrap())
    }

    pub async fn post_json(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .uri(uri)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, body) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub async fn post_upload(
        &self,
        uri: &str,
        field: &str,
        bytes: &[u8],
    ) -> (StatusCode, serde_json::Value) {
        let (content_type, body) = multipart_body(field, bytes);
        let request = Request::builder()
            .uri(uri)
            .method("POST")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();
        let (status, body) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }
}

const BOUNDARY: &str = "medivoice-test-boundary";

/// A single-part `multipart/form-data` body
pub fn multipart_body(field: &str, bytes: &[u8]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"recording.wav\"\r\n\
             Content-Type: audio/wav\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

/// A `multipart/form-data` body of plain text fields
pub fn multipart_text_body(fields: &[(&str, &str)]) -> (String, Vec<u8>) {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    (format!("multipart/form-data; boundary={BOUNDARY}"), body.into_bytes())
}

/// The base64 audio literal embedded in a rendered page
pub fn embedded_audio(page: &str) -> Option<String> {
    let marker = "const adviceAudio = \"";
    let start = page.find(marker)? + marker.len();
    let end = page[start..].find('"')? + start;
    Some(page[start..end].to_string())
}

pub fn decode_base64(encoded: &str) -> Vec<u8> {
    use base64::{engine::general_purpose, Engine as _};
    general_purpose::STANDARD.decode(encoded).unwrap()
}
