mod common;

use axum::http::StatusCode;
use common::{
    decode_base64, embedded_audio, multipart_text_body, AdviceBehavior, TestApp, MP3_FRAME_HEADER,
};
use speech_synthesis_service::looks_like_mp3;

const HEADACHE_ADVICE: &str =
    "Rest, hydrate, avoid screens. See a doctor if it persists over 3 days or worsens.";
const WELCOME: &str = "Hello! Describe your symptoms by voice or text.";

#[tokio::test]
async fn test_get_shows_welcome_page() {
    let app = TestApp::with_advice(HEADACHE_ADVICE);
    let (status, page) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains(WELCOME));
    assert!(page.contains("name=\"symptom\""));
    assert!(page.contains("<audio id=\"audioPlayer\" hidden></audio>"));
    assert!(embedded_audio(&page).is_none());
    assert_eq!(app.advisor.calls(), 0);
}

#[tokio::test]
async fn test_headache_page_shows_advice_and_audio() {
    let app = TestApp::with_advice(HEADACHE_ADVICE);
    let (status, page) = app.post_form("symptom=headache&language=en").await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("headache"));
    assert!(page.contains(HEADACHE_ADVICE));
    assert!(!page.contains(WELCOME));

    let audio = embedded_audio(&page).expect("page embeds audio");
    assert!(!audio.is_empty());
    assert_eq!(*app.synthesizer.spoken.lock().unwrap(), vec![HEADACHE_ADVICE.to_string()]);
}

#[tokio::test]
async fn test_embedded_audio_is_mp3() {
    let app = TestApp::with_advice(HEADACHE_ADVICE);
    let (_, page) = app.post_form("symptom=headache").await;

    let bytes = decode_base64(&embedded_audio(&page).unwrap());
    assert!(looks_like_mp3(&bytes));
    assert!(bytes.starts_with(&MP3_FRAME_HEADER));
}

#[tokio::test]
async fn test_symptom_is_normalized_before_advice() {
    let app = TestApp::with_advice(HEADACHE_ADVICE);
    let (_, page) = app.post_form("symptom=++Sore+THROAT++").await;

    assert_eq!(*app.advisor.symptoms.lock().unwrap(), vec!["sore throat".to_string()]);
    assert!(page.contains("sore throat"));
}

#[tokio::test]
async fn test_blank_symptom_shows_welcome_without_calls() {
    let app = TestApp::with_advice(HEADACHE_ADVICE);

    for body in ["symptom=", "symptom=+++%09", "language=fr"] {
        let (status, page) = app.post_form(body).await;
        assert_eq!(status, StatusCode::OK);
        assert!(page.contains(WELCOME), "body {body:?} should render welcome");
        assert!(embedded_audio(&page).is_none());
    }

    assert_eq!(app.advisor.calls(), 0);
    assert_eq!(app.synthesizer.calls(), 0);
}

#[tokio::test]
async fn test_advice_failure_renders_fallback_and_speaks_it() {
    let app = TestApp::new(AdviceBehavior::Unavailable);
    let (status, page) = app.post_form("symptom=fever").await;

    assert_eq!(status, StatusCode::OK);
    // Apostrophe is HTML-escaped in the page
    assert!(page.contains(
        "Sorry, I&#x27;m having trouble processing your request. Please try again later."
    ));
    assert_eq!(
        *app.synthesizer.spoken.lock().unwrap(),
        vec![advice_service::FALLBACK_ADVICE.to_string()]
    );

    let bytes = decode_base64(&embedded_audio(&page).unwrap());
    assert!(bytes.ends_with(advice_service::FALLBACK_ADVICE.as_bytes()));
}

#[tokio::test]
async fn test_identical_symptoms_get_identical_advice() {
    let app = TestApp::with_advice(HEADACHE_ADVICE);
    let (_, first) = app.post_form("symptom=headache").await;
    let (_, second) = app.post_form("symptom=headache").await;

    assert_eq!(first, second);
    assert_eq!(app.advisor.calls(), 2);
}

#[tokio::test]
async fn test_synthesis_failure_still_shows_advice() {
    let app = TestApp::build(
        common::FakeTranscriber::returning(
            voice_recognition_service::TranscriptionOutcome::Recognized("cough".to_string()),
        ),
        common::FakeAdvisor::new(AdviceBehavior::Fixed("Drink warm fluids.".to_string())),
        common::FakeSynthesizer::failing(),
        medivoice_server::config::ServerLimits::default(),
    );
    let (status, page) = app.post_form("symptom=cough").await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Drink warm fluids."));
    assert!(embedded_audio(&page).is_none());
}

#[tokio::test]
async fn test_markup_in_symptom_is_escaped() {
    let app = TestApp::with_advice(HEADACHE_ADVICE);
    let (_, page) = app.post_form("symptom=%3Cscript%3Ealert(1)%3C%2Fscript%3E").await;

    assert!(!page.contains("<script>alert(1)</script>"));
    assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn test_multipart_symptom_gets_advice_page() {
    let app = TestApp::with_advice(HEADACHE_ADVICE);
    let (content_type, body) = multipart_text_body(&[("symptom", "headache"), ("language", "en")]);
    let (status, page) = app.post_page(Some(&content_type), body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains(HEADACHE_ADVICE));
    assert!(embedded_audio(&page).is_some());
    assert_eq!(*app.advisor.symptoms.lock().unwrap(), vec!["headache".to_string()]);
}

#[tokio::test]
async fn test_unreadable_submission_shows_welcome_page() {
    let app = TestApp::with_advice(HEADACHE_ADVICE);

    let cases = [
        (None, Vec::new()),
        (Some("application/json"), br#"{"symptom":"headache"}"#.to_vec()),
        (Some("text/plain"), b"headache".to_vec()),
        (Some("multipart/form-data"), b"no boundary here".to_vec()),
    ];
    for (content_type, body) in cases {
        let (status, page) = app.post_page(content_type, body).await;
        assert_eq!(status, StatusCode::OK, "content type {content_type:?}");
        assert!(page.contains(WELCOME), "content type {content_type:?}");
        assert!(embedded_audio(&page).is_none());
    }

    assert_eq!(app.advisor.calls(), 0);
    assert_eq!(app.synthesizer.calls(), 0);
}
