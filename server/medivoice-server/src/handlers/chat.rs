use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    response::Html,
    Form,
};
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Chat page form fields
#[derive(Debug, Default, Deserialize)]
pub struct SymptomForm {
    #[serde(default)]
    pub symptom: String,
    /// Shown in the page selector; speech always uses the configured language
    #[serde(default)]
    pub language: Option<String>,
}

/// A symptom submission, URL-encoded or `multipart/form-data`.
///
/// A body that cannot be read as either is treated as an empty submission,
/// so the caller always gets the chat page back.
#[derive(Debug, Default)]
pub struct SymptomSubmission(pub SymptomForm);

#[async_trait]
impl<S> FromRequest<S> for SymptomSubmission
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        let parsed = if is_multipart {
            match Multipart::from_request(req, state).await {
                Ok(multipart) => read_multipart_form(multipart).await,
                Err(rejection) => Err(rejection.body_text()),
            }
        } else {
            Form::<SymptomForm>::from_request(req, state)
                .await
                .map(|Form(form)| form)
                .map_err(|rejection| rejection.body_text())
        };

        Ok(Self(parsed.unwrap_or_else(|reason| {
            debug!(reason = %reason, "Unreadable symptom submission");
            SymptomForm::default()
        })))
    }
}

async fn read_multipart_form(mut multipart: Multipart) -> Result<SymptomForm, String> {
    let mut form = SymptomForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| e.body_text())? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("symptom") => form.symptom = field.text().await.map_err(|e| e.body_text())?,
            Some("language") => {
                form.language = Some(field.text().await.map_err(|e| e.body_text())?);
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Chat page with the welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = "chat",
    responses(
        (status = 200, description = "Welcome page", body = String, content_type = "text/html")
    )
)]
pub async fn welcome_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.pages.welcome()?))
}

/// Submit a symptom and get the advice page
///
/// An empty or unreadable submission renders the welcome page without
/// contacting any service.
#[utoipa::path(
    post,
    path = "/",
    tag = "chat",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "Form fields `symptom` and `language`; multipart/form-data is accepted too"
    ),
    responses(
        (
            status = 200,
            description = "Advice page with embedded audio",
            body = String,
            content_type = "text/html"
        )
    )
)]
pub async fn submit_symptom(
    State(state): State<AppState>,
    SymptomSubmission(form): SymptomSubmission,
) -> Result<Html<String>, ApiError> {
    if let Some(language) = form.language.as_deref() {
        debug!(language, "Language selection received");
    }

    let page = match state.consultation.consult(&form.symptom).await {
        Some(consultation) => state.pages.consultation(&consultation)?,
        None => state.pages.welcome()?,
    };
    Ok(Html(page))
}
