//! Request handlers. Content reads never fail: they serve whatever the
//! shared context holds, which is the default table until hydration lands.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use base64::{Engine as _, engine::general_purpose};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use lib_site::careers::{CareerPosition, CareersTier, NO_OPEN_POSITIONS, TierSkip};
use lib_site::content::{
    ALL_CATEGORY, ArticleSeo, BlogPost, HeroContent, PortfolioItem, SiteContent, filter_by_category, find_post,
};
use lib_site::forms::{Attachment, CareerApplication, ContactForm, FormGate, SubmitError, SubmitReceipt};
use lib_site::routing::Route;

use super::error::AppError;
use super::state::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    ts: String,
}

pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        ts: Utc::now().to_rfc3339(),
    })
}

/// Serializes the published snapshot in place.
pub async fn content(State(state): State<AppState>) -> Json<Arc<SiteContent>> {
    Json(state.content.current())
}

pub async fn hero(State(state): State<AppState>) -> Json<Arc<HeroContent>> {
    Json(state.hero.current())
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    category: Option<String>,
}

impl CategoryQuery {
    fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORY)
    }
}

pub async fn portfolio(State(state): State<AppState>, Query(q): Query<CategoryQuery>) -> Json<Vec<PortfolioItem>> {
    let content = state.content.current();
    Json(
        filter_by_category(&content.portfolio.items, q.category())
            .into_iter()
            .cloned()
            .collect(),
    )
}

pub async fn blog(State(state): State<AppState>, Query(q): Query<CategoryQuery>) -> Json<Vec<BlogPost>> {
    let content = state.content.current();
    Json(
        filter_by_category(&content.blog.posts, q.category())
            .into_iter()
            .cloned()
            .collect(),
    )
}

#[derive(Serialize)]
pub struct ArticleResponse {
    post: BlogPost,
    seo: ArticleSeo,
}

pub async fn blog_post(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Json<ArticleResponse>, AppError> {
    let content = state.content.current();
    let post = find_post(&content.blog, &slug).ok_or_else(|| AppError::PostNotFound(slug.clone()))?;
    Ok(Json(ArticleResponse {
        seo: ArticleSeo::for_post(post),
        post: post.clone(),
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareersResponse {
    tier: CareersTier,
    heading: String,
    subheading: String,
    /// Newest first.
    positions: Vec<CareerPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    empty_message: Option<&'static str>,
    skipped: Vec<TierSkip>,
}

/// Runs the tier search on every request, like the page does on mount.
pub async fn careers(State(state): State<AppState>) -> Json<CareersResponse> {
    let load = state.careers.load().await;
    let positions = load.page.sorted_positions().into_iter().cloned().collect();
    Json(CareersResponse {
        tier: load.tier,
        empty_message: (!load.page.has_openings()).then_some(NO_OPEN_POSITIONS),
        heading: load.page.heading,
        subheading: load.page.subheading,
        positions,
        skipped: load.skipped,
    })
}

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    #[serde(default)]
    path: String,
}

#[derive(Serialize)]
pub struct RouteResponse {
    route: Route,
    sections: &'static [&'static str],
}

pub async fn route(Query(q): Query<RouteQuery>) -> Json<RouteResponse> {
    let route = Route::resolve(&q.path);
    Json(RouteResponse {
        route,
        sections: route.sections(),
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    token: String,
    min_fill_ms: u64,
}

/// Called when a form becomes visible.
pub async fn form_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let token = state.sessions.issue().await;
    Json(SessionResponse {
        token,
        min_fill_ms: state.sessions.min_fill().as_millis() as u64,
    })
}

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    token: String,
    #[serde(flatten)]
    form: ContactForm,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUpload {
    file_name: String,
    #[serde(default)]
    content_type: Option<String>,
    /// Standard base64 of the file bytes.
    data: String,
}

impl ResumeUpload {
    fn decode(self) -> Result<Attachment, base64::DecodeError> {
        Ok(Attachment {
            bytes: general_purpose::STANDARD.decode(self.data.as_bytes())?,
            file_name: self.file_name,
            content_type: self.content_type,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CareersRequest {
    token: String,
    #[serde(flatten)]
    application: CareerApplication,
    #[serde(default)]
    resume: Option<ResumeUpload>,
}

/// Takes the session for the duration of a submission and hands it back
/// unless the submission went through.
async fn with_session<F, Fut>(state: &AppState, token: String, submit: F) -> Result<Json<SubmitReceipt>, AppError>
where
    F: FnOnce(FormGate) -> Fut,
    Fut: std::future::Future<Output = Result<SubmitReceipt, SubmitError>>,
{
    let gate = state.sessions.take(&token).await.ok_or(AppError::UnknownSession)?;
    match submit(gate).await {
        Ok(receipt) => Ok(Json(receipt)),
        Err(err) => {
            state.sessions.restore(token, gate).await;
            Err(err.into())
        }
    }
}

pub async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<SubmitReceipt>, AppError> {
    let Json(req) = body?;
    let forms = state.forms.clone();
    with_session(&state, req.token, |gate| async move {
        forms.submit_contact(&gate, req.form).await
    })
    .await
}

/// The resume arrives base64-encoded inside the JSON body. The route is
/// capped by `AppState::upload_limit`.
pub async fn submit_application(
    State(state): State<AppState>,
    body: Result<Json<CareersRequest>, JsonRejection>,
) -> Result<Json<SubmitReceipt>, AppError> {
    let Json(req) = body?;
    let resume = req.resume.map(ResumeUpload::decode).transpose()?;
    let forms = state.forms.clone();
    with_session(&state, req.token, |gate| async move {
        forms.submit_application(&gate, req.application, resume).await
    })
    .await
}
