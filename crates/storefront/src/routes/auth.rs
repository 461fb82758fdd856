//! Authentication route handlers.
//!
//! A single auth screen offers login, registration, and a one-click demo
//! account. Successful auth stores the backend-issued identity in the
//! session and lands on the shop tab; failures come back to the auth screen
//! with the backend's message, or the per-action fallback, as an inline
//! alert.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use firdous_core::Email;

use crate::api::{AuthResponse, fallback};
use crate::error::Result;
use crate::filters;
use crate::middleware::{OptionalAuth, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::state::AppState;

use super::{MessageQuery, error_redirect, notice_redirect};

/// Inline alert for an incomplete form; shown without any network call.
const MISSING_FIELDS: &str = "Please enter email and password";

/// Password used for throwaway demo accounts.
const DEMO_PASSWORD: &str = "demo123456";

/// Login/register form data. Both forms post the same fields.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub email: String,
    pub password: String,
}

/// Auth screen template.
#[derive(Template, WebTemplate)]
#[template(path = "auth.html")]
pub struct AuthTemplate {
    pub error: Option<String>,
    pub notice: Option<String>,
}

/// Display the auth screen, or skip it when already signed in.
pub async fn auth_page(
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> Response {
    if user.is_some() {
        return Redirect::to("/shop").into_response();
    }

    AuthTemplate {
        error: query.error,
        notice: query.notice,
    }
    .into_response()
}

/// Validate form input before any network call. Returns the trimmed email.
fn validated_email<'a>(email: &'a str, password: &str) -> std::result::Result<&'a str, String> {
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS.to_owned());
    }
    Email::parse(email).map_err(|e| e.to_string())?;
    Ok(email)
}

/// Store the backend-issued identity in the session.
async fn establish_session(session: &Session, auth: AuthResponse) -> Result<()> {
    let user = CurrentUser {
        id: auth.user.id,
        email: auth.user.email,
        token: auth.token,
    };
    set_current_user(session, &user).await?;
    Ok(())
}

/// Handle login form submission.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<Response> {
    let password = form.password.trim();
    let email = match validated_email(form.email.trim(), password) {
        Ok(email) => email,
        Err(message) => return Ok(error_redirect("/auth", &message).into_response()),
    };

    match state.api().login(email, password).await {
        Ok(auth) => {
            establish_session(&session, auth).await?;
            Ok(notice_redirect("/shop", "Welcome back!").into_response())
        }
        Err(e) => {
            tracing::warn!("Login failed: {e}");
            Ok(error_redirect("/auth", &e.user_message(fallback::LOGIN)).into_response())
        }
    }
}

/// Handle registration form submission.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CredentialsForm>,
) -> Result<Response> {
    let password = form.password.trim();
    let email = match validated_email(form.email.trim(), password) {
        Ok(email) => email,
        Err(message) => return Ok(error_redirect("/auth", &message).into_response()),
    };

    match state.api().register(email, password).await {
        Ok(auth) => {
            establish_session(&session, auth).await?;
            Ok(notice_redirect("/shop", "Account created successfully!").into_response())
        }
        Err(e) => {
            tracing::warn!("Registration failed: {e}");
            Ok(error_redirect("/auth", &e.user_message(fallback::REGISTER)).into_response())
        }
    }
}

/// Register a throwaway demo account and sign straight in.
#[instrument(skip_all)]
pub async fn demo(State(state): State<AppState>, session: Session) -> Result<Response> {
    let email = format!(
        "demo-{}@firdousshops.com",
        chrono::Utc::now().timestamp_millis()
    );

    match state.api().register(&email, DEMO_PASSWORD).await {
        Ok(auth) => {
            establish_session(&session, auth).await?;
            Ok(notice_redirect("/shop", "Welcome to Demo Mode! 🎉").into_response())
        }
        Err(e) => {
            tracing::warn!("Demo login failed: {e}");
            let message = format!("Demo login failed: {}", e.user_message(fallback::REGISTER));
            Ok(error_redirect("/auth", &message).into_response())
        }
    }
}

/// Destroy the session and return to the auth screen.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_user(&session).await?;
    Ok(notice_redirect("/auth", "Signed out successfully"))
}
