use askama::Template;
use axum::{
    extract::{Form, Query},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::collections::HashMap;

use cookie_session::{
    CognitoClient, LoginForm, LoginOutcome, LoginRejection, begin_login, resolve_landing,
    session_cookie_from_headers, submit_login,
};

use super::config::PASSWORD_RESET_URL;
use super::error::IntoResponseError;

#[derive(Template)]
#[template(path = "login.j2")]
struct LoginTemplate {
    username: String,
    password: String,
    /// Empty when there is nothing to show
    error: String,
    show_reset: bool,
    redirect: String,
    reset_url: String,
}

impl LoginTemplate {
    fn blank(redirect: String) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            error: String::new(),
            show_reset: false,
            redirect,
            reset_url: PASSWORD_RESET_URL.to_string(),
        }
    }

    fn rejected(rejection: LoginRejection, redirect: String) -> Self {
        Self {
            username: rejection.username,
            password: rejection.password,
            error: rejection.error,
            show_reset: rejection.show_reset,
            redirect,
            reset_url: PASSWORD_RESET_URL.to_string(),
        }
    }
}

fn render(template: &LoginTemplate) -> Result<Html<String>, (StatusCode, String)> {
    template
        .render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

/// `GET` login page: always starts from a clean slate by deleting any
/// existing session cookie, then renders the form. The `redirectTo` query
/// parameter set by the guard becomes the form's pending destination.
pub(super) async fn login_page(
    Query(params): Query<HashMap<String, String>>,
) -> Result<(HeaderMap, Html<String>), (StatusCode, String)> {
    let headers = begin_login().into_response_error()?;
    let redirect = params.get("redirectTo").cloned().unwrap_or_default();
    let html = render(&LoginTemplate::blank(redirect))?;
    Ok((headers, html))
}

/// `POST` login form submission: a successful login sets the session
/// cookie and answers 303 to the pending destination; failures re-render
/// the form inline with the submitted values preserved.
pub(super) async fn login_submit(
    Form(form): Form<LoginForm>,
) -> Result<Response, (StatusCode, String)> {
    let redirect = form.redirect.clone().unwrap_or_default();

    match submit_login(&CognitoClient, form)
        .await
        .into_response_error()?
    {
        LoginOutcome::Success {
            set_cookie,
            destination,
            ..
        } => Ok((set_cookie, Redirect::to(&destination)).into_response()),
        LoginOutcome::Rejected(rejection) => {
            let html = render(&LoginTemplate::rejected(rejection, redirect))?;
            Ok((StatusCode::BAD_REQUEST, html).into_response())
        }
    }
}

/// `GET` neutral entry point: routes a visitor to their personalized
/// landing page from the cookie alone, or to the generic entry page.
pub(super) async fn landing(headers: HeaderMap) -> Redirect {
    let cookie_value = session_cookie_from_headers(&headers)
        .ok()
        .flatten();
    Redirect::to(&resolve_landing(cookie_value.as_deref()))
}
