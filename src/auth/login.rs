use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::PrivateCookieJar;
use hypertext::prelude::*;
use serde::Deserialize;

use crate::{
    auth::{Admin, clear_login_cookie, set_flash, set_login_cookie, take_flash},
    state::AppState,
    template::Page,
    widgets::ErrorAlert,
};

pub async fn login_page(
    user: Option<Admin>,
    jar: PrivateCookieJar,
) -> Response {
    if user.is_some() {
        return Redirect::to("/admin").into_response();
    }

    let (flash, jar) = take_flash(jar);

    let page = Page::new()
        .body(maud! {
            h1 { "Login" }
            @if let Some(msg) = &flash {
                ErrorAlert msg=(msg);
            }
            form method="post" class="mt-4" {
                div class="mb-3" {
                    label for="username" class="form-label" { "Username" }
                    input type="text" class="form-control" id="username" name="username";
                }
                div class="mb-3" {
                    label for="password" class="form-label" { "Password" }
                    input type="password" class="form-control" id="password" name="password";
                }
                button type="submit" class="btn btn-primary" { "Submit" }
            }
        })
        .render();

    (jar, Html(page.into_inner())).into_response()
}

#[derive(Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

pub async fn do_login(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.auth.verify(&form.username, &form.password) {
        Some(account) => {
            tracing::info!(username = %account.username, "admin logged in");
            let jar = set_login_cookie(account.id, jar);
            (jar, Redirect::to("/admin")).into_response()
        }
        None => {
            tracing::debug!(username = %form.username, "rejected login");
            let jar = set_flash(
                "Please use the correct username and password",
                jar,
            );
            (jar, Redirect::to("/login")).into_response()
        }
    }
}

pub async fn do_logout(user: Admin, jar: PrivateCookieJar) -> Response {
    tracing::info!(username = %user.username, "admin logged out");
    (clear_login_cookie(jar), Redirect::to("/")).into_response()
}
