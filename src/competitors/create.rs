use axum::{Form, response::Redirect};
use diesel::prelude::*;
use hypertext::prelude::*;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::Admin,
    competitors::{DEFAULT_PHOTO, capitalize_team_name},
    schema::competitors,
    state::Conn,
    template::Page,
    util_resp::{StandardResponse, bad_request, see_other_ok, success},
    widgets::ErrorAlert,
};

pub async fn add_team_page(user: Admin) -> StandardResponse {
    success(
        Page::new()
            .user(user)
            .body(maud! {
                h1 { "Add a new team" }
                form method="post" action="/insertteam" class="mt-4" {
                    div class="mb-3" {
                        label for="teamName" class="form-label" { "Team name" }
                        input
                            type="text"
                            class="form-control"
                            id="teamName"
                            name="team_name"
                            required;
                    }
                    div class="mb-3" {
                        label for="score" class="form-label" { "Starting score" }
                        input
                            type="number"
                            class="form-control"
                            id="score"
                            name="score"
                            value="0";
                    }
                    div class="mb-3" {
                        label for="photo" class="form-label" { "Photo URL" }
                        input
                            type="text"
                            class="form-control"
                            id="photo"
                            name="photo"
                            aria-describedby="photoHelp";
                        div id="photoHelp" class="form-text" {
                            "Leave this empty to use the placeholder image."
                        }
                    }
                    button type="submit" class="btn btn-primary" { "Add team" }
                }
            })
            .render(),
    )
}

#[derive(Deserialize)]
pub struct InsertTeamForm {
    pub team_name: String,
    pub score: String,
    pub photo: String,
}

pub async fn do_insert_team(
    user: Admin,
    mut conn: Conn,
    Form(form): Form<InsertTeamForm>,
) -> StandardResponse {
    let name = capitalize_team_name(&form.team_name);
    if name.is_empty() {
        return bad_request(
            Page::new()
                .user(user)
                .body(maud! {
                    ErrorAlert msg="The team name must not be empty.";
                })
                .render(),
        );
    }

    let score = match form.score.trim().parse::<i64>() {
        Ok(score) => score,
        Err(_) => {
            return bad_request(
                Page::new()
                    .user(user)
                    .body(maud! {
                        ErrorAlert msg="The starting score must be a whole number.";
                    })
                    .render(),
            );
        }
    };

    let photo = if form.photo.is_empty() {
        DEFAULT_PHOTO.to_string()
    } else {
        form.photo.clone()
    };

    let id = Uuid::now_v7().to_string();
    let n = diesel::insert_into(competitors::table)
        .values((
            competitors::id.eq(&id),
            competitors::team_name.eq(&name),
            competitors::score.eq(score),
            competitors::photo.eq(&photo),
        ))
        .execute(&mut *conn)
        .unwrap();
    assert_eq!(n, 1);

    tracing::info!(%id, team_name = %name, score, "competitor created");

    see_other_ok(Redirect::to("/overview"))
}
