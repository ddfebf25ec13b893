use axum::{Form, extract::Path, response::Redirect};
use chrono::Local;
use diesel::prelude::*;
use hypertext::prelude::*;
use serde::Deserialize;

use crate::{
    auth::Admin,
    competitors::{Competitor, DATE_FORMAT},
    schema::competitors,
    state::Conn,
    template::Page,
    util_resp::{StandardResponse, bad_request, see_other_ok, success},
    widgets::ErrorAlert,
};

/// Admin listing of every team, sorted by name, with the score and delete
/// controls inline.
pub async fn update_teams_page(
    user: Admin,
    mut conn: Conn,
) -> StandardResponse {
    let competitors = Competitor::by_name_asc(&mut *conn);

    success(
        Page::new()
            .user(user)
            .body(maud! {
                h1 { "Update teams" }
                table class="table align-middle" {
                    thead {
                        tr {
                            th scope="col" { "Team" }
                            th scope="col" { "Score" }
                            th scope="col" { "Last update" }
                            th scope="col" { "Add points" }
                            th scope="col" {}
                        }
                    }
                    tbody {
                        @for competitor in &competitors {
                            tr {
                                td { (competitor.team_name) }
                                td { (competitor.score) }
                                td { (competitor.last_update.as_deref().unwrap_or("-")) }
                                td {
                                    form
                                        method="post"
                                        action=(format!("/updatescore/{}", competitor.id))
                                        class="d-flex gap-2" {
                                        input
                                            type="number"
                                            class="form-control form-control-sm"
                                            name="points_scored"
                                            value="0";
                                        button type="submit" class="btn btn-sm btn-primary" {
                                            "Add"
                                        }
                                    }
                                }
                                td {
                                    a class="btn btn-sm btn-danger"
                                      href=(format!("/deleteteam/{}", competitor.id)) {
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            })
            .render(),
    )
}

#[derive(Deserialize)]
pub struct UpdateScoreForm {
    pub points_scored: String,
}

/// Adds the scored points to the stored score and stamps today's date, as a
/// single SQL update so that concurrent updates cannot lose points.
pub async fn do_update_score(
    Path(id): Path<String>,
    user: Admin,
    mut conn: Conn,
    Form(form): Form<UpdateScoreForm>,
) -> StandardResponse {
    let competitor = Competitor::fetch(&id, &mut *conn)?;

    let points = match form.points_scored.trim().parse::<i64>() {
        Ok(points) => points,
        Err(_) => {
            return bad_request(
                Page::new()
                    .user(user)
                    .body(maud! {
                        ErrorAlert msg="Points scored must be a whole number.";
                    })
                    .render(),
            );
        }
    };

    let today = Local::now().format(DATE_FORMAT).to_string();

    diesel::update(competitors::table.filter(competitors::id.eq(&id)))
        .set((
            competitors::score.eq(competitors::score + points),
            competitors::last_update.eq(&today),
        ))
        .execute(&mut *conn)
        .unwrap();

    tracing::info!(
        id = %competitor.id,
        team_name = %competitor.team_name,
        points,
        "score updated"
    );

    see_other_ok(Redirect::to("/updateteams"))
}

/// Deleting an id which is already gone is a no-op; either way the admin
/// lands back on the listing.
pub async fn do_delete_team(
    Path(id): Path<String>,
    _user: Admin,
    mut conn: Conn,
) -> StandardResponse {
    let n = diesel::delete(
        competitors::table.filter(competitors::id.eq(&id)),
    )
    .execute(&mut *conn)
    .unwrap();

    if n == 0 {
        tracing::debug!(%id, "delete of unknown competitor ignored");
    } else {
        tracing::info!(%id, "competitor deleted");
    }

    see_other_ok(Redirect::to("/updateteams"))
}
