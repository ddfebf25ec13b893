use hypertext::prelude::*;

use crate::{
    auth::Admin,
    competitors::Competitor,
    state::Conn,
    template::Page,
    util_resp::{StandardResponse, success},
};

/// The public leaderboard. Anyone can view this page.
pub async fn overview(
    user: Option<Admin>,
    mut conn: Conn,
) -> StandardResponse {
    let competitors = Competitor::by_score_desc(&mut *conn);

    success(
        Page::new()
            .user_opt(user)
            .body(maud! {
                h1 { "Overview" }
                table class="table table-striped align-middle" {
                    thead {
                        tr {
                            th scope="col" { "#" }
                            th scope="col" { "Team" }
                            th scope="col" { "Score" }
                            th scope="col" { "Last update" }
                        }
                    }
                    tbody {
                        @for (idx, competitor) in competitors.iter().enumerate() {
                            tr {
                                th scope="row" { (idx + 1) }
                                td {
                                    img
                                        src=(competitor.photo)
                                        alt=(competitor.team_name)
                                        width="48"
                                        class="rounded me-2";
                                    (competitor.team_name)
                                }
                                td { (competitor.score) }
                                td { (competitor.last_update.as_deref().unwrap_or("-")) }
                            }
                        }
                    }
                }
            })
            .render(),
    )
}
