//! The static pages: landing page, admin dashboard and contact details.

use hypertext::prelude::*;

use crate::{
    auth::Admin,
    template::Page,
    util_resp::{StandardResponse, success},
    widgets::Actions,
};

pub async fn index_page(user: Option<Admin>) -> StandardResponse {
    success(
        Page::new()
            .user_opt(user)
            .body(maud! {
                div class="px-4 py-5 text-center" {
                    h1 { "Welcome to PubScore" }
                    p class="lead" {
                        "The live scoreboard for the pub quiz competition."
                    }
                    a class="btn btn-primary btn-lg" href="/overview" {
                        "View the leaderboard"
                    }
                }
            })
            .render(),
    )
}

pub async fn admin_page(user: Admin) -> StandardResponse {
    let greeting = format!("Hello {}", user.username);

    success(
        Page::new()
            .body(maud! {
                h1 { (greeting) }
                p {
                    "From here you can keep the scoreboard up to date: add "
                    "points after each round, add new teams as they sign up, "
                    "and remove teams which have dropped out."
                }
                Actions options=(&[
                    ("/updateteams", "Update teams"),
                    ("/addteam", "Add a team"),
                    ("/contact", "Contact"),
                ]);
            })
            .user(user)
            .render(),
    )
}

pub async fn contact_page(user: Admin) -> StandardResponse {
    success(
        Page::new()
            .user(user)
            .body(maud! {
                h1 { "Contact" }
                p { "Problems with the scoreboard? Reach the maintainers:" }
                ul {
                    li {
                        "Email: "
                        a href="mailto:scores@pubscore.example" {
                            "scores@pubscore.example"
                        }
                    }
                    li { "Or find Frances behind the bar on quiz night." }
                }
            })
            .render(),
    )
}
