//! PubScore is a small scoreboard application for a pub quiz competition.
//! Admins log in to create teams and record score updates; everyone else
//! watches the leaderboard on the public overview page.

use diesel_migrations::{EmbeddedMigrations, embed_migrations};

pub mod auth;
pub mod competitors;
pub mod config;
pub mod pages;
pub mod schema;
pub mod state;
pub mod template;
pub mod util_resp;
pub mod widgets;

#[cfg(test)]
mod test;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();
