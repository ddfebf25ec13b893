//! Competitor records, plus the handlers which create, update, list and
//! delete them.

use diesel::prelude::*;
use serde::Serialize;

use crate::{schema::competitors, util_resp::FailureResponse};

pub mod create;
pub mod manage;
pub mod overview;

/// Served out of `static/` for teams which were added without a photo.
pub const DEFAULT_PHOTO: &str = "/static/images/no-photo.png";

/// Date stamp format used for `last_update`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, Queryable, Serialize)]
pub struct Competitor {
    pub id: String,
    pub team_name: String,
    pub score: i64,
    pub photo: String,
    pub last_update: Option<String>,
}

impl Competitor {
    pub fn fetch(
        id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Competitor, FailureResponse> {
        competitors::table
            .filter(competitors::id.eq(id))
            .first::<Competitor>(conn)
            .optional()
            .unwrap()
            .ok_or(FailureResponse::NotFound(()))
    }

    /// Leaderboard order: highest score first.
    pub fn by_score_desc(conn: &mut SqliteConnection) -> Vec<Competitor> {
        competitors::table
            .order_by(competitors::score.desc())
            .load::<Competitor>(conn)
            .unwrap()
    }

    /// Admin listing order: alphabetical, for easy updating.
    pub fn by_name_asc(conn: &mut SqliteConnection) -> Vec<Competitor> {
        competitors::table
            .order_by(competitors::team_name.asc())
            .load::<Competitor>(conn)
            .unwrap()
    }
}

/// Normalizes a team name on insert: first letter uppercased, the rest
/// lowercased ("eagles" and "EAGLES" both become "Eagles").
pub fn capitalize_team_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
