//! End-to-end tests which drive the real router the way a browser would,
//! then check the resulting rows directly against the pool.

use axum::http::StatusCode;
use axum_test::{TestServer, TestServerConfig};
use chrono::Local;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::MigrationHarness;
use serde::Serialize;

use crate::{
    MIGRATIONS,
    auth::AuthConfig,
    competitors::{Competitor, DATE_FORMAT, DEFAULT_PHOTO},
    config::create_app,
    schema::competitors,
    state::DbPool,
};

const FRANCES_PASSWORD: &str = "quiz-night";
const ADMIN_PASSWORD: &str = "last-orders";

fn test_pool() -> DbPool {
    let pool: DbPool = Pool::builder()
        .max_size(1)
        .build(ConnectionManager::new(":memory:"))
        .unwrap();

    {
        let mut conn = pool.get().unwrap();
        conn.run_pending_migrations(MIGRATIONS).unwrap();
    }

    pool
}

fn test_server(pool: DbPool) -> TestServer {
    let auth = AuthConfig::new([
        ("Frances", FRANCES_PASSWORD),
        ("Admin", ADMIN_PASSWORD),
    ]);

    TestServer::new_with_config(
        create_app(pool, auth),
        TestServerConfig {
            save_cookies: true,
            ..TestServerConfig::default()
        },
    )
    .unwrap()
}

#[derive(Serialize)]
struct LoginForm<'a> {
    username: &'a str,
    password: &'a str,
}

async fn login(server: &TestServer) {
    let res = server
        .post("/login")
        .form(&LoginForm {
            username: "Frances",
            password: FRANCES_PASSWORD,
        })
        .await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/admin");
}

#[derive(Serialize)]
struct InsertTeamForm<'a> {
    team_name: &'a str,
    score: &'a str,
    photo: &'a str,
}

async fn insert_team(server: &TestServer, name: &str, score: &str, photo: &str) {
    let res = server
        .post("/insertteam")
        .form(&InsertTeamForm {
            team_name: name,
            score,
            photo,
        })
        .await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/overview");
}

#[derive(Serialize)]
struct UpdateScoreForm<'a> {
    points_scored: &'a str,
}

fn all_competitors(pool: &DbPool) -> Vec<Competitor> {
    competitors::table
        .load::<Competitor>(&mut pool.get().unwrap())
        .unwrap()
}

#[tokio::test]
async fn insert_with_empty_photo_gets_the_placeholder() {
    let pool = test_pool();
    let server = test_server(pool.clone());
    login(&server).await;

    insert_team(&server, "eagles", "0", "").await;

    let rows = all_competitors(&pool);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].photo, DEFAULT_PHOTO);
    assert_eq!(rows[0].score, 0);
    assert_eq!(rows[0].last_update, None);
}

#[tokio::test]
async fn insert_keeps_a_provided_photo() {
    let pool = test_pool();
    let server = test_server(pool.clone());
    login(&server).await;

    insert_team(&server, "owls", "0", "https://example.com/owls.png").await;

    let rows = all_competitors(&pool);
    assert_eq!(rows[0].photo, "https://example.com/owls.png");
}

#[tokio::test]
async fn team_names_are_stored_capitalized() {
    let pool = test_pool();
    let server = test_server(pool.clone());
    login(&server).await;

    insert_team(&server, "eagles", "0", "").await;
    insert_team(&server, "ROYAL OAK", "0", "").await;

    let names: Vec<String> = all_competitors(&pool)
        .into_iter()
        .map(|c| c.team_name)
        .collect();
    assert!(names.contains(&"Eagles".to_string()));
    assert!(names.contains(&"Royal oak".to_string()));
}

#[tokio::test]
async fn updating_a_score_adds_points_and_stamps_the_date() {
    let pool = test_pool();
    let server = test_server(pool.clone());
    login(&server).await;

    insert_team(&server, "eagles", "10", "").await;
    let id = all_competitors(&pool)[0].id.clone();

    let res = server
        .post(&format!("/updatescore/{id}"))
        .form(&UpdateScoreForm { points_scored: "5" })
        .await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/updateteams");

    let rows = all_competitors(&pool);
    assert_eq!(rows[0].score, 15);
    assert_eq!(
        rows[0].last_update.as_deref(),
        Some(Local::now().format(DATE_FORMAT).to_string().as_str())
    );
}

#[tokio::test]
async fn updating_with_malformed_points_changes_nothing() {
    let pool = test_pool();
    let server = test_server(pool.clone());
    login(&server).await;

    insert_team(&server, "eagles", "10", "").await;
    let id = all_competitors(&pool)[0].id.clone();

    let res = server
        .post(&format!("/updatescore/{id}"))
        .form(&UpdateScoreForm {
            points_scored: "lots",
        })
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

    let rows = all_competitors(&pool);
    assert_eq!(rows[0].score, 10);
    assert_eq!(rows[0].last_update, None);
}

#[tokio::test]
async fn updating_an_unknown_id_is_not_found() {
    let pool = test_pool();
    let server = test_server(pool.clone());
    login(&server).await;

    let res = server
        .post("/updatescore/no-such-id")
        .form(&UpdateScoreForm { points_scored: "5" })
        .await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn overview_lists_highest_score_first() {
    let pool = test_pool();
    let server = test_server(pool.clone());
    login(&server).await;

    insert_team(&server, "lions", "5", "").await;
    insert_team(&server, "eagles", "20", "").await;
    insert_team(&server, "owls", "10", "").await;

    let res = server.get("/overview").await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let body = res.text();
    let eagles = body.find("Eagles").unwrap();
    let owls = body.find("Owls").unwrap();
    let lions = body.find("Lions").unwrap();
    assert!(eagles < owls && owls < lions);
}

#[tokio::test]
async fn update_teams_lists_alphabetically() {
    let pool = test_pool();
    let server = test_server(pool.clone());
    login(&server).await;

    insert_team(&server, "zebras", "5", "").await;
    insert_team(&server, "monkeys", "20", "").await;
    insert_team(&server, "apples", "10", "").await;

    let res = server.get("/updateteams").await;
    assert_eq!(res.status_code(), StatusCode::OK);

    let body = res.text();
    let apples = body.find("Apples").unwrap();
    let monkeys = body.find("Monkeys").unwrap();
    let zebras = body.find("Zebras").unwrap();
    assert!(apples < monkeys && monkeys < zebras);
}

#[tokio::test]
async fn deleting_a_team_removes_it() {
    let pool = test_pool();
    let server = test_server(pool.clone());
    login(&server).await;

    insert_team(&server, "eagles", "0", "").await;
    let id = all_competitors(&pool)[0].id.clone();

    let res = server.get(&format!("/deleteteam/{id}")).await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/updateteams");

    assert!(all_competitors(&pool).is_empty());
}

#[tokio::test]
async fn deleting_an_unknown_id_is_a_noop() {
    let pool = test_pool();
    let server = test_server(pool.clone());
    login(&server).await;

    insert_team(&server, "eagles", "0", "").await;

    let res = server.get("/deleteteam/no-such-id").await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/updateteams");

    assert_eq!(all_competitors(&pool).len(), 1);
}

#[tokio::test]
async fn wrong_password_redirects_back_with_a_flash_message() {
    let pool = test_pool();
    let server = test_server(pool);

    let res = server
        .post("/login")
        .form(&LoginForm {
            username: "Frances",
            password: "wrong",
        })
        .await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/login");

    // The flash renders once, then is consumed.
    let res = server.get("/login").await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert!(
        res.text()
            .contains("Please use the correct username and password")
    );

    let res = server.get("/login").await;
    assert!(
        !res.text()
            .contains("Please use the correct username and password")
    );
}

#[tokio::test]
async fn correct_password_logs_in_and_sets_a_session() {
    let pool = test_pool();
    let server = test_server(pool);

    let res = server
        .post("/login")
        .form(&LoginForm {
            username: "Admin",
            password: ADMIN_PASSWORD,
        })
        .await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/admin");

    let res = server.get("/admin").await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert!(res.text().contains("Hello Admin"));
}

#[tokio::test]
async fn admin_pages_require_a_session() {
    let pool = test_pool();
    let server = test_server(pool);

    for path in [
        "/admin",
        "/updateteams",
        "/addteam",
        "/contact",
        "/logout",
        "/deleteteam/some-id",
    ] {
        let res = server.get(path).await;
        assert_eq!(
            res.status_code(),
            StatusCode::SEE_OTHER,
            "expected redirect for {path}"
        );
        assert_eq!(res.header("location"), "/login");
    }

    let res = server
        .post("/insertteam")
        .form(&InsertTeamForm {
            team_name: "eagles",
            score: "0",
            photo: "",
        })
        .await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/login");
}

#[tokio::test]
async fn logout_clears_the_session() {
    let pool = test_pool();
    let server = test_server(pool);
    login(&server).await;

    let res = server.get("/logout").await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/");

    let res = server.get("/admin").await;
    assert_eq!(res.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(res.header("location"), "/login");
}

#[tokio::test]
async fn public_pages_do_not_require_a_session() {
    let pool = test_pool();
    let server = test_server(pool);

    for path in ["/", "/index", "/overview", "/login"] {
        let res = server.get(path).await;
        assert_eq!(
            res.status_code(),
            StatusCode::OK,
            "expected 200 for {path}"
        );
    }
}
