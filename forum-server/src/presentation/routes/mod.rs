use axum::Router;

use super::AppState;

pub(crate) mod posts;
pub(crate) mod users;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .nest("/posts", posts::router())
        .nest("/users", users::router())
}
