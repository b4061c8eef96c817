use axum::Router;
use axum::routing::{get, post, put};

use crate::presentation::AppState;
use crate::presentation::http::handlers::posts::{
    add_comment, create_post, delete_comment, delete_post, get_post, list_posts, update_comment,
    update_post, vote,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/{id}", get(get_post).put(update_post).delete(delete_post))
        .route("/{id}/comments", post(add_comment))
        .route(
            "/{id}/comments/{comment_id}",
            put(update_comment).delete(delete_comment),
        )
        .route("/{id}/vote", post(vote))
}
