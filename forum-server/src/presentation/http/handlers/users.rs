use axum::{
    Json,
    extract::{Path, State},
};

use crate::domain::user::UserProfile;
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;
use crate::presentation::http::handlers::DataBody;

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Directory users, each with an imageUrl"),
        (status = 502, description = "Upstream directory error")
    )
)]
pub(crate) async fn list_users(
    State(state): State<AppState>,
) -> AppResult<Json<DataBody<Vec<UserProfile>>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(DataBody::new(users)))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "Directory user id")),
    responses(
        (status = 200, description = "Directory user with an imageUrl"),
        (status = 502, description = "Upstream directory error")
    )
)]
pub(crate) async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DataBody<UserProfile>>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(DataBody::new(user)))
}
