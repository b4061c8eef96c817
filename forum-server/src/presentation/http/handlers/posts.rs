use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::comment::{Comment, CommentPatch, CreateCommentRequest};
use crate::domain::post::{CreatePostRequest, PostPatch, PostView};
use crate::domain::vote::{Vote, VoteOutcome, VoteRequest};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;
use crate::presentation::http::handlers::{DataBody, MessageBody};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePostDto {
    #[validate(length(min = 1))]
    pub(crate) title: String,
    #[validate(length(min = 1))]
    pub(crate) body: String,
    #[validate(range(min = 1, max = 10))]
    pub(crate) user_id: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdatePostDto {
    #[validate(length(min = 1))]
    pub(crate) title: Option<String>,
    #[validate(length(min = 1))]
    pub(crate) body: Option<String>,
    #[validate(range(min = 1, max = 10))]
    pub(crate) user_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCommentDto {
    #[validate(length(min = 1))]
    pub(crate) body: String,
    #[validate(range(min = 1, max = 10))]
    pub(crate) user_id: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateCommentDto {
    #[validate(length(min = 1))]
    pub(crate) body: Option<String>,
    #[validate(range(min = 1, max = 10))]
    pub(crate) user_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VoteDto {
    #[validate(range(min = 1, max = 10))]
    pub(crate) user_id: i64,
    pub(crate) user_vote: i16,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentDto {
    pub(crate) id: i64,
    pub(crate) post_id: i64,
    pub(crate) body: String,
    pub(crate) user_id: i64,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            body: comment.body,
            user_id: comment.user_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VoteRecordDto {
    pub(crate) id: i64,
    pub(crate) post_id: i64,
    pub(crate) user_id: i64,
    pub(crate) user_vote: i16,
}

impl From<Vote> for VoteRecordDto {
    fn from(vote: Vote) -> Self {
        Self {
            id: vote.id,
            post_id: vote.post_id,
            user_id: vote.user_id,
            user_vote: vote.user_vote,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostViewDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) user_id: i64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) comments: Vec<CommentDto>,
    pub(crate) votes: Vec<VoteRecordDto>,
    pub(crate) comments_total: i64,
    pub(crate) up_votes_total: i64,
    pub(crate) down_votes_total: i64,
}

impl From<PostView> for PostViewDto {
    fn from(view: PostView) -> Self {
        Self {
            id: view.id,
            title: view.title,
            body: view.body,
            user_id: view.user_id,
            created_at: view.created_at,
            updated_at: view.updated_at,
            comments: view.comments.into_iter().map(CommentDto::from).collect(),
            votes: view.votes.into_iter().map(VoteRecordDto::from).collect(),
            comments_total: view.comments_total,
            up_votes_total: view.up_votes_total,
            down_votes_total: view.down_votes_total,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct DeleteResultDto {
    pub(crate) affected: u64,
}

#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All posts with derived counters, wrapped in a data envelope", body = [PostViewDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_posts(
    State(state): State<AppState>,
) -> AppResult<Json<DataBody<Vec<PostViewDto>>>> {
    let posts = state.forum_service.list_posts().await?;
    Ok(Json(DataBody::new(
        posts.into_iter().map(PostViewDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostDto,
    responses(
        (status = 200, description = "Post created", body = PostViewDto),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    Json(dto): Json<CreatePostDto>,
) -> AppResult<Json<DataBody<PostViewDto>>> {
    dto.validate()?;
    let req = CreatePostRequest {
        title: dto.title,
        body: dto.body,
        user_id: dto.user_id,
    };

    let view = state.forum_service.create_post(req).await?;
    Ok(Json(DataBody::new(PostViewDto::from(view))))
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post found", body = PostViewDto),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DataBody<PostViewDto>>> {
    let view = state.forum_service.get_post(id).await?;
    Ok(Json(DataBody::new(PostViewDto::from(view))))
}

#[utoipa::path(
    put,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostViewDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdatePostDto>,
) -> AppResult<Json<MessageBody<PostViewDto>>> {
    dto.validate()?;
    let patch = PostPatch {
        title: dto.title,
        body: dto.body,
        user_id: dto.user_id,
    };

    let view = state.forum_service.update_post(id, patch).await?;
    Ok(Json(MessageBody::new(
        "successfully updated post",
        PostViewDto::from(view),
    )))
}

#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Deletion acknowledged, even when nothing matched", body = DeleteResultDto),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageBody<DeleteResultDto>>> {
    let affected = state.forum_service.delete_post(id).await?;
    Ok(Json(MessageBody::new(
        "successfully deleted post",
        DeleteResultDto { affected },
    )))
}

#[utoipa::path(
    post,
    path = "/posts/{id}/comments",
    tag = "posts",
    params(("id" = i64, Path, description = "Parent post id")),
    request_body = CreateCommentDto,
    responses(
        (status = 200, description = "Parent post with the new comment", body = PostViewDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<CreateCommentDto>,
) -> AppResult<Json<DataBody<PostViewDto>>> {
    dto.validate()?;
    let req = CreateCommentRequest {
        body: dto.body,
        user_id: dto.user_id,
    };

    let view = state.forum_service.add_comment(id, req).await?;
    Ok(Json(DataBody::new(PostViewDto::from(view))))
}

#[utoipa::path(
    put,
    path = "/posts/{id}/comments/{comment_id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Parent post id"),
        ("comment_id" = i64, Path, description = "Comment id")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Parent post with the updated comment", body = PostViewDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Post or comment not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn update_comment(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(i64, i64)>,
    Json(dto): Json<UpdateCommentDto>,
) -> AppResult<Json<MessageBody<PostViewDto>>> {
    dto.validate()?;
    let patch = CommentPatch {
        body: dto.body,
        user_id: dto.user_id,
    };

    let view = state
        .forum_service
        .update_comment(post_id, comment_id, patch)
        .await?;
    Ok(Json(MessageBody::new(
        "successfully updated comment",
        PostViewDto::from(view),
    )))
}

#[utoipa::path(
    delete,
    path = "/posts/{id}/comments/{comment_id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Parent post id"),
        ("comment_id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Deletion acknowledged, even when nothing matched", body = DeleteResultDto),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_comment(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(i64, i64)>,
) -> AppResult<Json<MessageBody<DeleteResultDto>>> {
    let affected = state
        .forum_service
        .delete_comment(post_id, comment_id)
        .await?;
    Ok(Json(MessageBody::new(
        "successfully deleted comment",
        DeleteResultDto { affected },
    )))
}

#[utoipa::path(
    post,
    path = "/posts/{id}/vote",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    request_body = VoteDto,
    responses(
        (status = 200, description = "Vote created or flipped in place", body = VoteRecordDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn vote(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<VoteDto>,
) -> AppResult<Response> {
    dto.validate()?;
    let req = VoteRequest {
        user_id: dto.user_id,
        user_vote: dto.user_vote,
    };

    let outcome = state.forum_service.create_or_update_vote(id, req).await?;
    let response = match outcome {
        VoteOutcome::Created(vote) => Json(MessageBody::new(
            "successfully voted",
            VoteRecordDto::from(vote),
        ))
        .into_response(),
        VoteOutcome::Updated(vote) => {
            Json(DataBody::new(VoteRecordDto::from(vote))).into_response()
        }
    };
    Ok(response)
}
