use utoipa::OpenApi;

use crate::presentation::http::handlers::posts::{
    CommentDto, CreateCommentDto, CreatePostDto, DeleteResultDto, PostViewDto, UpdateCommentDto,
    UpdatePostDto, VoteDto, VoteRecordDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::handlers::posts::list_posts,
        crate::presentation::http::handlers::posts::create_post,
        crate::presentation::http::handlers::posts::get_post,
        crate::presentation::http::handlers::posts::update_post,
        crate::presentation::http::handlers::posts::delete_post,
        crate::presentation::http::handlers::posts::add_comment,
        crate::presentation::http::handlers::posts::update_comment,
        crate::presentation::http::handlers::posts::delete_comment,
        crate::presentation::http::handlers::posts::vote,
        crate::presentation::http::handlers::users::list_users,
        crate::presentation::http::handlers::users::get_user
    ),
    components(
        schemas(
            CreatePostDto,
            UpdatePostDto,
            CreateCommentDto,
            UpdateCommentDto,
            VoteDto,
            PostViewDto,
            CommentDto,
            VoteRecordDto,
            DeleteResultDto
        )
    ),
    tags(
        (name = "posts", description = "Post, comment and vote endpoints"),
        (name = "users", description = "Proxied user directory endpoints")
    )
)]
pub(crate) struct ApiDoc;
