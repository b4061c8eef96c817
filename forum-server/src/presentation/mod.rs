use std::sync::Arc;

use crate::application::forum_service::ForumService;
use crate::application::user_service::UserService;
use crate::data::repositories::http::user_directory::HttpUserDirectory;
use crate::data::repositories::postgres::forum_repository::PostgresForumRepository;

pub(crate) mod http;
pub(crate) mod http_handlers;
pub(crate) mod openapi;
pub(crate) mod routes;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) forum_service: Arc<ForumService<PostgresForumRepository>>,
    pub(crate) user_service: Arc<UserService<HttpUserDirectory>>,
}

impl AppState {
    pub(crate) fn new(
        forum_service: Arc<ForumService<PostgresForumRepository>>,
        user_service: Arc<UserService<HttpUserDirectory>>,
    ) -> Self {
        Self {
            forum_service,
            user_service,
        }
    }
}
