pub(crate) mod forum_repository;
pub(crate) mod repositories;
pub(crate) mod user_directory;
