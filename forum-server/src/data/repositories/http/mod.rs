pub(crate) mod user_directory;
