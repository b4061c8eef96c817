use serde::Serialize;

pub(crate) mod posts;
pub(crate) mod users;

/// Every success response wraps its payload in a `data` envelope.
#[derive(Debug, Serialize)]
pub(crate) struct DataBody<T> {
    pub(crate) data: T,
}

impl<T> DataBody<T> {
    pub(crate) fn new(data: T) -> Self {
        Self { data }
    }
}

/// Mutation responses additionally carry a human-readable message.
#[derive(Debug, Serialize)]
pub(crate) struct MessageBody<T> {
    pub(crate) message: &'static str,
    pub(crate) data: T,
}

impl<T> MessageBody<T> {
    pub(crate) fn new(message: &'static str, data: T) -> Self {
        Self { message, data }
    }
}
