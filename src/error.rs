use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MetaError {
    #[error("Invalid partition name `{0}`")]
    InvalidPartition(String),

    #[error("Invalid topic name `{0}`")]
    InvalidTopic(String),

    #[error("Fully qualified name would be {0} bytes, exceeding the maximum")]
    NameTooLong(usize),

    #[error("Malformed fully qualified name `{0}`")]
    MalformedName(String),

    #[error("Subscriber side of the delivery queue is gone")]
    SubscriberGone,
}
