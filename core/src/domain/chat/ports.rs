use std::future::Future;

use crate::domain::{
    chat::value_objects::{AskInput, ChatAnswer},
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    fn ask(&self, input: AskInput) -> impl Future<Output = Result<ChatAnswer, CoreError>> + Send;
}
