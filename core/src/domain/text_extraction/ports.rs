use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, text_extraction::value_objects::ExtractTextInput,
};

/// Best-effort label transcription.
///
/// `CoreError::NoTextFound` means the image was read but held no text; transport
/// problems surface as `CoreError::ExternalServiceError`.
#[cfg_attr(test, mockall::automock)]
pub trait TextExtractionService: Send + Sync {
    fn extract_text(
        &self,
        input: ExtractTextInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
