//! Single-shot asynchronous conversion
//!
//! The format libraries are synchronous. Async entry points run them on the
//! blocking pool and await exactly one outcome, success or failure.

use crate::error::ConversionError;
use crate::format::Format;
use tracing::{debug, warn};

pub(crate) async fn single_shot<T, F>(format: Format, job: F) -> Result<T, ConversionError>
where
    F: FnOnce() -> Result<T, ConversionError> + Send + 'static,
    T: Send + 'static,
{
    debug!(%format, "conversion started");
    let result = match tokio::task::spawn_blocking(job).await {
        Ok(result) => result,
        Err(err) => {
            warn!(%format, error = %err, "conversion task did not complete");
            Err(ConversionError::new(format, err.to_string()))
        }
    };
    debug!(%format, ok = result.is_ok(), "conversion finished");
    result
}
