use prova_core::ProvaError;

/// Join a collection of tasks and apply an optional request-level deadline.
///
/// This wraps `futures::future::join_all(tasks)` with
/// `crate::core::with_request_deadline`. On timeout, the inner helper
/// returns `ProvaError::RequestTimeout("request")` which call sites can
/// remap to a more specific capability label as needed.
///
/// # Errors
/// Returns `ProvaError::RequestTimeout` when the deadline elapses first.
pub async fn join_with_deadline<I, F, T>(
    tasks: I,
    deadline: Option<std::time::Duration>,
) -> Result<Vec<T>, ProvaError>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = T>,
{
    crate::core::with_request_deadline(deadline, futures::future::join_all(tasks)).await
}
