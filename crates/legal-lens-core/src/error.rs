/// Errors from the deferred detection task.
///
/// Classification itself cannot fail; only the task that wraps it can.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("detection cancelled before it ran")]
    Cancelled,

    #[error("detection task failed: {0}")]
    Failed(String),
}
