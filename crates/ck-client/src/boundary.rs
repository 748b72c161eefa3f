use std::future::Future;

use ck_core::{ChatError, Result};

/// Single catch-and-convert point for UI call sites.
///
/// Every other caller propagates errors with `?`; the boundary reports a
/// failed operation to the registered callback and hands the discriminated
/// result back for rendering.
pub struct ErrorBoundary {
    on_error: Box<dyn Fn(&ChatError) + Send + Sync>,
}

impl ErrorBoundary {
    pub fn new<F>(on_error: F) -> Self
    where
        F: Fn(&ChatError) + Send + Sync + 'static,
    {
        Self {
            on_error: Box::new(on_error),
        }
    }

    /// Await an operation, notifying the callback on failure
    pub async fn run<T, Fut>(&self, operation: Fut) -> Result<T>
    where
        Fut: Future<Output = Result<T>>,
    {
        match operation.await {
            Ok(data) => Ok(data),
            Err(error) => {
                (self.on_error)(&error);
                Err(error)
            }
        }
    }
}
