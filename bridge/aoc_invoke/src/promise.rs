//! Uniform future type for sync and async callables.

use std::future::Future;

use futures::future::{self, BoxFuture, FutureExt};

use crate::error::InvokeError;
use crate::value::Value;

/// Result of calling an export.
pub type Outcome = Result<Value, InvokeError>;

/// A pending [`Outcome`].
pub type Pending = BoxFuture<'static, Outcome>;

/// Conversion of a call result into a [`Pending`].
///
/// Ready outcomes and values resolve immediately; futures are awaited.
pub trait IntoPending {
    fn into_pending(self) -> Pending;
}

impl IntoPending for Outcome {
    fn into_pending(self) -> Pending {
        future::ready(self).boxed()
    }
}

impl IntoPending for Value {
    fn into_pending(self) -> Pending {
        future::ready(Ok(self)).boxed()
    }
}

impl IntoPending for Pending {
    fn into_pending(self) -> Pending {
        self
    }
}

/// Call `f` and return its result as a [`Pending`].
///
/// Errors are passed through as-is.
pub fn promise_of<F, R>(f: F) -> Pending
where
    F: FnOnce() -> R,
    R: IntoPending,
{
    f().into_pending()
}

/// Box an async export body.
pub(crate) fn pending_from<Fut>(fut: Fut) -> Pending
where
    Fut: Future<Output = Outcome> + Send + 'static,
{
    fut.boxed()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_sync_outcome() {
        let value = promise_of(|| Ok::<_, InvokeError>(Value::Int(3))).await;
        assert_eq!(value.unwrap(), Value::Int(3));
    }

    #[tokio::test]
    async fn test_plain_value() {
        let value = promise_of(|| Value::from("ok")).await;
        assert_eq!(value.unwrap(), Value::from("ok"));
    }

    #[tokio::test]
    async fn test_async_callable() {
        let value = promise_of(|| {
            pending_from(async {
                tokio::task::yield_now().await;
                Ok(Value::from("later"))
            })
        })
        .await;
        assert_eq!(value.unwrap(), Value::from("later"));
    }

    #[tokio::test]
    async fn test_error_is_not_translated() {
        let err = promise_of(|| Err::<Value, _>(InvokeError::raised("boom")))
            .await
            .unwrap_err();
        assert_eq!(err, InvokeError::raised("boom"));
    }
}
