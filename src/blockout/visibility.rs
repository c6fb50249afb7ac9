//! Scoped `allowInvisibleElements` toggle.
//!
//! UiAutomator2 leaves invisible elements out of the element tree, which
//! hides system bars and some app elements from selector queries. The toggle
//! enables them for the duration of one action and always puts the original
//! value back: on success, on error and on panic.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::{debug, warn};

use crate::driver::AutomationDriver;
use crate::error::{BlockoutError, Result};

/// Runs `action` with invisible elements allowed, then restores the setting.
///
/// On platforms that do not need the toggle the action runs untouched and
/// the setting is neither read nor written. If restoring fails, the restore
/// error is returned even when `action` succeeded; an error from `action` is
/// kept inside [`BlockoutError::VisibilityRestore`].
pub async fn with_relaxed_visibility<D, F, Fut, T>(driver: &D, action: F) -> Result<T>
where
    D: AutomationDriver,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    if !driver.platform().requires_visibility_toggle() {
        return action().await;
    }

    let original = driver.allow_invisible_elements().await?;
    debug!(original, "enabling allowInvisibleElements");

    let outcome = match driver.set_allow_invisible_elements(true).await {
        Ok(()) => AssertUnwindSafe(async move { action().await })
            .catch_unwind()
            .await,
        Err(err) => Ok(Err(err.into())),
    };

    let restored = driver.set_allow_invisible_elements(original).await;
    debug!(original, ok = restored.is_ok(), "restored allowInvisibleElements");

    let result = match outcome {
        Ok(result) => result,
        Err(panic) => {
            if let Err(err) = &restored {
                warn!(error = %err, "restore failed while unwinding");
            }
            std::panic::resume_unwind(panic);
        }
    };

    match restored {
        Ok(()) => result,
        Err(source) => {
            let action = result.err().map(Box::new);
            if let Some(err) = &action {
                warn!(error = %err, "block-out error superseded by restore failure");
            }
            Err(BlockoutError::VisibilityRestore {
                original,
                source,
                action,
            })
        }
    }
}
