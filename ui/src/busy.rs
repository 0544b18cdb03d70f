//! Busy-flag bracketing for in-flight requests.

use std::future::Future;

/// Run `fut` with the busy flag raised, clearing it when the call settles,
/// success and failure alike.
pub async fn with_busy<T, F>(mut set_busy: impl FnMut(bool), fut: F) -> T
where
    F: Future<Output = T>,
{
    set_busy(true);
    let out = fut.await;
    set_busy(false);
    out
}
