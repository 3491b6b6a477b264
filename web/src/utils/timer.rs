use std::time::Duration;

use futures::channel::oneshot;
use leptos::prelude::set_timeout;

/// Resolves after `duration` on the browser's timer queue.
pub async fn sleep(duration: Duration) {
    let (done, elapsed) = oneshot::channel();
    set_timeout(
        move || {
            let _ = done.send(());
        },
        duration,
    );
    let _ = elapsed.await;
}
