use std::future::Future;
use std::io;

use tokio::signal::ctrl_c;

/// Resolves once the OS asks the process to stop (SIGINT, or SIGTERM on unix).
pub async fn signal() {
    first_signal(ctrl_c(), terminate()).await
}

/// Resolves when `interrupt` succeeds or `terminate` resolves.
///
/// A failed `interrupt` listener is logged and parked, leaving `terminate`
/// armed.
async fn first_signal<I, T>(interrupt: I, terminate: T)
where
    I: Future<Output = io::Result<()>>,
    T: Future<Output = ()>,
{
    let interrupt = async {
        match interrupt.await {
            Ok(()) => tracing::info!("received SIGINT, shutting down"),
            Err(err) => {
                tracing::error!(error = %err, "failed listening for SIGINT");
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        () = interrupt => {},
        () = terminate => {},
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => match stream.recv().await {
            Some(()) => tracing::info!("received SIGTERM, shutting down"),
            None => {
                tracing::warn!("cannot receive more SIGTERM signals");
                std::future::pending::<()>().await;
            }
        },
        Err(err) => {
            tracing::error!(error = %err, "failed listening for SIGTERM");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tokio::sync::oneshot;

    #[tokio::test]
    async fn interrupt_stops() {
        first_signal(async { Ok(()) }, std::future::pending()).await;
    }

    #[tokio::test]
    async fn terminate_still_stops_after_interrupt_listener_fails() {
        let (tx, rx) = oneshot::channel::<()>();
        let waiter = tokio::spawn(first_signal(
            async { Err(io::Error::other("no handler")) },
            async {
                let _ = rx.await;
            },
        ));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        tx.send(()).unwrap();
        tokio::time::timeout(Duration::from_secs(5), waiter)
            .await
            .expect("terminate should end the wait")
            .unwrap();
    }
}
