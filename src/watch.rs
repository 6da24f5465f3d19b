//! Single-shot and periodic (watch mode) runs.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use spacewatch_feeds::JsonFetcher;
use tokio::sync::oneshot;

use crate::App;

/// Show one cycle, or with `interval` keep refreshing until the future
/// built by `shutdown` resolves.
///
/// `shutdown` is only called in watch mode, so a single run leaves the
/// process's default interrupt handling alone.
pub async fn run<F, W, G, S>(
    app: &App<F>,
    out: &mut W,
    include_extended: bool,
    interval: Option<Duration>,
    shutdown: G,
) -> Result<()>
where
    F: JsonFetcher,
    W: Write,
    G: FnOnce() -> S,
    S: Future<Output = ()>,
{
    match interval {
        None => app.display_once(out, include_extended).await,
        Some(interval) => watch(app, out, include_extended, interval, shutdown())
            .await
            .map(|_| ()),
    }
}

/// Banner, display cycle, sleep; repeat until `shutdown` resolves.
///
/// `shutdown` is only raced against the sleep: a cycle in progress always
/// finishes, and a shutdown that arrives during a cycle takes effect as soon
/// as it ends. Returns the number of completed cycles. Any cycle error ends
/// the loop.
pub async fn watch<F, W, S>(
    app: &App<F>,
    out: &mut W,
    include_extended: bool,
    interval: Duration,
    shutdown: S,
) -> Result<u64>
where
    F: JsonFetcher,
    W: Write,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut cycles = 0u64;

    loop {
        writeln!(out, "{}", app.renderer().render_banner(Utc::now()))?;
        app.display_once(out, include_extended).await?;
        cycles += 1;
        tracing::info!(cycle = cycles, "display cycle complete");

        tokio::select! {
            biased;
            _ = &mut shutdown => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    writeln!(out, "Stopped watching.")?;
    out.flush()?;
    Ok(cycles)
}

/// Future that resolves on the first Ctrl-C.
///
/// The listener is spawned immediately so an interrupt that lands while a
/// cycle is fetching is not lost. A second Ctrl-C exits the process with
/// status 130 without waiting for the cycle. Must be called inside a tokio
/// runtime.
pub fn ctrl_c() -> impl Future<Output = ()> {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "cannot listen for interrupt");
            return;
        }
        tracing::info!("interrupt received, stopping after the current cycle");
        let _ = tx.send(());

        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("second interrupt, exiting");
            std::process::exit(130);
        }
    });

    async move {
        // Without a listener the loop runs until killed
        if rx.await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{app, fixture};
    use std::cell::Cell;
    use spacewatch_feeds::EndpointRegistry;

    const BANNER: &str = "=== Space weather at ";

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_during_first_sleep_stops_after_one_cycle() {
        let registry = EndpointRegistry::default();
        let app = app(fixture(&registry));
        let mut out = Vec::new();

        // Lands one second into the first five-second sleep
        let shutdown = tokio::time::sleep(Duration::from_secs(1));
        let cycles = watch(&app, &mut out, false, Duration::from_secs(5), shutdown)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(cycles, 1);
        assert_eq!(text.matches(BANNER).count(), 1);
        assert_eq!(text.matches("--- Solar Wind (Plasma) ---").count(), 1);
        assert!(text.ends_with("Stopped watching.\n"));
        assert_eq!(app.fetcher().requests().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cycles_repeat_on_interval() {
        let registry = EndpointRegistry::default();
        let app = app(fixture(&registry));
        let mut out = Vec::new();

        // Cycles start at t=0, 5 and 10; the interrupt lands at t=12
        let shutdown = tokio::time::sleep(Duration::from_secs(12));
        let cycles = watch(&app, &mut out, true, Duration::from_secs(5), shutdown)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(cycles, 3);
        assert_eq!(text.matches(BANNER).count(), 3);
        assert_eq!(text.matches("--- GOES X-ray Flux ---").count(), 3);
        assert_eq!(app.fetcher().requests().len(), 12);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_shutdown_finishes_current_cycle() {
        let registry = EndpointRegistry::default();
        let app = app(fixture(&registry));
        let mut out = Vec::new();

        // Already resolved before the first cycle starts
        let cycles = watch(&app, &mut out, false, Duration::from_secs(60), async {})
            .await
            .unwrap();

        assert_eq!(cycles, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("--- Geomagnetic Indices (Kp) ---"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cycle_error_ends_watch() {
        let app = app(crate::source::StaticFetcher::new());
        let mut out = Vec::new();

        let result = watch(
            &app,
            &mut out,
            false,
            Duration::from_secs(5),
            std::future::pending(),
        )
        .await;

        assert!(result.is_err());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(BANNER).count(), 1);
        assert!(!text.contains("Stopped watching."));
    }

    #[tokio::test]
    async fn test_single_run_does_not_install_shutdown() {
        let registry = EndpointRegistry::default();
        let app = app(fixture(&registry));
        let mut out = Vec::new();
        let installed = Cell::new(false);

        run(&app, &mut out, false, None, || {
            installed.set(true);
            std::future::pending::<()>()
        })
        .await
        .unwrap();

        assert!(!installed.get());
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains(BANNER));
        assert_eq!(text.matches("--- ").count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_run_installs_shutdown() {
        let registry = EndpointRegistry::default();
        let app = app(fixture(&registry));
        let mut out = Vec::new();
        let installed = Cell::new(false);

        run(&app, &mut out, false, Some(Duration::from_secs(5)), || {
            installed.set(true);
            async {}
        })
        .await
        .unwrap();

        assert!(installed.get());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(BANNER).count(), 1);
        assert!(text.ends_with("Stopped watching.\n"));
    }
}
