/// The browser console subscriber could not be installed (or this is not a
/// browser build), so the formatting subscriber is tried next.
#[derive(thiserror::Error, Debug)]
#[error("browser console logging unavailable for the drawing surface")]
struct ConsoleUnavailable;

fn max_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::TRACE
    } else {
        tracing::Level::INFO
    }
}

/// Installs the global tracing subscriber: the browser console on wasm, a
/// formatting subscriber everywhere else. Fails if one is already set.
pub fn configure() -> anyhow::Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let console = Err(ConsoleUnavailable);

    #[cfg(target_arch = "wasm32")]
    let console = console.or_else(|_| tracing_wasm::try_set_as_global_default());

    let installed = console.or_else(|_| {
        let subscriber = tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(max_level())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    });
    installed?;

    tracing::debug!("drawing surface logging configured");
    Ok(())
}
