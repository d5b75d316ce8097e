#![windows_subsystem = "windows"]

use anyhow::Context;
use dioxus::prelude::*;
use moneta::domain::config::AppConfig;
use moneta::kernel::client::ApiClient;
use moneta::kernel::config::{load_config, resolve_endpoint};
use moneta_desktop::Shell;
use moneta_logger::{LevelFilter, Logger};

fn main() -> anyhow::Result<()> {
    let cfg: AppConfig =
        load_config(Some("client")).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg)?;

    // Endpoint first, client second, mount last; the shell cannot exist
    // without the client.
    let endpoint = resolve_endpoint();
    let client = ApiClient::new(&endpoint)?;

    Shell::new(client).with_window(cfg.window.clone()).launch(app)?;

    Ok(())
}

fn init_logger(cfg: &AppConfig) -> anyhow::Result<Logger> {
    let level = cfg
        .logging
        .level
        .as_deref()
        .map(str::parse::<LevelFilter>)
        .transpose()
        .context("Invalid logging.level in configuration")?
        .unwrap_or(LevelFilter::INFO);

    let mut builder = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).level(level);
    if let Some(path) = &cfg.logging.path {
        builder = builder.path(path.clone());
    }

    Ok(builder.init()?)
}

fn app() -> Element {
    let client = use_context::<ApiClient>();
    let backend = client.base_url().to_owned();

    rsx! {
        main { class: "min-h-screen bg-white p-8",
            h1 { class: "text-2xl font-bold text-purple-600", "Moneta" }
            p { class: "text-sm text-purple-400", "Backend: {backend}" }
        }
    }
}
