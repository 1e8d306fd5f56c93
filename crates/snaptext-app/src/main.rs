// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// SnapText — capture a photo, recognize its text on-device, edit, export.
//
// Entry point. Initialises logging and backend services, then launches the
// single-screen Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::capture::Capture;
use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("SnapText starting");

    dioxus::launch(app);
}

/// Root component.
fn app() -> Element {
    // Initialise backend services (data dir, config, bridge)
    let svc = use_hook(|| match AppServices::init() {
        Ok(s) => {
            tracing::info!("backend services initialised");
            s
        }
        Err(e) => {
            tracing::error!(error = %e, "persistent storage failed — using temp-dir fallback");
            AppServices::fallback().expect("even fallback init failed")
        }
    });

    // Provide services and state as context for the capture screen
    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(state::AppState::new()));

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100vh; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",
            Capture {}
        }
    }
}
