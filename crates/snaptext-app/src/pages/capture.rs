// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Capture screen — take or pick a photo, recognize its text, edit the
// result, copy it, export it as CSV or PDF.
//
// Every async callback goes through the capture session held in AppState;
// the session enforces the one-pending-recognition and one-capture-path
// invariants, this component only wires widgets to it.

use std::path::PathBuf;

use dioxus::document;
use dioxus::prelude::*;

use snaptext_core::error::SnapTextError;
use snaptext_core::human_errors::humanize_error;
use snaptext_core::types::{CaptureId, CaptureSource};
use snaptext_document::ocr::model_directory;

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Capture() -> Element {
    let svc = use_context::<AppServices>();
    let mut state = use_context::<Signal<AppState>>();

    let mut status_msg = use_signal({
        let svc = svc.clone();
        move || {
            if svc.ocr_models_available() {
                Option::<String>::None
            } else {
                let model_dir = svc.config().ocr_model_dir;
                Some(format!(
                    "OCR models not found — run `ocrs-cli` once to download them to {}",
                    model_directory(model_dir.as_deref()).display()
                ))
            }
        }
    });

    let buffer_text = state.read().session.buffer().to_string();
    let recognizing = state.read().session.is_recognizing();
    let copy_available = state.read().session.has_snapshot();

    rsx! {
        h1 { "SnapText" }
        p { style: "color: #666; margin-top: 0;",
            "Capture or pick a photo; the recognized text lands below, editable."
        }

        // Acquisition buttons
        div { style: "display: flex; gap: 8px;",
            button {
                style: "flex: 1; padding: 16px; border-radius: 12px; border: 2px dashed #007aff; color: #007aff; background: white; font-size: 16px;",
                disabled: recognizing,
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        match svc.bridge().request_camera_permission() {
                            Ok(true) => {}
                            Ok(false) => {
                                let human =
                                    humanize_error(&SnapTextError::CameraPermissionDenied);
                                status_msg.set(Some(human.message));
                                return;
                            }
                            Err(e) => {
                                status_msg.set(Some(humanize_error(&e).message));
                                return;
                            }
                        }

                        let id = match state.write().session.try_start_recognition() {
                            Ok(id) => id,
                            Err(e) => {
                                status_msg.set(Some(humanize_error(&e).message));
                                return;
                            }
                        };

                        let target = match svc.new_capture_file() {
                            Ok(path) => path,
                            Err(e) => {
                                state.write().session.fail_recognition(id);
                                status_msg.set(Some(humanize_error(&e).message));
                                return;
                            }
                        };

                        let displaced = state.write().session.set_pending_capture(target.clone());
                        if let Some(old) = displaced {
                            svc.discard_capture(&old);
                        }

                        match svc.bridge().capture_image(&target) {
                            Ok(true) => {
                                let svc = svc.clone();
                                spawn(async move {
                                    run_recognition(
                                        svc,
                                        state,
                                        status_msg,
                                        id,
                                        target,
                                        CaptureSource::Camera,
                                    )
                                    .await;
                                });
                            }
                            Ok(false) => {
                                // Cancelled in the camera UI.
                                state.write().session.fail_recognition(id);
                                let taken = state.write().session.take_pending_capture();
                                if let Some(path) = taken {
                                    svc.discard_capture(&path);
                                }
                                status_msg.set(None);
                            }
                            Err(e) => {
                                state.write().session.fail_recognition(id);
                                let taken = state.write().session.take_pending_capture();
                                if let Some(path) = taken {
                                    svc.discard_capture(&path);
                                }
                                status_msg.set(Some(humanize_error(&e).message));
                            }
                        }
                    }
                },
                "\u{1F4F7} Capture Photo"
            }
            button {
                style: "flex: 1; padding: 16px; border-radius: 12px; border: 1px solid #ccc; background: white; font-size: 16px;",
                disabled: recognizing,
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let picked = match svc.bridge().pick_image() {
                            Ok(Some(path)) => path,
                            Ok(None) => return,
                            Err(e) => {
                                status_msg.set(Some(humanize_error(&e).message));
                                return;
                            }
                        };

                        let id = match state.write().session.try_start_recognition() {
                            Ok(id) => id,
                            Err(e) => {
                                status_msg.set(Some(humanize_error(&e).message));
                                return;
                            }
                        };

                        let svc = svc.clone();
                        spawn(async move {
                            run_recognition(
                                svc,
                                state,
                                status_msg,
                                id,
                                picked,
                                CaptureSource::Gallery,
                            )
                            .await;
                        });
                    }
                },
                "\u{1F5BC} From Gallery"
            }
        }

        // Recognized / editable text surface
        textarea {
            style: "flex: 1; min-height: 240px; margin-top: 12px; padding: 12px; font-family: monospace; font-size: 14px; border: 1px solid #ccc; border-radius: 8px; resize: none;",
            placeholder: "Recognized text appears here. Edit freely before exporting.",
            value: "{buffer_text}",
            oninput: move |evt| state.write().session.set_buffer(evt.value()),
        }

        // Actions
        div { style: "display: flex; gap: 8px; margin-top: 12px;",
            if copy_available {
                button {
                    style: "flex: 1; padding: 12px; border-radius: 8px; border: 1px solid #ccc; background: white;",
                    onclick: move |_| {
                        // Copies the recognition snapshot, not later edits.
                        let text = match state.read().session.copy_text() {
                            Some(t) => t.to_string(),
                            None => return,
                        };
                        let quoted = serde_json::to_string(&text)
                            .unwrap_or_else(|_| "\"\"".into());
                        let js = format!("navigator.clipboard.writeText({quoted})");
                        spawn(async move {
                            if let Err(e) = document::eval(&js).await {
                                tracing::warn!(error = %e, "clipboard write failed");
                            }
                        });
                        status_msg.set(Some("Text Copied".into()));
                    },
                    "Copy"
                }
            }
            button {
                style: "flex: 1; padding: 12px; border-radius: 8px; border: 1px solid #007aff; color: #007aff; background: white;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let text = match state.read().session.export_text() {
                            Ok(t) => t,
                            Err(e) => {
                                status_msg.set(Some(humanize_error(&e).message));
                                return;
                            }
                        };
                        match svc.export_csv(&text) {
                            Ok(path) => {
                                status_msg.set(Some(format!("CSV saved at: {}", path.display())));
                            }
                            Err(e) => {
                                status_msg.set(Some(humanize_error(&e).message));
                            }
                        }
                    }
                },
                "Export CSV"
            }
            button {
                style: "flex: 1; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let text = match state.read().session.export_text() {
                            Ok(t) => t,
                            Err(e) => {
                                status_msg.set(Some(humanize_error(&e).message));
                                return;
                            }
                        };
                        match svc.export_pdf(&text) {
                            Ok(path) => {
                                status_msg.set(Some(format!("PDF saved at: {}", path.display())));
                            }
                            Err(e) => {
                                status_msg.set(Some(humanize_error(&e).message));
                            }
                        }
                    }
                },
                "Export PDF"
            }
        }

        // Status
        if let Some(ref msg) = *status_msg.read() {
            p { style: "margin-top: 12px; color: #666; font-size: 14px; text-align: center;",
                "{msg}"
            }
        }
    }
}

/// Decode + recognize `path`, then apply the outcome to the session.
///
/// For camera captures the temp file is consumed (and discarded) whether
/// recognition succeeds or not; picker selections are the user's own files
/// and are left alone.
async fn run_recognition(
    svc: AppServices,
    mut state: Signal<AppState>,
    mut status_msg: Signal<Option<String>>,
    id: CaptureId,
    path: PathBuf,
    source: CaptureSource,
) {
    status_msg.set(Some("Recognizing text...".into()));

    let result = svc.recognize_file(path).await;

    if source == CaptureSource::Camera {
        let taken = state.write().session.take_pending_capture();
        if let Some(consumed) = taken {
            svc.discard_capture(&consumed);
        }
    }

    match result {
        Ok(text) => {
            if state.write().session.complete_recognition(id, text) {
                status_msg.set(Some("Text recognized.".into()));
            } else {
                tracing::warn!("discarding recognition result with stale capture id");
            }
        }
        Err(e) => {
            state.write().session.fail_recognition(id);
            status_msg.set(Some(humanize_error(&e).message));
        }
    }
}
