// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Service layer — bridges the Dioxus UI to the snaptext backend crates.

pub mod app_services;
pub mod data_dir;
