// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Export paths — append-to-CSV and render-to-PDF, both reading the current
// text surface value and nothing else.

pub mod csv;
pub mod pdf;

pub use csv::CsvExporter;
pub use pdf::PdfExporter;
