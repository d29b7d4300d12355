// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flumen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flumen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the document tree.
//!
//! Queries provide derived views (route classification, transition adjacency)
//! that power the ordering and assembly stages.

pub mod route;

pub use route::{extract_routes, Extraction};
