// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flumen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flumen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Flumen — flow-order normalization for JSR-352 batch job documents.
//!
//! Reads a constrained BPMN-like XML dialect (start/step/flow/split/end/fail/stop
//! nodes connected by transition edges), derives the transition graph, assigns every
//! route element a deterministic rank, and re-emits the document with siblings
//! ordered by rank instead of by source-text position.

pub mod assemble;
pub mod format;
pub mod model;
pub mod normalize;
pub mod order;
pub mod query;
pub mod rebuild;
pub mod trigger;
