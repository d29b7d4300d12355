// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flumen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flumen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: the document tree and flow-node classification.

pub mod document;
pub mod flow;

pub use document::{Document, Element};
pub use flow::{FlowKind, Transition, ATTR_ID, ATTR_SOURCE_REF, ATTR_TARGET_REF};
