// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flumen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flumen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Final assembly of the normalized document.
//!
//! Downstream tooling (the execution-plan builder) consumes the reordered
//! tree together with the role classification. How that consumer groups
//! transitions and components beyond ordering is its own contract; this
//! stage guarantees the deterministic element order and hands over the maps
//! it needs, nothing more.

use std::collections::{BTreeMap, BTreeSet};

use smol_str::SmolStr;

use crate::model::{Document, Transition};
use crate::query::Extraction;

/// The normalized flow delivered downstream: the reordered document plus the
/// role classification derived during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFlow {
    document: Document,
    batch_components: BTreeSet<SmolStr>,
    end_events: BTreeSet<SmolStr>,
    transitions: BTreeMap<SmolStr, Transition>,
}

impl NormalizedFlow {
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn batch_components(&self) -> &BTreeSet<SmolStr> {
        &self.batch_components
    }

    pub fn end_events(&self) -> &BTreeSet<SmolStr> {
        &self.end_events
    }

    pub fn transitions(&self) -> &BTreeMap<SmolStr, Transition> {
        &self.transitions
    }
}

/// Wrap the rebuilt tree in the delivery structure.
pub fn assemble(document: Document, extraction: &Extraction) -> NormalizedFlow {
    NormalizedFlow {
        document,
        batch_components: extraction.batch_components().clone(),
        end_events: extraction.end_events().clone(),
        transitions: extraction.transitions().clone(),
    }
}
