// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flumen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flumen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::model::{
    Document, FlowKind, Transition, ATTR_ID, ATTR_SOURCE_REF, ATTR_TARGET_REF,
};

/// Forward adjacency targets. Sources branch to one or two targets in almost
/// every real flow, so the list stays inline.
pub type TargetList = SmallVec<[SmolStr; 2]>;

/// Everything the ordering and assembly stages need, derived from one
/// pre-order traversal of the document.
///
/// Ids are taken as written: empty ids are kept, and duplicate ids collapse
/// map entries (first occurrence wins in `route_elements`, last transition in
/// document order wins in `reverse`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    route_elements: Vec<SmolStr>,
    batch_components: BTreeSet<SmolStr>,
    end_events: BTreeSet<SmolStr>,
    transitions: BTreeMap<SmolStr, Transition>,
    forward: BTreeMap<SmolStr, TargetList>,
    reverse: BTreeMap<SmolStr, SmolStr>,
}

impl Extraction {
    /// Route element ids in document order.
    pub fn route_elements(&self) -> &[SmolStr] {
        &self.route_elements
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

    /// `sourceRef -> targetRefs`, in transition declaration order.
    pub fn forward(&self) -> &BTreeMap<SmolStr, TargetList> {
        &self.forward
    }

    /// `targetRef -> sourceRef`. Single-valued: when several transitions
    /// target the same id, the last one in document order wins.
    pub fn reverse(&self) -> &BTreeMap<SmolStr, SmolStr> {
        &self.reverse
    }
}

/// Classify every element and collect transition adjacency in one pre-order
/// traversal. The input tree is not modified and nothing here fails: ids are
/// accepted as-is, malformed or not.
pub fn extract_routes(document: &Document) -> Extraction {
    let mut extraction = Extraction::default();
    let mut seen_route_ids: BTreeSet<SmolStr> = BTreeSet::new();

    document.walk(&mut |element| {
        let kind = FlowKind::classify(element.name());
        let id = SmolStr::new(element.attr(ATTR_ID).unwrap_or(""));

        if kind.is_route_element() {
            if seen_route_ids.insert(id.clone()) {
                extraction.route_elements.push(id.clone());
            }
            if kind.is_batch_component() {
                extraction.batch_components.insert(id.clone());
            }
            if kind.is_end_event() {
                extraction.end_events.insert(id);
            }
            return;
        }

        if kind == FlowKind::Transition {
            let source = SmolStr::new(element.attr(ATTR_SOURCE_REF).unwrap_or(""));
            let target = SmolStr::new(element.attr(ATTR_TARGET_REF).unwrap_or(""));

            extraction
                .transitions
                .insert(id.clone(), Transition::new(id, source.clone(), target.clone()));
            extraction
                .forward
                .entry(source.clone())
                .or_default()
                .push(target.clone());
            extraction.reverse.insert(target, source);
        }
    });

    extraction
}
