// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flumen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flumen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

/// The `id` attribute carried by every flow-relevant element.
pub const ATTR_ID: &str = "id";
/// Transition edge endpoints.
pub const ATTR_SOURCE_REF: &str = "sourceRef";
pub const ATTR_TARGET_REF: &str = "targetRef";

/// Role of an element in the flow graph, derived purely from its name.
///
/// Only the fixed `jsr352:` prefix is understood and names are matched
/// exactly as written (no case folding).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Start,
    Step,
    Flow,
    Split,
    Transition,
    End,
    Fail,
    Stop,
    Other,
}

impl FlowKind {
    pub fn classify(name: &str) -> Self {
        match name {
            "jsr352:start" => Self::Start,
            "jsr352:step" => Self::Step,
            "jsr352:flow" => Self::Flow,
            "jsr352:split" => Self::Split,
            "jsr352:transition" => Self::Transition,
            "jsr352:end" => Self::End,
            "jsr352:fail" => Self::Fail,
            "jsr352:stop" => Self::Stop,
            _ => Self::Other,
        }
    }

    /// Route elements are the set over which ordering is computed.
    pub fn is_route_element(self) -> bool {
        !matches!(self, Self::Transition | Self::Other)
    }

    pub fn is_batch_component(self) -> bool {
        matches!(self, Self::Step | Self::Flow | Self::Split)
    }

    pub fn is_end_event(self) -> bool {
        matches!(self, Self::End | Self::Fail | Self::Stop)
    }
}

/// A directed edge between two route elements, carried in the document as
/// its own element with `sourceRef`/`targetRef` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    id: SmolStr,
    source_ref: SmolStr,
    target_ref: SmolStr,
}

impl Transition {
    pub fn new(
        id: impl Into<SmolStr>,
        source_ref: impl Into<SmolStr>,
        target_ref: impl Into<SmolStr>,
    ) -> Self {
        Self {
            id: id.into(),
            source_ref: source_ref.into(),
            target_ref: target_ref.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }

    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}
