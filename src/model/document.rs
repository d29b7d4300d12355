// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flumen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flumen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

/// A parsed flow document: an ordered list of top-level elements.
///
/// The document itself carries no name or attributes; it only owns its
/// children. Every element in the tree is owned exclusively by its parent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut Vec<Element> {
        &mut self.elements
    }

    pub fn push_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Visits every element in pre-order (each element before its children,
    /// siblings in document order).
    pub fn walk(&self, visit: &mut impl FnMut(&Element)) {
        for element in &self.elements {
            element.walk(visit);
        }
    }
}

/// A single element: name, ordered attributes, ordered children, and the
/// element's own direct text (never descendant text).
///
/// Names and attribute names preserve the exact case of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: SmolStr,
    attributes: Vec<(SmolStr, String)>,
    children: Vec<Element>,
    own_text: Option<String>,
}

impl Element {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            own_text: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(SmolStr, String)] {
        &self.attributes
    }

    /// Returns the value of the first attribute with the given name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn push_attr(&mut self, name: impl Into<SmolStr>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn own_text(&self) -> Option<&str> {
        self.own_text.as_deref()
    }

    pub fn set_own_text<T: Into<String>>(&mut self, text: Option<T>) {
        self.own_text = text.map(Into::into);
    }

    /// Appends a piece of direct text to the element's own text, joining
    /// pieces with a single space. Empty pieces are dropped.
    pub fn append_own_text(&mut self, piece: &str) {
        if piece.is_empty() {
            return;
        }
        match &mut self.own_text {
            Some(text) => {
                text.push(' ');
                text.push_str(piece);
            }
            None => self.own_text = Some(piece.to_owned()),
        }
    }

    pub fn walk(&self, visit: &mut impl FnMut(&Element)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
