// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flumen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flumen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Content-preserving tree rebuild with siblings sorted by rank.

use std::cmp::Ordering;

use crate::model::{Document, Element, ATTR_ID};
use crate::order::OrderMap;

/// Ranked ids sort by rank; an id with no rank sorts before any ranked id;
/// two unranked ids compare equal, so the stable sibling sort keeps their
/// document order. A missing `id` attribute compares like an empty one.
fn compare_by_rank(a: &Element, b: &Element, order: &OrderMap) -> Ordering {
    let rank_a = order.get(a.attr(ATTR_ID).unwrap_or(""));
    let rank_b = order.get(b.attr(ATTR_ID).unwrap_or(""));
    match (rank_a, rank_b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(rank_a), Some(rank_b)) => rank_a.cmp(rank_b),
    }
}

/// Copy of the element's identity only: name, full attribute set, own direct
/// text. Children are rebuilt separately.
fn shallow_copy(element: &Element) -> Element {
    let mut copy = Element::new(element.name());
    for (name, value) in element.attributes() {
        copy.push_attr(name.clone(), value.clone());
    }
    if let Some(text) = element.own_text() {
        copy.set_own_text(Some(text));
    }
    copy
}

fn rebuild_element(element: &Element, order: &OrderMap) -> Element {
    let mut copy = shallow_copy(element);
    let mut children: Vec<&Element> = element.children().iter().collect();
    children.sort_by(|a, b| compare_by_rank(a, b, order));
    for child in children {
        copy.push_child(rebuild_element(child, order));
    }
    copy
}

/// Produce a copy of the document whose siblings are sorted by rank at every
/// nesting level.
///
/// No node is added, removed, or renamed, and no attributes or own text are
/// altered; sibling order is the only observable change.
pub fn rebuild_document(document: &Document, order: &OrderMap) -> Document {
    let mut result = Document::new();
    let mut elements: Vec<&Element> = document.elements().iter().collect();
    elements.sort_by(|a, b| compare_by_rank(a, b, order));
    for element in elements {
        result.push_element(rebuild_element(element, order));
    }
    result
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use smol_str::SmolStr;

    use super::rebuild_document;
    use crate::model::{Document, Element};
    use crate::order::OrderMap;

    fn order_of(pairs: &[(&str, usize)]) -> OrderMap {
        pairs
            .iter()
            .map(|(id, rank)| (SmolStr::new(id), *rank))
            .collect()
    }

    fn step(id: &str) -> Element {
        let mut element = Element::new("jsr352:step");
        element.push_attr("id", id);
        element
    }

    fn child_ids(element: &Element) -> Vec<&str> {
        element
            .children()
            .iter()
            .map(|child| child.attr("id").unwrap_or(""))
            .collect()
    }

    fn job_with_children(children: Vec<Element>) -> Document {
        let mut job = Element::new("jsr352:job");
        job.push_attr("id", "job-1");
        for child in children {
            job.push_child(child);
        }
        let mut document = Document::new();
        document.push_element(job);
        document
    }

    #[test]
    fn siblings_are_sorted_by_rank_at_every_level() {
        let mut flow = Element::new("jsr352:flow");
        flow.push_attr("id", "flow-1");
        flow.push_child(step("inner-b"));
        flow.push_child(step("inner-a"));

        let document = job_with_children(vec![step("c"), flow, step("a")]);
        let order = order_of(&[
            ("a", 0),
            ("flow-1", 1),
            ("inner-a", 2),
            ("inner-b", 3),
            ("c", 4),
        ]);

        let rebuilt = rebuild_document(&document, &order);
        let job = &rebuilt.elements()[0];
        assert_eq!(child_ids(job), vec!["a", "flow-1", "c"]);
        let flow = &job.children()[1];
        assert_eq!(child_ids(flow), vec!["inner-a", "inner-b"]);
    }

    #[test]
    fn unranked_elements_sort_first_and_keep_document_order() {
        let mut t1 = Element::new("jsr352:transition");
        t1.push_attr("id", "t1");
        t1.push_attr("sourceRef", "a");
        t1.push_attr("targetRef", "b");
        let mut t2 = Element::new("jsr352:transition");
        t2.push_attr("id", "t2");
        t2.push_attr("sourceRef", "b");
        t2.push_attr("targetRef", "c");

        let document = job_with_children(vec![step("b"), t1, step("a"), t2]);
        let order = order_of(&[("a", 0), ("b", 1)]);

        let rebuilt = rebuild_document(&document, &order);
        assert_eq!(child_ids(&rebuilt.elements()[0]), vec!["t1", "t2", "a", "b"]);
    }

    #[test]
    fn rebuild_preserves_names_attributes_and_own_text() {
        let mut decision = Element::new("jsr352:step");
        decision.push_attr("id", "b");
        decision.push_attr("next", "c");
        decision.push_attr("start-limit", "2");
        decision.set_own_text(Some("retry & resume"));

        let document = job_with_children(vec![decision, step("a")]);
        let order = order_of(&[("a", 0), ("b", 1)]);

        let rebuilt = rebuild_document(&document, &order);
        let job = &rebuilt.elements()[0];
        assert_eq!(job.name(), "jsr352:job");
        assert_eq!(job.attr("id"), Some("job-1"));

        let b = job
            .children()
            .iter()
            .find(|child| child.attr("id") == Some("b"))
            .expect("b survives the rebuild");
        assert_eq!(b.name(), "jsr352:step");
        assert_eq!(
            b.attributes()
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect::<Vec<_>>(),
            vec![("id", "b"), ("next", "c"), ("start-limit", "2")]
        );
        assert_eq!(b.own_text(), Some("retry & resume"));
    }

    #[test]
    fn rebuild_with_empty_order_is_an_order_preserving_copy() {
        let document = job_with_children(vec![step("x"), step("y"), step("z")]);
        let rebuilt = rebuild_document(&document, &BTreeMap::new());
        assert_eq!(rebuilt, document);
    }

    #[test]
    fn rebuild_only_changes_sibling_positions() {
        let document = job_with_children(vec![step("b"), step("a")]);
        let order = order_of(&[("a", 0), ("b", 1)]);

        let rebuilt = rebuild_document(&document, &order);

        // Same multiset of children, different order.
        let mut before = child_ids(&document.elements()[0]);
        let mut after = child_ids(&rebuilt.elements()[0]);
        assert_eq!(after, vec!["a", "b"]);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }
}
