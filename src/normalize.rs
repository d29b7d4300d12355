// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flumen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flumen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The normalization pipeline: parse, extract, order, rebuild, assemble.

use std::fmt;

use crate::assemble::{assemble, NormalizedFlow};
use crate::format::xml::{parse_document, write_document, XmlReadError};
use crate::order::order_routes;
use crate::query::extract_routes;
use crate::rebuild::rebuild_document;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    Xml(XmlReadError),
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml(err) => write!(f, "cannot read flow document: {err}"),
        }
    }
}

impl std::error::Error for NormalizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Xml(err) => Some(err),
        }
    }
}

impl From<XmlReadError> for NormalizeError {
    fn from(err: XmlReadError) -> Self {
        Self::Xml(err)
    }
}

/// Normalize a flow document: the returned tree is structurally identical to
/// the input except that siblings at every level are ordered by the execution
/// order the transition graph defines.
///
/// All derived state (adjacency, ranks) is local to the call; identical input
/// yields identical output across calls.
pub fn normalize(input: &str) -> Result<NormalizedFlow, NormalizeError> {
    let document = parse_document(input)?;
    let extraction = extract_routes(&document);
    let order = order_routes(
        extraction.route_elements(),
        extraction.forward(),
        extraction.reverse(),
    );
    let rebuilt = rebuild_document(&document, &order);
    Ok(assemble(rebuilt, &extraction))
}

/// [`normalize`], serialized back to XML text.
pub fn normalize_to_string(input: &str) -> Result<String, NormalizeError> {
    normalize(input).map(|flow| write_document(flow.document()))
}

#[cfg(test)]
mod tests {
    use super::{normalize, normalize_to_string, NormalizeError};

    fn element_ids(document: &crate::model::Document) -> Vec<String> {
        let mut ids = Vec::new();
        document.walk(&mut |element| {
            ids.push(element.attr("id").unwrap_or("").to_owned());
        });
        ids
    }

    #[test]
    fn normalize_orders_a_shuffled_chain_by_execution_order() {
        let input = r#"<jsr352:job id="job-1">
            <jsr352:end id="done"/>
            <jsr352:step id="b"/>
            <jsr352:step id="a"/>
            <jsr352:start id="start"/>
            <jsr352:transition id="t1" sourceRef="start" targetRef="a"/>
            <jsr352:transition id="t2" sourceRef="a" targetRef="b"/>
            <jsr352:transition id="t3" sourceRef="b" targetRef="done"/>
        </jsr352:job>"#;

        let flow = normalize(input).expect("normalize");
        assert_eq!(
            element_ids(flow.document()),
            // Transitions carry no rank and sort before the ranked elements.
            vec!["job-1", "t1", "t2", "t3", "start", "a", "b", "done"]
        );
    }

    #[test]
    fn normalize_is_deterministic_across_calls() {
        let input = r#"<jsr352:job id="job-1">
            <jsr352:step id="b"/>
            <jsr352:step id="a"/>
            <jsr352:transition id="t1" sourceRef="a" targetRef="b"/>
            <jsr352:transition id="t2" sourceRef="b" targetRef="a"/>
        </jsr352:job>"#;

        let first = normalize_to_string(input).expect("normalize 1");
        let second = normalize_to_string(input).expect("normalize 2");
        assert_eq!(first, second);
    }

    #[test]
    fn normalize_surfaces_parse_failures() {
        let err = normalize("<jsr352:job id=\"job-1\">").unwrap_err();
        assert!(matches!(err, NormalizeError::Xml(_)));
    }
}
