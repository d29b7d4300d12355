// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flumen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flumen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Document ingestion and serialization.
//!
//! The flow dialect is plain XML; this module turns source text into the owned
//! [`crate::model::Document`] tree and back.

pub mod xml;

pub use xml::{parse_document, write_document, XmlReadError};
