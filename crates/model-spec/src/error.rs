// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for model document loading.

/// Errors that can occur when materializing a model document.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// The document file could not be read.
    #[error("failed to read model document: {0}")]
    ReadError(#[from] std::io::Error),

    /// The document JSON is malformed or does not match the schema.
    #[error("failed to parse model document: {0}")]
    ParseError(#[from] serde_json::Error),
}
