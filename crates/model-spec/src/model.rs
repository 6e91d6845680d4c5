// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Top-level model document.
//!
//! A [`Model`] is the root of a serialized model description: versioning
//! metadata plus exactly one [`ModelType`] variant. Only the three
//! neural-network kinds carry a layer list; the remaining kinds (tree
//! ensembles, GLMs, pipelines) are perfectly valid documents that simply
//! have no layers to introspect.

use crate::error::SpecError;
use crate::layer::Layer;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The root of an in-memory model document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Schema version the document was written against.
    #[serde(default = "default_spec_version")]
    pub spec_version: u32,
    /// Optional descriptive metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<ModelDescription>,
    /// The model payload, exactly one kind active.
    pub model: ModelType,
}

fn default_spec_version() -> u32 {
    1
}

/// Descriptive metadata carried alongside the model payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelDescription {
    pub short_description: String,
    pub author: String,
    pub license: String,
}

/// The closed set of top-level model kinds.
///
/// The three network kinds share the same [`NeuralNetwork`] body and differ
/// only in how the surrounding tooling interprets their outputs. The
/// non-network kinds are opaque to this crate beyond their tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    NeuralNetwork(NeuralNetwork),
    NeuralNetworkRegressor(NeuralNetwork),
    NeuralNetworkClassifier(NeuralNetwork),
    TreeEnsembleClassifier,
    TreeEnsembleRegressor,
    GlmRegressor,
    SupportVectorClassifier,
    Pipeline,
}

impl ModelType {
    /// Returns a human-readable label for this model kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::NeuralNetwork(_) => "neural_network",
            ModelType::NeuralNetworkRegressor(_) => "neural_network_regressor",
            ModelType::NeuralNetworkClassifier(_) => "neural_network_classifier",
            ModelType::TreeEnsembleClassifier => "tree_ensemble_classifier",
            ModelType::TreeEnsembleRegressor => "tree_ensemble_regressor",
            ModelType::GlmRegressor => "glm_regressor",
            ModelType::SupportVectorClassifier => "support_vector_classifier",
            ModelType::Pipeline => "pipeline",
        }
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The layer graph shared by the three network-bearing model kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NeuralNetwork {
    /// Layers in execution order.
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl Model {
    /// Loads a model document from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, SpecError> {
        tracing::debug!(path = %path.display(), "loading model document");
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a model document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        let model: Self = serde_json::from_str(json)?;
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::LayerKind;

    #[test]
    fn test_parse_network_document() {
        let json = r#"{
            "spec_version": 1,
            "description": { "short_description": "tiny net" },
            "model": {
                "neural_network": {
                    "layers": [
                        { "name": "pool_1", "kind": "pooling" },
                        { "name": "softmax_1", "kind": "softmax" }
                    ]
                }
            }
        }"#;
        let model = Model::from_json(json).unwrap();
        assert_eq!(model.spec_version, 1);
        match &model.model {
            ModelType::NeuralNetwork(nn) => {
                assert_eq!(nn.layers.len(), 2);
                assert_eq!(nn.layers[0].kind, LayerKind::Pooling);
            }
            other => panic!("unexpected kind: {other}"),
        }
    }

    #[test]
    fn test_parse_non_network_document() {
        let json = r#"{ "model": "tree_ensemble_classifier" }"#;
        let model = Model::from_json(json).unwrap();
        assert_eq!(model.model, ModelType::TreeEnsembleClassifier);
        assert_eq!(model.spec_version, 1);
    }

    #[test]
    fn test_parse_malformed_document() {
        assert!(Model::from_json("{ not json }").is_err());
        assert!(Model::from_json(r#"{ "model": "no_such_kind" }"#).is_err());
    }

    #[test]
    fn test_model_type_display() {
        assert_eq!(
            ModelType::NeuralNetworkClassifier(NeuralNetwork::default()).to_string(),
            "neural_network_classifier"
        );
        assert_eq!(ModelType::Pipeline.to_string(), "pipeline");
    }

    #[test]
    fn test_serde_roundtrip() {
        let model = Model {
            spec_version: 3,
            description: None,
            model: ModelType::NeuralNetworkRegressor(NeuralNetwork { layers: vec![] }),
        };
        let json = serde_json::to_string(&model).unwrap();
        let back = Model::from_json(&json).unwrap();
        assert_eq!(back, model);
    }
}
