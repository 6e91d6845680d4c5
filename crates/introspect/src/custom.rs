// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Custom-layer detection.
//!
//! A custom layer's computation lives outside the standard variant set, so
//! a model containing one can only run where its implementation class is
//! registered. These queries let tooling report that dependency up front.

use crate::locate::network_layers;
use model_spec::{LayerKind, Model};

/// The (class name, description) pair identifying one custom layer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CustomLayerDescriptor {
    /// Name of the class implementing the layer.
    pub class_name: String,
    /// Free-text description from the model author.
    pub description: String,
}

/// Returns `true` if any layer in the document is a custom layer.
///
/// Short-circuits on the first match. Documents without a layer-bearing
/// kind trivially contain none.
pub fn has_custom_layer(model: &Model) -> bool {
    network_layers(model)
        .map(|layers| layers.iter().any(|l| l.kind.is_custom()))
        .unwrap_or(false)
}

/// Collects the descriptor of every custom layer, in layer order.
///
/// A model may legally declare the same class name more than once;
/// duplicates are kept so the result stays one-to-one with the custom
/// layers in the sequence.
pub fn custom_layer_descriptors(model: &Model) -> Vec<CustomLayerDescriptor> {
    let Some(layers) = network_layers(model) else {
        return Vec::new();
    };

    layers
        .iter()
        .filter_map(|layer| match &layer.kind {
            LayerKind::Custom(params) => Some(CustomLayerDescriptor {
                class_name: params.class_name.clone(),
                description: params.description.clone(),
            }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_spec::{CustomParams, Layer, ModelType, NeuralNetwork};

    fn custom(name: &str, class_name: &str, description: &str) -> Layer {
        Layer {
            name: name.into(),
            inputs: vec![],
            outputs: vec![],
            kind: LayerKind::Custom(CustomParams {
                class_name: class_name.into(),
                description: description.into(),
            }),
        }
    }

    fn standard(name: &str, kind: LayerKind) -> Layer {
        Layer {
            name: name.into(),
            inputs: vec![],
            outputs: vec![],
            kind,
        }
    }

    fn network(layers: Vec<Layer>) -> Model {
        Model {
            spec_version: 1,
            description: None,
            model: ModelType::NeuralNetwork(NeuralNetwork { layers }),
        }
    }

    #[test]
    fn test_no_custom_layers() {
        let model = network(vec![
            standard("pool", LayerKind::Pooling),
            standard("softmax", LayerKind::Softmax),
        ]);
        assert!(!has_custom_layer(&model));
        assert!(custom_layer_descriptors(&model).is_empty());
    }

    #[test]
    fn test_custom_layer_found_among_standard() {
        let model = network(vec![
            standard("pool", LayerKind::Pooling),
            custom("op", "MyOp", "does X"),
            standard("concat", LayerKind::Concat),
        ]);
        assert!(has_custom_layer(&model));
        assert_eq!(
            custom_layer_descriptors(&model),
            vec![CustomLayerDescriptor {
                class_name: "MyOp".into(),
                description: "does X".into(),
            }]
        );
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let model = network(vec![
            custom("op_a", "SharedOp", "first"),
            standard("reshape", LayerKind::Reshape),
            custom("op_b", "SharedOp", "first"),
            custom("op_c", "OtherOp", "second"),
        ]);
        let descriptors = custom_layer_descriptors(&model);
        assert_eq!(descriptors.len(), 3);
        assert_eq!(descriptors[0].class_name, "SharedOp");
        assert_eq!(descriptors[1].class_name, "SharedOp");
        assert_eq!(descriptors[2].class_name, "OtherOp");
    }

    #[test]
    fn test_non_network_document() {
        let model = Model {
            spec_version: 1,
            description: None,
            model: ModelType::GlmRegressor,
        };
        assert!(!has_custom_layer(&model));
        assert!(custom_layer_descriptors(&model).is_empty());
    }
}
