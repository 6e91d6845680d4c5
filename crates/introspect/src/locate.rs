// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Layer location: finding the layer sequence inside a model document.

use model_spec::{Layer, Model, ModelType};

/// Returns a borrowed view of the document's layer sequence.
///
/// All three network-bearing kinds (plain network, regressor, classifier)
/// wrap the same layer list; this is the single dispatch point the rest of
/// the engine builds on. Non-network kinds (tree ensembles, GLMs, pipelines)
/// return `None` — that is an ordinary answer, not an error.
pub fn network_layers(model: &Model) -> Option<&[Layer]> {
    match &model.model {
        ModelType::NeuralNetwork(nn)
        | ModelType::NeuralNetworkRegressor(nn)
        | ModelType::NeuralNetworkClassifier(nn) => Some(&nn.layers),
        _ => None,
    }
}
