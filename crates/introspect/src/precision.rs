// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Weight precision classification.
//!
//! Answers one question: does this model store any of its learned weights
//! in the reduced 16-bit encoding? The answer is a single [`Precision`]
//! tag, computed by an exhaustive per-variant rule over every weight-bearing
//! field of every layer. The classifier is deliberately conservative:
//! anything it cannot score — an unknown variant, an empty tensor — counts
//! as f32, never as an error, so the engine stays total as the schema grows.

use crate::locate::network_layers;
use model_spec::{
    ActivationKind, Layer, LayerKind, LstmWeightParams, Model, Precision, WeightParams,
};

/// Returns `true` if any tensor in the iterator carries the f16 encoding.
fn any_f16<'a, I>(tensors: I) -> bool
where
    I: IntoIterator<Item = &'a WeightParams>,
{
    tensors
        .into_iter()
        .any(|w| w.precision() == Precision::Float16)
}

fn fold(is_f16: bool) -> Precision {
    if is_f16 {
        Precision::Float16
    } else {
        Precision::Float32
    }
}

/// Classifies the storage precision of one recurrent-cell weight bundle.
///
/// f16 if any populated field in the bundle (gate weights, recursion
/// matrices, biases, peepholes) is f16-encoded. Uni-directional LSTM layers
/// apply this to their single bundle; bi-directional layers apply it to the
/// forward and backward bundles independently.
pub fn lstm_weight_precision(bundle: &LstmWeightParams) -> Precision {
    fold(any_f16(bundle.tensors()))
}

/// Classifies the storage precision of a single layer's weights.
///
/// Each weight-bearing variant is scored as a disjunction over its
/// designated tensor fields: f16 if any of them carries the f16 encoding.
/// Variants without weight tensors (pooling, reshape, concat, custom, ...)
/// always classify f32.
pub fn layer_weight_precision(layer: &Layer) -> Precision {
    match &layer.kind {
        LayerKind::Convolution(p) => {
            fold(any_f16([&p.weights, &p.bias]))
        }
        LayerKind::InnerProduct(p) => {
            fold(any_f16([&p.weights, &p.bias]))
        }
        LayerKind::BatchNorm(p) => {
            fold(any_f16([&p.gamma, &p.beta, &p.mean, &p.variance]))
        }
        LayerKind::LoadConstant(p) => p.data.precision(),
        LayerKind::Scale(p) => {
            fold(any_f16([&p.scale, &p.bias]))
        }
        LayerKind::SimpleRecurrent(p) => {
            fold(any_f16([&p.weight_matrix, &p.recursion_matrix, &p.bias_vector]))
        }
        LayerKind::Gru(p) => fold(any_f16(p.tensors())),
        LayerKind::UniDirectionalLstm(p) => lstm_weight_precision(&p.weight_params),
        LayerKind::BiDirectionalLstm(p) => {
            // Forward bundle first, backward only if the forward is f32.
            match lstm_weight_precision(&p.weight_params[0]) {
                Precision::Float16 => Precision::Float16,
                Precision::Float32 => lstm_weight_precision(&p.weight_params[1]),
            }
        }
        LayerKind::Embedding(p) => {
            fold(any_f16([&p.weights, &p.bias]))
        }
        LayerKind::Activation(act) => match act {
            ActivationKind::PReLU { alpha } => alpha.precision(),
            ActivationKind::ParametricSoftplus { alpha, beta } => match alpha.precision() {
                Precision::Float16 => Precision::Float16,
                Precision::Float32 => beta.precision(),
            },
            _ => Precision::Float32,
        },
        // No weight-bearing fields: pooling, padding, concat, reductions,
        // shape ops, element-wise ops, and custom layers (whose payload is
        // opaque). Unknown future variants land here too.
        _ => Precision::Float32,
    }
}

/// Classifies the storage precision of the whole model.
///
/// f16 as soon as any layer classifies f16; f32 for everything else,
/// including documents without a layer-bearing kind.
pub fn model_weight_precision(model: &Model) -> Precision {
    let Some(layers) = network_layers(model) else {
        return Precision::Float32;
    };

    for layer in layers {
        if layer_weight_precision(layer) == Precision::Float16 {
            tracing::debug!(layer = %layer.name, "found f16-encoded weights");
            return Precision::Float16;
        }
    }
    Precision::Float32
}
