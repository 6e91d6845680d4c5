// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Layer definitions: the tagged union of operations a network can contain.
//!
//! Each [`Layer`] carries a name, its input/output blob names, and exactly
//! one [`LayerKind`] variant. Weight-bearing variants own their parameter
//! structs; variants whose parameters the introspection engine never reads
//! (pooling, reshape, concat, ...) are unit variants here.

use crate::weights::{LstmWeightParams, WeightParams};
use serde::{Deserialize, Serialize};

/// One operation node in the network's computation graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Unique layer name (e.g., `"conv2d_1"`).
    pub name: String,
    /// Names of the input blobs consumed by this layer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<String>,
    /// Names of the output blobs produced by this layer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
    /// The operation this layer performs, exactly one variant active.
    pub kind: LayerKind,
}

/// The closed set of layer variants.
///
/// Mutually exclusive: a layer is exactly one of these. New variants are
/// expected to appear as the schema evolves; consumers must treat unknown
/// shapes conservatively rather than fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Convolution(ConvolutionParams),
    InnerProduct(InnerProductParams),
    BatchNorm(BatchNormParams),
    Activation(ActivationKind),
    Pooling,
    Padding,
    Concat,
    Lrn,
    Softmax,
    Split,
    Add,
    Multiply,
    Unary,
    Upsample,
    Bias,
    L2Normalize,
    Reshape,
    Flatten,
    Permute,
    Reduce,
    LoadConstant(LoadConstantParams),
    Scale(ScaleParams),
    SimpleRecurrent(SimpleRecurrentParams),
    Gru(GruParams),
    UniDirectionalLstm(UniDirectionalLstmParams),
    BiDirectionalLstm(BiDirectionalLstmParams),
    Crop,
    Average,
    Max,
    Min,
    Dot,
    Mvn,
    Embedding(EmbeddingParams),
    SequenceRepeat,
    ReorganizeData,
    Slice,
    Custom(CustomParams),
}

impl LayerKind {
    /// Returns a human-readable label for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::Convolution(_) => "convolution",
            LayerKind::InnerProduct(_) => "inner_product",
            LayerKind::BatchNorm(_) => "batch_norm",
            LayerKind::Activation(_) => "activation",
            LayerKind::Pooling => "pooling",
            LayerKind::Padding => "padding",
            LayerKind::Concat => "concat",
            LayerKind::Lrn => "lrn",
            LayerKind::Softmax => "softmax",
            LayerKind::Split => "split",
            LayerKind::Add => "add",
            LayerKind::Multiply => "multiply",
            LayerKind::Unary => "unary",
            LayerKind::Upsample => "upsample",
            LayerKind::Bias => "bias",
            LayerKind::L2Normalize => "l2_normalize",
            LayerKind::Reshape => "reshape",
            LayerKind::Flatten => "flatten",
            LayerKind::Permute => "permute",
            LayerKind::Reduce => "reduce",
            LayerKind::LoadConstant(_) => "load_constant",
            LayerKind::Scale(_) => "scale",
            LayerKind::SimpleRecurrent(_) => "simple_recurrent",
            LayerKind::Gru(_) => "gru",
            LayerKind::UniDirectionalLstm(_) => "uni_directional_lstm",
            LayerKind::BiDirectionalLstm(_) => "bi_directional_lstm",
            LayerKind::Crop => "crop",
            LayerKind::Average => "average",
            LayerKind::Max => "max",
            LayerKind::Min => "min",
            LayerKind::Dot => "dot",
            LayerKind::Mvn => "mvn",
            LayerKind::Embedding(_) => "embedding",
            LayerKind::SequenceRepeat => "sequence_repeat",
            LayerKind::ReorganizeData => "reorganize_data",
            LayerKind::Slice => "slice",
            LayerKind::Custom(_) => "custom",
        }
    }

    /// Returns `true` for the custom variant.
    pub fn is_custom(&self) -> bool {
        matches!(self, LayerKind::Custom(_))
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convolution layer weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvolutionParams {
    pub output_channels: u64,
    pub kernel_channels: u64,
    pub weights: WeightParams,
    pub bias: WeightParams,
}

/// Fully-connected (inner product) layer weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InnerProductParams {
    pub input_channels: u64,
    pub output_channels: u64,
    pub weights: WeightParams,
    pub bias: WeightParams,
}

/// Batch normalization statistics and affine parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchNormParams {
    pub channels: u64,
    pub gamma: WeightParams,
    pub beta: WeightParams,
    pub mean: WeightParams,
    pub variance: WeightParams,
}

/// A constant tensor materialized at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConstantParams {
    pub shape: Vec<u64>,
    pub data: WeightParams,
}

/// Per-channel scale and shift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleParams {
    pub shape_scale: Vec<u64>,
    pub scale: WeightParams,
    pub bias: WeightParams,
}

/// Vanilla (Elman-style) recurrent layer weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleRecurrentParams {
    pub input_vector_size: u64,
    pub output_vector_size: u64,
    pub weight_matrix: WeightParams,
    pub recursion_matrix: WeightParams,
    pub bias_vector: WeightParams,
}

/// Gated recurrent unit weights: three gates, each with a weight matrix,
/// a recursion matrix, and a bias vector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GruParams {
    pub input_vector_size: u64,
    pub output_vector_size: u64,

    pub update_gate_weight_matrix: WeightParams,
    pub reset_gate_weight_matrix: WeightParams,
    pub output_gate_weight_matrix: WeightParams,

    pub update_gate_recursion_matrix: WeightParams,
    pub reset_gate_recursion_matrix: WeightParams,
    pub output_gate_recursion_matrix: WeightParams,

    pub update_gate_bias_vector: WeightParams,
    pub reset_gate_bias_vector: WeightParams,
    pub output_gate_bias_vector: WeightParams,
}

impl GruParams {
    /// Iterates over the nine gate tensors.
    pub fn tensors(&self) -> impl Iterator<Item = &WeightParams> {
        [
            &self.update_gate_weight_matrix,
            &self.reset_gate_weight_matrix,
            &self.output_gate_weight_matrix,
            &self.update_gate_recursion_matrix,
            &self.reset_gate_recursion_matrix,
            &self.output_gate_recursion_matrix,
            &self.update_gate_bias_vector,
            &self.reset_gate_bias_vector,
            &self.output_gate_bias_vector,
        ]
        .into_iter()
    }
}

/// Single-direction LSTM layer: one weight bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniDirectionalLstmParams {
    pub input_vector_size: u64,
    pub output_vector_size: u64,
    pub weight_params: LstmWeightParams,
}

/// Bi-directional LSTM layer: forward bundle at index 0, backward at 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiDirectionalLstmParams {
    pub input_vector_size: u64,
    pub output_vector_size: u64,
    pub weight_params: [LstmWeightParams; 2],
}

/// Embedding (lookup table) layer weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingParams {
    pub input_dim: u64,
    pub output_channels: u64,
    pub weights: WeightParams,
    pub bias: WeightParams,
}

/// A layer whose computation lives outside the standard variant set.
///
/// Identified by the class name the runtime must resolve and a free-text
/// description; the payload itself is opaque to introspection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomParams {
    /// Name of the class implementing the layer (the runtime binding key).
    pub class_name: String,
    /// Human-readable description of what the layer does.
    pub description: String,
}

/// Activation non-linearity sub-union.
///
/// Only the two parametric variants carry learned tensors; the rest are
/// pure functions of their input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationKind {
    #[serde(rename = "relu")]
    ReLU,
    #[serde(rename = "leaky_relu")]
    LeakyReLU,
    Sigmoid,
    Tanh,
    ScaledTanh,
    Elu,
    Softsign,
    Softplus,
    Linear,
    #[serde(rename = "prelu")]
    PReLU { alpha: WeightParams },
    ParametricSoftplus { alpha: WeightParams, beta: WeightParams },
}

impl ActivationKind {
    /// Returns a human-readable label for this non-linearity.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivationKind::ReLU => "relu",
            ActivationKind::LeakyReLU => "leaky_relu",
            ActivationKind::Sigmoid => "sigmoid",
            ActivationKind::Tanh => "tanh",
            ActivationKind::ScaledTanh => "scaled_tanh",
            ActivationKind::Elu => "elu",
            ActivationKind::Softsign => "softsign",
            ActivationKind::Softplus => "softplus",
            ActivationKind::Linear => "linear",
            ActivationKind::PReLU { .. } => "prelu",
            ActivationKind::ParametricSoftplus { .. } => "parametric_softplus",
        }
    }
}
