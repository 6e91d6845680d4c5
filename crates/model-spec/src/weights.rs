// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Weight tensors and their storage precision.
//!
//! A [`WeightParams`] holds one learned tensor in exactly one of two storage
//! encodings: 32-bit floats ([`WeightParams::float_value`]) or raw
//! half-precision bytes ([`WeightParams::float16_value`], two bytes per
//! element). The upstream converter guarantees that at most one of the two
//! is populated; this crate never checks that invariant, it only reports
//! which encoding is present.

use serde::{Deserialize, Serialize};

/// Storage precision of a weight tensor, or of a whole model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// 32-bit IEEE 754 floating point (the default encoding).
    Float32,
    /// 16-bit IEEE 754 floating point.
    Float16,
}

impl Precision {
    /// Returns a human-readable label for this precision.
    pub fn as_str(self) -> &'static str {
        match self {
            Precision::Float32 => "f32",
            Precision::Float16 => "f16",
        }
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single learned weight tensor.
///
/// Mirrors the serialized schema: the tensor's values live either in
/// `float_value` (f32) or in `float16_value` (packed little-endian f16
/// bytes). A tensor with both fields empty is treated as f32 — the engine
/// defaults toward full precision rather than guessing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightParams {
    /// Tensor values in 32-bit floating point.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub float_value: Vec<f32>,
    /// Tensor values as packed 16-bit floats (2 bytes per element).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub float16_value: Vec<u8>,
}

impl WeightParams {
    /// Builds a tensor stored in 32-bit floats.
    pub fn from_f32(values: Vec<f32>) -> Self {
        Self {
            float_value: values,
            float16_value: Vec::new(),
        }
    }

    /// Builds a tensor stored as packed 16-bit float bytes.
    pub fn from_f16_bytes(bytes: Vec<u8>) -> Self {
        Self {
            float_value: Vec::new(),
            float16_value: bytes,
        }
    }

    /// Returns the storage precision of this tensor.
    ///
    /// Derived from which representation is populated: a non-empty
    /// `float16_value` means [`Precision::Float16`], anything else
    /// (including an entirely empty tensor) means [`Precision::Float32`].
    pub fn precision(&self) -> Precision {
        if self.float16_value.is_empty() {
            Precision::Float32
        } else {
            Precision::Float16
        }
    }

    /// Number of elements stored in the populated representation.
    pub fn len(&self) -> usize {
        match self.precision() {
            Precision::Float32 => self.float_value.len(),
            Precision::Float16 => self.float16_value.len() / 2,
        }
    }

    /// Returns `true` if neither representation holds any values.
    pub fn is_empty(&self) -> bool {
        self.float_value.is_empty() && self.float16_value.is_empty()
    }
}

/// The weight bundle parameterizing one direction of an LSTM cell.
///
/// Four gates (input, forget, block-input, output), each with a weight
/// matrix, a recursion matrix, and a bias vector, plus three optional
/// peephole vectors. Bi-directional layers carry two of these bundles,
/// uni-directional layers carry one; both are scored by the same rule in
/// the introspection crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LstmWeightParams {
    pub input_gate_weight_matrix: WeightParams,
    pub forget_gate_weight_matrix: WeightParams,
    pub block_input_weight_matrix: WeightParams,
    pub output_gate_weight_matrix: WeightParams,

    pub input_gate_recursion_matrix: WeightParams,
    pub forget_gate_recursion_matrix: WeightParams,
    pub block_input_recursion_matrix: WeightParams,
    pub output_gate_recursion_matrix: WeightParams,

    pub input_gate_bias_vector: WeightParams,
    pub forget_gate_bias_vector: WeightParams,
    pub block_input_bias_vector: WeightParams,
    pub output_gate_bias_vector: WeightParams,

    /// Peephole connections, present only when the cell uses them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_gate_peephole_vector: Option<WeightParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forget_gate_peephole_vector: Option<WeightParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_gate_peephole_vector: Option<WeightParams>,
}

impl LstmWeightParams {
    /// Iterates over every populated tensor in the bundle, gate tensors
    /// first, then whichever peephole vectors are present.
    pub fn tensors(&self) -> impl Iterator<Item = &WeightParams> {
        [
            &self.input_gate_weight_matrix,
            &self.forget_gate_weight_matrix,
            &self.block_input_weight_matrix,
            &self.output_gate_weight_matrix,
            &self.input_gate_recursion_matrix,
            &self.forget_gate_recursion_matrix,
            &self.block_input_recursion_matrix,
            &self.output_gate_recursion_matrix,
            &self.input_gate_bias_vector,
            &self.forget_gate_bias_vector,
            &self.block_input_bias_vector,
            &self.output_gate_bias_vector,
        ]
        .into_iter()
        .chain(self.input_gate_peephole_vector.as_ref())
        .chain(self.forget_gate_peephole_vector.as_ref())
        .chain(self.output_gate_peephole_vector.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_f32() {
        let w = WeightParams::from_f32(vec![1.0, 2.0, 3.0]);
        assert_eq!(w.precision(), Precision::Float32);
        assert_eq!(w.len(), 3);
    }

    #[test]
    fn test_precision_f16() {
        let w = WeightParams::from_f16_bytes(vec![0x00, 0x3c, 0x00, 0x40]);
        assert_eq!(w.precision(), Precision::Float16);
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn test_empty_tensor_defaults_to_f32() {
        let w = WeightParams::default();
        assert!(w.is_empty());
        assert_eq!(w.precision(), Precision::Float32);
    }

    #[test]
    fn test_precision_display() {
        assert_eq!(Precision::Float32.to_string(), "f32");
        assert_eq!(Precision::Float16.to_string(), "f16");
    }

    #[test]
    fn test_bundle_tensor_count() {
        let bundle = LstmWeightParams::default();
        assert_eq!(bundle.tensors().count(), 12);

        let with_peepholes = LstmWeightParams {
            input_gate_peephole_vector: Some(WeightParams::from_f32(vec![0.1])),
            forget_gate_peephole_vector: Some(WeightParams::from_f32(vec![0.2])),
            output_gate_peephole_vector: Some(WeightParams::from_f32(vec![0.3])),
            ..Default::default()
        };
        assert_eq!(with_peepholes.tensors().count(), 15);
    }

    #[test]
    fn test_serde_roundtrip() {
        let w = WeightParams::from_f16_bytes(vec![1, 2, 3, 4]);
        let json = serde_json::to_string(&w).unwrap();
        let back: WeightParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
        assert_eq!(back.precision(), Precision::Float16);
    }

    #[test]
    fn test_bundle_deserialize_sparse() {
        // A bundle where only one field is given: everything else defaults
        // to an empty (f32) tensor, peepholes stay absent.
        let json = r#"{ "forget_gate_bias_vector": { "float16_value": [0, 60] } }"#;
        let bundle: LstmWeightParams = serde_json::from_str(json).unwrap();
        assert_eq!(bundle.forget_gate_bias_vector.precision(), Precision::Float16);
        assert!(bundle.input_gate_peephole_vector.is_none());
        assert_eq!(bundle.tensors().count(), 12);
    }
}
