// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # model-spec
//!
//! In-memory representation of a serialized machine-learning model
//! description: a tagged-union document describing a neural network's layer
//! graph (or a non-network model such as a tree ensemble).
//!
//! This crate owns the data model and its JSON materialization:
//!
//! - [`Model`] / [`ModelType`] — the document root and its top-level kinds.
//! - [`Layer`] / [`LayerKind`] — the closed union of layer variants.
//! - [`WeightParams`] / [`Precision`] — weight tensors and their storage
//!   encoding (f32 or f16).
//! - [`LstmWeightParams`] — the per-direction recurrent-cell weight bundle.
//!
//! Structural queries over a document (custom-layer detection, weight
//! precision classification) live in the `model-introspect` crate; this
//! crate never interprets the data it holds.
//!
//! # Example
//! ```
//! use model_spec::{Model, ModelType};
//!
//! let doc = r#"{ "model": { "neural_network": { "layers": [] } } }"#;
//! let model = Model::from_json(doc).unwrap();
//! assert!(matches!(model.model, ModelType::NeuralNetwork(_)));
//! ```

mod error;
mod layer;
mod model;
mod weights;

pub use error::SpecError;
pub use layer::{
    ActivationKind, BatchNormParams, BiDirectionalLstmParams, ConvolutionParams, CustomParams,
    EmbeddingParams, GruParams, InnerProductParams, Layer, LayerKind, LoadConstantParams,
    ScaleParams, SimpleRecurrentParams, UniDirectionalLstmParams,
};
pub use model::{Model, ModelDescription, ModelType, NeuralNetwork};
pub use weights::{LstmWeightParams, Precision, WeightParams};
