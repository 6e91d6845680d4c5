// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # model-introspect
//!
//! Structural queries over an in-memory model document, without executing
//! or modifying the model:
//!
//! - [`network_layers`] — the layer sequence behind any of the three
//!   network-bearing model kinds, as a borrowed view.
//! - [`has_custom_layer`] / [`custom_layer_descriptors`] — does the model
//!   depend on externally-defined layer implementations, and which ones.
//! - [`model_weight_precision`] / [`layer_weight_precision`] — were the
//!   learned weights stored in full (f32) or reduced (f16) precision.
//!
//! Every query is a pure, single-pass function over a caller-owned
//! [`model_spec::Model`]; nothing here allocates beyond the returned
//! descriptor list, fails, or holds state, so the same document can be
//! queried from any number of threads concurrently.
//!
//! # Example
//! ```
//! use model_spec::Model;
//! use model_introspect::{has_custom_layer, model_weight_precision};
//!
//! let doc = r#"{ "model": { "neural_network_classifier": { "layers": [] } } }"#;
//! let model = Model::from_json(doc).unwrap();
//! assert!(!has_custom_layer(&model));
//! assert_eq!(model_weight_precision(&model).as_str(), "f32");
//! ```

mod custom;
mod locate;
mod precision;

pub use custom::{custom_layer_descriptors, has_custom_layer, CustomLayerDescriptor};
pub use locate::network_layers;
pub use precision::{layer_weight_precision, lstm_weight_precision, model_weight_precision};
