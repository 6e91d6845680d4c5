// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for document classification over synthetic networks.

use criterion::{criterion_group, criterion_main, Criterion};
use model_introspect::{custom_layer_descriptors, has_custom_layer, model_weight_precision};
use model_spec::{
    ConvolutionParams, InnerProductParams, Layer, LayerKind, Model, ModelType, NeuralNetwork,
    WeightParams,
};

/// Builds a network of `n` blocks (convolution + pooling + inner product),
/// all f32, so every scan runs to completion.
fn synthetic_network(n: usize) -> Model {
    let mut layers = Vec::with_capacity(n * 3);
    for i in 0..n {
        layers.push(Layer {
            name: format!("conv_{i}"),
            inputs: vec![],
            outputs: vec![],
            kind: LayerKind::Convolution(ConvolutionParams {
                weights: WeightParams::from_f32(vec![0.5; 64]),
                bias: WeightParams::from_f32(vec![0.1; 8]),
                ..Default::default()
            }),
        });
        layers.push(Layer {
            name: format!("pool_{i}"),
            inputs: vec![],
            outputs: vec![],
            kind: LayerKind::Pooling,
        });
        layers.push(Layer {
            name: format!("fc_{i}"),
            inputs: vec![],
            outputs: vec![],
            kind: LayerKind::InnerProduct(InnerProductParams {
                weights: WeightParams::from_f32(vec![0.5; 64]),
                bias: WeightParams::from_f32(vec![0.1; 8]),
                ..Default::default()
            }),
        });
    }
    Model {
        spec_version: 1,
        description: None,
        model: ModelType::NeuralNetwork(NeuralNetwork { layers }),
    }
}

fn bench_precision_scan(c: &mut Criterion) {
    let model = synthetic_network(256);
    c.bench_function("model_weight_precision/768_layers", |b| {
        b.iter(|| model_weight_precision(std::hint::black_box(&model)))
    });
}

fn bench_custom_scan(c: &mut Criterion) {
    let model = synthetic_network(256);
    c.bench_function("has_custom_layer/768_layers", |b| {
        b.iter(|| has_custom_layer(std::hint::black_box(&model)))
    });
    c.bench_function("custom_layer_descriptors/768_layers", |b| {
        b.iter(|| custom_layer_descriptors(std::hint::black_box(&model)))
    });
}

criterion_group!(benches, bench_precision_scan, bench_custom_scan);
criterion_main!(benches);
