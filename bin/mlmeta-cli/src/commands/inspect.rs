// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `mlmeta inspect` command: display model structure and metadata.
//!
//! Prints the top-level kind, a per-layer table with each layer's weight
//! precision, the custom-op dependency list, and the overall precision.

use model_introspect::{
    custom_layer_descriptors, layer_weight_precision, model_weight_precision, network_layers,
};
use std::path::PathBuf;

pub fn execute(model_path: PathBuf) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              mlmeta · Model Inspector                ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let model = super::load_model(&model_path)?;

    // ── Summary ────────────────────────────────────────────────
    println!("  Document: {}", model_path.display());
    println!("  Kind: {}", model.model);
    println!("  Spec version: {}", model.spec_version);
    if let Some(desc) = &model.description {
        if !desc.short_description.is_empty() {
            println!("  Description: {}", desc.short_description);
        }
    }

    let Some(layers) = network_layers(&model) else {
        println!();
        println!("  This model kind carries no neural-network layers.");
        return Ok(());
    };
    println!("  Layers: {}", layers.len());
    println!();

    // ── Per-Layer Detail ───────────────────────────────────────
    println!(
        "  {:<4} {:<30} {:<22} {:>6}",
        "Idx", "Name", "Type", "Prec",
    );
    println!("  {}", "-".repeat(66));

    for (i, layer) in layers.iter().enumerate() {
        println!(
            "  {:<4} {:<30} {:<22} {:>6}",
            i,
            truncate(&layer.name, 30),
            layer.kind.as_str(),
            layer_weight_precision(layer).as_str(),
        );
    }
    println!();

    // ── Custom Ops ─────────────────────────────────────────────
    let custom_ops = custom_layer_descriptors(&model);
    if custom_ops.is_empty() {
        println!("  Custom ops: none");
    } else {
        println!("  Custom ops ({}):", custom_ops.len());
        for op in &custom_ops {
            println!("   {} — {}", op.class_name, op.description);
        }
    }

    // ── Overall Precision ──────────────────────────────────────
    println!(
        "  Weight precision: {}",
        model_weight_precision(&model).as_str(),
    );
    println!();

    Ok(())
}

/// Truncates a string to `max_len` with ellipsis if needed.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
