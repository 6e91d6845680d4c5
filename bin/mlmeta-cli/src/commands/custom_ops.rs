// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `mlmeta custom-ops` command: list custom-layer dependencies.
//!
//! A conversion or deployment tool can feed the JSON output straight into
//! its dependency resolution.

use model_introspect::custom_layer_descriptors;
use std::path::PathBuf;

pub fn execute(model_path: PathBuf, json: bool) -> anyhow::Result<()> {
    let model = super::load_model(&model_path)?;
    let descriptors = custom_layer_descriptors(&model);

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
        return Ok(());
    }

    if descriptors.is_empty() {
        println!("No custom layers.");
        return Ok(());
    }

    println!("{} custom layer(s):", descriptors.len());
    for op in &descriptors {
        println!("  {} — {}", op.class_name, op.description);
    }
    Ok(())
}
