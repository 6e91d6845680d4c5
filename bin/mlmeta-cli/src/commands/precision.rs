// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `mlmeta precision` command: report the stored weight precision.
//!
//! Prints a single token (`f32` or `f16`) so the output is trivially
//! scriptable, e.g. for a converter choosing its target runtime.

use model_introspect::model_weight_precision;
use std::path::PathBuf;

pub fn execute(model_path: PathBuf) -> anyhow::Result<()> {
    let model = super::load_model(&model_path)?;
    println!("{}", model_weight_precision(&model));
    Ok(())
}
