// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CLI subcommand implementations.

pub mod custom_ops;
pub mod inspect;
pub mod precision;

use std::path::Path;

/// Initializes tracing based on the `-v` count. `RUST_LOG` wins if set.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Loads a model document, mapping load errors into a path-carrying anyhow error.
pub fn load_model(path: &Path) -> anyhow::Result<model_spec::Model> {
    model_spec::Model::from_file(path)
        .map_err(|e| anyhow::anyhow!("failed to load model from '{}': {e}", path.display()))
}
