// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # mlmeta
//!
//! Command-line front end for the model-introspection engine.
//!
//! ## Usage
//! ```bash
//! # Full report: kind, layers, custom ops, weight precision
//! mlmeta inspect --model ./model.json
//!
//! # Just the custom-op dependencies
//! mlmeta custom-ops --model ./model.json --json
//!
//! # Just the stored weight precision (prints "f32" or "f16")
//! mlmeta precision --model ./model.json
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mlmeta",
    about = "Model metadata inspector: custom layers and weight precision",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect a model: print kind, layer table, custom ops, and precision.
    Inspect {
        /// Path to the model document (JSON).
        #[arg(short, long)]
        model: std::path::PathBuf,
    },

    /// List the custom-layer dependencies of a model.
    CustomOps {
        /// Path to the model document (JSON).
        #[arg(short, long)]
        model: std::path::PathBuf,

        /// Emit the descriptor list as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Report the stored weight precision of a model (f32 or f16).
    Precision {
        /// Path to the model document (JSON).
        #[arg(short, long)]
        model: std::path::PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Inspect { model } => commands::inspect::execute(model),
        Commands::CustomOps { model, json } => commands::custom_ops::execute(model, json),
        Commands::Precision { model } => commands::precision::execute(model),
    }
}
