// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::time::Instant;

use anyhow::Context;
use flowslice::dsl::load_document;
use flowslice::slices::{generate_slices, order_slices, statistics};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <workflow1.dsl> [workflow2.dsl ...]", args[0]);
        eprintln!("Example: {} demos/customer-complaint.dsl", args[0]);
        std::process::exit(1);
    }

    println!("🧩 flowslice Workflow Compiler Demo");
    println!("═══════════════════════════════════");
    println!();

    let mut failures = 0;
    for (i, path) in args[1..].iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(80));
        }
        if let Err(e) = compile_one(path) {
            eprintln!("❌ Failed to compile {}: {:#}", path, e);
            failures += 1;
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
    println!("\n🎉 Done!");
}

fn compile_one(path: &str) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let document =
        load_document(path).with_context(|| format!("loading workflow document {}", path))?;
    let ordered = order_slices(generate_slices(&document))
        .context("ordering the generated slices")?;
    let elapsed = start_time.elapsed();

    let summary = document.summary();
    println!("📋 Document: {}", path);
    if let Some(source) = document.metadata.get("source") {
        println!("🗂️  Source: {}", source);
    }
    println!("🔧 Tasks: {}", summary.task_count);
    println!("📦 Variables: {}", summary.variables.join(", "));
    println!("🛠️  Tools required: {}", summary.tools_required.join(", "));

    println!("\n📊 Ordered Slices:");
    for slice in &ordered {
        let deps = if slice.dependencies.is_empty() {
            "-".to_string()
        } else {
            slice.dependencies.join(", ")
        };
        println!(
            "  {:>3}. {:<24} {:?}  deps: {}",
            slice.order_index, slice.id, slice.kind, deps
        );
    }

    let stats = statistics(&ordered);
    println!("\n🔢 {} slices total", stats.total_slices);
    for (kind, count) in &stats.kind_counts {
        println!("   • {:?}: {}", kind, count);
    }
    println!(
        "   • dependencies: max {}, avg {:.2}",
        stats.max_dependencies, stats.avg_dependencies
    );
    println!("\n⏱️  Compile time: {:?}", elapsed);

    Ok(())
}
