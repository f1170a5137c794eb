use crate::cli::{Args, ExportFormat};
use crate::config::AppConfig;
use crate::output::{ExportTarget, OutputFileSupplier};
use crate::runner::EXIT_CODE_OK;
use crate::util::read_input_list;
use anyhow::{Result, anyhow, bail};
use comfy_table::{Table, presets::UTF8_FULL};
use serde::Serialize;
use std::{collections::HashSet, fs, path::PathBuf};

const PLAN_FILE_SUFFIX: &str = "export-plan.json";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanEntry {
    pub source: String,
    pub format: ExportFormat,
    pub output: PathBuf,
}

pub fn run_cli(args: &Args) -> Result<i32> {
    let config = AppConfig::load(args.config.as_deref())?;

    let (inputs, from_list) = resolve_inputs(args)?;
    if inputs.is_empty() {
        bail!("--input or --input-list is required");
    }
    tracing::debug!("Resolved {} input(s): {:?}", inputs.len(), inputs);

    let export = args
        .export
        .clone()
        .or_else(|| config.export.clone())
        .ok_or_else(|| anyhow!("--export is required"))?;
    let base_file_name = args
        .base_file_name
        .clone()
        .or_else(|| config.base_file_name.clone());
    let formats = if !args.formats.is_empty() {
        args.formats.clone()
    } else if !config.formats.is_empty() {
        config.formats.clone()
    } else {
        ExportFormat::ALL.to_vec()
    };
    let add_source_ext = args.add_source_ext || config.add_source_ext;

    let supplier = OutputFileSupplier::new(
        ExportTarget::new(export, base_file_name),
        inputs.len() > 1 || from_list,
        add_source_ext,
    );
    let plan = build_plan(&supplier, &config, &inputs, &formats);

    println!("\n▶️ Export Plan:");
    println!("{}", plan_table(&plan));

    if let Some(write_plan) = &args.write_plan {
        let out_path = match write_plan {
            Some(path) => path.clone(),
            None => {
                fs::create_dir_all(&supplier.target().directory)?;
                supplier.target().make_output_file(PLAN_FILE_SUFFIX)
            }
        };
        let json = serde_json::to_string_pretty(&plan)?;
        fs::write(&out_path, json)?;
        println!("✅ Wrote export plan to {}", out_path.display());
    }

    tracing::info!("Planned {} export file(s)", plan.len());
    Ok(EXIT_CODE_OK)
}

/// CLI inputs first, then input list entries, without duplicates.
fn resolve_inputs(args: &Args) -> Result<(Vec<String>, bool)> {
    let mut inputs: Vec<String> = Vec::new();
    for input in &args.input {
        if !inputs.contains(input) {
            inputs.push(input.clone());
        }
    }
    for list in &args.input_list {
        let entries = read_input_list(list)?;
        tracing::debug!("Read {} input(s) from {}", entries.len(), list.display());
        for entry in entries {
            if !inputs.contains(&entry) {
                inputs.push(entry);
            }
        }
    }
    Ok((inputs, !args.input_list.is_empty()))
}

pub fn build_plan(
    supplier: &OutputFileSupplier,
    config: &AppConfig,
    inputs: &[String],
    formats: &[ExportFormat],
) -> Vec<PlanEntry> {
    let plan: Vec<PlanEntry> = inputs
        .iter()
        .flat_map(|source| {
            formats.iter().map(move |&format| PlanEntry {
                source: source.clone(),
                format,
                output: supplier.make_output_file(source, config.suffix_for(format)),
            })
        })
        .collect();
    for output in duplicate_outputs(&plan) {
        tracing::warn!(
            "Several exports share the output file {}, only the last one will be kept",
            output.display()
        );
    }
    plan
}

/// Output files planned more than once, in plan order.
fn duplicate_outputs(plan: &[PlanEntry]) -> Vec<&PathBuf> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for entry in plan {
        if !seen.insert(&entry.output) && !duplicates.contains(&&entry.output) {
            duplicates.push(&entry.output);
        }
    }
    duplicates
}

fn plan_table(plan: &[PlanEntry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Source", "Format", "Output File"]);
    for entry in plan {
        table.add_row(vec![
            entry.source.clone(),
            entry.format.name().to_string(),
            entry.output.display().to_string(),
        ]);
    }
    table
}
