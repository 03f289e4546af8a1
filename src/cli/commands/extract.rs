use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::super::args::{DEFAULT_OUTPUT, ExtractCommand};
use super::{CommandResult, CommandSummary, ExtractSummary, TargetSummary, helper::finish};
use crate::{
    config::{CONFIG_FILE_NAME, load_config},
    core::{
        catalog::{creation_date_now, write_catalog},
        build_catalog,
        file_scanner::scan_sources,
        pipeline::{FileJob, plan_files},
    },
};

struct PlannedTarget {
    output: String,
    jobs: Vec<FileJob>,
}

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let root = cmd.common.root_dir();
    let verbose = cmd.common.verbose;

    let loaded = load_config(&root)?;
    if verbose {
        match &loaded.path {
            Some(path) => eprintln!("{} {}", "Using config".dimmed(), path.display()),
            None => eprintln!(
                "{}",
                format!("No {} found, using defaults", CONFIG_FILE_NAME).dimmed()
            ),
        }
    }
    let config = &loaded.config;
    let extensions = config.extension_map();

    let (base_dir, targets): (_, Vec<(String, Vec<String>)>) = if cmd.sources.is_empty() {
        if config.targets.is_empty() {
            bail!(
                "No sources given and no targets configured in {}",
                CONFIG_FILE_NAME
            );
        }
        let targets = config
            .targets
            .iter()
            .map(|(output, sources)| (output.clone(), sources.clone()))
            .collect();
        (loaded.base_dir(&root), targets)
    } else {
        let output = cmd
            .output
            .clone()
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
        (root.clone(), vec![(output, cmd.sources.clone())])
    };

    // Every target is resolved and checked before any file is read or written.
    let mut planned = Vec::with_capacity(targets.len());
    for (output, sources) in targets {
        let scan = scan_sources(&base_dir, &sources, &config.ignores, &extensions, verbose)?;
        let jobs = plan_files(&scan.files, &extensions)?;
        if verbose {
            eprintln!(
                "{} {} file(s) for {}",
                "Scanning".dimmed(),
                jobs.len(),
                output
            );
        }
        planned.push(PlannedTarget { output, jobs });
    }

    let creation_date = creation_date_now();
    let mut issues = Vec::new();
    let mut summaries = Vec::with_capacity(planned.len());

    for target in planned {
        let data = build_catalog(&base_dir, &target.jobs);
        let catalog = write_catalog(&data.records, &creation_date);

        if cmd.stdout {
            io::stdout()
                .lock()
                .write_all(catalog.as_bytes())
                .context("Failed to write catalog to stdout")?;
        } else {
            write_output(&base_dir.join(&target.output), &catalog)?;
        }

        summaries.push(TargetSummary {
            output: target.output,
            message_count: data.records.len(),
            file_count: data.file_count,
            written: !cmd.stdout,
        });
        issues.extend(data.issues);
    }

    Ok(finish(
        CommandSummary::Extract(ExtractSummary { targets: summaries }),
        issues,
    ))
}

fn write_output(path: &Path, catalog: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, catalog).with_context(|| format!("Failed to write {}", path.display()))
}
