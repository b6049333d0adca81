/**
 * ts-exports - placeholder value exports for type-only TypeScript exports
 *
 * Transforms TypeScript modules to JavaScript, keeping `export { Foo }`
 * linkable when `Foo` is only a type.
 */
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use indexmap::IndexMap;
use std::path::Path;
use std::process;
use std::sync::Arc;

use ts_exports_cli::classifier::ExportClassification;
use ts_exports_cli::compile::{emit_results, load_all};
use ts_exports_cli::config::{PluginConfig, CONFIG_FILE_NAME};
use ts_exports_cli::file_system::{AbsoluteFsPath, NodeJSFileSystem};
use ts_exports_cli::logging::{ConsoleLogger, LogLevel};
use ts_exports_cli::TsExportsPlugin;

fn main() {
    let matches = Command::new("ts-exports")
        .version(ts_exports_cli::version())
        .about("Adds placeholder value exports for type-only exports and transforms TypeScript")
        .arg(
            Arg::new("inputs")
                .value_name("FILE|GLOB")
                .help("Modules to load, as paths or glob patterns")
                .required(true)
                .num_args(1..),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to ts-exports.json"),
        )
        .arg(
            Arg::new("out-dir")
                .short('o')
                .long("out-dir")
                .value_name("DIR")
                .help("Write transformed modules below DIR instead of stdout"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .help("Only print the type-only exports of every module, as JSON"),
        )
        .arg(
            Arg::new("source-map")
                .long("source-map")
                .action(ArgAction::SetTrue)
                .help("Emit source maps (overrides the configuration)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log debug output"),
        )
        .get_matches();

    match run(&matches) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Returns `false` when at least one module failed.
fn run(matches: &ArgMatches) -> Result<bool> {
    let level = if matches.get_flag("verbose") {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let logger = Arc::new(ConsoleLogger::new(level));

    let mut config = load_config(matches.get_one::<String>("config").map(Path::new))?;
    if matches.get_flag("source-map") {
        config.source_map = true;
    }

    let plugin = TsExportsPlugin::new(config, NodeJSFileSystem::new())?.with_logger(logger);

    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let patterns: Vec<&String> = matches
        .get_many::<String>("inputs")
        .map(|values| values.collect())
        .unwrap_or_default();
    let files = expand_inputs(&cwd, &patterns)?
        .into_iter()
        .filter(|file| plugin.handles(file))
        .collect::<Vec<_>>();
    if files.is_empty() {
        plugin.logger().warn("No input modules matched");
        return Ok(true);
    }

    if matches.get_flag("list") {
        return list_exports(&plugin, &files);
    }

    let results = load_all(&plugin, &files);
    let mut ok = true;
    for (file, result) in &results {
        if let Err(e) = result {
            ok = false;
            plugin.logger().error(&format!("{}: {}", file, e));
        }
    }

    match matches.get_one::<String>("out-dir") {
        Some(out_dir) => {
            let written = emit_results(plugin.file_system(), &cwd, &cwd.join(out_dir), &results)?;
            for path in written {
                plugin.logger().info(&format!("Emitted: {}", path));
            }
        }
        None => {
            for (file, result) in &results {
                if let Ok(loaded) = result {
                    if results.len() > 1 {
                        println!("// File: {}", file);
                    }
                    println!("{}", loaded.code);
                }
            }
        }
    }

    plugin.cleanup();
    Ok(ok)
}

fn load_config(explicit: Option<&Path>) -> Result<PluginConfig> {
    if let Some(path) = explicit {
        return PluginConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }
    let default_path = Path::new(CONFIG_FILE_NAME);
    if default_path.exists() {
        PluginConfig::load(default_path)
            .with_context(|| format!("failed to load config {}", default_path.display()))
    } else {
        Ok(PluginConfig::default())
    }
}

fn expand_inputs(cwd: &Path, patterns: &[&String]) -> Result<Vec<AbsoluteFsPath>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let absolute = cwd.join(pattern);
        if pattern.contains(['*', '?', '[']) {
            let pattern_str = absolute.to_string_lossy();
            let matched = glob::glob(&pattern_str)
                .with_context(|| format!("invalid glob pattern {}", pattern))?;
            files.extend(
                matched
                    .filter_map(std::result::Result::ok)
                    .filter(|p| p.is_file())
                    .map(AbsoluteFsPath::from),
            );
        } else {
            files.push(AbsoluteFsPath::from(absolute));
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn list_exports(
    plugin: &TsExportsPlugin<NodeJSFileSystem>,
    files: &[AbsoluteFsPath],
) -> Result<bool> {
    let mut ok = true;
    let mut listing: IndexMap<String, ExportClassification> = IndexMap::new();
    for file in files {
        match plugin.analyze(file) {
            Ok(classification) => {
                listing.insert(file.to_string(), classification);
            }
            Err(e) => {
                ok = false;
                plugin.logger().error(&e.to_string());
            }
        }
    }
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(ok)
}
