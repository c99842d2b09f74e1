use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ini_strata::io::{
	DEFAULT_FILE_NAME, discover_files, merge_layers, read_file_with, read_toml_file_with, to_toml,
	write_file,
};
use ini_strata::query::{compile_pattern, find_entries};
use ini_strata::{Configuration, KeyComparer};

#[derive(Parser)]
#[command(name = "strata")]
#[command(
	author,
	version,
	about = "Parse, merge and query INI configuration files"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Compare section names and keys case-sensitively
	#[arg(long, global = true)]
	case_sensitive: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Print a file in normalized form
	Fmt {
		file: PathBuf,

		/// Rewrite the file in place instead of printing it
		#[arg(long)]
		write: bool,
	},
	/// Print a value, or a whole section when KEY is omitted
	Get {
		file: PathBuf,
		section: String,
		key: Option<String>,

		/// Fall back to (or merge in) dotted parent sections
		#[arg(long)]
		nested: bool,
	},
	/// Set a value, or remove it when VALUE is omitted, and save the file
	Set {
		file: PathBuf,
		section: String,
		key: String,
		value: Option<String>,
	},
	/// Merge files left to right (later files win) and print the result
	Merge {
		#[arg(required = true)]
		files: Vec<PathBuf>,
	},
	/// Print entries whose key matches a regular expression
	Find { file: PathBuf, pattern: String },
	/// Display the layered files found from the current directory upward
	Layers {
		/// File name to look for in each directory
		#[arg(long, default_value = DEFAULT_FILE_NAME)]
		name: String,
	},
	/// Convert an INI file to TOML
	Export { file: PathBuf },
	/// Convert a TOML file of string tables to INI
	Import { file: PathBuf },
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	let comparer = if cli.case_sensitive {
		KeyComparer::ordinal()
	} else {
		KeyComparer::default()
	};

	match cli.command {
		Commands::Fmt { file, write } => handle_fmt(&file, write, comparer),
		Commands::Get {
			file,
			section,
			key,
			nested,
		} => handle_get(&file, &section, key.as_deref(), nested, comparer),
		Commands::Set {
			file,
			section,
			key,
			value,
		} => handle_set(&file, &section, key, value, comparer),
		Commands::Merge { files } => handle_merge(&files, comparer),
		Commands::Find { file, pattern } => handle_find(&file, &pattern, comparer),
		Commands::Layers { name } => handle_layers(&name, comparer),
		Commands::Export { file } => handle_export(&file, comparer),
		Commands::Import { file } => handle_import(&file, comparer),
	}
}

fn load(path: &Path, comparer: KeyComparer) -> Result<Configuration> {
	read_file_with(path, comparer).with_context(|| format!("Failed to load {}", path.display()))
}

fn handle_fmt(file: &Path, write: bool, comparer: KeyComparer) -> Result<ExitCode> {
	let configuration = load(file, comparer)?;

	if write {
		write_file(&configuration, file)
			.with_context(|| format!("Failed to write {}", file.display()))?;
	} else {
		print!("{configuration}");
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_get(
	file: &Path,
	section: &str,
	key: Option<&str>,
	nested: bool,
	comparer: KeyComparer,
) -> Result<ExitCode> {
	let configuration = load(file, comparer)?;

	let found = match (key, nested) {
		(Some(key), false) => configuration.value(section, key).map(|value| format!("{value}\n")),
		(Some(key), true) => configuration
			.get_nested_value(section, key)
			.map(|value| format!("{value}\n")),
		(None, false) => configuration.get(section).map(|entries| entries.to_text()),
		(None, true) => Some(configuration.get_nested_section(section))
			.filter(|entries| !entries.is_empty())
			.map(|entries| entries.to_text()),
	};

	match found {
		Some(text) => {
			print!("{text}");
			Ok(ExitCode::SUCCESS)
		}
		None => {
			match key {
				Some(key) => eprintln!("Not found: [{section}] {key}"),
				None => eprintln!("Not found: [{section}]"),
			}
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_set(
	file: &Path,
	section: &str,
	key: String,
	value: Option<String>,
	comparer: KeyComparer,
) -> Result<ExitCode> {
	let mut configuration = if file.exists() {
		load(file, comparer)?
	} else {
		Configuration::with_comparer(comparer)
	};

	configuration
		.try_set_value(section, key, value)
		.with_context(|| format!("Refusing to write {}", file.display()))?;

	write_file(&configuration, file)
		.with_context(|| format!("Failed to write {}", file.display()))?;

	Ok(ExitCode::SUCCESS)
}

fn handle_merge(files: &[PathBuf], comparer: KeyComparer) -> Result<ExitCode> {
	let mut merged = Configuration::with_comparer(comparer.clone());

	for file in files {
		let layer = load(file, comparer.clone())?;
		merged = merged.merge(&layer);
	}

	print!("{merged}");
	Ok(ExitCode::SUCCESS)
}

fn handle_find(file: &Path, pattern: &str, comparer: KeyComparer) -> Result<ExitCode> {
	let configuration = load(file, comparer)?;
	let regex = compile_pattern(pattern).context("Invalid search pattern")?;

	for found in find_entries(&configuration, &regex) {
		println!("[{}] {} = {}", found.section, found.key, found.value);
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_layers(name: &str, comparer: KeyComparer) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let layers = discover_files(&cwd, name, &comparer).context("Failed to discover layered files")?;

	if layers.is_empty() {
		println!("No {name} files found.");
		return Ok(ExitCode::SUCCESS);
	}

	println!("Layered files (most specific first):\n");

	for layer in &layers {
		println!("# Source: {}", layer.path.display());
		println!("# sections: {}", layer.configuration.len());
		if layer.is_root() {
			println!("# root: true");
		}
		println!();
	}

	println!("Merged configuration:\n");
	print!("{}", merge_layers(&layers));

	Ok(ExitCode::SUCCESS)
}

fn handle_export(file: &Path, comparer: KeyComparer) -> Result<ExitCode> {
	let configuration = load(file, comparer)?;
	let rendered = to_toml(&configuration).context("Failed to render TOML")?;

	print!("{rendered}");
	Ok(ExitCode::SUCCESS)
}

fn handle_import(file: &Path, comparer: KeyComparer) -> Result<ExitCode> {
	let configuration = read_toml_file_with(file, comparer)
		.with_context(|| format!("Failed to import {}", file.display()))?;

	print!("{configuration}");
	Ok(ExitCode::SUCCESS)
}
