//! `ambucheck` - CLI for the ambulance equipment checklist
//!
//! This binary fills the checklist from an answer sheet and exports it as a
//! PDF, and offers helpers for sheet templates and configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use ambucheck::checklist::{AnswerSheet, Checklist, CATALOG};
use ambucheck::cli::{
    Cli, Command, ConfigCommand, GenerateCommand, ItemsCommand, OutputFormat, TemplateCommand,
};
use ambucheck::signature::Signatures;
use ambucheck::{dates, export, init_logging, Config, Result};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // `config validate` reports load failures itself
    if let Command::Config(ConfigCommand::Validate { file }) = &cli.command {
        handle_validate(file.clone().or_else(|| cli.config.clone()));
        return Ok(());
    }

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Generate(cmd) => handle_generate(&config, &cmd),
        Command::Template(cmd) => handle_template(&config, &cmd),
        Command::Items(cmd) => handle_items(&cmd),
        Command::Units => {
            handle_units(&config);
            Ok(())
        }
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_generate(config: &Config, cmd: &GenerateCommand) -> Result<()> {
    let date = cmd.date.as_deref().map(dates::parse_iso).transpose()?;

    let checklist = match &cmd.sheet {
        Some(path) => AnswerSheet::load(path)?.to_checklist(config, cmd.unit.as_deref(), date)?,
        None => Checklist::new(
            config.resolve_unit(cmd.unit.as_deref())?,
            date.unwrap_or_else(dates::today),
        ),
    };

    let signatures = Signatures::load(cmd.responsible.as_deref(), cmd.coordinator.as_deref())?;

    if cmd.stdout {
        let bytes = export::generate(&checklist, &signatures, config)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&bytes)?;
        stdout.flush()?;
        return Ok(());
    }

    let path = export::export(&checklist, &signatures, config, cmd.output_dir.as_deref())?;
    let summary = checklist.summary();
    println!("{}", path.display());
    println!(
        "  Unit {} on {}: {} yes, {} no, {} unanswered",
        checklist.unit,
        dates::format_long(checklist.date),
        summary.yes,
        summary.no,
        summary.unanswered
    );
    Ok(())
}

fn handle_template(config: &Config, cmd: &TemplateCommand) -> Result<()> {
    let unit = config.resolve_unit(cmd.unit.as_deref())?;
    let sheet = AnswerSheet::template(&unit);
    print!("{}", sheet.to_text(cmd.format.into())?);
    Ok(())
}

fn handle_items(cmd: &ItemsCommand) -> Result<()> {
    match cmd.format {
        OutputFormat::Json => {
            let items: Vec<serde_json::Value> = CATALOG
                .iter()
                .map(|(code, label)| serde_json::json!({ "code": code, "label": label }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        OutputFormat::Plain => {
            for (code, label) in CATALOG {
                println!("{code:<10} {label}");
            }
        }
    }
    Ok(())
}

fn handle_units(config: &Config) {
    for unit in config.units() {
        if unit == config.document.default_unit {
            println!("{unit} (default)");
        } else {
            println!("{unit}");
        }
    }
}

fn handle_validate(file: Option<std::path::PathBuf>) {
    let path = file.unwrap_or_else(Config::default_config_path);
    println!("Validating configuration: {}", path.display());
    match Config::load_from(Some(path)) {
        Ok(_) => println!("Configuration is valid."),
        Err(e) => println!("Configuration error: {e}"),
    }
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Document]");
                println!("  Title:              {}", config.document.title);
                println!("  Units:              01-{:02}", config.document.unit_count);
                println!("  Default unit:       {}", config.document.default_unit);
                println!("  Compress:           {}", config.document.compress);
                println!();
                println!("[Signatures]");
                println!("  Scale:              {}", config.signatures.scale);
                println!("  Responsible label:  {}", config.signatures.responsible_label);
                println!("  Coordinator label:  {}", config.signatures.coordinator_label);
                println!();
                println!("[Output]");
                println!("  Directory:          {}", config.output_dir().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => handle_validate(file),
    }
    Ok(())
}
