// src/cli.rs
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::core::aggregator::ResultAggregator;
use crate::core::error::SummaryError;
use crate::infra::fs::find_result_files;
use crate::t;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn build_cli(locale: &str) -> Command {
    Command::new("unity-summary")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("result-dir")
                .help(t!("arg_result_dir", locale = locale).to_string())
                .value_name("RESULT_DIR")
                .default_value("./")
                .value_parser(clap::value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("root-path")
                .help(t!("arg_root_path", locale = locale).to_string())
                .value_name("ROOT_PATH")
                .index(2)
                .action(ArgAction::Set),
        )
}

/// The directory containing the executable, used when no ROOT_PATH is given.
/// Falls back to an empty prefix when the executable path cannot be resolved.
fn default_root_path() -> String {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.display().to_string()))
        .unwrap_or_default()
}

pub fn run() -> Result<(), SummaryError> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    let result_dir = matches
        .get_one::<PathBuf>("result-dir")
        .unwrap() // Has default
        .clone();
    let root_path = matches
        .get_one::<String>("root-path")
        .cloned()
        .unwrap_or_else(default_root_path);

    let targets = find_result_files(&result_dir)?;
    let report = ResultAggregator::new(targets, root_path)?.run()?;
    println!("{report}");
    Ok(())
}
