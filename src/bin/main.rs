//! `ptbr` - run and inspect pt-BR dialect Python scripts.

use clap::{Parser, Subcommand};
use ptbr_core::debug::render_side_by_side;
use ptbr_core::launcher::{Launcher, DEFAULT_PYTHON};
use ptbr_core::persistence::{load_dictionary, read_source, write_atomically};
use ptbr_core::{count_candidates, Dictionary, TemplateScope, TranslateOptions, Translator};
use serde::Serialize;
use std::ffi::OsString;
use std::io::{stdout, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ptbr", version, about = "Write Python with pt-BR keywords")]
struct Cli {
    /// JSON dictionary replacing the built-in pt-BR words.
    #[arg(long, global = true, env = "PTBR_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Rewrite calls in f-strings only inside `{...}` holes.
    #[arg(long, global = true)]
    strict_templates: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a script and run it with the Python interpreter.
    Run {
        script: PathBuf,

        /// Arguments passed to the script.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<OsString>,

        /// Interpreter to run the translated program with.
        #[arg(long, env = "PTBR_PYTHON", default_value = DEFAULT_PYTHON)]
        python: PathBuf,
    },
    /// Print the translated source, or write it to a file.
    Translate {
        file: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the source next to its translation.
    Debug {
        file: PathBuf,

        #[arg(long)]
        no_color: bool,
    },
    /// Count dialect words by pattern, ignoring strings and comments.
    Count {
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// List the dictionary.
    Words {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let custom;
    let dictionary = match &cli.dictionary {
        Some(path) => match load_dictionary(path) {
            Ok(dict) => {
                custom = dict;
                &custom
            }
            Err(e) => {
                error!(path = %path.display(), "{e}");
                eprintln!("Error: could not load dictionary '{}': {e}", path.display());
                return ExitCode::from(2);
            }
        },
        None => Dictionary::builtin(),
    };

    let options = TranslateOptions {
        template_scope: if cli.strict_templates {
            TemplateScope::HolesOnly
        } else {
            TemplateScope::WholeLiteral
        },
        ..TranslateOptions::default()
    };
    let translator = Translator::with_options(dictionary, options);

    match cli.command {
        Commands::Run { script, args, python } => {
            let mut launcher = Launcher::new(python);
            if let Some(command) = module_translator(cli.dictionary.as_deref(), cli.strict_templates)
            {
                launcher = launcher.with_module_translator(command);
            }
            run(&translator, &script, &args, &launcher)
        }
        Commands::Translate { file, output } => {
            let Some(source) = read(&file) else {
                return ExitCode::FAILURE;
            };
            let translated = translator.translate(&source);
            match output {
                Some(out) => report(write_atomically(&out, &translated)),
                None => {
                    let mut out = stdout().lock();
                    report_io(out.write_all(translated.as_bytes()).and_then(|()| out.flush()))
                }
            }
        }
        Commands::Debug { file, no_color } => {
            let Some(source) = read(&file) else {
                return ExitCode::FAILURE;
            };
            let translated = translator.translate(&source);
            let styled = !no_color && stdout().is_terminal();
            report_io(render_side_by_side(&mut stdout().lock(), &source, &translated, styled))
        }
        Commands::Count { file, json } => {
            let Some(source) = read(&file) else {
                return ExitCode::FAILURE;
            };
            let counts = count_candidates(dictionary, &source);
            if json {
                print_json(&counts)
            } else {
                println!("structural: {}", counts.structural);
                println!("callable:   {}", counts.callable);
                println!("total:      {}", counts.total());
                ExitCode::SUCCESS
            }
        }
        Commands::Words { json } => {
            if json {
                print_json(dictionary)
            } else {
                print_words(dictionary);
                ExitCode::SUCCESS
            }
        }
    }
}

/// This binary's own `translate`, with the same dictionary and template
/// options, so imported modules are rewritten like the entry script.
fn module_translator(dictionary: Option<&Path>, strict_templates: bool) -> Option<Vec<OsString>> {
    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            warn!("imported modules will not be translated: {e}");
            return None;
        }
    };
    let mut command = vec![exe.into_os_string()];
    if let Some(path) = dictionary {
        command.push("--dictionary".into());
        command.push(path.as_os_str().to_owned());
    }
    if strict_templates {
        command.push("--strict-templates".into());
    }
    Some(command)
}

fn run(translator: &Translator, script: &Path, args: &[OsString], launcher: &Launcher) -> ExitCode {
    if !script.exists() {
        eprintln!("Error: File '{}' not found", script.display());
        return ExitCode::FAILURE;
    }
    let Some(source) = read(script) else {
        return ExitCode::FAILURE;
    };
    let translated = translator.translate(&source);

    match launcher.run(script, &translated, args) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("Error executing script: {e}");
            ExitCode::FAILURE
        }
    }
}

fn read(path: &Path) -> Option<String> {
    match read_source(path) {
        Ok(source) => Some(source),
        Err(e) => {
            eprintln!("Error reading file '{}': {e}", path.display());
            None
        }
    }
}

fn report(result: ptbr_core::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn report_io(result: std::io::Result<()>) -> ExitCode {
    report(result.map_err(Into::into))
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => report(Err(e.into())),
    }
}

fn print_words(dictionary: &Dictionary) {
    println!("{}", "=".repeat(70));
    println!("PT-BR TO PYTHON TRANSLATION MAPPINGS");
    println!("{}", "=".repeat(70));

    println!("\nKeywords: {}", dictionary.structural().len());
    for pair in dictionary.structural() {
        println!("  {:20} → {}", pair.dialect, pair.host);
    }

    println!("\nBuilt-in Functions: {}", dictionary.callable().len());
    for pair in dictionary.callable() {
        println!("  {:20} → {}", pair.dialect, pair.host);
    }

    println!("\nTotal Translations: {}", dictionary.len());
    println!("{}", "=".repeat(70));
}
