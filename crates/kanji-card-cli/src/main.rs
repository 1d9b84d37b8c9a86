use anyhow::{Context, Result};
use kanji_card_config::Config;
use kanji_card_engine::{convert, normalize_rich_text};
use kanji_card_host::NoteTypeSpec;
use std::{
    env,
    io::{self, Read},
    path::Path,
    process,
};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Notation (or editor markup) to readings table.
    Convert { input: Option<String> },
    /// Editor markup to notation only.
    Normalize { input: Option<String> },
    /// Describe the note type the host adapter registers.
    NoteType,
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        match args {
            [cmd] if cmd == "convert" => Some(Command::Convert { input: None }),
            [cmd, input] if cmd == "convert" => Some(Command::Convert {
                input: input_arg(input),
            }),
            [cmd] if cmd == "normalize" => Some(Command::Normalize { input: None }),
            [cmd, input] if cmd == "normalize" => Some(Command::Normalize {
                input: input_arg(input),
            }),
            [cmd] if cmd == "note-type" => Some(Command::NoteType),
            _ => None,
        }
    }
}

/// `-` means stdin.
fn input_arg(arg: &str) -> Option<String> {
    (arg != "-").then(|| arg.to_string())
}

fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(Path::new(path))
            .with_context(|| format!("Failed to read input file '{path}'")),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read standard input")?;
            Ok(buf)
        }
    }
}

fn describe_note_type(spec: &NoteTypeSpec) -> Vec<String> {
    let mut lines = vec![format!("Note type: {}", spec.name), "Fields:".to_string()];
    lines.extend(spec.fields.iter().map(|f| format!("  - {f}")));
    for template in &spec.templates {
        lines.push(format!("Template: {}", template.name));
        lines.push(format!("  Front: {}", template.front));
        lines.push(format!("  Back: {}", template.back));
    }
    lines
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Convert { input } => {
            let source = read_input(input.as_deref())?;
            let html = convert(&source).context("Conversion failed")?;
            println!("{html}");
        }
        Command::Normalize { input } => {
            let source = read_input(input.as_deref())?;
            println!("{}", normalize_rich_text(&source));
        }
        Command::NoteType => {
            let config_path = Config::config_path();
            let config = Config::load_or_default().with_context(|| {
                format!("Failed to load config file '{}'", config_path.display())
            })?;
            log::info!("Config path: {}", config_path.display());
            for line in describe_note_type(&NoteTypeSpec::from_config(&config)) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("kanji-card-cli");

    let Some(command) = Command::parse(args.get(1..).unwrap_or_default()) else {
        eprintln!("Usage: {program} convert [FILE|-]");
        eprintln!("       {program} normalize [FILE|-]");
        eprintln!("       {program} note-type");
        process::exit(1);
    };

    if let Err(e) = run(command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
