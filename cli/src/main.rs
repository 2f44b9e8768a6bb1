use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use array_view::{
    encode, ArrayView, Conditions, DecodeOptions, EncodeOptions, Indent, Key, MatchMode, Mode,
};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "arrview", version, about = "Query and edit JSON records by dot-path")]
struct Args {
    /// Input JSON file. Omit or use '-' to read from stdin.
    #[arg(short, long, value_name = "file", global = true)]
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file", global = true)]
    output: Option<String>,

    /// Pretty-print JSON output with this many spaces.
    #[arg(long, value_name = "number", global = true)]
    indent: Option<usize>,

    /// Maximum nesting depth accepted from the input.
    #[arg(long = "max-depth", value_name = "number", global = true)]
    max_depth: Option<usize>,

    /// Raise the log level (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the value at a key; fails when it is absent.
    Get { key: String },
    /// Print whether a key resolves to a non-null value.
    Has { key: String },
    /// Print the number of records.
    Count,
    /// Print the first record.
    First,
    /// Print the last record.
    Last,
    /// Print the view mode: node or collection.
    Mode,
    /// Print a key read from every record.
    Pluck { key: String },
    /// Keep the records matching every condition.
    Filter {
        /// Condition as path=value; the value is read as JSON, else as text.
        #[arg(long = "where", value_name = "path=value", value_parser = parse_condition, required = true)]
        conditions: Vec<(String, Value)>,

        /// Compare without type juggling.
        #[arg(long)]
        strict: bool,

        /// Keep original offsets instead of re-indexing.
        #[arg(long = "preserve-keys")]
        preserve_keys: bool,
    },
    /// Append records and print the result.
    Push {
        #[arg(value_name = "json", required = true)]
        values: Vec<String>,
    },
    /// Write a value at a key and print the result.
    Set {
        key: String,
        #[arg(value_name = "json")]
        value: String,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(err) = run(args) {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let input = read_input(args.input.as_deref())?;
    let mut options = DecodeOptions::new();
    if let Some(max_depth) = args.max_depth {
        options = options.with_max_depth(max_depth);
    }
    let mut view = ArrayView::from_json_with_options(&input, &options)?;
    tracing::debug!(mode = ?view.mode(), count = view.count(), "loaded input");

    let output = OutputTarget::from_arg(args.output.as_deref());
    match args.command {
        Command::Get { key } => {
            let value = view.get_or_fail(parse_key(&key))?;
            emit_json(&output, &value, args.indent)
        }
        Command::Has { key } => emit_text(&output, &view.has(parse_key(&key)).to_string()),
        Command::Count => emit_text(&output, &view.count().to_string()),
        Command::First => emit_json(&output, &view.first(), args.indent),
        Command::Last => emit_json(&output, &view.last(), args.indent),
        Command::Mode => {
            let mode = match view.mode() {
                Mode::Node => "node",
                Mode::Collection => "collection",
            };
            emit_text(&output, mode)
        }
        Command::Pluck { key } => emit_json(&output, &view.pluck(parse_key(&key)), args.indent),
        Command::Filter {
            conditions,
            strict,
            preserve_keys,
        } => {
            let match_mode = if strict {
                MatchMode::Strict
            } else {
                MatchMode::Loose
            };
            let conditions = conditions
                .into_iter()
                .map(|(path, expected)| (parse_key(&path), expected))
                .collect::<Conditions>()
                .with_match_mode(match_mode)
                .with_preserve_keys(preserve_keys);
            emit_json(&output, &view.filter(conditions), args.indent)
        }
        Command::Push { values } => {
            view.push_all(values.iter().map(String::as_str).map(parse_value));
            emit_json(&output, &view, args.indent)
        }
        Command::Set { key, value } => {
            view.set(parse_key(&key), parse_value(&value))?;
            emit_json(&output, &view, args.indent)
        }
    }
}

fn read_input(input: Option<&str>) -> Result<String, Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
    }
}

/// Plain decimal offsets address records directly; anything else is a path.
fn parse_key(raw: &str) -> Key {
    match raw.parse::<usize>() {
        Ok(index) if index.to_string() == raw => Key::Index(index),
        _ => Key::from(raw),
    }
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn parse_condition(raw: &str) -> Result<(String, Value), String> {
    match raw.split_once('=') {
        Some((path, value)) if !path.is_empty() => Ok((path.to_string(), parse_value(value))),
        _ => Err(format!("Invalid condition \"{raw}\". Expected path=value")),
    }
}

#[derive(Clone, Debug)]
enum OutputTarget {
    Stdout,
    File(String),
}

impl OutputTarget {
    fn from_arg(output: Option<&str>) -> Self {
        match output {
            Some(path) if path != "-" => OutputTarget::File(path.to_string()),
            _ => OutputTarget::Stdout,
        }
    }
}

fn with_output_writer<F>(target: &OutputTarget, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match target {
        OutputTarget::File(path) => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn emit_text(target: &OutputTarget, text: &str) -> Result<(), Box<dyn Error>> {
    with_output_writer(target, |writer| {
        writeln!(writer, "{text}")?;
        Ok(())
    })
}

fn emit_json<T: Serialize>(
    target: &OutputTarget,
    value: &T,
    indent: Option<usize>,
) -> Result<(), Box<dyn Error>> {
    let options = encode_options(indent);
    with_output_writer(target, |writer| {
        encode::to_writer(&mut *writer, value, &options)?;
        writeln!(writer)?;
        Ok(())
    })
}

fn encode_options(indent: Option<usize>) -> EncodeOptions {
    match indent {
        None | Some(0) => EncodeOptions::new(),
        Some(indent) => EncodeOptions::new().with_indent(Indent::spaces(indent)),
    }
}
