// Command-line interface for tarrow
//
// This binary converts TOML read from standard input into the arrow dialect and writes the
// result to the file named by -o. All conversion logic lives in the tarrow-babel crate; this
// layer handles arguments, configuration, logging and exit codes.
//
// The inspect command is a development aid that prints intermediate views (node tree,
// recovered comments, bound constants) of a TOML file.
//
// Usage:
//  tarrow -o <output> [--from <format>] [--to <format>]  - Convert stdin (default)
//  tarrow inspect [<path>] [<transform>]                 - Execute a transform (defaults to config)
//  tarrow --list-formats                                 - List formats and transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// `indent` and `comments` update the loaded configuration; anything else is handed to the
// target format, which rejects names it does not know.
// Example:
//  tarrow -o out.conf --extra-indent "  " --extra-comments false < settings.toml

use tarrow_cli::transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use tarrow_babel::formats::common::parse_bool;
use tarrow_babel::formats::ArrowFormat;
use tarrow_babel::{FormatError, FormatRegistry, RenderRules};
use tarrow_config::{Loader, TarrowConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive (e.g. `TARROW_LOG=debug`)
const LOG_ENV: &str = "TARROW_LOG";

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            // A following arg that is not itself a flag is the value
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("tarrow")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert TOML configuration read from stdin into the arrow dialect")
        .long_about(
            "tarrow reads a TOML document from standard input and writes its arrow dialect\n\
            rendering to the file given with -o.\n\n\
            Commands:\n  \
            - (default): Convert stdin and write the result to -o\n  \
            - inspect:   View internal representations (node tree, comments, constants)\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            tarrow -o app.conf < app.toml                     # Convert to arrow\n  \
            tarrow -o app.conf --extra-indent '  ' < app.toml # Two-space nesting\n  \
            tarrow -o app.json --to json < app.toml           # Dump the node tree\n  \
            tarrow inspect app.toml symbols-json              # Show bound constants",
        )
        .subcommand_negates_reqs(true)
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Output file path (required for conversion)")
                .long_help(
                    "Path to write the converted output.\n\n\
                    The file is only written when the whole conversion succeeds.",
                )
                .required_unless_present("list-formats")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("FORMAT")
                .help("Source format (defaults to the configured convert.from)")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("FORMAT")
                .help("Target format (defaults to the configured convert.to)")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and inspect transforms")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tarrow.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log conversion steps to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect internal representations of TOML files")
                .long_about(
                    "View a TOML file at different processing stages.\n\n\
                    Transforms (stage-format):\n  \
                    - node-treeviz:  Node tree as tree visualization\n  \
                    - node-json:     Node tree as JSON\n  \
                    - comments-json: Comment lines recovered from the source\n  \
                    - symbols-json:  Constants bound during conversion\n\n\
                    Examples:\n  \
                    tarrow inspect app.toml                  # Configured default transform\n  \
                    tarrow inspect app.toml node-json        # JSON node tree\n  \
                    tarrow inspect - symbols-json < app.toml # Read stdin",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the TOML file ('-' or omitted reads stdin)")
                        .required(false)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to inspect.transform")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let matches = build_cli().get_matches_from(&cleaned_args);

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = sub_matches.get_one::<String>("path").map(|s| s.as_str());
            let transform = sub_matches
                .get_one::<String>("transform")
                .cloned()
                .unwrap_or_else(|| config.inspect.transform.clone());
            handle_inspect_command(path, &transform, &config);
        }
        _ => {
            let Some(output) = matches.get_one::<String>("output") else {
                eprintln!("Error: an output file is required. Use -o <path>.");
                std::process::exit(1);
            };
            let from = matches
                .get_one::<String>("from")
                .cloned()
                .unwrap_or_else(|| config.convert.from.clone());
            let to = matches
                .get_one::<String>("to")
                .cloned()
                .unwrap_or_else(|| config.convert.to.clone());
            handle_convert_command(&from, &to, output, &extra_params, &config);
        }
    }
}

/// Route tracing events to stderr so they never mix with command output
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Handle the inspect command
fn handle_inspect_command(path: Option<&str>, transform: &str, config: &TarrowConfig) {
    let source = read_source(path);
    let rules = RenderRules::from(&config.convert.arrow);

    let output = transforms::execute_transform(&source, transform, &rules)
        .unwrap_or_else(|e| exit_with_error(&e));

    println!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    from: &str,
    to: &str,
    output: &str,
    extra_params: &HashMap<String, String>,
    config: &TarrowConfig,
) {
    let registry = registry_from_config(config);

    // Validate formats exist before consuming stdin
    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            exit_with_error(&e);
        }
    }

    let source = read_source(None);
    debug!(from, to, bytes = source.len(), "converting standard input");

    let doc = registry
        .parse(&source, from)
        .unwrap_or_else(|e| exit_with_error(&e));

    let text = registry
        .serialize_with_options(&doc, to, extra_params)
        .unwrap_or_else(|e| exit_with_error(&e));

    fs::write(output, text).unwrap_or_else(|e| {
        eprintln!("Error: failed to write '{output}': {e}");
        std::process::exit(1);
    });
    debug!(output, "wrote converted document");

    println!("Conversion successful. Output written to {output}.");
}

/// Default registry with the arrow format carrying the configured rules
fn registry_from_config(config: &TarrowConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::default();
    registry.register(ArrowFormat::new(RenderRules::from(&config.convert.arrow)));
    registry
}

/// Read a source document from a path, or from stdin for `None` / `-`
fn read_source(path: Option<&str>) -> String {
    match path {
        None | Some("-") => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source).unwrap_or_else(|e| {
                eprintln!("Error: failed to read standard input: {e}");
                std::process::exit(1);
            });
            source
        }
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error: failed to read '{path}': {e}");
            std::process::exit(1);
        }),
    }
}

/// Report an error the way users of the converter expect, then exit with status 1.
///
/// Conversion errors (bad names, undefined constants, unsupported values) are the
/// "syntax errors" of the dialect; everything else is reported generically.
fn exit_with_error(err: &FormatError) -> ! {
    match err {
        FormatError::Conversion(inner) => eprintln!("Syntax error: {inner}"),
        other => eprintln!("Error: {other}"),
    }
    std::process::exit(1);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Conversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        let Ok(format) = registry.get(&format_name) else {
            continue;
        };
        let mut modes = Vec::new();
        if format.supports_parsing() {
            modes.push("parse");
        }
        if format.supports_serialization() {
            modes.push("serialize");
        }
        let extensions: Vec<String> = format
            .file_extensions()
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect();
        println!(
            "  {:<10} {} ({}) [{}]",
            format_name,
            format.description(),
            modes.join(", "),
            extensions.join(" ")
        );
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> TarrowConfig {
    let loader = Loader::new().with_optional_file("tarrow.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Error: failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut TarrowConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["indent", "indent-string"]) {
        config.convert.arrow.indent_string = raw;
    }
    if let Some(raw) = take_override(extra_params, &["comments", "preserve-comments"]) {
        config.convert.arrow.preserve_comments =
            parse_bool("comments", &raw).unwrap_or_else(|e| exit_with_error(&e));
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}
