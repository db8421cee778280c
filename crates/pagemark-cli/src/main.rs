use anyhow::{Context, Result, bail};
use futures::executor::block_on;
use pagemark_config::{Config, OutputFormat};
use pagemark_engine::{
    Node, ParseOptions, Parser, Services, parsing::snapshot, services::SyntectHighlighter,
};
use std::{
    env,
    io::{self, Read},
    path::PathBuf,
    process,
    sync::Arc,
};

const USAGE: &str = "Usage: pagemark [--json|--pretty|--outline] [FILE]\n\
                     Reads FILE (or stdin when omitted or `-`) and prints the parsed tree.";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    /// Overrides `output.format` from the config file.
    format: Option<OutputFormat>,
    input: Option<PathBuf>,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    for arg in args {
        match arg.as_str() {
            "--json" => parsed.format = Some(OutputFormat::Json),
            "--pretty" => parsed.format = Some(OutputFormat::Pretty),
            "--outline" => parsed.format = Some(OutputFormat::Outline),
            "-h" | "--help" => parsed.help = true,
            "-" => parsed.input = None,
            flag if flag.starts_with("--") => bail!("Unknown option: {flag}"),
            path => {
                if parsed.input.is_some() {
                    bail!("Only one input file may be given");
                }
                parsed.input = Some(PathBuf::from(path));
            }
        }
    }
    Ok(parsed)
}

fn load_config() -> Config {
    match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("{e}; using default settings");
            Config::default()
        }
    }
}

fn build_parser(config: &Config) -> Parser {
    let highlighter = SyntectHighlighter::default()
        .with_plain_languages(config.highlight.languages.iter().cloned());
    let services = Services::default().with_highlighter(Arc::new(highlighter));
    Parser::new(
        services,
        ParseOptions {
            group_sections: config.parser.group_sections,
        },
    )
}

fn render(nodes: &[Node], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(nodes)? + "\n",
        OutputFormat::Pretty => serde_json::to_string_pretty(nodes)? + "\n",
        OutputFormat::Outline => snapshot::normalize(nodes),
    })
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = load_config();
    let format = args.format.unwrap_or(config.output.format);
    let markdown = read_input(args.input.as_ref())?;

    let nodes = block_on(build_parser(&config).parse(&markdown));
    print!("{}", render(&nodes, format)?);
    Ok(())
}
