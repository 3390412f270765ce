//! Command-line interface for the umlify utility
//!
//! Reads Java-shaped source from a file or stdin and prints PlantUML markup,
//! the extracted model, the detected mode or a PlantUML server URL.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;

use umlify::core::logging::init_logging;
use umlify::plugins::java::ClassModel;
use umlify::plugins::Orchestrator;
use umlify::plugins::plantuml::PlantUmlServer;
use umlify::{ExtractionMode, ImageFormat, ServerConfig};

/// Umlify - Turn Java-shaped source into PlantUML class diagrams
#[derive(Parser)]
#[command(name = "umlify")]
#[command(about = "Extract classes and interfaces from source code into PlantUML class diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (implies --log-level debug unless set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (defaults to UMLIFY_LOG_LEVEL, RUST_LOG, then warn)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Set log format (defaults to UMLIFY_LOG_FORMAT, then compact)
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert source code to PlantUML markup
    Convert {
        /// Input source file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the markup (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extraction mode
        #[arg(long, value_enum, default_value_t = ModeChoice::Class)]
        mode: ModeChoice,
    },

    /// Show the extracted structural model
    Extract {
        /// Input source file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extraction mode
        #[arg(long, value_enum, default_value_t = ModeChoice::Class)]
        mode: ModeChoice,

        /// Dump the model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Detect the extraction mode suited to the input
    Detect {
        /// Input source file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print the PlantUML server URL of the diagram
    Url {
        /// Input source file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Extraction mode
        #[arg(long, value_enum, default_value_t = ModeChoice::Class)]
        mode: ModeChoice,

        /// PlantUML server base URL (defaults to UMLIFY_SERVER_URL or the public server)
        #[arg(long)]
        server: Option<String>,

        /// Rendered image format (defaults to UMLIFY_IMAGE_FORMAT or img)
        #[arg(long, value_enum)]
        format: Option<FormatChoice>,
    },

    /// Show supported extraction modes
    Modes {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Extraction mode selection
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ModeChoice {
    /// Brace-terminated signatures, method bodies skipped
    #[default]
    Class,
    /// Semicolon-terminated signatures accepted, every line read
    Interface,
    /// Let the detectors decide
    Auto,
}

impl ModeChoice {
    /// Concrete mode for `content`, consulting the detectors for `auto`
    fn resolve(self, orchestrator: &Orchestrator, content: &str) -> ExtractionMode {
        match self {
            ModeChoice::Class => ExtractionMode::Class,
            ModeChoice::Interface => ExtractionMode::Interface,
            ModeChoice::Auto => orchestrator.detect_mode(content),
        }
    }
}

/// Rendered image formats
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum FormatChoice {
    Img,
    Png,
    Svg,
    Txt,
}

impl From<FormatChoice> for ImageFormat {
    fn from(value: FormatChoice) -> Self {
        match value {
            FormatChoice::Img => ImageFormat::Img,
            FormatChoice::Png => ImageFormat::Png,
            FormatChoice::Svg => ImageFormat::Svg,
            FormatChoice::Txt => ImageFormat::Txt,
        }
    }
}

/// Main CLI application
pub struct UmlifyApp {
    orchestrator: Orchestrator,
}

impl UmlifyApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self {
            orchestrator: Orchestrator::new(),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        let log_level = match (cli.log_level, cli.verbose) {
            (Some(level), _) => Some(level.as_str()),
            (None, true) => Some(LogLevel::Debug.as_str()),
            (None, false) => None,
        };
        if let Err(e) = init_logging(log_level, cli.log_format.map(|f| f.as_str())) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Umlify v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Convert {
                input,
                output,
                mode,
            } => self.convert_command(input, output, mode, cli.verbose),
            Commands::Extract {
                input,
                output,
                mode,
                json,
            } => self.extract_command(input, output, mode, json, cli.verbose),
            Commands::Detect { input } => self.detect_command(input, cli.verbose),
            Commands::Url {
                input,
                mode,
                server,
                format,
            } => self.url_command(input, mode, server, format, cli.verbose),
            Commands::Modes { json } => self.modes_command(json, cli.verbose),
        }
    }

    /// Handle the convert command
    fn convert_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        mode: ModeChoice,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let mode = mode.resolve(&self.orchestrator, &content);
        let markup = self.orchestrator.process(&content, Some(mode));

        if verbose {
            eprintln!("Generated {} bytes of PlantUML", markup.len());
        }

        self.write_output(output, &markup)
    }

    /// Handle the extract command
    fn extract_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        mode: ModeChoice,
        json: bool,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let mode = mode.resolve(&self.orchestrator, &content);
        let model = self.orchestrator.extract(&content, Some(mode));
        let report = if json {
            serde_json::to_string_pretty(&model)?
        } else {
            summarize_model(&model)
        };

        self.write_output(output, &report)
    }

    /// Handle the detect command
    fn detect_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        println!("{}", self.orchestrator.detect_mode(&content));
        Ok(())
    }

    /// Handle the url command
    fn url_command(
        &self,
        input: Option<PathBuf>,
        mode: ModeChoice,
        server: Option<String>,
        format: Option<FormatChoice>,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;
        let config = server_config(ServerConfig::from_env()?, server, format);
        debug!(server = %config.url, format = %config.format, "Resolved server settings");

        if verbose {
            eprintln!("Using PlantUML server {} ({})", config.url, config.format);
        }

        let orchestrator = Orchestrator::new().with_service(Box::new(PlantUmlServer::new(config)));
        let mode = mode.resolve(&orchestrator, &content);
        let url = orchestrator.diagram_url(&content, Some(mode))?;
        println!("{}", url);
        Ok(())
    }

    /// Handle the modes command
    fn modes_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing extraction modes");
        }

        if json {
            println!("{}", serde_json::to_string_pretty(&ModeListing::new())?);
        } else {
            println!("Extraction modes:");
            for mode in ExtractionMode::all() {
                println!("  {:<10} - {}", mode.as_str(), mode.description());
            }
            println!("  {:<10} - Detect the mode from the input", "auto");
        }

        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        debug!(input = ?input, "Reading input");
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                if !content.is_empty() && !content.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

impl Default for UmlifyApp {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON shape of the `modes` listing
#[derive(Debug, Serialize)]
struct ModeListing {
    modes: Vec<ModeInfo>,
    total: usize,
}

#[derive(Debug, Serialize)]
struct ModeInfo {
    name: &'static str,
    description: &'static str,
}

impl ModeListing {
    fn new() -> Self {
        let modes: Vec<ModeInfo> = ExtractionMode::all()
            .iter()
            .map(|mode| ModeInfo {
                name: mode.as_str(),
                description: mode.description(),
            })
            .collect();
        let total = modes.len();
        Self { modes, total }
    }
}

/// Server settings from `base`, overridden by flags
fn server_config(
    base: ServerConfig,
    server: Option<String>,
    format: Option<FormatChoice>,
) -> ServerConfig {
    let mut config = base;
    if let Some(url) = server {
        config = config.with_url(url);
    }
    if let Some(format) = format {
        config = config.with_format(format.into());
    }
    config
}

/// Plain-text listing of the model, one line per type and member
fn summarize_model(model: &ClassModel) -> String {
    let mut report = String::new();
    for (name, record) in model.iter() {
        report.push_str(&format!(
            "{} {} ({} attributes, {} methods)\n",
            record.kind,
            name,
            record.attributes.len(),
            record.methods.len()
        ));
        for attribute in &record.attributes {
            report.push_str(&format!(
                "  attribute {} {} {}: {}\n",
                attribute.visibility, attribute.modifier, attribute.name, attribute.attr_type
            ));
        }
        for method in &record.methods {
            report.push_str(&format!(
                "  method {} {} {}({}): {}\n",
                method.visibility,
                method.modifier,
                method.name,
                method.parameters,
                method.return_type
            ));
        }
    }
    report.push_str(&format!(
        "Total: {} types, {} attributes, {} methods",
        model.len(),
        model.attribute_count(),
        model.method_count()
    ));
    report
}
