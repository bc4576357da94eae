//! Command-line interface module

use clap::Parser;
use console::style;
use std::path::PathBuf;
use std::time::Duration;

use crate::combine::config::{CombineConfig, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE};
use crate::combine::CombineResult;
use crate::error::{CombineError, CombineErrorKind};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "jsoncat")]
#[command(about = "Combine every JSON document in a directory into a single JSON array")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Input directory containing .json documents
    #[arg(default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// Output file for the combined array
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Recursively gather files from subdirectories
    #[arg(long)]
    pub recursive: bool,

    /// Spaces per indentation level (0-8, default: 4; 0 = compact)
    #[arg(long)]
    pub indent: Option<u8>,

    /// Maximum size of a single input file (e.g., 100MB, default: 100MB)
    #[arg(long)]
    pub memory_limit: Option<String>,

    /// Only validate the input files, don't write any output
    #[arg(long)]
    pub validate_only: bool,

    /// Output run statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,

    /// Skip files that fail to read or parse instead of aborting
    #[arg(long)]
    pub continue_on_error: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub combine_config: CombineConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> CombineResult<Self> {
        let combine_config = Self::create_combine_config(&args)?;

        Ok(Self {
            args,
            combine_config,
        })
    }

    /// Create combine configuration from CLI arguments
    fn create_combine_config(args: &Args) -> CombineResult<CombineConfig> {
        let memory_limit = parse_memory_limit(&args.memory_limit)?;

        let config = CombineConfig {
            indent_size: args.indent.unwrap_or(crate::combine::config::DEFAULT_INDENT_SIZE),
            recursive: args.recursive,
            continue_on_error: args.continue_on_error,
            memory_limit,
        };

        config
            .validate()
            .map_err(|e| CombineError::combine(CombineErrorKind::configuration(e)))?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Check if only validation is requested
    pub fn is_validate_only(&self) -> bool {
        self.args.validate_only
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        format!("'{}'", self.args.input.display())
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        format!("'{}'", self.args.output.display())
    }
}

/// Parse memory limit string (e.g., "100MB", "1GB", "500KB")
fn parse_memory_limit(limit: &Option<String>) -> CombineResult<u64> {
    match limit {
        None => Ok(100 * 1024 * 1024), // 100MB default
        Some(limit_str) => {
            let limit_str = limit_str.trim().to_uppercase();
            let invalid = || {
                CombineError::combine(CombineErrorKind::Configuration {
                    message: format!("Invalid memory limit: {}", limit_str),
                })
            };

            if let Some(size) = limit_str.strip_suffix("GB") {
                let gb = size.parse::<f64>().map_err(|_| invalid())?;
                Ok((gb * 1024.0 * 1024.0 * 1024.0) as u64)
            } else if let Some(size) = limit_str.strip_suffix("MB") {
                let mb = size.parse::<f64>().map_err(|_| invalid())?;
                Ok((mb * 1024.0 * 1024.0) as u64)
            } else if let Some(size) = limit_str.strip_suffix("KB") {
                let kb = size.parse::<f64>().map_err(|_| invalid())?;
                Ok((kb * 1024.0) as u64)
            } else if let Some(size) = limit_str.strip_suffix('B') {
                size.parse::<u64>().map_err(|_| invalid())
            } else {
                // Assume bytes
                limit_str.parse::<u64>().map_err(|_| invalid())
            }
        }
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            if Self::should_use_color() {
                println!("{} {}", style("✓").green(), message);
            } else {
                println!("✓ {}", message);
            }
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        if Self::should_use_color() {
            eprintln!("{} {}", style("✗").red(), message);
        } else {
            eprintln!("✗ {}", message);
        }
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            if Self::should_use_color() {
                eprintln!("{} {}", style("⚠").yellow(), message);
            } else {
                eprintln!("⚠ {}", message);
            }
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        // Check if stdout is a terminal and supports color
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    /// Get the terminal size
    pub fn get_terminal_size() -> (u16, u16) {
        terminal_size::terminal_size()
            .map(|(width, height)| (width.0, height.0))
            .unwrap_or((80, 24))
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &CombineError) {
    let message = error.user_message();
    CliUtils::show_error(&message);

    // Provide helpful suggestions
    if message.contains("JSON parse error") {
        eprintln!("\nTip: Use --validate-only to check every input file, or --continue-on-error to skip bad files");
    } else if message.contains("too large") {
        eprintln!("\nTip: Use --memory-limit to increase the per-file size allowance");
    } else if message.contains("directory access") {
        eprintln!("\nTip: The input must be an existing, readable directory");
    }

    // Show usage hint
    eprintln!("\nTry 'jsoncat --help' for usage information.");
}

/// Command execution result
pub type CliResult<T> = Result<T, CombineError>;
