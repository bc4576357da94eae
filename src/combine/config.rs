//! Configuration options for the combine run

/// Input directory used when no path is supplied on the command line.
/// Matches the reference dataset location.
pub const DEFAULT_INPUT_DIR: &str = "storage/datasets/default";

/// Output file used when no path is supplied on the command line.
pub const DEFAULT_OUTPUT_FILE: &str = "hcpsd_codes_combined_output.json";

/// Spaces per indentation level in the combined output
pub const DEFAULT_INDENT_SIZE: u8 = 4;

/// Combine configuration options
#[derive(Debug, Clone)]
pub struct CombineConfig {
    /// Spaces per indentation level (0-8); 0 writes compact output
    pub indent_size: u8,
    /// Descend into subdirectories when enumerating input files
    pub recursive: bool,
    /// Skip files that fail to read or parse instead of aborting the run
    pub continue_on_error: bool,
    /// Refuse to read any single input file larger than this many bytes
    pub memory_limit: u64,
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            indent_size: DEFAULT_INDENT_SIZE,
            recursive: false,
            continue_on_error: false,
            memory_limit: 100 * 1024 * 1024, // 100MB
        }
    }
}

impl CombineConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > 8 {
            return Err(format!(
                "indent size must be between 0 and 8, got {}",
                self.indent_size
            ));
        }
        if self.memory_limit == 0 {
            return Err("memory limit must be greater than zero".to_string());
        }
        Ok(())
    }
}
