use anyhow::Result;
use clap::Parser;

use jsoncat::cli::{self, Args, CliConfig, CliUtils};
use jsoncat::combine::{limits, CombineEngine, CombineStatistics};
use jsoncat::error::CombineError;
use jsoncat::{parser, writer};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            cli::handle_error(&e);
            std::process::exit(2);
        }
    };

    let result = if config.is_validate_only() {
        run_validation(&config)
    } else {
        run_combine(&config)
    };

    if let Err(e) = result {
        cli::handle_error(&e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_combine(config: &CliConfig) -> cli::CliResult<()> {
    let engine = CombineEngine::new(config.combine_config.clone());

    if config.is_verbose() {
        eprintln!(
            "Combining JSON files from {} into {}",
            config.input_description(),
            config.output_description()
        );
    }

    let files = engine.discover(&config.args.input)?;
    if !config.is_quiet() {
        println!("Found {} JSON files", files.len());
    }

    // Every file must parse before anything is written, so a failed run
    // leaves no output behind
    let combined = engine.combine_files(&files)?;

    for skipped in &combined.metadata.skipped {
        CliUtils::show_warning(
            &format!("skipped {}: {}", skipped.path.display(), skipped.reason),
            config.is_quiet(),
        );
    }

    writer::write_output(&config.args.output, &combined.content)?;

    CliUtils::show_success(
        &format!(
            "Combined {} documents into {}",
            combined.metadata.document_count,
            config.args.output.display()
        ),
        config.is_quiet(),
    );

    if config.want_stats() {
        output_statistics(
            &CombineStatistics::for_run(&combined.metadata),
            config.is_quiet(),
        );
    }

    Ok(())
}

fn run_validation(config: &CliConfig) -> cli::CliResult<()> {
    let engine = CombineEngine::new(config.combine_config.clone());
    let files = engine.discover(&config.args.input)?;

    let progress = (!config.is_quiet() && files.len() > 1)
        .then(|| CliUtils::create_progress_bar(files.len() as u64));

    let mut invalid = 0usize;
    for file in &files {
        let relative = file.strip_prefix(&config.args.input).unwrap_or(file);

        let checked = limits::check_file_size_before_read(file, &config.combine_config)
            .and_then(|_| parser::read_document(file));

        let line = match checked {
            Ok(_) => format!("✓ {}", relative.display()),
            Err(e) => {
                invalid += 1;
                format!("✗ {}: {}", relative.display(), e.user_message())
            }
        };

        match &progress {
            Some(pb) => {
                pb.println(line);
                pb.inc(1);
            }
            None => {
                if !config.is_quiet() {
                    println!("{}", line);
                }
            }
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if invalid > 0 {
        return Err(CombineError::other(anyhow::anyhow!(
            "{} of {} JSON files failed validation",
            invalid,
            files.len()
        )));
    }

    CliUtils::show_success(
        &format!("All {} JSON files are valid", files.len()),
        config.is_quiet(),
    );

    Ok(())
}

fn output_statistics(stats: &CombineStatistics, quiet: bool) {
    if quiet {
        return;
    }

    println!("\nCombine Statistics:");
    for line in stats.summary_lines() {
        println!("{}", line);
    }
}
