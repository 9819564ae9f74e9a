use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;
use storybind_core::{RunOptions, execute_run, generate_run_report};
use url::Url;

/// Assemble run options from parsed CLI arguments.
pub fn run_options_from_matches(args: &ArgMatches) -> RunOptions {
    let url = args.get_one::<Url>("url").unwrap();
    let quiet = args.get_flag("quiet");
    let format = args
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");

    let mut options = RunOptions::new(url.clone());
    options.latest_path = args.get_one::<String>("latest-path").cloned();
    options.output = args.get_one::<PathBuf>("output").cloned();
    options.timeout_secs = *args.get_one::<u64>("timeout").unwrap();
    options.listing_region = args.get_one::<String>("listing-region").unwrap().clone();
    options.main_region = args.get_one::<String>("main-region").unwrap().clone();
    options.root_strip = args.get_one::<String>("strip-prefix").cloned();
    // The spinner would fight with JSON on stdout.
    options.show_progress = !quiet && format == "text";
    options
}

/// Run the bind end to end and print the outcome. Terminal failures
/// (no seed, final write) come back as errors; the caller sets the
/// exit code.
pub async fn handle_bind(args: &ArgMatches) -> anyhow::Result<()> {
    let quiet = args.get_flag("quiet");
    let format = args
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");

    let options = run_options_from_matches(args);
    let summary = execute_run(options).await?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if !quiet {
        print!("{}", generate_run_report(&summary));
        println!();
    }

    match &summary.output {
        Some(path) => println!("{} PDF saved as {}", "✓".green(), path.display()),
        None => println!("No images found to save in the PDF."),
    }

    Ok(())
}
