pub mod document;
pub mod naming;
pub mod report;
pub mod run;

pub use document::{DocumentError, StoryDocument};
pub use report::{extract_url_path, generate_run_report};
pub use run::{RunError, RunOptions, RunSummary, execute_run};

/// Startup banner, suppressed by `--quiet`.
pub fn print_banner() {
    println!(
        r#"
     _                  _     _           _
 ___| |_ ___  _ __ _  _| |__ (_)_ __   __| |
/ __| __/ _ \| '__| || | '_ \| | '_ \ / _` |
\__ \ || (_) | |  | || | |_) | | | | | (_| |
|___/\__\___/|_|   \_, |_.__/|_|_| |_|\__,_|
                   |__/  v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
