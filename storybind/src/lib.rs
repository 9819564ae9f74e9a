pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{handle_bind, run_options_from_matches};

// Re-export run functionality from storybind-core
pub use storybind_core::{
    RunOptions, RunSummary, execute_run, extract_url_path, generate_run_report,
};
