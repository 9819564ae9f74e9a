use colored::Colorize;
use storybind::commands::command_argument_builder;
use storybind::handlers::handle_bind;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cmd = command_argument_builder();
    let matches = cmd.get_matches();
    let quiet = matches.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        storybind_core::print_banner();
    }

    if let Err(e) = handle_bind(&matches).await {
        eprintln!("{} {}", "✗".red(), e);
        std::process::exit(1);
    }
}
