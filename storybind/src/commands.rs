use clap::arg;
use url::Url;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("storybind")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("storybind")
        .styles(CLAP_STYLING)
        .about("Binds a paginated story blog into a single PDF, one image per page")
        .arg(
            arg!(-u --"url" <URL>)
                .required(true)
                .help("The site's listing page, e.g. https://example.test/blog/")
                .value_parser(clap::value_parser!(Url)),
        )
        .arg(
            arg!(--"latest-path" <PATH>)
                .required(false)
                .help("Known latest-post path; without it the first link in the listing region is taken"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Output PDF path (default: derived from the seed URL)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            arg!(-t --"timeout" <SECONDS>)
                .required(false)
                .help("Per-request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("10"),
        )
        .arg(
            arg!(--"listing-region" <SELECTOR>)
                .required(false)
                .help("CSS selector of the listing's primary region")
                .default_value("section#primary"),
        )
        .arg(
            arg!(--"main-region" <SELECTOR>)
                .required(false)
                .help("CSS selector of a post page's main content region")
                .default_value("main"),
        )
        .arg(
            arg!(--"strip-prefix" <SEGMENT>)
                .required(false)
                .help("Base URL segment dropped before joining root-relative links (sub-path mounted sites)"),
        )
        .arg(
            arg!(-f --"format" <FORMAT>)
                .required(false)
                .help("Report format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(arg!(-q --"quiet" "Suppress banner and the per-page report").required(false))
}
