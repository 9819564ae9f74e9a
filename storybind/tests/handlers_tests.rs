use storybind::commands::command_argument_builder;
use storybind::handlers::run_options_from_matches;

#[test]
fn test_command_is_well_formed() {
    command_argument_builder().debug_assert();
}

#[test]
fn test_defaults_from_url_only() {
    let matches =
        command_argument_builder().get_matches_from(["storybind", "-u", "https://example.test/blog/"]);
    let options = run_options_from_matches(&matches);

    assert_eq!(options.base_url.as_str(), "https://example.test/blog/");
    assert_eq!(options.timeout_secs, 10);
    assert_eq!(options.listing_region, "section#primary");
    assert_eq!(options.main_region, "main");
    assert!(options.latest_path.is_none());
    assert!(options.output.is_none());
    assert!(options.root_strip.is_none());
    assert!(options.show_progress);
}

#[test]
fn test_all_flags_flow_into_options() {
    let matches = command_argument_builder().get_matches_from([
        "storybind",
        "-u",
        "https://example.test/stories/",
        "--latest-path",
        "/post/41.html",
        "-o",
        "out.pdf",
        "-t",
        "30",
        "--listing-region",
        "div#latest",
        "--main-region",
        "article",
        "--strip-prefix",
        "/stories",
    ]);
    let options = run_options_from_matches(&matches);

    assert_eq!(options.latest_path.as_deref(), Some("/post/41.html"));
    assert_eq!(options.output.as_deref().unwrap().to_str(), Some("out.pdf"));
    assert_eq!(options.timeout_secs, 30);
    assert_eq!(options.listing_region, "div#latest");
    assert_eq!(options.main_region, "article");
    assert_eq!(options.root_strip.as_deref(), Some("/stories"));
}

#[test]
fn test_quiet_disables_progress() {
    let matches = command_argument_builder().get_matches_from([
        "storybind",
        "-u",
        "https://example.test/blog/",
        "-q",
    ]);
    let options = run_options_from_matches(&matches);
    assert!(!options.show_progress);
}

#[test]
fn test_json_format_disables_progress() {
    let matches = command_argument_builder().get_matches_from([
        "storybind",
        "-u",
        "https://example.test/blog/",
        "-f",
        "json",
    ]);
    let options = run_options_from_matches(&matches);
    assert!(!options.show_progress);
}

#[test]
fn test_url_is_required() {
    let result = command_argument_builder().try_get_matches_from(["storybind"]);
    assert!(result.is_err());
}
