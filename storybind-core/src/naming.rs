/// Derive the output file name from the seed URL. A seed path ending in
/// `/<digits>.html` names the file after that story id; anything else
/// falls back to a fixed placeholder.
pub fn derive_output_name(seed: &str) -> String {
    let id = seed
        .rsplit('/')
        .next()
        .and_then(|last| last.strip_suffix(".html"))
        .filter(|stem| !stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit()));

    match id {
        Some(id) => format!("story_{}.pdf", id),
        None => "story_new.pdf".to_string(),
    }
}
