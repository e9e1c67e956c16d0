use regex::Regex;

/// Derives the archive's top-level folder name from a dataset name.
///
/// Lowercases, turns whitespace runs into single underscores, strips every
/// character outside `[a-z0-9_]`, collapses repeated underscores, and trims
/// leading/trailing ones. Idempotent: sanitizing a sanitized name is a no-op.
pub fn sanitize_folder_name(name: &str) -> String {
    let whitespace = Regex::new(r"\s+").expect("Hardcode regex pattern");
    let invalid = Regex::new(r"[^a-z0-9_]").expect("Hardcode regex pattern");
    let repeats = Regex::new(r"_{2,}").expect("Hardcode regex pattern");

    let lowered = name.to_lowercase();
    let underscored = whitespace.replace_all(&lowered, "_");
    let stripped = invalid.replace_all(&underscored, "");
    let collapsed = repeats.replace_all(&stripped, "_");
    collapsed.trim_matches('_').to_owned()
}
