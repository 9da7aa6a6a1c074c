//! Filename sanitizing for staged uploads.

const MAX_FILENAME_LENGTH: usize = 200;

/// Reduce a client-supplied filename to a safe single path component.
///
/// Directory parts are dropped and anything outside `[A-Za-z0-9._-]` becomes `_`.
/// Names that end up empty or made only of dots become `file`.
pub fn sanitize_filename(filename: &str) -> String {
    let filename_only = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches('.').is_empty() {
        return "file".to_string();
    }

    sanitized
}
