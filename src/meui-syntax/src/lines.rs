//! Line splitting.

/// Splits source text into lines on `\n`.
///
/// Empty lines are kept, including a trailing empty line after a final
/// newline, so text with N newlines always yields N + 1 lines. The empty
/// string yields a single empty line. A `\r` before a newline stays part of
/// its line.
///
/// The returned iterator is cheap to clone and can be restarted.
pub fn split_lines(source: &str) -> std::str::Split<'_, char> {
    source.split('\n')
}

/// Counts the lines [`split_lines`] would produce.
pub fn line_count(source: &str) -> usize {
    source.bytes().filter(|&b| b == b'\n').count() + 1
}
