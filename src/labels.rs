use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// What to do with the line terminator of each label read from a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEndings {
    /// Keep `\n` / `\r\n` as part of the label text. LaTeX treats a
    /// single newline as a space, so the rendered card is unaffected.
    #[default]
    Keep,
    Strip,
}

/// Split text into labels, one per line.
pub fn parse_labels(text: &str, endings: LineEndings) -> Vec<String> {
    text.split_inclusive('\n')
        .map(|line| match endings {
            LineEndings::Keep => line.to_string(),
            LineEndings::Strip => strip_terminator(line).to_string(),
        })
        .collect()
}

/// Read a label file, one label per line.
pub fn read_labels(path: &Path, endings: LineEndings) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read labels {}", path.display()))?;
    Ok(parse_labels(&text, endings))
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_terminators_by_default() {
        let labels = parse_labels("vim\r\nemacs\nnano", LineEndings::default());
        assert_eq!(labels, vec!["vim\r\n", "emacs\n", "nano"]);
    }

    #[test]
    fn strips_terminators_on_request() {
        let labels = parse_labels("vim\r\nemacs\n\nnano\n", LineEndings::Strip);
        assert_eq!(labels, vec!["vim", "emacs", "", "nano"]);
    }

    #[test]
    fn empty_text_has_no_labels() {
        assert!(parse_labels("", LineEndings::Keep).is_empty());
    }
}
