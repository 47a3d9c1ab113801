use std::fmt::Write;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{CardConfig, ConfigError, FontSize};

/// A validated card layout together with the label pool it draws from.
///
/// Cells are filled from the front of the pool, so when there are more
/// labels than cells a shuffle also changes which labels make it onto the
/// card.
#[derive(Debug, Clone)]
pub struct CardGenerator {
    labels: Vec<String>,
    config: CardConfig,
    font: FontSize,
    cells: usize,
}

impl CardGenerator {
    /// Validate `config` and pad `labels` with the filler text up to `x * y`.
    pub fn new<I, S>(labels: I, config: &CardConfig) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let font = config.validate()?;
        let mut labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let cells = config.cell_count()?;
        if labels.len() < cells {
            labels.resize(cells, config.filler.clone());
        }
        Ok(Self {
            labels,
            config: config.clone(),
            font,
            cells,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn font(&self) -> FontSize {
        self.font
    }

    pub fn cell_count(&self) -> usize {
        self.cells
    }

    /// Uniformly permute the label pool in place.
    pub fn shuffle_labels<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.labels.shuffle(rng);
    }

    /// Render the complete LaTeX document for the current label order.
    pub fn render_document(&self) -> String {
        let cfg = &self.config;
        let mut out = String::new();

        writeln!(&mut out, "\\documentclass[10pt]{{article}}").ok();
        writeln!(&mut out, "\\usepackage{{tikz}}").ok();
        writeln!(&mut out, "\\nofiles").ok();
        writeln!(&mut out, "\\usepackage{{geometry}}").ok();
        writeln!(&mut out, "\\geometry{{").ok();
        writeln!(&mut out, "a4paper,").ok();
        writeln!(&mut out, "total={{170mm,257mm}},").ok();
        writeln!(&mut out, "left=20mm,").ok();
        writeln!(&mut out, "top={}mm,", length(cfg.vspace)).ok();
        writeln!(&mut out, "}}\\begin{{document}}").ok();

        if let Some(title) = &cfg.title {
            writeln!(&mut out, "\\title{{{}}}", title).ok();
            writeln!(&mut out, "\\date{{}}").ok();
            writeln!(&mut out, "\\author{{}}").ok();
            writeln!(&mut out, "\\maketitle").ok();
        }
        if cfg.centering {
            writeln!(&mut out, "\\centering").ok();
        }

        writeln!(&mut out, "\\begin{{tikzpicture}}[{}]", cfg.style).ok();
        let rounded = if cfg.rounded { "rounded corners=10 , " } else { "" };
        let bold = if cfg.bold { "font=\\bf, " } else { "" };
        let cs = cfg.cell_size;
        let text_width = length(cs - cfg.padding);
        let mut n = 0;
        for i in 0..cfg.x {
            let i = i as f64;
            for j in 0..cfg.y {
                let j = j as f64;
                writeln!(
                    &mut out,
                    "\\draw[{}] ({{{}}},{{{}}}) rectangle ({{{}}},{{{}}});",
                    rounded,
                    length(i * cs),
                    length(j * cs),
                    length((i + 1.0) * cs),
                    length((j + 1.0) * cs),
                )
                .ok();
                writeln!(
                    &mut out,
                    "\\node[{}text width={}cm, align=center]at ({{{}}},{{{}}}) {{{}{}}};",
                    bold,
                    text_width,
                    length((i + 0.5) * cs),
                    length((j + 0.5) * cs),
                    self.font.directive(),
                    self.labels[n],
                )
                .ok();
                n += 1;
            }
        }
        writeln!(&mut out, "\\end{{tikzpicture}}").ok();
        out.push_str("\\end{document}");
        out
    }
}

/// Shortest round-trip decimal that always carries a fractional part (`4.0`).
fn length(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_keep_a_fraction() {
        assert_eq!(length(0.0), "0.0");
        assert_eq!(length(4.0), "4.0");
        assert_eq!(length(2.0 * 3.3), "6.6");
        assert_eq!(length(3.0 * 2.2), "6.6000000000000005");
    }

    #[test]
    fn longer_label_lists_are_not_truncated() {
        let config = CardConfig {
            x: 1,
            y: 2,
            ..CardConfig::default()
        };
        let card = CardGenerator::new(["a", "b", "c"], &config).unwrap();
        assert_eq!(card.labels().len(), 3);
        assert_eq!(card.render_document().matches("\\node[").count(), 2);
    }
}
