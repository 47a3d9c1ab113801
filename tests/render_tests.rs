//! Rendering and label-pool behaviour of `CardGenerator`.

use bingocard::{CardConfig, CardGenerator, ConfigError, FontSize};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn grid(x: usize, y: usize) -> CardConfig {
    CardConfig {
        x,
        y,
        ..CardConfig::default()
    }
}

fn node_lines(doc: &str) -> Vec<&str> {
    doc.lines().filter(|l| l.starts_with("\\node[")).collect()
}

#[test]
fn single_cell_document_matches_expected_text() {
    let card = CardGenerator::new(["A"], &grid(1, 1)).unwrap();
    let expected = r"\documentclass[10pt]{article}
\usepackage{tikz}
\nofiles
\usepackage{geometry}
\geometry{
a4paper,
total={170mm,257mm},
left=20mm,
top=20.0mm,
}\begin{document}
\centering
\begin{tikzpicture}[thick]
\draw[] ({0.0},{0.0}) rectangle ({4.0},{4.0});
\node[font=\bf, text width=4.0cm, align=center]at ({2.0},{2.0}) {\large A};
\end{tikzpicture}
\end{document}";
    assert_eq!(card.render_document(), expected);
}

#[test]
fn cells_are_filled_column_major() {
    let card = CardGenerator::new(["A", "B", "C", "D"], &grid(2, 2)).unwrap();
    let doc = card.render_document();
    let nodes = node_lines(&doc);
    assert_eq!(nodes.len(), 4);
    assert!(nodes[0].ends_with("at ({2.0},{2.0}) {\\large A};"));
    assert!(nodes[1].ends_with("at ({2.0},{6.0}) {\\large B};"));
    assert!(nodes[2].ends_with("at ({6.0},{2.0}) {\\large C};"));
    assert!(nodes[3].ends_with("at ({6.0},{6.0}) {\\large D};"));
}

#[test]
fn one_rectangle_per_cell() {
    let card = CardGenerator::new(Vec::<String>::new(), &grid(4, 3)).unwrap();
    let doc = card.render_document();
    assert_eq!(doc.matches(") rectangle (").count(), 12);
    assert_eq!(node_lines(&doc).len(), 12);
}

#[test]
fn short_label_lists_are_padded_with_filler() {
    let config = CardConfig {
        filler: "FREE".to_string(),
        ..grid(2, 2)
    };
    let card = CardGenerator::new(["a", "b"], &config).unwrap();
    assert_eq!(card.labels(), ["a", "b", "FREE", "FREE"]);
    assert_eq!(card.cell_count(), 4);
}

#[test]
fn rendering_is_repeatable() {
    let card = CardGenerator::new(["x", "y", "z"], &grid(3, 3)).unwrap();
    assert_eq!(card.render_document(), card.render_document());
    let twin = CardGenerator::new(["x", "y", "z"], &grid(3, 3)).unwrap();
    assert_eq!(card.render_document(), twin.render_document());
}

#[test]
fn styling_options_reach_the_document() {
    let config = CardConfig {
        title: Some("Office Bingo".to_string()),
        style: "dashed".to_string(),
        font_size: "huge".to_string(),
        bold: false,
        rounded: true,
        centering: false,
        padding: 0.5,
        vspace: 35.0,
        ..grid(1, 1)
    };
    let card = CardGenerator::new(["meeting"], &config).unwrap();
    let doc = card.render_document();
    assert!(doc.contains("top=35.0mm,\n"));
    assert!(doc.contains(
        "\\title{Office Bingo}\n\\date{}\n\\author{}\n\\maketitle\n"
    ));
    assert!(!doc.contains("\\centering"));
    assert!(doc.contains("\\begin{tikzpicture}[dashed]\n"));
    assert!(doc.contains("\\draw[rounded corners=10 , ] ({0.0},{0.0})"));
    assert!(doc.contains("\\node[text width=3.5cm, align=center]at ({2.0},{2.0}) {\\huge meeting};"));
}

#[test]
fn normal_font_adds_no_directive() {
    let config = CardConfig {
        font_size: "normal".to_string(),
        ..grid(1, 1)
    };
    let card = CardGenerator::new(["plain"], &config).unwrap();
    assert_eq!(card.font(), FontSize::Normal);
    assert!(card.render_document().contains("{plain};"));
}

#[test]
fn line_terminators_stay_in_label_text() {
    let card = CardGenerator::new(["vim\n"], &grid(1, 1)).unwrap();
    assert!(card.render_document().contains("{\\large vim\n};"));
}

#[test]
fn unknown_font_size_is_rejected() {
    let config = CardConfig {
        font_size: "gigantic".to_string(),
        ..CardConfig::default()
    };
    let err = CardGenerator::new(["a"], &config).unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownFontSize {
            key: "gigantic".to_string(),
            valid: "footnote, large, normal, huge".to_string(),
        }
    );

    let shouted = CardConfig {
        font_size: "HUGE".to_string(),
        ..CardConfig::default()
    };
    assert!(matches!(
        CardGenerator::new(["a"], &shouted),
        Err(ConfigError::UnknownFontSize { .. })
    ));
}

#[test]
fn empty_grid_and_bad_lengths_are_rejected() {
    assert!(matches!(
        CardGenerator::new(["a"], &grid(0, 3)),
        Err(ConfigError::EmptyGrid { x: 0, y: 3 })
    ));
    let config = CardConfig {
        cell_size: -1.0,
        ..CardConfig::default()
    };
    assert!(matches!(
        CardGenerator::new(["a"], &config),
        Err(ConfigError::InvalidLength { field: "cell size", .. })
    ));
    let config = CardConfig {
        x: usize::MAX / 2 + 1,
        y: 2,
        ..CardConfig::default()
    };
    assert!(matches!(
        CardGenerator::new(["a"], &config),
        Err(ConfigError::GridTooLarge { y: 2, .. })
    ));
    let config = CardConfig {
        vspace: f64::NAN,
        ..CardConfig::default()
    };
    assert!(CardGenerator::new(["a"], &config).is_err());
}

#[test]
fn shuffle_keeps_the_label_multiset() {
    let labels: Vec<String> = (0..9).map(|i| format!("L{i}")).collect();
    let mut card = CardGenerator::new(labels.clone(), &grid(3, 3)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..20 {
        card.shuffle_labels(&mut rng);
        let mut seen = card.labels().to_vec();
        seen.sort();
        assert_eq!(seen, labels);
    }
}

#[test]
fn shuffle_reaches_every_position() {
    let mut card = CardGenerator::new(["a", "b", "c", "d"], &grid(2, 2)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut first = std::collections::HashSet::new();
    for _ in 0..200 {
        card.shuffle_labels(&mut rng);
        first.insert(card.labels()[0].clone());
    }
    assert_eq!(first.len(), 4);
}
