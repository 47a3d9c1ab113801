//! Font size discovery (`bingo fonts`).

use anyhow::Result;
use bingocard::FontSize;

pub fn handle() -> Result<()> {
    println!("Available font sizes:");
    for font in FontSize::ALL {
        let directive = match font.directive().trim_end() {
            "" => "(document default)",
            d => d,
        };
        println!("  - {:<8} {}", font.key(), directive);
    }
    Ok(())
}
