//! Terminal palette shared by status lines and `--help`.

use anstyle::{AnsiColor, Color, Effects, Style};

const fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

pub(crate) const SUCCESS: Style = fg(AnsiColor::Green);
pub(crate) const ERROR: Style = fg(AnsiColor::Red);
pub(crate) const WARNING: Style = fg(AnsiColor::Yellow);

/// Keyword tags next to node names, and flags in `--help`.
pub(crate) const KEYWORD: Style = fg(AnsiColor::Cyan);

pub(crate) const HEADER: Style = Style::new().effects(Effects::BOLD);
pub(crate) const LABEL: Style = Style::new().effects(Effects::BOLD);
pub(crate) const DIM: Style = Style::new().effects(Effects::DIMMED);

/// Help styling built from the same palette.
pub(crate) fn clap_styles() -> clap::builder::Styles {
    let heading = SUCCESS.effects(Effects::BOLD);
    clap::builder::Styles::styled()
        .header(heading)
        .usage(heading)
        .literal(KEYWORD)
        .placeholder(KEYWORD)
        .error(ERROR.effects(Effects::BOLD))
}
