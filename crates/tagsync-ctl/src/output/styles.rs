//! Terminal palette, shared by command output and `--help`.

use anstyle::{AnsiColor, Color, Effects, Style};

const fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

pub(crate) const OK: Style = fg(AnsiColor::Green);
pub(crate) const FAIL: Style = fg(AnsiColor::Red);
pub(crate) const HEADING: Style = fg(AnsiColor::Green).effects(Effects::BOLD);
pub(crate) const FIELD: Style = Style::new().effects(Effects::BOLD);
pub(crate) const MUTED: Style = Style::new().effects(Effects::DIMMED);
const ACCENT: Style = fg(AnsiColor::Cyan);

/// Help styling built from the same palette as command output.
pub(crate) fn clap_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(HEADING)
        .usage(HEADING)
        .literal(ACCENT)
        .placeholder(ACCENT)
        .error(FAIL.effects(Effects::BOLD))
        .valid(OK)
        .invalid(fg(AnsiColor::Yellow))
}
