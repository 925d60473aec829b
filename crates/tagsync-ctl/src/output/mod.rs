//! Styled terminal output for `tagsync-ctl`.
//!
//! `anstream` strips the ANSI styles when stdout or stderr is not a terminal,
//! so `render` output can be piped straight into a file.

mod styles;

use std::fmt::Display;
use std::io::Write;

pub(crate) use styles::clap_styles;

use styles::{FAIL, FIELD, HEADING, MUTED, OK};

/// Field names are padded to this width so values line up.
const FIELD_WIDTH: usize = 20;

fn emit(line: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{line}").ok();
}

pub(crate) fn success(msg: impl Display) {
    emit(format_args!("{OK}✓ {msg}{OK:#}"));
}

/// Errors go to stderr so stdout stays parseable.
pub(crate) fn error(msg: impl Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{FAIL}✗ {msg}{FAIL:#}").ok();
}

pub(crate) fn heading(msg: impl Display) {
    emit(format_args!("{HEADING}{msg}{HEADING:#}"));
}

/// `  name:   value`, with the name bold and padded.
pub(crate) fn field(name: &str, value: impl Display) {
    emit(format_args!("  {FIELD}{}{FIELD:#} {value}", pad_field(name)));
}

pub(crate) fn bullet(msg: impl Display) {
    emit(format_args!("  - {msg}"));
}

pub(crate) fn muted(msg: impl Display) {
    emit(format_args!("{MUTED}{msg}{MUTED:#}"));
}

pub(crate) fn plain(msg: impl Display) {
    emit(msg);
}

fn pad_field(name: &str) -> String {
    format!("{:<width$}", format!("{name}:"), width = FIELD_WIDTH)
}
