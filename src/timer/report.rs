use anyhow::{Context, Result};
use std::{io::Write, time::Duration};

/// Formats a report line: the label left-justified to `width` characters
/// followed by the elapsed seconds with three decimals and an `s` suffix.
///
/// Labels wider than `width` are kept whole.
pub fn format_line(label: &str, width: usize, elapsed: Duration) -> String {
    // padded by hand, the formatter's runtime width is limited to u16
    let padding = width.saturating_sub(label.chars().count());

    let mut line = String::with_capacity(label.len() + padding + 12);
    line.push_str(label);
    line.extend(std::iter::repeat(' ').take(padding));
    line.push_str(&format!("{:.3}s", elapsed.as_secs_f64()));
    line
}

pub(crate) fn write_line<W: Write>(
    writer: &mut W,
    label: &str,
    width: usize,
    elapsed: Duration,
) -> Result<()> {
    writeln!(writer, "{}", format_line(label, width, elapsed))
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to write timing for '{label}'"))
}
