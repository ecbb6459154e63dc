// scrublog/src/commands/tail.rs
//! The `tail` command: print a safe, displayable slice of a log file.

use anyhow::Result;
use log::debug;
use scrublog_core::{clip_line, contents};

use crate::cli::TailCommand;
use crate::settings_path;

pub fn run(cmd: &TailCommand) -> Result<()> {
    let settings = settings_path::load(cmd.config.as_deref())?;
    let lines = cmd.lines.or(settings.tail_lines);
    let width = cmd.width.or(settings.tail_width);
    debug!(
        "tailing '{}' (lines={:?}, width={:?}, strip_ansi={})",
        cmd.path.display(),
        lines,
        width,
        cmd.strip_ansi
    );

    let output = if cmd.strip_ansi {
        // Strip escapes first so they do not count toward the width.
        let raw = contents(&cmd.path, None, lines);
        let mut out = String::with_capacity(raw.len());
        let mut pieces = raw.split('\n').peekable();
        while let Some(piece) = pieces.next() {
            let stripped = strip_ansi_escapes::strip_str(piece);
            out.push_str(match width {
                Some(w) => clip_line(&stripped, w),
                None => &stripped,
            });
            if pieces.peek().is_some() {
                out.push('\n');
            }
        }
        out
    } else {
        contents(&cmd.path, width, lines)
    };

    print!("{output}");
    Ok(())
}
