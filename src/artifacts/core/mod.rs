//! Terminal output
//!
//! Long output (`log`, `show`) goes through the `minus` pager when stdout is
//! a terminal and `NO_PAGER` is unset; everything else writes to stdout.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Set to any value to write straight to stdout
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// `Write` adapter over the minus pager
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s = String::from_utf8_lossy(buf);
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where a command's output goes
pub enum Output {
    Stdout,
    Paged(Pager),
}

impl Output {
    /// Page only when a human is looking at the output
    pub fn for_long_output() -> Self {
        if std::env::var_os(NO_PAGER_ENV).is_none() && io::stdout().is_terminal() {
            Output::Paged(Pager::new())
        } else {
            Output::Stdout
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            Output::Stdout => Box::new(io::stdout()),
            Output::Paged(pager) => Box::new(PagerWriter::new(pager.clone())),
        }
    }

    /// Display everything written so far; a no-op for stdout
    pub fn finish(self) -> anyhow::Result<()> {
        if let Output::Paged(pager) = self {
            minus::page_all(pager)?;
        }

        Ok(())
    }
}
