use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::error::{Result, SplitError};
use crate::models::{LineSplit, SplitReport, StrategyKind, Splitter};

use super::{PartNamer, PartWriter, SplitSource};

/// Drop the `\n` terminator and a `\r` right before it
fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

impl Splitter for LineSplit {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Line
    }

    /// Every part gets `unit_lines` lines except possibly the last. Line
    /// terminators are rewritten as a single `\n`, including for a final line
    /// that had none. Empty input creates no part.
    fn split<R: SplitSource + ?Sized>(&self, source: &mut R, output_dir: &Path) -> Result<SplitReport> {
        let unit = self.kind().validate_unit(self.unit_lines)?;

        let mut reader = BufReader::new(source);
        let mut namer = PartNamer::new(output_dir, self.kind());
        let mut report = SplitReport::new(self.kind());
        let mut current: Option<PartWriter> = None;
        let mut line = Vec::new();
        let mut line_count: u64 = 0;

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line).map_err(SplitError::Read)? == 0 {
                break;
            }

            if line_count % unit == 0 {
                if let Some(part) = current.take() {
                    part.finish(&mut report)?;
                }
                current = Some(namer.create_next()?);
            }
            if let Some(part) = current.as_mut() {
                part.write_line(strip_terminator(&line))?;
            }

            line_count += 1;
        }

        if let Some(part) = current.take() {
            part.finish(&mut report)?;
        }

        debug!("Split {} line(s) into {} part(s)", line_count, report.part_count());
        Ok(report)
    }
}
