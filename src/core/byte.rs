use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::models::{ByteSplit, SplitReport, StrategyKind, Splitter};

use super::{measure, PartNamer, SplitSource};

impl Splitter for ByteSplit {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Byte
    }

    /// Writes `ceil(T / unit_bytes)` parts for an input of `T` bytes; only the
    /// last part may be shorter than `unit_bytes`. Empty input creates no part.
    fn split<R: SplitSource + ?Sized>(&self, source: &mut R, output_dir: &Path) -> Result<SplitReport> {
        let unit = self.kind().validate_unit(self.unit_bytes)?;
        let (total, mut reader) = measure(source)?;

        let mut namer = PartNamer::new(output_dir, self.kind());
        let mut report = SplitReport::new(self.kind());
        let mut remaining = total;

        while remaining > 0 {
            let len = remaining.min(unit);
            let mut part = namer.create_next()?;
            part.copy_from(&mut reader, len)?;
            part.finish(&mut report)?;
            remaining -= len;
        }

        debug!("Split {} byte(s) into {} part(s)", total, report.part_count());
        Ok(report)
    }
}
