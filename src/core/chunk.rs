use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::models::{ChunkSplit, SplitReport, StrategyKind, Splitter};

use super::{measure, PartNamer, SplitSource};

impl Splitter for ChunkSplit {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Chunk
    }

    /// Always writes exactly `chunks` parts, even for empty input. Each part
    /// gets `T / chunks` bytes and the last one also takes the remainder.
    fn split<R: SplitSource + ?Sized>(&self, source: &mut R, output_dir: &Path) -> Result<SplitReport> {
        let chunks = self.kind().validate_unit(self.chunks)?;
        let (total, mut reader) = measure(source)?;

        let base = total / chunks;
        let extra = total % chunks;

        let mut namer = PartNamer::new(output_dir, self.kind());
        let mut report = SplitReport::new(self.kind());

        for i in 1..=chunks {
            let len = if i == chunks { base + extra } else { base };
            let mut part = namer.create_next()?;
            part.copy_from(&mut reader, len)?;
            part.finish(&mut report)?;
        }

        debug!(
            "Split {} byte(s) into {} chunk(s) of {} (+{} in the last)",
            total, chunks, base, extra
        );
        Ok(report)
    }
}
