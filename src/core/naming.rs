//! Output file naming.
//!
//! Every part is named `part-<tag>-<index>` where `<tag>` is `line`, `byte`
//! or `num` (chunk splitting) and `<index>` counts from 1 without gaps. The
//! scheme has no upper bound on the number of parts.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::StrategyKind;

use super::PartWriter;

/// File name of the part with the given 1-based index
pub fn part_file_name(kind: StrategyKind, index: usize) -> String {
    format!("part-{}-{}", kind.file_tag(), index)
}

/// Hands out successive part paths inside an output directory
pub struct PartNamer<'a> {
    output_dir: &'a Path,
    kind: StrategyKind,
    next_index: usize,
}

impl<'a> PartNamer<'a> {
    /// An empty `output_dir` places parts in the working directory
    pub fn new(output_dir: &'a Path, kind: StrategyKind) -> Self {
        Self {
            output_dir,
            kind,
            next_index: 1,
        }
    }

    /// Index and path of the next part, advancing the counter
    pub fn next_part(&mut self) -> (usize, PathBuf) {
        let index = self.next_index;
        self.next_index += 1;
        (index, self.output_dir.join(part_file_name(self.kind, index)))
    }

    /// Create the file for the next part
    pub fn create_next(&mut self) -> Result<PartWriter> {
        let (index, path) = self.next_part();
        PartWriter::create(index, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_file_names() {
        assert_eq!(part_file_name(StrategyKind::Line, 1), "part-line-1");
        assert_eq!(part_file_name(StrategyKind::Byte, 12), "part-byte-12");
        assert_eq!(part_file_name(StrategyKind::Chunk, 3), "part-num-3");
    }

    #[test]
    fn test_namer_is_contiguous() {
        let dir = Path::new("out");
        let mut namer = PartNamer::new(dir, StrategyKind::Byte);

        assert_eq!(namer.next_part(), (1, PathBuf::from("out/part-byte-1")));
        assert_eq!(namer.next_part(), (2, PathBuf::from("out/part-byte-2")));
        assert_eq!(namer.next_part(), (3, PathBuf::from("out/part-byte-3")));
    }

    #[test]
    fn test_empty_dir_is_working_directory() {
        let mut namer = PartNamer::new(Path::new(""), StrategyKind::Line);
        assert_eq!(namer.next_part().1, PathBuf::from("part-line-1"));
    }
}
