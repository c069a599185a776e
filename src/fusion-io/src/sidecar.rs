use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use located_error::prelude::*;

/// Write `<prefix>.intraOffsets.gz`: one integer per line, gzip-compressed in-process (§6, §10.5).
pub fn write_intra_offsets(path: &Path, offsets: &[i64]) -> Result<()> {
    let file = File::create(path).with_loc(|| format!("Failed to create sidecar file {}", path.display()))?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    for offset in offsets {
        writeln!(encoder, "{offset}").with_loc(|| format!("Failed to write to sidecar file {}", path.display()))?;
    }
    encoder.finish().with_loc(|| format!("Failed to finalize sidecar file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn round_trips_offsets_through_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefix.intraOffsets.gz");
        write_intra_offsets(&path, &[1, -2, 3]).unwrap();

        let file = File::open(&path).unwrap();
        let mut decoder = GzDecoder::new(file);
        let mut contents = String::new();
        decoder.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "1\n-2\n3\n");
    }

    #[test]
    fn writes_empty_stream_for_empty_population() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefix.intraOffsets.gz");
        write_intra_offsets(&path, &[]).unwrap();

        let file = File::open(&path).unwrap();
        let mut decoder = GzDecoder::new(file);
        let mut contents = String::new();
        decoder.read_to_string(&mut contents).unwrap();
        assert!(contents.is_empty());
    }
}
