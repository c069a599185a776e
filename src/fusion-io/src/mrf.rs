use crate::error::AlignmentParseError;

/// One aligned block of a read: `(targetName, targetStart, targetEnd)`, 1-based inclusive (§6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MrfBlock {
    pub target_name: String,
    pub target_start: u32,
    pub target_end: u32,
}

/// One read of a pair: an ordered list of blocks plus its sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MrfRead {
    pub blocks: Vec<MrfBlock>,
    pub sequence: String,
}

/// One MRF line: a paired-end alignment entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MrfEntry {
    pub read1: MrfRead,
    pub read2: MrfRead,
}

/// Parse one tab-separated MRF line: `blocks1\tsequence1\tblocks2\tsequence2`, where
/// `blocksN` is a `;`-separated list of `target,start,end` triples.
pub fn parse_line(line: &str, line_no: usize) -> Result<MrfEntry, AlignmentParseError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 4 {
        return Err(AlignmentParseError::FieldCount { line: line_no, found: fields.len() });
    }

    let read1 = parse_read(fields[0], fields[1], line_no, "read1")?;
    let read2 = parse_read(fields[2], fields[3], line_no, "read2")?;
    Ok(MrfEntry { read1, read2 })
}

fn parse_read(blocks_field: &str, sequence: &str, line_no: usize, read: &'static str) -> Result<MrfRead, AlignmentParseError> {
    let blocks: Result<Vec<MrfBlock>, AlignmentParseError> =
        blocks_field.split(';').map(|b| parse_block(b, line_no)).collect();
    let blocks = blocks?;
    if blocks.is_empty() {
        return Err(AlignmentParseError::EmptyBlocks { line: line_no, read });
    }
    Ok(MrfRead { blocks, sequence: sequence.to_string() })
}

fn parse_block(block: &str, line_no: usize) -> Result<MrfBlock, AlignmentParseError> {
    let parts: Vec<&str> = block.split(',').collect();
    if parts.len() != 3 {
        return Err(AlignmentParseError::MalformedBlock { line: line_no, block: block.to_string() });
    }
    let parse_u32 = |value: &str| {
        value.parse::<u32>().map_err(|_| AlignmentParseError::ParseInt {
            line: line_no,
            block: block.to_string(),
            value: value.to_string(),
        })
    };
    Ok(MrfBlock { target_name: parts[0].to_string(), target_start: parse_u32(parts[1])?, target_end: parse_u32(parts[2])? })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_block_pair() {
        let line = "chr1,100,199\tACGT\tchr2,300,399\tTTTT";
        let entry = parse_line(line, 1).unwrap();
        assert_eq!(entry.read1.blocks.len(), 1);
        assert_eq!(entry.read1.blocks[0].target_start, 100);
        assert_eq!(entry.read2.sequence, "TTTT");
    }

    #[test]
    fn parses_multi_block_split_read() {
        let line = "chr1,100,149;chr1,200,249\tACGTACGT\tchr2,300,399\tTTTT";
        let entry = parse_line(line, 1).unwrap();
        assert_eq!(entry.read1.blocks.len(), 2);
        assert_eq!(entry.read1.blocks[1].target_start, 200);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = parse_line("a\tb\tc", 3).unwrap_err();
        assert!(matches!(err, AlignmentParseError::FieldCount { line: 3, found: 3 }));
    }

    #[test]
    fn rejects_malformed_block() {
        let err = parse_line("chr1,100\tACGT\tchr2,300,399\tTTTT", 4).unwrap_err();
        assert!(matches!(err, AlignmentParseError::MalformedBlock { line: 4, .. }));
    }

    #[test]
    fn rejects_unparseable_coordinate() {
        let err = parse_line("chr1,x,199\tACGT\tchr2,300,399\tTTTT", 5).unwrap_err();
        assert!(matches!(err, AlignmentParseError::ParseInt { line: 5, .. }));
    }
}
