use std::fmt;
use std::str::FromStr;

use crate::error::GfrParseError;

/// `fusionType`: `"cis"` when both transcripts share a chromosome, else `"trans"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FusionType {
    Cis,
    Trans,
}

impl FusionType {
    pub fn classify(chrom1: &str, chrom2: &str) -> Self {
        if chrom1 == chrom2 {
            FusionType::Cis
        } else {
            FusionType::Trans
        }
    }
}

impl fmt::Display for FusionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FusionType::Cis => "cis",
            FusionType::Trans => "trans",
        })
    }
}

impl FromStr for FusionType {
    type Err = GfrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cis" => Ok(FusionType::Cis),
            "trans" => Ok(FusionType::Trans),
            other => Err(GfrParseError::FusionType(other.to_string())),
        }
    }
}

/// One `pairType,number1,number2,readStart1,readEnd1,readStart2,readEnd2` record,
/// the `interReads` column's `|`-delimited unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterRead {
    pub pair_type: u8,
    pub number1: u32,
    pub number2: u32,
    pub read_start1: u32,
    pub read_end1: u32,
    pub read_start2: u32,
    pub read_end2: u32,
}

impl fmt::Display for InterRead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{}",
            self.pair_type, self.number1, self.number2, self.read_start1, self.read_end1, self.read_start2, self.read_end2
        )
    }
}

impl FromStr for InterRead {
    type Err = GfrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 7 {
            return Err(GfrParseError::InterRead(s.to_string()));
        }
        fn parse<T: std::str::FromStr>(v: &str, s: &str) -> Result<T, GfrParseError> {
            v.parse().map_err(|_| GfrParseError::InterRead(s.to_string()))
        }
        Ok(InterRead {
            pair_type: parse(parts[0], s)?,
            number1: parse(parts[1], s)?,
            number2: parse(parts[2], s)?,
            read_start1: parse(parts[3], s)?,
            read_end1: parse(parts[4], s)?,
            read_start2: parse(parts[5], s)?,
            read_end2: parse(parts[6], s)?,
        })
    }
}

/// One `start,end` record, the `exonCoordinates{Transcript1,2}` column's `|`-delimited unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExonCoordinate {
    pub start: u32,
    pub end: u32,
}

impl fmt::Display for ExonCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.start, self.end)
    }
}

impl FromStr for ExonCoordinate {
    type Err = GfrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 2 {
            return Err(GfrParseError::ExonCoordinate(s.to_string()));
        }
        let start = parts[0].parse().map_err(|_| GfrParseError::ExonCoordinate(s.to_string()))?;
        let end = parts[1].parse().map_err(|_| GfrParseError::ExonCoordinate(s.to_string()))?;
        Ok(ExonCoordinate { start, end })
    }
}

pub fn join_pipe<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(T::to_string).collect::<Vec<_>>().join("|")
}

pub fn split_pipe<T: FromStr>(s: &str) -> Result<Vec<T>, T::Err> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split('|').map(str::parse).collect()
}
