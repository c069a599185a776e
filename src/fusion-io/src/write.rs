use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use located_error::prelude::*;

/// A buffered writer to either a file or standard output, chosen by whether a
/// path was provided. Used for the GFR table (§6).
pub struct TableWriter<'a> {
    sink: BufWriter<Box<dyn Write + 'a>>,
}

impl<'a> TableWriter<'a> {
    pub fn new(path: Option<impl AsRef<Path>>) -> Result<Self> {
        let sink: Box<dyn Write> = match path {
            Some(path) => {
                let path = path.as_ref();
                Box::new(File::create(path).with_loc(|| format!("Failed to create output file {}", path.display()))?)
            }
            None => Box::new(io::stdout()),
        };
        Ok(Self { sink: BufWriter::new(sink) })
    }

    pub fn write_header(&mut self, header: &str) -> Result<()> {
        writeln!(self.sink, "{header}").loc("Failed to write GFR header")
    }

    pub fn write_row(&mut self, row: &impl Display) -> Result<()> {
        writeln!(self.sink, "{row}").loc("Failed to write GFR row")
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush().loc("Failed to flush GFR output")
    }
}
