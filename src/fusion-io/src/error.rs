use thiserror::Error;

/// A malformed MRF record on standard input (§6, §7).
#[derive(Error, Debug)]
pub enum AlignmentParseError {
    #[error("line {line}: expected 4 tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: {read} has no blocks")]
    EmptyBlocks { line: usize, read: &'static str },

    #[error("line {line}: malformed block '{block}', expected 'target,start,end'")]
    MalformedBlock { line: usize, block: String },

    #[error("line {line}: failed to parse coordinate '{value}' in block '{block}'")]
    ParseInt { line: usize, block: String, value: String },
}

/// A missing environment variable or required key in the config file (§7, §10.3).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} is not set and --config was not provided")]
    MissingEnvVar(String),

    #[error("failed to read config file {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("config file {path} is missing required key '{key}'")]
    MissingKey { path: String, key: String },
}
