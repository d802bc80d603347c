use clap::{Parser, ValueEnum};

/// Values fed by the source stage when none are given
pub const DEFAULT_INPUT_VALUES: [i64; 7] = [0, 1, 1, 2, 3, 5, 8];

#[derive(Parser, Debug)]
#[command(name = "signer_pipeline")]
#[command(about = "Run integers through the SingleHash -> MultiHash -> CombineResults signer pipeline")]
#[command(version)]
pub struct Cli {
    /// Comma separated integers emitted by the source stage
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = DEFAULT_INPUT_VALUES
    )]
    pub values: Vec<i64>,

    /// Simulated latency of every fast (CRC32) digest call, in milliseconds
    #[arg(long, default_value = "0")]
    pub fast_latency_ms: u64,

    /// Simulated latency of every slow (MD5) digest call, in milliseconds
    #[arg(long, default_value = "0")]
    pub slow_latency_ms: u64,

    /// Capacity of the buffer feeding the first stage
    #[arg(long, default_value = "2")]
    pub source_buffer: usize,

    /// Capacity of every buffer between two stages
    #[arg(long, default_value = "1")]
    pub handoff_buffer: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
