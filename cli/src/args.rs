use std::path::PathBuf;

use clap::{Args, Parser};

/// Flags shared by `encode` and `decode`.
#[derive(Args, Debug, Clone, Default)]
pub struct CodecArgs {
    /// Input file (stdin by default)
    #[arg(short = 'i', long = "input", value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file (stdout by default)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Display statistics on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Display statistics on stderr as JSON
    #[arg(long)]
    pub json: bool,
}

impl CodecArgs {
    pub fn wants_stats(&self) -> bool {
        self.verbose || self.json
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "encode",
    version,
    about = "Compresses files using the LZ78 compression algorithm.",
    long_about = "Compresses files using the LZ78 compression algorithm.\n\
                  Compressed files are decompressed with the corresponding decoder."
)]
pub struct EncodeCli {
    #[command(flatten)]
    pub args: CodecArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "decode",
    version,
    about = "Decompresses files with the LZ78 decompression algorithm.",
    long_about = "Decompresses files with the LZ78 decompression algorithm.\n\
                  Used with files compressed with the corresponding encoder."
)]
pub struct DecodeCli {
    #[command(flatten)]
    pub args: CodecArgs,
}
