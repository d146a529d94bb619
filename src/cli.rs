// Command-line arguments. Parsing is kept behind `Args::parse_from` so
// the flag surface can be exercised in tests without touching the
// process-wide argument list.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Flags accepted by the uploader. All three are required; clap rejects
/// an incomplete invocation with a usage error before any file or
/// network access happens.
#[derive(Debug, Parser)]
#[command(name = "ipsource-cli", about = "Upload a country-IP source file to the address generator service")]
pub struct Args {
    /// Host (and optional port) of the receiving service, e.g.
    /// `addresses.internal:8000`. Used verbatim; no scheme or port
    /// validation is performed.
    #[arg(short = 'c', long = "host")]
    pub host: String,

    /// Shared secret forwarded as the `passkey` form field. Opaque to
    /// this tool.
    #[arg(short = 'p', long = "passkey")]
    pub passkey: String,

    /// Path to the text file whose full contents become the `data`
    /// form field.
    #[arg(short = 'f', long = "source_file")]
    pub source_file: PathBuf,
}

impl Args {
    /// Parse from an explicit argument list, returning a usage error
    /// instead of exiting so callers decide how to surface it.
    pub fn parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }
}
