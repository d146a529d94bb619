// Entrypoint for the uploader.
// - Keeps `main` small: parse flags, build the payload, send it once.
// - Returns `anyhow::Result` so every failure (file access, network)
//   ends up as one diagnostic on stderr and a non-zero exit.

use indicatif::{ProgressBar, ProgressStyle};
use ipsource_cli::{
    api::{ApiClient, UploadPayload},
    cli::Args,
};

fn main() -> anyhow::Result<()> {
    let args = match Args::parse_from(std::env::args_os()) {
        Ok(args) => args,
        // clap prints its own usage/help text and picks the exit code.
        Err(err) => err.exit(),
    };

    // The file is read in full before any network activity; a missing
    // or unreadable file aborts here.
    let payload = UploadPayload::from_file(&args.passkey, &args.source_file)?;

    let api = ApiClient::new(&args.host)?;

    // Spinner on stderr while the blocking request is in flight.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Uploading...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = api.upload(&payload);
    spinner.finish_and_clear();
    let response = result?;

    // Mirror the service's answer as-is: response metadata, then the
    // raw body. A non-2xx status is printed like any other outcome.
    println!("{:?}", response);
    println!("{}", response.text()?);
    Ok(())
}
