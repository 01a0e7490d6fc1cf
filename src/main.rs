// SPDX-License-Identifier: MPL-2.0
use album_lens::app::{self, Flags};
use album_lens::session::Session;
use std::path::PathBuf;

const HELP: &str = "\
album_lens

USAGE:
  album_lens [OPTIONS]

OPTIONS:
  --album <PATH>        Album manifest to open
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --token <TOKEN>       Session token (defaults to ALBUM_LENS_AUTH_TOKEN)
  -h, --help            Print this help
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG controls the level, e.g. RUST_LOG=album_lens=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config-dir")?;
    let token: Option<String> = args.opt_value_from_str("--token")?;
    let album_path: Option<PathBuf> = args.opt_value_from_str("--album")?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    let session = token.map_or_else(Session::from_env, Session::with_token);

    app::run(Flags {
        lang,
        album_path,
        config_dir,
        session,
    })?;
    Ok(())
}
