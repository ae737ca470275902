// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_folio

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --content <FILE>       Page content TOML file
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = option(&mut args, "--lang");
    let content_path = option(&mut args, "--content");
    let config_dir = option(&mut args, "--config-dir");

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }

    paths::init_cli_override(config_dir.clone());

    app::run(Flags {
        lang,
        content_path,
        config_dir,
    })
}

fn option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, %err, "invalid command line value");
            None
        }
    }
}
