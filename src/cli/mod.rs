//! Contains the argument handling and main logic of the CLI

use std::io::{stdout, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use exitcode::{ExitCode, CONFIG, DATAERR, IOERR, NOINPUT};
use log::{debug, info};

use crate::codec::{self, DecodeError};
use crate::config::{self, Config};
use crate::util::{ext::PathExt, hex};

// Structure based on the recommendations in
// https://rust-cli-recommendations.sunshowers.io/handling-arguments.html

#[derive(Parser)]
#[command(
    version,
    about,
    long_about,
    after_long_help = "\
    1. Logging: is controlled via the G3D2_LOG and G3D2_LOG_STYLES environment variables. Set \
    G3D2_LOG to error, warn, info, debug or trace to adjust verbosity. For examples, see RUST_LOG \
    and RUST_LOG_STYLES mentions in https://docs.rs/env_logger/0.10.0/env_logger/\
    \n\
    \n\
    2. Nibble order: G3D2 hex stores the LOW nibble of each byte first, so `1e` decodes to 0xe1. \
    `g3d2 encode` produces that order.\
    \n\
    \n\
    3. Blending rounds down: each slot is computed as (old * (15 - alpha) + color * alpha) >> 4, \
    so even alpha 15 does not reproduce the foreground color exactly."
)]
pub struct G3d2 {
	#[clap(flatten)]
	pub global_opts: GlobalOpts,

	#[clap(subcommand)]
	command: Command,
}

const INPUT_HELP: &str = "Input file, `-` or omitted for stdin. Leading `~` is expanded.";

#[derive(Debug, Subcommand)]
enum Command {
	/// Decode G3D2 hex into packed-nibble bytes
	Decode {
		#[clap(help = INPUT_HELP, default_value = "-")]
		input: PathBuf,
	},

	/// Encode bytes as G3D2 hex, low nibble first
	Encode {
		#[clap(help = INPUT_HELP, default_value = "-")]
		input: PathBuf,
	},

	/// Decode G3D2 color+alpha hex and alpha-blend it onto a packed-nibble background
	Blend(BlendArgs),

	/// Print the default configuration file
	PrintConfig,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
	/// Verbosity level, can be specified multiple times, equivalent to G3D2_LOG={info,debug,trace}
	#[arg(group="verbosity", long, short, global=true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Quiet mode, equivalent to G3D2_LOG=error
	#[arg(group = "verbosity", long, short, global = true)]
	pub quiet: bool,

	/// Silent mode, equivalent to G3D2_LOG=off
	#[arg(group = "verbosity", long, short, global = true)]
	pub silent: bool,

	/// Configuration file, overrides G3D2_CONFIG. See `g3d2 print-config` for the format
	#[arg(long, short, global = true, value_name = "PATH")]
	pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct BlendArgs {
	/// File holding the packed-nibble background, one byte per four foreground digits
	#[arg(long, short)]
	background: PathBuf,

	/// Treat the background file as G3D2 hex instead of raw bytes
	#[arg(long)]
	background_hex: bool,

	/// Foreground color+alpha hex: color A, alpha A, color B, alpha B per output byte
	#[clap(help = INPUT_HELP, default_value = "-")]
	input: PathBuf,
}

impl G3d2 {
	pub fn exec(self) -> anyhow::Result<()> {
		self.init_logging();

		info!("version {} starting up", env!("CARGO_PKG_VERSION"));
		info!("log level set to {}", log::max_level());

		let cfg = self.load_config();

		use Command::*;
		let output = match self.command {
			Decode { input } => Self::decode(&cfg, &input),
			Encode { input } => Self::encode(&input),
			Blend(args) => Self::blend(&cfg, args),
			PrintConfig => {
				info!("printing built-in {}", config::TEMPLATE_NAME);
				stdout().write_all(config::DATA.as_bytes())?;
				return Ok(());
			}
		};

		let mut out = stdout().lock();
		out.write_all(&output).context("unable to write output")?;
		out.flush().context("unable to flush output")?;

		info!("process exiting successfully");
		Ok(())
	}

	fn init_logging(&self) {
		let mut logging_builder = env_logger::Builder::new();

		logging_builder
			.filter_level(log::LevelFilter::Warn)
			.format_timestamp_nanos()
			.parse_env("G3D2_LOG");

		// Not using https://crates.io/crates/clap-verbosity-flag as the documentation suggests
		// it may not work with the [default -> env -> cli-args] override path
		let override_log_level = if self.global_opts.silent {
			Some(log::LevelFilter::Off)
		} else if self.global_opts.quiet {
			Some(log::LevelFilter::Error)
		} else {
			match self.global_opts.verbose {
				0 => None,
				1 => Some(log::LevelFilter::Info),
				2 => Some(log::LevelFilter::Debug),
				_ => Some(log::LevelFilter::Trace),
			}
		};

		if let Some(new_level) = override_log_level {
			logging_builder.filter_level(new_level);
		}

		logging_builder.init();
	}

	/// --config beats G3D2_CONFIG beats the built-in template
	fn load_config(&self) -> Config {
		let path = match &self.global_opts.config {
			Some(path) => Some(path.clone()),
			None => std::env::var_os(config::ENV_VAR).map(PathBuf::from),
		};

		match path {
			None => {
				debug!("using built-in config");
				Config::default()
			}
			Some(path) => Config::from_file(path.tilde_expand())
				.unwrap_or_else(|e| die(CONFIG, &format!("{e:#}"))),
		}
	}

	fn decode(cfg: &Config, input: &Path) -> Vec<u8> {
		let data = read_or_die(input);
		let hex_text = hex::prepare(&data, cfg.input.trim_whitespace);

		let decoded = codec_or_die(codec::decode(hex_text), input);
		info!("decoded {} hex digits into {} bytes", hex_text.len(), decoded.len());

		hex::render(decoded, cfg.output.format)
	}

	fn encode(input: &Path) -> Vec<u8> {
		let data = read_or_die(input);
		let mut encoded = codec::encode(&data);
		encoded.push(b'\n');
		info!("encoded {} bytes", data.len());
		encoded
	}

	fn blend(cfg: &Config, args: BlendArgs) -> Vec<u8> {
		if args.input == args.background && args.input.as_os_str() == "-" {
			die(NOINPUT, "foreground and background cannot both be read from stdin")
		}

		let background = {
			let data = read_or_die(&args.background);
			if args.background_hex {
				debug!("decoding background {:?} from hex", args.background);
				let hex_text = hex::prepare(&data, cfg.input.trim_whitespace);
				codec_or_die(codec::decode(hex_text), &args.background)
			} else {
				data
			}
		};

		let data = read_or_die(&args.input);
		let fg_hex = hex::prepare(&data, cfg.input.trim_whitespace);

		let blended = codec_or_die(codec::blend_decode_from_bytes(fg_hex, &background), &args.input);
		info!("blended {} bytes", blended.len());

		hex::render(blended, cfg.output.format)
	}
}

fn read_or_die(path: &Path) -> Vec<u8> {
	debug!("reading {path:?}");
	path.read_input()
		.unwrap_or_else(|e| die(IOERR, &format!("unable to read {path:?}: {e}")))
}

fn codec_or_die<T>(res: Result<T, DecodeError>, source: &Path) -> T {
	res.unwrap_or_else(|e| match e.detail() {
		Some(detail) => die(DATAERR, &format!("{source:?}: {e} ({detail})")),
		None => die(DATAERR, &format!("{source:?}: {e}")),
	})
}

pub fn die(code: ExitCode, msg: &str) -> ! {
	log::error!("{}", msg);
	std::process::exit(code)
}
