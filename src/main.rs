use std::{env, fmt, path::PathBuf, process::ExitCode, str::FromStr};

use slotclip::SlotConfig;

const USAGE: &str = "\
Usage: slotclip [OPTIONS]

Options:
  --segments <n>       segments per quarter circle at the slot ends (default 1)
  --radius <mm>        radius of the circles at the slot ends (default 8)
  --width <mm>         overall slot width, assumes the right circle (default 20)
  --add-right-circle   add a circle on the right side of the rectangle
  --output <path>      SVG output path (default slotclip.svg)
  -h, --help           print this help
";

struct CliArgs {
    config: SlotConfig,
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("ERROR: {message}");
            eprint!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = slotclip::run(&cli.config, &cli.output) {
        eprintln!("ERROR: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Parses the flag list; `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<CliArgs>, String> {
    let mut config = SlotConfig::default();
    let mut output = PathBuf::from("slotclip.svg");

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--segments" => config.segments = parse_value(iter.next(), arg)?,
            "--radius" => config.radius = parse_value(iter.next(), arg)?,
            "--width" => config.width = parse_value(iter.next(), arg)?,
            "--add-right-circle" => config.add_right_circle = true,
            "--output" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("{arg} requires a value"))?;
                output = PathBuf::from(value);
            }
            "-h" | "--help" => return Ok(None),
            other => return Err(format!("unrecognized argument '{other}'")),
        }
    }

    Ok(Some(CliArgs { config, output }))
}

fn parse_value<T>(value: Option<&String>, flag: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = value.ok_or_else(|| format!("{flag} requires a value"))?;
    value
        .parse()
        .map_err(|err| format!("invalid value '{value}' for {flag}: {err}"))
}
