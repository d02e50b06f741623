use anyhow::{bail, Context, Result};
use cct_core::{KelvinRamp, LightRig, Swatch};
use cct_math::{kelvin_to_hex, kelvin_to_rgb};
use std::path::PathBuf;

const USAGE: &str = "\
Usage: cct_probe [KELVIN...] [--rig FILE] [--swatch FILE.png] [--dump-rig]

  KELVIN          temperature to convert (clamped to 1000-40000)
  --rig FILE      load a light rig JSON and print each light's tint
  --swatch FILE   write a 1000-40000 K ramp as a PNG strip
  --dump-rig      print the built-in bedroom rig as JSON";

/// Temperatures printed when no arguments are given
const REFERENCE_KELVINS: [f64; 3] = [1500.0, 6500.0, 12000.0];

/// Height of the PNG strip written by --swatch
const SWATCH_HEIGHT: u32 = 40;

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Options {
    kelvins: Vec<f64>,
    rig: Option<PathBuf>,
    swatch: Option<PathBuf>,
    dump_rig: bool,
}

impl Options {
    fn is_empty(&self) -> bool {
        self.kelvins.is_empty() && self.rig.is_none() && self.swatch.is_none() && !self.dump_rig
    }
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        // Numbers first so "-200" reads as a temperature, not a flag
        if let Ok(kelvin) = arg.parse::<f64>() {
            options.kelvins.push(kelvin);
            continue;
        }

        match arg.as_str() {
            "--rig" => {
                let path = iter.next().context("--rig needs a file path")?;
                options.rig = Some(PathBuf::from(path));
            }
            "--swatch" => {
                let path = iter.next().context("--swatch needs a file path")?;
                options.swatch = Some(PathBuf::from(path));
            }
            "--dump-rig" => options.dump_rig = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other => bail!("unrecognized argument '{}'\n\n{}", other, USAGE),
        }
    }

    Ok(options)
}

fn format_conversion(kelvin: f64) -> String {
    format!(
        "{} K -> {} (0x{:06X})",
        kelvin,
        kelvin_to_rgb(kelvin),
        kelvin_to_hex(kelvin)
    )
}

fn print_rig(rig: &LightRig) {
    println!("Rig '{}' ({} lights)", rig.name, rig.light_count());
    for light in &rig.lights {
        println!(
            "  {:<12} {:<12} {:>8.0} K x {:.2} -> {}",
            light.name,
            format!("{:?}", light.kind),
            light.kelvin,
            light.intensity,
            light.tint()
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut options = parse_args(&args)?;

    if options.is_empty() {
        log::debug!("No arguments, printing reference temperatures");
        options.kelvins.extend_from_slice(&REFERENCE_KELVINS);
    }

    for &kelvin in &options.kelvins {
        println!("{}", format_conversion(kelvin));
    }

    if let Some(path) = &options.rig {
        let rig = LightRig::load(path)
            .with_context(|| format!("failed to load rig {}", path.display()))?;
        print_rig(&rig);
    }

    if options.dump_rig {
        println!("{}", LightRig::bedroom().to_json_string()?);
    }

    if let Some(path) = &options.swatch {
        let swatch = Swatch::from_ramp(&KelvinRamp::full(), SWATCH_HEIGHT)?;
        swatch
            .save_png(path)
            .with_context(|| format!("failed to write swatch {}", path.display()))?;
        println!(
            "Wrote {}x{} swatch to {}",
            swatch.width,
            swatch.height,
            path.display()
        );
    }

    Ok(())
}
