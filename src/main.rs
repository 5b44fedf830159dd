use clap::Parser;
use bezreg::{PrimitiveCounts, RegularizeConfig, RegularizedPrimitive, Segment};
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bezreg", about = "Regularize freeform bezier segments into lines, corners and curves")]
struct Cli {
    /// Input JSON array of segments (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output JSON array of primitives (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON preset with any subset of the configuration fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Max deviation from 90 degrees for right-angle corners
    #[arg(long)]
    angle_threshold: Option<f64>,

    /// Curves with sampled curvature below this become lines
    #[arg(long)]
    curvature_threshold: Option<f64>,

    /// Max chord deviation for a curve to become a line (drawing units)
    #[arg(long)]
    straightness_threshold: Option<f64>,

    /// Max chord deviation of a right-angle curve, as a fraction of chord length
    #[arg(long)]
    corner_straightness_threshold: Option<f64>,

    /// Samples taken along a curve when measuring chord deviation
    #[arg(long)]
    straightness_samples: Option<usize>,

    /// Split points per unclassified curve
    #[arg(short = 'n', long)]
    subdivisions: Option<usize>,

    /// Re-classify subdivided pieces up to this depth (0 = off)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Classify segments in parallel
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => RegularizeConfig::default(),
    };
    let config = apply_overrides(&cli, base);
    config.validate()?;

    let segments = read_segments(cli.input.as_ref())?;
    let primitives = if cli.parallel {
        bezreg::regularize_parallel(&segments, &config)?
    } else {
        bezreg::regularize(&segments, &config)?
    };
    write_primitives(cli.output.as_ref(), &primitives)?;

    let counts = PrimitiveCounts::tally(&primitives);
    eprintln!(
        "  Regularize  {} segments \u{2192} {} lines \u{00b7} {} corners \u{00b7} {} curves",
        segments.len(),
        counts.lines,
        counts.corner_pairs,
        counts.curves,
    );
    if let Some(path) = &cli.output {
        eprintln!("  \u{2713} {}", path.display());
    }

    Ok(())
}

/// Flags given on the command line win over the preset.
fn apply_overrides(cli: &Cli, base: RegularizeConfig) -> RegularizeConfig {
    RegularizeConfig {
        angle_threshold: cli.angle_threshold.unwrap_or(base.angle_threshold),
        corner_straightness_threshold: cli
            .corner_straightness_threshold
            .unwrap_or(base.corner_straightness_threshold),
        straightness_threshold: cli.straightness_threshold.unwrap_or(base.straightness_threshold),
        straightness_samples: cli.straightness_samples.unwrap_or(base.straightness_samples),
        curvature_threshold: cli.curvature_threshold.unwrap_or(base.curvature_threshold),
        subdivision_count: cli.subdivisions.unwrap_or(base.subdivision_count),
        max_depth: cli.max_depth.unwrap_or(base.max_depth),
    }
}

fn read_segments(path: Option<&PathBuf>) -> Result<Vec<Segment>, bezreg::RegularizeError> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&text)?)
}

fn write_primitives(
    path: Option<&PathBuf>,
    primitives: &[RegularizedPrimitive],
) -> Result<(), bezreg::RegularizeError> {
    let json = serde_json::to_string_pretty(primitives)?;
    match path {
        Some(path) => std::fs::write(path, json)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
