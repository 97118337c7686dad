use clap::{Parser, Subcommand, ValueEnum};
use collinear_points::tools::{format_segments, load_points, same_segment_set, save_render};
use collinear_points::{
    Algorithm, BruteForceDetector, CollinearDetector, FastDetector, Point, SortedPoints,
    build_detector,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "collinear", version, about = "Find line segments through 4+ collinear points")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Brute,
    Fast,
    Parallel,
    Auto,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Brute => Algorithm::BruteForce,
            AlgorithmArg::Fast => Algorithm::Fast,
            AlgorithmArg::Parallel => Algorithm::FastParallel,
            AlgorithmArg::Auto => Algorithm::Auto,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print every segment found in a point file
    Detect {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value = "auto")]
        algorithm: AlgorithmArg,
    },
    /// Run brute force and fast detection and check they agree
    Compare {
        #[arg(long)]
        input: PathBuf,
    },
    /// Draw points and segments to an image file
    Render {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long, default_value_t = 512)]
        size: u32,
        #[arg(long, value_enum, default_value = "auto")]
        algorithm: AlgorithmArg,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Detect { input, algorithm } => detect_cmd(&input, algorithm.into()),
        Command::Compare { input } => compare_cmd(&input),
        Command::Render {
            input,
            output,
            size,
            algorithm,
        } => render_cmd(&input, &output, size, algorithm.into()),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn read_input(input: &Path) -> collinear_points::Result<Vec<Point>> {
    let points = load_points(input)?;
    log::info!("loaded {} points from {}", points.len(), input.display());
    Ok(points)
}

fn detect_cmd(input: &Path, algorithm: Algorithm) -> collinear_points::Result<ExitCode> {
    let points = read_input(input)?;
    let start = Instant::now();
    let detector = build_detector(&points, algorithm)?;
    log::info!(
        "{} detector found {} segments in {:.2?}",
        detector.algorithm(),
        detector.segment_count(),
        start.elapsed()
    );
    print!("{}", format_segments(&detector.segments()));
    Ok(ExitCode::SUCCESS)
}

fn compare_cmd(input: &Path) -> collinear_points::Result<ExitCode> {
    let points = read_input(input)?;
    let sorted = SortedPoints::new(&points)?;

    let start = Instant::now();
    let brute = BruteForceDetector::from_sorted(&sorted);
    let brute_elapsed = start.elapsed();

    let start = Instant::now();
    let fast = FastDetector::from_sorted(&sorted)?;
    let fast_elapsed = start.elapsed();

    println!(
        "brute: {} segments ({:.2?})",
        brute.segment_count(),
        brute_elapsed
    );
    println!(
        "fast:  {} segments ({:.2?})",
        fast.segment_count(),
        fast_elapsed
    );

    if same_segment_set(&brute.segments(), &fast.segments()) {
        println!("results agree");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("results differ");
        println!("--- brute\n{}", format_segments(&brute.segments()));
        println!("--- fast\n{}", format_segments(&fast.segments()));
        Ok(ExitCode::FAILURE)
    }
}

fn render_cmd(
    input: &Path,
    output: &Path,
    size: u32,
    algorithm: Algorithm,
) -> collinear_points::Result<ExitCode> {
    let points = read_input(input)?;
    let detector = build_detector(&points, algorithm)?;
    let segments = detector.segments();
    save_render(output, &points, &segments, size)?;
    log::info!(
        "wrote {} segments over {} points to {}",
        segments.len(),
        points.len(),
        output.display()
    );
    Ok(ExitCode::SUCCESS)
}
