use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Thread-count default for `frames --parallel` when `--threads` is not given.
const THREADS_ENV: &str = "WAVYTE_LOGO_THREADS";

#[derive(Parser, Debug)]
#[command(name = "wavyte-logo", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scene description of one frame.
    Scene(SceneArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a frame range as a numbered PNG sequence.
    Frames(FramesArgs),
    /// Report how many frames the logo springs need to settle.
    Settle(SettleArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SceneFormat {
    Json,
    Svg,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Input composition JSON. Defaults are used when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output encoding.
    #[arg(long, value_enum, default_value_t = SceneFormat::Json)]
    format: SceneFormat,

    /// Write to this path instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input composition JSON. Defaults are used when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Background color (hex); transparent when omitted.
    #[arg(long)]
    background: Option<String>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input composition JSON. Defaults are used when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output directory; frames are written as `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// First frame (inclusive). Defaults to 0.
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive). Defaults to the clip duration.
    #[arg(long)]
    end: Option<u64>,

    /// Background color (hex); transparent when omitted.
    #[arg(long)]
    background: Option<String>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Enable static-frame elision within chunks.
    #[arg(long, default_value_t = false)]
    static_frame_elision: bool,
}

#[derive(Parser, Debug)]
struct SettleArgs {
    /// Input composition JSON. Defaults are used when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Distance from the target that counts as settled.
    #[arg(long, default_value_t = 0.005)]
    threshold: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Scene(args) => cmd_scene(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Settle(args) => cmd_settle(args),
    }
}

fn load_composition(path: Option<&Path>) -> anyhow::Result<wavyte_logo::Composition> {
    let Some(path) = path else {
        return Ok(wavyte_logo::Composition::new(
            wavyte_logo::VideoConfig::default(),
            wavyte_logo::LogoProps::default(),
            0,
        )?);
    };
    let file =
        std::fs::File::open(path).with_context(|| format!("open '{}'", path.display()))?;
    let comp = wavyte_logo::Composition::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("parse composition '{}'", path.display()))?;
    Ok(comp)
}

fn rasterizer(background: Option<&str>) -> anyhow::Result<wavyte_logo::ResvgRasterizer> {
    let r = wavyte_logo::ResvgRasterizer::new();
    Ok(match background {
        Some(hex) => r.with_clear(hex.parse::<wavyte_logo::Color>()?),
        None => r,
    })
}

fn write_png(path: &Path, frame: &wavyte_logo::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

/// Writes each frame as `frame_NNNNN.png` as soon as its chunk is done.
struct PngSequence {
    dir: PathBuf,
}

impl wavyte_logo::FrameSink for PngSequence {
    fn write_frame(
        &mut self,
        frame: wavyte_logo::FrameIndex,
        rgba: wavyte_logo::FrameRGBA,
    ) -> wavyte_logo::LogoResult<()> {
        write_png(&self.dir.join(format!("frame_{:05}.png", frame.0)), &rgba)?;
        Ok(())
    }
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let comp = load_composition(args.in_path.as_deref())?;
    let scene = comp.scene(wavyte_logo::FrameIndex(args.frame));
    let text = match args.format {
        SceneFormat::Json => scene.to_json_pretty()?,
        SceneFormat::Svg => wavyte_logo::to_svg(&scene),
    };

    match args.out {
        Some(out) => {
            std::fs::write(&out, text).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = load_composition(args.in_path.as_deref())?;
    let r = rasterizer(args.background.as_deref())?;
    let frame = wavyte_logo::render_frame(&comp, wavyte_logo::FrameIndex(args.frame), &r)?;
    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let comp = load_composition(args.in_path.as_deref())?;
    let r = rasterizer(args.background.as_deref())?;

    let end = args.end.unwrap_or(comp.video().duration_in_frames);
    let range = wavyte_logo::FrameRange::new(
        wavyte_logo::FrameIndex(args.start),
        wavyte_logo::FrameIndex(end),
    )?;

    let threads = match args.threads {
        Some(n) => Some(n),
        None => match std::env::var(THREADS_ENV) {
            Ok(v) => Some(
                v.trim()
                    .parse::<usize>()
                    .with_context(|| format!("{THREADS_ENV} must be a thread count, got '{v}'"))?,
            ),
            Err(_) => None,
        },
    };
    let threading = wavyte_logo::RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads,
        static_frame_elision: args.static_frame_elision,
    };

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let mut sink = PngSequence {
        dir: args.out_dir.clone(),
    };
    let mut observer = wavyte_logo::default_observer();
    let stats = wavyte_logo::render_frames_to(
        &comp,
        range,
        &r,
        &threading,
        observer.as_mut(),
        &mut sink,
    )?;

    eprintln!(
        "wrote {} frames to {} ({} rendered, {} elided)",
        stats.frames_total,
        args.out_dir.display(),
        stats.frames_rendered,
        stats.frames_elided
    );
    Ok(())
}

fn cmd_settle(args: SettleArgs) -> anyhow::Result<()> {
    let comp = load_composition(args.in_path.as_deref())?;
    let fps = comp.video().fps;
    let mut springs = comp.logo().springs().to_vec();
    springs.push(("title", comp.title().spring_config()));
    for (name, cfg) in springs {
        let frames = wavyte_logo::measure_spring(fps, &cfg, args.threshold)?;
        println!("{name}: {frames} frames");
    }
    Ok(())
}
