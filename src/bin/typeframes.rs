use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use typeframes_promo::{
    EvalOpts, Evaluator, ExportOpts, FrameIndex, FrameRange, JsonLinesSink, Promo, PromoConfig,
    check_bounds, export_all, init_logging,
};

#[derive(Parser, Debug)]
#[command(name = "typeframes", version)]
struct Cli {
    /// Promo configuration JSON; built-in defaults when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the display tree of one frame as JSON.
    Frame(FrameArgs),
    /// Print scene ranges, transition windows and audio cues.
    Timeline,
    /// Write every frame as JSON lines.
    Export(ExportArgs),
    /// Evaluate every frame and report out-of-range properties.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Output JSON-lines path.
    #[arg(long)]
    out: PathBuf,

    /// Evaluate frames in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads when `--parallel` is set.
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per evaluation chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Evaluate frames in parallel.
    #[arg(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    init_logging(&config.logging);
    let promo = Promo::new(&config).context("build promo")?;

    match cli.cmd {
        Command::Frame(args) => cmd_frame(&promo, args),
        Command::Timeline => cmd_timeline(&promo),
        Command::Export(args) => cmd_export(&promo, args),
        Command::Check(args) => cmd_check(&promo, args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<PromoConfig> {
    match path {
        Some(p) => PromoConfig::from_path(p)
            .with_context(|| format!("load promo config '{}'", p.display())),
        None => Ok(PromoConfig::default()),
    }
}

fn cmd_frame(promo: &Promo, args: FrameArgs) -> anyhow::Result<()> {
    let frame = Evaluator::eval_frame(promo, FrameIndex(args.frame))
        .with_context(|| format!("evaluate frame {}", args.frame))?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(&out)
                .with_context(|| format!("create frame json '{}'", out.display()))?;
            serde_json::to_writer_pretty(BufWriter::new(f), &frame)
                .with_context(|| format!("write frame json '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            serde_json::to_writer_pretty(&mut lock, &frame).context("write frame json")?;
            writeln!(lock)?;
        }
    }
    Ok(())
}

fn cmd_timeline(promo: &Promo) -> anyhow::Result<()> {
    let series = promo.series();
    println!(
        "{} frames @ {} fps ({:.2}s)",
        promo.total_frames(),
        promo.fps().as_f64(),
        promo.fps().frames_to_secs(promo.total_frames())
    );
    for (i, scene) in promo.scenes().iter().enumerate() {
        if let Some(r) = series.range_of(i) {
            println!("scene {:<10} [{:>4}, {:>4})", scene.name(), r.start.0, r.end.0);
        }
    }
    for (i, w) in series.transition_windows().enumerate() {
        println!(
            "transition {} -> {}  [{:>4}, {:>4})",
            i,
            i + 1,
            w.start.0,
            w.end.0
        );
    }
    for cue in promo.audio().cues() {
        let span = cue.span(promo.total_frames());
        println!(
            "cue {:<10} [{:>4}, {:>4}) vol {:.2}{}",
            cue.id,
            span.start.0,
            span.end.0,
            cue.volume,
            if cue.looped { " loop" } else { "" }
        );
    }
    Ok(())
}

fn cmd_export(promo: &Promo, args: ExportArgs) -> anyhow::Result<()> {
    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let mut sink = JsonLinesSink::create(&args.out)?;
    let opts = ExportOpts {
        parallel: args.parallel,
        threads: args.threads,
        chunk_size: args.chunk_size,
    };
    let stats = export_all(promo, opts, &mut sink)
        .with_context(|| format!("export '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} frames, {} static)",
        args.out.display(),
        stats.frames_total,
        stats.frames_static
    );
    Ok(())
}

fn cmd_check(promo: &Promo, args: CheckArgs) -> anyhow::Result<()> {
    let expected = promo.timings().total_frames();
    if promo.total_frames() != expected {
        anyhow::bail!(
            "timeline spans {} frames, timings imply {expected}",
            promo.total_frames()
        );
    }

    let frames = Evaluator::eval_range(
        promo,
        FrameRange::with_len(0, promo.total_frames()),
        EvalOpts {
            parallel: args.parallel,
            threads: None,
        },
    )
    .context("evaluate promo")?;

    let mut violations = 0usize;
    for f in &frames {
        for v in check_bounds(f) {
            eprintln!("frame {}: {v}", f.frame.0);
            violations += 1;
        }
    }
    if violations > 0 {
        anyhow::bail!(
            "{violations} out-of-range properties across {} frames",
            frames.len()
        );
    }
    println!("ok: {} frames checked", frames.len());
    Ok(())
}
