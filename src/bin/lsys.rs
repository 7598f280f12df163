use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lsys", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in grammars.
    List,
    /// Expand a grammar and print a summary (or the command sequence as JSON).
    Expand(ExpandArgs),
    /// Run the animation for a number of ticks and write the last frame as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct ExpandArgs {
    /// Catalogue grammar name.
    #[arg(long)]
    grammar: String,

    /// Override the grammar's iteration count.
    #[arg(long)]
    iterations: Option<i64>,

    /// Print the full command sequence as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Source {
    /// Configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalogue grammar name, with default settings.
    #[arg(long)]
    grammar: Option<String>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: Source,

    /// Number of ticks to run before capturing.
    #[arg(long, default_value_t = 50)]
    ticks: u64,

    /// Surface size as `WIDTHxHEIGHT`.
    #[arg(long, default_value = "600x700", value_parser = parse_size)]
    size: (u32, u32),

    /// Sleep out the refresh interval between ticks.
    #[arg(long)]
    paced: bool,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: u32 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let h: u32 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    if w == 0 || h == 0 {
        return Err("size must be non-zero".to_string());
    }
    Ok((w, h))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Expand(args) => cmd_expand(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn cmd_list() -> anyhow::Result<()> {
    for name in lsys::grammar::catalogue::names() {
        let desc = lsys::grammar::catalogue::require(name)?;
        println!(
            "{name:<12} seed={:<8} iterations={:<3} angle={}",
            desc.seed, desc.iterations, desc.turn_angle
        );
    }
    Ok(())
}

fn cmd_expand(args: ExpandArgs) -> anyhow::Result<()> {
    let config = lsys::Config {
        iterations: args.iterations,
        ..lsys::Config::for_grammar(args.grammar.as_str())
    };
    let request = config
        .resolve()
        .with_context(|| format!("resolve grammar '{}'", args.grammar))?;
    let generated = lsys::generate(&request, &config.viewport(600.0, 700.0))
        .with_context(|| format!("expand grammar '{}'", args.grammar))?;

    if args.json {
        let text = serde_json::to_string_pretty(&generated.commands)
            .context("serialize command sequence")?;
        println!("{text}");
        return Ok(());
    }

    let bounds = generated.layout.bounds;
    println!("grammar:        {}", request.description.name);
    println!("iterations:     {}", request.iterations);
    println!("commands:       {}", generated.commands.len());
    println!(
        "drawing moves:  {}",
        generated.commands.count_drawing_moves()
    );
    println!(
        "extents:        x [{}, {}]  y [{}, {}]",
        bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
    );
    println!("scale:          {}", generated.layout.scale);
    Ok(())
}

fn read_config(path: &Path) -> anyhow::Result<lsys::Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("open config '{}'", path.display()))?;
    let config = lsys::Config::from_json(&text)
        .with_context(|| format!("parse config '{}'", path.display()))?;
    Ok(config)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = match (&args.source.config, &args.source.grammar) {
        (Some(path), _) => read_config(path)?,
        (None, Some(name)) => lsys::Config::for_grammar(name.as_str()),
        (None, None) => anyhow::bail!("either --config or --grammar is required"),
    };

    let (width, height) = args.size;
    let mut surface = lsys::CpuSurface::new(width, height)?;
    let mut engine = lsys::DrawingEngine::new(config, width, height);
    engine.wait_ready();
    if let Some(err) = engine.error() {
        anyhow::bail!("generation failed: {err}");
    }

    let phase = engine.run_ticks(&mut surface, args.ticks, args.paced)?;
    tracing::info!(?phase, ticks = engine.ticks(), "capturing frame");

    let frame = surface.snapshot();
    let (fw, fh) = (frame.width, frame.height);
    let rgba = frame.into_straight_rgba8();

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &rgba,
        fw,
        fh,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
