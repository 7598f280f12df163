use std::path::PathBuf;

use lsys::{Config, CpuSurface, DrawingEngine, Phase, Placement};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let grammar = std::env::args().nth(1).unwrap_or_else(|| "hilbert".to_string());
    let config = Config {
        placement: Placement::Centered,
        iterations: Some(4),
        ..Config::for_grammar(grammar.as_str())
    };

    let (width, height) = (512, 512);
    let mut surface = CpuSurface::new(width, height)?;
    let mut engine = DrawingEngine::new(config, width, height);
    if engine.wait_ready() == Phase::Error {
        anyhow::bail!("generation failed: {:?}", engine.error());
    }

    let out_dir = PathBuf::from("target").join("demos").join(&grammar);
    std::fs::create_dir_all(&out_dir)?;

    // Capture a frame every 32 ticks, plus the tick on which the first fade begins.
    let mut shot = 0u32;
    loop {
        engine.tick_until(&mut surface, 32, |e| e.phase() == Phase::Fading)?;
        let phase = engine.phase();
        let frame = surface.snapshot();
        let (w, h) = (frame.width, frame.height);
        let path = out_dir.join(format!("{shot:03}.png"));
        image::save_buffer_with_format(
            &path,
            &frame.into_straight_rgba8(),
            w,
            h,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )?;
        shot += 1;
        if phase != Phase::Drawing {
            break;
        }
    }

    eprintln!("wrote {shot} frames to {}", out_dir.display());
    Ok(())
}
