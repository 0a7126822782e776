use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use pincraft::{
    jitter_offsets, render, sanitize_file_name, save_png, template_for, validate, AssetConfig,
    Background, PinRequest, PreparedAssetStore,
};

#[derive(Parser, Debug)]
#[command(name = "pincraft", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single preview PNG with one background.
    Preview(PreviewArgs),
    /// Render and save the final pin with both backgrounds.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input pin request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory holding bg1.png and bg2.png; relative item sources resolve
    /// against it.
    #[arg(long)]
    assets: PathBuf,

    /// Font file used for all text.
    #[arg(long)]
    font: PathBuf,

    /// Background to preview with (1 or 2).
    #[arg(long, default_value_t = 1)]
    background: u8,

    /// Jitter seed; the same seed reproduces the same pin.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input pin request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory holding bg1.png and bg2.png; relative item sources resolve
    /// against it.
    #[arg(long)]
    assets: PathBuf,

    /// Font file used for all text.
    #[arg(long)]
    font: PathBuf,

    /// Jitter seed; the same seed reproduces the same pin.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output directory; files land in `<out>/<sanitized title>/`.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Preview(args) => cmd_preview(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_request(path: &PathBuf) -> anyhow::Result<PinRequest> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read request '{}'", path.display()))?;
    let request: PinRequest = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse request '{}'", path.display()))?;
    validate(&request)?;
    Ok(request)
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let request = load_request(&args.in_path)?;
    let template = template_for(request.items.len(), request.has_footer())?;

    let background = match args.background {
        1 => Background::Primary,
        2 => Background::Secondary,
        other => anyhow::bail!("background must be 1 or 2, got {other}"),
    };
    let cfg = AssetConfig {
        assets_root: args.assets,
        background,
        font_file: args.font,
    };
    let assets = PreparedAssetStore::prepare(&request, &cfg)?;

    let offsets = jitter_offsets(args.seed, request.items.len().min(template.slots.len()));
    let frame = render(&request, &template, &assets, &offsets)?;
    save_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let request = load_request(&args.in_path)?;
    let template = template_for(request.items.len(), request.has_footer())?;

    let title = sanitize_file_name(&request.title, 199);
    let out_dir = args.out.join(&title);

    let offsets = jitter_offsets(args.seed, request.items.len().min(template.slots.len()));

    // Both backgrounds share the same offsets so the pair matches the preview.
    for (n, background) in [(1u8, Background::Primary), (2, Background::Secondary)] {
        let cfg = AssetConfig {
            assets_root: args.assets.clone(),
            background,
            font_file: args.font.clone(),
        };
        let assets = PreparedAssetStore::prepare(&request, &cfg)?;
        let frame = render(&request, &template, &assets, &offsets)?;
        let path = out_dir.join(format!("{title}{n}.png"));
        save_png(&frame, &path)?;
        eprintln!("wrote {}", path.display());
    }

    Ok(())
}
