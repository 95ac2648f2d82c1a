use anyhow::Result;
use clap::{Parser, Subcommand};
use hull2::scatter::{draw_scatter, ReplayToken, ScatterCfg, Spread};
use hull2::{compute_hull, compute_hull_cfg, HullCfg};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Point-canvas hull driver")]
struct Cmd {
    /// Optional run label; propagated to output metadata and logs
    #[arg(long)]
    label: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw a random point scatter and write it as a points JSON file
    Scatter {
        #[arg(long, default_value_t = 200)]
        count: usize,
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        #[arg(long, default_value_t = 50.0)]
        margin: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Uniform spread instead of the clustered default
        #[arg(long)]
        uniform: bool,
        #[arg(long)]
        out: String,
    },
    /// Compute the convex hull of a points JSON file
    Hull {
        #[arg(long)]
        input: String,
        /// Write hull JSON here instead of stdout
        #[arg(long)]
        out: Option<String>,
        /// Orientation tolerance for near-collinear points
        #[arg(long, default_value_t = 1e-9)]
        eps: f64,
    },
    /// Scatter and hull in one run; print the hull JSON
    Demo {
        #[arg(long, default_value_t = 200)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Scatter {
            count,
            width,
            height,
            margin,
            seed,
            index,
            uniform,
            out,
        } => {
            let cfg = ScatterCfg {
                count,
                width,
                height,
                margin,
                spread: if uniform {
                    Spread::Uniform
                } else {
                    Spread::Clustered
                },
            };
            scatter(cfg, ReplayToken { seed, index }, out, cmd.label)
        }
        Action::Hull { input, out, eps } => hull(input, out, HullCfg { eps }, cmd.label),
        Action::Demo { count, seed, out } => demo(count, seed, out, cmd.label),
    }
}

fn scatter(cfg: ScatterCfg, tok: ReplayToken, out: String, label: Option<String>) -> Result<()> {
    tracing::info!(
        count = cfg.count,
        seed = tok.seed,
        index = tok.index,
        out,
        "scatter"
    );
    let pts = draw_scatter(cfg, tok);
    points::write_points(&out, &pts)?;
    write_meta(
        Path::new(&out),
        serde_json::json!({
            "action": "scatter",
            "count": cfg.count,
            "width": cfg.width,
            "height": cfg.height,
            "margin": cfg.margin,
            "spread": format!("{:?}", cfg.spread),
            "seed": tok.seed,
            "index": tok.index,
        }),
        label,
    )?;
    Ok(())
}

fn hull(input: String, out: Option<String>, cfg: HullCfg, label: Option<String>) -> Result<()> {
    let pts = points::read_points(&input)?;
    let hull = compute_hull_cfg(&pts, cfg);
    tracing::info!(
        input,
        n = pts.len(),
        kind = points::hull_kind(&hull),
        vertices = hull.len(),
        "hull"
    );
    let doc = points::hull_to_json(&hull);
    match out {
        Some(out) => {
            points::write_json(&out, &doc)?;
            write_meta(
                Path::new(&out),
                serde_json::json!({
                    "action": "hull",
                    "input": input,
                    "eps": cfg.eps,
                    "n": pts.len(),
                }),
                label,
            )?;
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn demo(count: usize, seed: u64, out: Option<String>, label: Option<String>) -> Result<()> {
    let cfg = ScatterCfg {
        count,
        ..ScatterCfg::default()
    };
    let pts = draw_scatter(cfg, ReplayToken { seed, index: 0 });
    let hull = compute_hull(&pts);
    tracing::info!(
        count,
        seed,
        kind = points::hull_kind(&hull),
        vertices = hull.len(),
        area = hull.area(),
        "demo"
    );
    let doc = points::hull_to_json(&hull);
    match out {
        Some(out) => {
            points::write_json(&out, &doc)?;
            write_meta(
                Path::new(&out),
                serde_json::json!({"action": "demo", "count": count, "seed": seed}),
                label,
            )?;
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

/// Metadata sidecar next to each written artifact.
fn write_meta(artifact: &Path, params: serde_json::Value, label: Option<String>) -> Result<()> {
    let doc = serde_json::json!({
        "hull2_version": hull2::VERSION,
        "label": label,
        "params": params,
        "outputs": [artifact.to_string_lossy()],
    });
    points::write_json(points::meta_path(artifact), &doc)
}
