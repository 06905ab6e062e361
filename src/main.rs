//! lattice-lab: command line explorer for exceptional root systems.

use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use exceptional_lattice::prelude::*;

/// Explore the root systems of G₂, F₄, E₆, E₇ and E₈ in two dimensions
#[derive(Parser)]
#[command(name = "lattice-lab")]
#[command(version)]
#[command(about = "Project exceptional Lie group root systems onto the plane")]
struct Cli {
    /// TOML file supplying default group and slider values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported groups
    Groups,
    /// Print every root of a group with its force category
    Roots {
        #[arg(short, long)]
        group: Option<LieGroupType>,
    },
    /// Project a root system onto the plane
    Project {
        #[arg(short, long)]
        group: Option<LieGroupType>,
        /// Planar rotation in radians
        #[arg(long)]
        angle: Option<f64>,
        /// Blend between reference (0) and Petrie (1) basis
        #[arg(long)]
        progress: Option<f64>,
        /// Wick drift strength
        #[arg(long)]
        wick: Option<f64>,
        /// Drift phase
        #[arg(long, default_value_t = 0.0)]
        time: f64,
        /// Rank used for the Petrie basis instead of the group's own
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rank: Option<u32>,
        /// Use a random basis (seeded from the config when it has a seed)
        #[arg(long, conflicts_with = "rank")]
        random: bool,
    },
    /// Split a root into two roots of the same system
    Decay {
        #[arg(short, long)]
        group: Option<LieGroupType>,
        #[arg(short, long)]
        index: usize,
    },
    /// Walk one slider across a range and report the cosmic era per step
    Sweep {
        #[arg(short, long, value_enum, default_value_t = SweepArg::Temperature)]
        parameter: SweepArg,
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        #[arg(long, default_value_t = 1.0)]
        end: f64,
        #[arg(long, default_value_t = 5)]
        steps: usize,
    },
    /// Nearest-neighbour graph statistics
    Edges {
        #[arg(short, long)]
        group: Option<LieGroupType>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SweepArg {
    Temperature,
    Renormalization,
    Wick,
}

impl From<SweepArg> for SweepParameter {
    fn from(arg: SweepArg) -> Self {
        match arg {
            SweepArg::Temperature => SweepParameter::Temperature,
            SweepArg::Renormalization => SweepParameter::Renormalization,
            SweepArg::Wick => SweepParameter::Wick,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Without -v the level comes from RUST_LOG, falling back to warn.
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = verbosity_filter(cli.verbose) {
        logger.filter_level(level);
    }
    logger.init();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn verbosity_filter(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => {
            info!("loading config from {}", path.display());
            ExplorerConfig::from_file(path)?
        }
        None => ExplorerConfig::default(),
    };

    match cli.command {
        Commands::Groups => cmd_groups(cli.json),
        Commands::Roots { group } => cmd_roots(group.unwrap_or(config.group), cli.json),
        Commands::Project {
            group,
            angle,
            progress,
            wick,
            time,
            rank,
            random,
        } => {
            let group = group.unwrap_or(config.group);
            let params = ProjectionParams {
                angle: angle.unwrap_or(config.angle),
                progress: progress.unwrap_or(config.progress),
                wick_rotation: wick.unwrap_or(config.wick_rotation),
                universe_time: time,
            };
            let basis = if random {
                let mut rng = match config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                Basis::random(&mut rng)
            } else {
                petrie_basis(rank.map_or_else(|| group.petrie_rank(), |r| r as usize))
            };
            cmd_project(group, &basis, &params, cli.json)
        }
        Commands::Decay { group, index } => {
            cmd_decay(group.unwrap_or(config.group), index, &config, cli.json)
        }
        Commands::Sweep {
            parameter,
            start,
            end,
            steps,
        } => {
            let sweep = ParameterSweep {
                parameter: parameter.into(),
                start,
                end,
                steps,
            };
            cmd_sweep(&sweep, cli.json)
        }
        Commands::Edges { group } => cmd_edges(group.unwrap_or(config.group), cli.json),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn banner(title: &str) {
    println!("━━━ {} ━━━", title);
    println!();
}

fn cmd_groups(json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        return print_json(&LIE_GROUPS);
    }
    banner("Exceptional Lie Groups");
    println!("  {:>4}  {:>4}  {:>9}  {:>6}  {:>6}", "id", "rank", "dimension", "roots", "petrie");
    println!("  {:─>4}  {:─>4}  {:─>9}  {:─>6}  {:─>6}", "", "", "", "", "");
    for d in &LIE_GROUPS {
        println!(
            "  {:>4}  {:>4}  {:>9}  {:>6}  {:>6}",
            d.id.to_string(),
            d.rank,
            d.dimension,
            d.root_count,
            d.id.petrie_rank()
        );
    }
    println!();
    for d in &LIE_GROUPS {
        println!("  {}: {}", d.name, d.description);
    }
    Ok(())
}

fn cmd_roots(group: LieGroupType, json: bool) -> Result<(), Box<dyn Error>> {
    let roots = generate_roots(group);
    if json {
        return print_json(&roots);
    }
    banner(&format!("{} Root System ({} roots)", group, roots.len()));
    for (i, r) in roots.iter().enumerate() {
        println!("  {:>4}  {}", i, r);
    }
    println!();

    let mut census: BTreeMap<&'static str, usize> = BTreeMap::new();
    for r in &roots {
        *census.entry(r.category.label()).or_default() += 1;
    }
    println!("  Census:");
    for (label, count) in census {
        println!("    {:<16} {:>4}", label, count);
    }
    Ok(())
}

fn cmd_project(
    group: LieGroupType,
    basis: &Basis,
    params: &ProjectionParams,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let roots = generate_roots(group);
    let nodes: Vec<Node2D> = project(&roots, basis, params)
        .iter()
        .map(|p| p.to_owned_node())
        .collect();
    if json {
        return print_json(&nodes);
    }
    banner(&format!(
        "{} Projection (θ = {:.3}, progress = {:.2}, wick = {:.2}, t = {:.2})",
        group, params.angle, params.progress, params.wick_rotation, params.universe_time
    ));
    println!("  {:>4}  {:>10}  {:>10}  {:<16}", "id", "x", "y", "category");
    println!("  {:─>4}  {:─>10}  {:─>10}  {:─<16}", "", "", "", "");
    for n in &nodes {
        println!("  {:>4}  {:>10.5}  {:>10.5}  {:<16}", n.id, n.x, n.y, n.category.label());
    }
    Ok(())
}

fn cmd_decay(
    group: LieGroupType,
    index: usize,
    config: &ExplorerConfig,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let mut session = ExplorerSession::new(&ExplorerConfig {
        group,
        ..config.clone()
    });
    session.select(index)?;
    let event = session.decay_selected();

    if json {
        return print_json(&event.as_ref().map(|e| &e.interaction));
    }
    banner(&format!("{} Decay of node {}", group, index));
    match event {
        Some(e) => {
            let [beta, gamma] = &e.interaction.children;
            println!("  α = {}", e.interaction.parent);
            println!("  β = {}", beta);
            println!("  γ = {}", gamma);
            println!();
            println!(
                "  screen: ({:.3}, {:.3}) → ({:.3}, {:.3}) + ({:.3}, {:.3})",
                e.parent_position.x,
                e.parent_position.y,
                e.child_positions[0].x,
                e.child_positions[0].y,
                e.child_positions[1].x,
                e.child_positions[1].y
            );
            println!("  γ propagator: {:?}", gamma.category.propagator_style());
        }
        None => println!("  no decay channel"),
    }
    Ok(())
}

fn cmd_sweep(sweep: &ParameterSweep, json: bool) -> Result<(), Box<dyn Error>> {
    let points = sweep.points()?;
    if json {
        return print_json(&points);
    }
    banner(&format!("Sweep of {:?}", sweep.parameter));
    println!(
        "  {:>5}  {:>11}  {:>15}  {:>6}  {:<14}  {:>11}",
        "step", "temperature", "renormalization", "wick", "era", "unification"
    );
    println!(
        "  {:─>5}  {:─>11}  {:─>15}  {:─>6}  {:─<14}  {:─>11}",
        "", "", "", "", "", ""
    );
    for (i, p) in points.iter().enumerate() {
        let cosmic = CosmicState::from_temperature(p.temperature);
        println!(
            "  {:>5}  {:>11.3}  {:>15.3}  {:>6.3}  {:<14}  {:>11.1}",
            i,
            p.temperature,
            p.renormalization,
            p.wick,
            cosmic.era.label(),
            cosmic.unification
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct EdgeSummary {
    group: LieGroupType,
    roots: usize,
    edges: usize,
    min_degree: usize,
    max_degree: usize,
}

fn cmd_edges(group: LieGroupType, json: bool) -> Result<(), Box<dyn Error>> {
    let roots = generate_roots(group);
    let edges = root_edges(&roots);
    let deg = degrees(roots.len(), &edges);
    let summary = EdgeSummary {
        group,
        roots: roots.len(),
        edges: edges.len(),
        min_degree: deg.iter().copied().min().unwrap_or(0),
        max_degree: deg.iter().copied().max().unwrap_or(0),
    };
    if json {
        return print_json(&summary);
    }
    banner(&format!("{} Root Graph", group));
    println!("  Roots:       {}", summary.roots);
    println!("  Edges:       {}", summary.edges);
    println!("  Degree:      {}..={}", summary.min_degree, summary.max_degree);
    Ok(())
}
