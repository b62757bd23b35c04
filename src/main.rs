use anyhow::Context;
use clap::{Parser, Subcommand};
use incidence_graph::algo::topological_sort;
use incidence_graph::export::{export, ExportData, ExportFormat};
use incidence_graph::graph::Graph;
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "incidence-graph")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Incidence-matrix graphs with traversal and ordering algorithms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the course prerequisite graph and print a study order
    Courses {
        /// Output format (text, markdown)
        #[arg(short, long, default_value = "text")]
        format: ExportFormat,

        /// Build the graph without orientation (no study order is printed)
        #[arg(short, long)]
        undirected: bool,
    },
    /// Show version information
    Version,
}

const COURSES: [&str; 10] = [
    "Business Management",
    "Human Sciences",
    "Mathematics 1",
    "Mathematics 2",
    "Physics 1",
    "Physics 2",
    "Mechanics 1",
    "Mechanics 2",
    "Software 1",
    "Software 2",
];

const PREREQUISITES: [(&str, &str); 7] = [
    ("Mathematics 1", "Mathematics 2"),
    ("Physics 1", "Physics 2"),
    ("Mechanics 1", "Mechanics 2"),
    ("Software 1", "Software 2"),
    ("Mathematics 1", "Software 1"),
    ("Mathematics 1", "Mechanics 1"),
    ("Physics 1", "Mechanics 1"),
];

fn init_tracing() {
    let filter = EnvFilter::try_from_env("INCIDENCE_GRAPH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("incidence_graph=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}

fn run_courses(format: ExportFormat, undirected: bool) -> anyhow::Result<()> {
    let mut graph = Graph::new(COURSES, PREREQUISITES, !undirected)
        .context("failed to build the course graph")?;
    tracing::info!(
        courses = graph.order(),
        prerequisites = graph.edge_count(),
        "built course graph"
    );

    let mut data = ExportData::new(&graph);
    if graph.is_oriented() {
        let order = topological_sort(&mut graph).context("failed to order courses")?;
        data = data.with_topological_order(order);
    }

    let stdout = io::stdout();
    export(format, &data, &mut stdout.lock()).context("failed to write the graph")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Courses { format, undirected }) => run_courses(format, undirected)?,
        Some(Commands::Version) => {
            println!("incidence-graph v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            println!("incidence-graph - Incidence-Matrix Graph Toolkit");
            println!("Run 'incidence-graph courses' to order the sample course graph");
            println!("Run 'incidence-graph --help' for more information");
        }
    }
    Ok(())
}
