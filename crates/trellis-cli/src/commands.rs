//! CLI command implementations.

use crate::config::{Config, STATE_DIR};
use colored::Colorize;
use std::path::Path;
use tracing::{debug, warn};
use trellis_graph::{
    breadth_first, traverse_with, GraphStore, PredecessorMap, TraversalOrder, ROOT_SENTINEL,
};
use trellis_scene::{NodeId, Scene};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Initialize Trellis in a directory.
pub fn init(path: &Path) -> Result<()> {
    match Config::load(path) {
        Ok(_) if Config::path(path).exists() => {
            println!("{} Already initialized", "✓".green());
            return Ok(());
        }
        Ok(_) => {}
        Err(e) => warn!("replacing unreadable config: {}", e),
    }

    Config::default().save(path)?;

    println!("{} Initialized Trellis in {}", "✓".green(), path.join(STATE_DIR).display());
    println!("  Run {} to inspect a scene file", "trellis show <file>".cyan());

    Ok(())
}

/// Print a scene's adjacency list.
pub fn show(file: &Path, json: bool) -> Result<()> {
    let scene = load_scene(file)?;

    if json {
        let export = serde_json::json!({
            "stats": scene.graph().stats(),
            "scene": scene,
        });
        println!("{}", serde_json::to_string_pretty(&export)?);
        return Ok(());
    }

    let stats = scene.graph().stats();
    println!(
        "{} {} nodes, {} edges",
        "Graph:".cyan().bold(),
        stats.node_count,
        stats.edge_count
    );
    println!();
    print!("{}", scene.graph());

    Ok(())
}

/// List every edge, marking bidirectional pairs.
pub fn edges(file: &Path) -> Result<()> {
    let scene = load_scene(file)?;
    let edges = scene.edges();

    if edges.is_empty() {
        println!("No edges in {}", file.display());
        return Ok(());
    }

    println!("Found {} edges:\n", edges.len());
    for edge in edges {
        let arrow = if edge.bidirectional { "<->" } else { "->" };
        println!(
            "  {} {} {} {}",
            scene.label(edge.from).cyan(),
            arrow.yellow(),
            scene.label(edge.to).cyan(),
            format!("({})", edge.weight).dimmed()
        );
    }

    Ok(())
}

/// Traverse the graph from a start node and print the predecessor map.
pub fn traverse(
    file: &Path,
    start: NodeId,
    order: TraversalOrder,
    trace: bool,
    json: bool,
) -> Result<()> {
    let scene = load_scene(file)?;

    let tree = traverse_with(scene.graph(), &start, order, |node, parent| {
        if trace {
            match parent {
                Some(parent) => println!(
                    "  {} {} {} {}",
                    "discovered".dimmed(),
                    scene.label(*node).cyan(),
                    "from".dimmed(),
                    scene.label(*parent)
                ),
                None => println!("  {} {}", "start".dimmed(), scene.label(*node).cyan()),
            }
        }
    })?;

    if json {
        let export = serde_json::json!({
            "order": order,
            "start": start,
            "predecessors": tree,
        });
        println!("{}", serde_json::to_string_pretty(&export)?);
        return Ok(());
    }

    if trace {
        println!();
    }
    println!(
        "{} from {} reached {} of {} nodes:\n",
        order.to_string().yellow(),
        scene.label(start).cyan(),
        tree.len(),
        scene.graph().num_nodes()
    );
    for line in render_tree(&scene, &tree) {
        println!("  {}", line);
    }

    Ok(())
}

/// Find the path with the fewest edges between two nodes.
pub fn path(file: &Path, from: NodeId, to: NodeId) -> Result<()> {
    let scene = load_scene(file)?;
    if !scene.graph().contains_node(&to) {
        return Err(trellis_graph::GraphError::InvalidNode(to).into());
    }

    let tree = breadth_first(scene.graph(), &from)?;
    match tree.path_to(&to) {
        Some(nodes) => {
            let total = path_weight(&scene, &nodes)?;
            println!(
                "{} ({} hops, total weight {})",
                render_path(&scene, &nodes).cyan(),
                nodes.len() - 1,
                total
            );
        }
        None => println!(
            "No path from {} to {}",
            scene.label(from).cyan(),
            scene.label(to).cyan()
        ),
    }

    Ok(())
}

/// Save a scene's graph as a snapshot.
pub fn save(file: &Path, store_path: &Path) -> Result<()> {
    let scene = load_scene(file)?;
    debug!("opening snapshot store at {}", store_path.display());
    let store = GraphStore::open(store_path)?;
    store.save_graph(scene.graph())?;

    println!(
        "{} Saved {} nodes to {}",
        "✓".green(),
        scene.graph().num_nodes(),
        store_path.display()
    );
    Ok(())
}

/// Print the saved snapshot.
pub fn restore(store_path: &Path) -> Result<()> {
    debug!("opening snapshot store at {}", store_path.display());
    let store = GraphStore::open(store_path)?;

    match store.load_graph::<NodeId, f32>()? {
        Some(graph) => {
            let stats = graph.stats();
            println!(
                "{} {} nodes, {} edges",
                "Snapshot:".cyan().bold(),
                stats.node_count,
                stats.edge_count
            );
            println!();
            print!("{}", graph);
        }
        None => {
            println!("{} No snapshot in {}", "✗".red(), store_path.display());
            println!("  Run {} to create one", "trellis save <file>".cyan());
        }
    }

    Ok(())
}

/// Loads a scene, reporting skipped records on stderr so stdout stays clean.
fn load_scene(file: &Path) -> Result<Scene> {
    let (scene, report) = Scene::open(file)?;

    if !report.errors.is_empty() {
        eprintln!("{} {} unreadable lines:", "⚠".yellow(), report.errors.len());
        for error in report.errors.iter().take(5) {
            eprintln!("  line {} - {}", error.line.to_string().red(), error.error);
        }
        if report.errors.len() > 5 {
            eprintln!("  ... and {} more", report.errors.len() - 5);
        }
    }

    Ok(scene)
}

/// One line per reached node, ordered by id: `label (id) <- label (id)`.
fn render_tree(scene: &Scene, tree: &PredecessorMap<NodeId>) -> Vec<String> {
    scene
        .node_ids()
        .into_iter()
        .filter_map(|id| {
            let parent = tree.predecessor(&id)?;
            let parent = match parent {
                Some(parent) => format!("{} ({})", scene.label(*parent), parent),
                None => ROOT_SENTINEL.to_string(),
            };
            Some(format!("{} ({}) <- {}", scene.label(id), id, parent))
        })
        .collect()
}

fn render_path(scene: &Scene, nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(|id| scene.label(*id))
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn path_weight(scene: &Scene, nodes: &[NodeId]) -> Result<f32> {
    let mut total = 0.0;
    for pair in nodes.windows(2) {
        total += *scene.graph().get_edge(&pair[0], &pair[1])?;
    }
    Ok(total)
}
