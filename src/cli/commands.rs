//! CLI command implementations.

use std::collections::BTreeSet;
use std::path::Path;

use crate::engine::{CoreQuery, QueryEngine};
use crate::format::EdgeReader;
use crate::graph::TemporalBipartiteGraph;
use crate::index::{IndexStats, PairIndex, SuperiorIndex, VertexIndex};
use crate::types::{AbcResult, IndexConfig, Layer, Timestamp, Vertex};

/// Which index answers a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// Compact linked index over dominant pairs.
    Superior,
    /// Full per-pair index, exact pair only.
    Pair,
    /// Full per-vertex index, exact pair only.
    Vertex,
}

impl IndexKind {
    /// Parse an index kind from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "superior" => Some(Self::Superior),
            "pair" => Some(Self::Pair),
            "vertex" => Some(Self::Vertex),
            _ => None,
        }
    }
}

/// Command-line overrides of the derived configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    /// Largest alpha to index.
    pub max_alpha: Option<u32>,
    /// Largest beta to index.
    pub max_beta: Option<u32>,
    /// Largest timestamp to reach.
    pub tmax: Option<Timestamp>,
}

impl ConfigOverrides {
    /// Apply the overrides on top of `config`.
    pub fn apply(&self, config: IndexConfig) -> IndexConfig {
        let mut config = config;
        if let Some(a) = self.max_alpha {
            config = config.with_max_alpha(a);
        }
        if let Some(b) = self.max_beta {
            config = config.with_max_beta(b);
        }
        if let Some(t) = self.tmax {
            config = config.with_tmax(t);
        }
        config
    }
}

fn load(path: &Path, overrides: &ConfigOverrides) -> AbcResult<(TemporalBipartiteGraph, IndexConfig)> {
    let graph = EdgeReader::read_from_file(path)?;
    let config = overrides.apply(IndexConfig::from_graph(&graph));
    config.check_against(&graph);
    Ok((graph, config))
}

fn vertex_names(vertices: &BTreeSet<Vertex>) -> Vec<String> {
    vertices.iter().map(|v| v.to_string()).collect()
}

/// Display information about an edge list.
pub fn cmd_info(path: &Path, json: bool) -> AbcResult<()> {
    let graph = EdgeReader::read_from_file(path)?;
    let config = IndexConfig::from_graph(&graph);

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "edges": graph.edge_count(),
            "upper_vertices": graph.layer_count(Layer::Upper),
            "lower_vertices": graph.layer_count(Layer::Lower),
            "min_timestamp": graph.min_timestamp(),
            "tmax": config.tmax,
            "max_alpha": config.max_alpha,
            "max_beta": config.max_beta,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Edges: {}", graph.edge_count());
        println!("Upper vertices: {}", graph.layer_count(Layer::Upper));
        println!("Lower vertices: {}", graph.layer_count(Layer::Lower));
        println!(
            "Timestamps: {} .. {}",
            graph.min_timestamp(),
            graph.max_timestamp()
        );
        println!("Max upper degree (alpha): {}", config.max_alpha);
        println!("Max lower degree (beta): {}", config.max_beta);
    }
    Ok(())
}

/// Answer a core query with the chosen index.
pub fn cmd_query(
    path: &Path,
    overrides: &ConfigOverrides,
    query: CoreQuery,
    kind: IndexKind,
    json: bool,
) -> AbcResult<()> {
    let (graph, config) = load(path, overrides)?;
    let engine = QueryEngine::new();

    let (vertices, start_hub, visited) = match kind {
        IndexKind::Superior => {
            let index = SuperiorIndex::build(&graph, &config);
            let result = engine.resolve(&index, &query);
            (result.vertices, result.start_hub, result.visited)
        }
        IndexKind::Pair => {
            let index = PairIndex::build(&graph, &config);
            (engine.query_pair_index(&index, &query), None, Vec::new())
        }
        IndexKind::Vertex => {
            let index = VertexIndex::build(&graph, &config);
            (engine.query_vertex_index(&index, &query), None, Vec::new())
        }
    };

    if json {
        let out = serde_json::json!({
            "alpha": query.alpha,
            "beta": query.beta,
            "ts": query.ts,
            "te": query.te,
            "start_hub": start_hub.map(|h| [h.alpha, h.beta]),
            "visited_hubs": visited.len(),
            "count": vertices.len(),
            "vertices": vertex_names(&vertices),
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!(
            "Vertices in the ({}, {})-core for time window [{}, {}]: {}",
            query.alpha,
            query.beta,
            query.ts,
            query.te,
            vertex_names(&vertices).join(" ")
        );
        if let Some(hub) = start_hub {
            println!(
                "Started at hub {}, visited {} hub(s)",
                hub,
                visited.len()
            );
        }
    }
    Ok(())
}

/// Build all three indexes and compare their sizes.
pub fn cmd_stats(path: &Path, overrides: &ConfigOverrides, json: bool) -> AbcResult<()> {
    let (graph, config) = load(path, overrides)?;
    let vertex = VertexIndex::build(&graph, &config);
    let pair = PairIndex::build(&graph, &config);
    let superior = SuperiorIndex::build(&graph, &config);
    let stats = IndexStats::collect(&vertex, &pair, &superior);

    if json {
        let out = serde_json::json!({
            "config": config,
            "stats": stats,
            "compaction_ratio": stats.compaction_ratio(),
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!(
            "Config: max_alpha={} max_beta={} tmax={}",
            config.max_alpha, config.max_beta, config.tmax
        );
        println!(
            "Vertex index: {} entries, {} windows",
            stats.vertex_entries, stats.vertex_windows
        );
        println!(
            "Pair index: {} pairs, {} windows",
            stats.pair_keys, stats.pair_windows
        );
        println!(
            "Superior index: {} hubs, {} windows, {} links ({} linked hubs)",
            stats.superior_hubs, stats.superior_windows, stats.links, stats.linked_hubs
        );
        println!(
            "Superior / pair windows: {:.1}%",
            stats.compaction_ratio() * 100.0
        );
    }
    Ok(())
}

/// List the superior-index hubs and their links.
pub fn cmd_hubs(path: &Path, overrides: &ConfigOverrides, json: bool) -> AbcResult<()> {
    let (graph, config) = load(path, overrides)?;
    let index = SuperiorIndex::build(&graph, &config);

    if json {
        let hubs: Vec<serde_json::Value> = index
            .hubs()
            .map(|(hub, qtws)| {
                let links: Vec<[u32; 2]> = index
                    .links()
                    .neighbors(hub)
                    .map(|p| [p.alpha, p.beta])
                    .collect();
                serde_json::json!({
                    "alpha": hub.alpha,
                    "beta": hub.beta,
                    "windows": qtws.len(),
                    "links": links,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&hubs).unwrap_or_default());
    } else {
        if index.is_empty() {
            println!("No hubs.");
            return Ok(());
        }
        for (hub, qtws) in index.hubs() {
            let links: Vec<String> = index.links().neighbors(hub).map(|p| p.to_string()).collect();
            println!(
                "{}  {} window(s)  -> {}",
                hub,
                qtws.len(),
                if links.is_empty() {
                    "-".to_string()
                } else {
                    links.join(" ")
                }
            );
        }
    }
    Ok(())
}
