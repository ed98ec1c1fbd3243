//! Layers, typed vertices and the timestamped bipartite edge.

use serde::Serialize;

use super::{Timestamp, VertexId};

/// The side of the bipartite graph a vertex lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// First edge endpoint; constrained by `alpha`.
    Upper,
    /// Second edge endpoint; constrained by `beta`.
    Lower,
}

impl Layer {
    /// Return a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
        }
    }

    /// The layer on the other side of an edge.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Upper => Self::Lower,
            Self::Lower => Self::Upper,
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A vertex identified by its layer and its id within that layer.
///
/// Upper vertex 1 and lower vertex 1 are different vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Vertex {
    /// Which side of the graph the vertex belongs to.
    pub layer: Layer,
    /// Id as it appears in the edge list.
    pub id: VertexId,
}

impl Vertex {
    /// An upper-layer vertex.
    pub fn upper(id: VertexId) -> Self {
        Self {
            layer: Layer::Upper,
            id,
        }
    }

    /// A lower-layer vertex.
    pub fn lower(id: VertexId) -> Self {
        Self {
            layer: Layer::Lower,
            id,
        }
    }

    /// Parse the `u<id>` / `l<id>` form produced by `Display`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let (layer, digits) = match name.chars().next()? {
            'u' | 'U' => (Layer::Upper, &name[1..]),
            'l' | 'L' => (Layer::Lower, &name[1..]),
            _ => return None,
        };
        digits.parse().ok().map(|id| Self { layer, id })
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.layer {
            Layer::Upper => write!(f, "u{}", self.id),
            Layer::Lower => write!(f, "l{}", self.id),
        }
    }
}

/// A timestamped interaction between an upper and a lower vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    /// Upper-layer endpoint.
    pub upper: VertexId,
    /// Lower-layer endpoint.
    pub lower: VertexId,
    /// When the interaction happened.
    pub time: Timestamp,
}

impl Edge {
    /// Create a new edge.
    pub fn new(upper: VertexId, lower: VertexId, time: Timestamp) -> Self {
        Self { upper, lower, time }
    }

    /// The upper endpoint as a typed vertex.
    pub fn upper_vertex(&self) -> Vertex {
        Vertex::upper(self.upper)
    }

    /// The lower endpoint as a typed vertex.
    pub fn lower_vertex(&self) -> Vertex {
        Vertex::lower(self.lower)
    }

    /// The endpoint sitting on `layer`.
    pub fn endpoint(&self, layer: Layer) -> Vertex {
        match layer {
            Layer::Upper => self.upper_vertex(),
            Layer::Lower => self.lower_vertex(),
        }
    }
}
