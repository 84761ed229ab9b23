use algograph::graph::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A directed link graph over named pages.
///
/// Pages are registered in name order, so [`Corpus::vertices`] and every
/// iteration derived from it are deterministic. Self-loops and links to
/// pages outside the corpus are dropped while building; the corpus is
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Corpus {
    graph: directed::TreeBackedGraph,
    vertices: Vec<VertexId>,
    names: HashMap<VertexId, String, ahash::RandomState>,
    ids: BTreeMap<String, VertexId>,
}

impl Corpus {
    pub fn from_links<I, P, L, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut adjacency: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, links) in pages {
            let page = page.into();
            let links = links.into_iter().map(Into::into);
            adjacency.entry(page).or_default().extend(links);
        }

        let mut graph = directed::TreeBackedGraph::new();
        let mut vertices = Vec::with_capacity(adjacency.len());
        let mut names = HashMap::with_hasher(ahash::RandomState::new());
        let mut ids = BTreeMap::new();
        for page in adjacency.keys() {
            let v = graph.add_vertex();
            vertices.push(v);
            names.insert(v, page.clone());
            ids.insert(page.clone(), v);
        }
        for (page, links) in adjacency.iter() {
            let u = ids[page];
            for link in links.iter().filter(|link| *link != page) {
                if let Some(v) = ids.get(link) {
                    graph.add_edge(u, *v);
                }
            }
        }

        Self {
            graph,
            vertices,
            names,
            ids,
        }
    }

    pub fn page_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_size()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All pages, sorted by name.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn contains(&self, v: &VertexId) -> bool {
        self.names.contains_key(v)
    }

    pub fn vertex(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, v: &VertexId) -> Option<&str> {
        self.names.get(v).map(String::as_str)
    }

    pub fn links<'a>(&'a self, v: &VertexId) -> impl Iterator<Item = VertexId> + 'a {
        self.graph.out_edges(v).map(|e| e.sink)
    }

    pub fn out_degree(&self, v: &VertexId) -> usize {
        self.graph.out_edges(v).count()
    }

    pub fn is_dangling(&self, v: &VertexId) -> bool {
        self.out_degree(v) == 0
    }
}
