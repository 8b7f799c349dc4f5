//! Ungerichteter Graph über beliebige, per Gleichheit identifizierte Vertices.

use indexmap::IndexMap;
use std::hash::Hash;

/// Ungerichteter Graph mit Adjazenzlisten.
///
/// Vertex- und Nachbarreihenfolge entsprechen der Einfügereihenfolge.
/// Parallele Kanten und Schleifen werden abgelehnt.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: IndexMap<V, Vec<V>>,
    edges: usize,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
            edges: 0,
        }
    }
}

impl<V: Copy + Eq + Hash> Graph<V> {
    /// Erstellt einen leeren Graphen
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Vertex hinzu. `false`, wenn er bereits existiert.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, Vec::new());
        true
    }

    /// Entfernt einen Vertex inklusive aller inzidenten Kanten.
    pub fn remove_vertex(&mut self, v: V) -> bool {
        let Some(neighbors) = self.adjacency.shift_remove(&v) else {
            return false;
        };

        for neighbor in neighbors {
            if let Some(list) = self.adjacency.get_mut(&neighbor) {
                list.retain(|w| *w != v);
            }
            self.edges -= 1;
        }
        true
    }

    /// Fügt eine Kante zwischen `a` und `b` hinzu.
    ///
    /// Schlägt fehl, wenn ein Vertex fehlt, die Kante schon existiert oder `a == b`.
    pub fn add_edge(&mut self, a: V, b: V) -> bool {
        if a == b || !self.contains_vertex(a) || !self.contains_vertex(b) {
            return false;
        }
        if self.contains_edge(a, b) {
            return false;
        }

        if let Some(list) = self.adjacency.get_mut(&a) {
            list.push(b);
        }
        if let Some(list) = self.adjacency.get_mut(&b) {
            list.push(a);
        }
        self.edges += 1;
        true
    }

    /// Entfernt die Kante zwischen `a` und `b`.
    pub fn remove_edge(&mut self, a: V, b: V) -> bool {
        if !self.contains_edge(a, b) {
            return false;
        }

        if let Some(list) = self.adjacency.get_mut(&a) {
            list.retain(|w| *w != b);
        }
        if let Some(list) = self.adjacency.get_mut(&b) {
            list.retain(|w| *w != a);
        }
        self.edges -= 1;
        true
    }

    /// Prüft, ob der Vertex im Graphen liegt
    pub fn contains_vertex(&self, v: V) -> bool {
        self.adjacency.contains_key(&v)
    }

    /// Prüft, ob eine Kante zwischen `a` und `b` existiert
    pub fn contains_edge(&self, a: V, b: V) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbors| neighbors.contains(&b))
    }

    /// Nachbarn von `v` in Einfügereihenfolge (leer, wenn `v` fehlt)
    pub fn adjacent(&self, v: V) -> &[V] {
        self.adjacency.get(&v).map_or(&[], |list| list.as_slice())
    }

    /// Alle Vertices in Einfügereihenfolge
    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.adjacency.keys().copied()
    }

    /// Erster Vertex der Einfügereihenfolge (Startpunkt der Traversierung)
    pub fn first_vertex(&self) -> Option<V> {
        self.adjacency.keys().next().copied()
    }

    /// Anzahl der Vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Anzahl der Kanten
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// `true`, wenn der Graph keine Vertices hat
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<u32> {
        let mut graph = Graph::new();
        for v in 1..=3 {
            graph.add_vertex(v);
        }
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 1);
        graph
    }

    #[test]
    fn test_add_vertex_rejects_duplicate() {
        let mut graph = Graph::new();
        assert!(graph.add_vertex(7));
        assert!(!graph.add_vertex(7));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_add_edge_twice_returns_false_and_keeps_count() {
        let mut graph = Graph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);

        assert!(graph.add_edge(1, 2));
        assert!(!graph.add_edge(1, 2));
        assert!(!graph.add_edge(2, 1));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_requires_both_vertices() {
        let mut graph = Graph::new();
        graph.add_vertex(1);

        assert!(!graph.add_edge(1, 2));
        assert!(!graph.add_edge(1, 1));
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.adjacent(1).is_empty());
    }

    #[test]
    fn test_remove_vertex_severs_incident_edges() {
        let mut graph = triangle();

        assert!(graph.remove_vertex(2));
        assert!(!graph.remove_vertex(2));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.adjacent(1), &[3]);
        assert_eq!(graph.adjacent(3), &[1]);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = triangle();

        assert!(graph.remove_edge(2, 1));
        assert!(!graph.contains_edge(1, 2));
        assert!(!graph.remove_edge(1, 2));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_adjacency_keeps_insertion_order() {
        let mut graph = Graph::new();
        for v in [5, 3, 9, 1] {
            graph.add_vertex(v);
        }
        graph.add_edge(5, 9);
        graph.add_edge(5, 1);
        graph.add_edge(5, 3);

        assert_eq!(graph.adjacent(5), &[9, 1, 3]);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![5, 3, 9, 1]);
        assert_eq!(graph.first_vertex(), Some(5));
    }
}
