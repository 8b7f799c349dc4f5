//! Tiefensuche über einen [`Graph`] mit Operation pro Vertex.
//!
//! Erreicht wird nur die Zusammenhangskomponente des Startvertex.
//! Nicht erreichbare Vertices werden nicht besucht.

use super::Graph;
use std::collections::HashSet;
use std::hash::Hash;

/// Besucht alle vom ersten Vertex erreichbaren Vertices genau einmal.
///
/// Gibt die Anzahl der besuchten Vertices zurück.
pub fn depth_first<V, F>(graph: &Graph<V>, op: F) -> usize
where
    V: Copy + Eq + Hash,
    F: FnMut(V),
{
    match graph.first_vertex() {
        Some(start) => depth_first_from(graph, start, op),
        None => 0,
    }
}

/// Tiefensuche ab `start` in Preorder: `op` läuft beim ersten Besuch,
/// danach werden die unbesuchten Nachbarn in Adjazenzreihenfolge abgestiegen.
pub fn depth_first_from<V, F>(graph: &Graph<V>, start: V, mut op: F) -> usize
where
    V: Copy + Eq + Hash,
    F: FnMut(V),
{
    if !graph.contains_vertex(start) {
        return 0;
    }

    let mut visited: HashSet<V> = HashSet::new();
    // Stack aus (Vertex, nächster Nachbarindex) bildet die Rekursion nach
    let mut stack: Vec<(V, usize)> = Vec::new();

    visited.insert(start);
    op(start);
    stack.push((start, 0));

    while let Some((vertex, next)) = stack.last_mut() {
        let neighbors = graph.adjacent(*vertex);
        if *next >= neighbors.len() {
            stack.pop();
            continue;
        }

        let neighbor = neighbors[*next];
        *next += 1;

        if visited.insert(neighbor) {
            op(neighbor);
            stack.push((neighbor, 0));
        }
    }

    visited.len()
}
