//! Elektrisches Netz: Pad-Graph plus Leiterbahnliste.
//!
//! Graph und Segmentliste sind eine doppelte Repräsentation derselben
//! Topologie: zwischen zwei Pads existiert genau dann eine Kante, wenn eine
//! Leiterbahn sie verbindet. Beide sind privat und werden nur über die
//! Methoden dieses Typs verändert.

use super::traversal;
use super::{Graph, NetId, PadArena, PadId, Segment, SegmentId};
use crate::shared::Painter;
use glam::Vec2;

/// Treffer eines Punkt-Tests innerhalb eines Netzes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetComponent {
    /// Pad des Netzes (auch unsichtbare Knickpunkte)
    Pad(PadId),
    /// Leiterbahn des Netzes
    Segment(SegmentId),
}

/// Benannte Gruppe elektrisch verbundener Pads
#[derive(Debug, Clone)]
pub struct Net {
    /// Handle des Netzes
    pub id: NetId,
    /// Anzeigename (z.B. "GND")
    pub name: String,
    selected: bool,
    graph: Graph<PadId>,
    segments: Vec<Segment>,
}

impl Net {
    /// Erstellt ein leeres Netz
    pub fn new(id: NetId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            selected: false,
            graph: Graph::new(),
            segments: Vec::new(),
        }
    }

    // ── Topologie ───────────────────────────────────────────────────

    /// Verbindet `p0` und `p1` mit einer neuen Leiterbahn.
    ///
    /// Netzlose Pads werden diesem Netz zugeordnet. Gehört ein Pad bereits zu
    /// einem anderen Netz, existiert die Kante schon oder ist `p0 == p1`,
    /// passiert nichts und es wird `false` zurückgegeben.
    #[allow(clippy::too_many_arguments)]
    pub fn add_segment(
        &mut self,
        pads: &mut PadArena,
        id: SegmentId,
        p0: PadId,
        p1: PadId,
        width: f32,
        color: [f32; 4],
    ) -> bool {
        if p0 == p1 {
            log::warn!("{}: Leiterbahn auf sich selbst abgelehnt ({})", self.name, p0);
            return false;
        }

        let (Some(a), Some(b)) = (pads.get(&p0), pads.get(&p1)) else {
            log::warn!("{}: Pad {} oder {} existiert nicht", self.name, p0, p1);
            return false;
        };

        for pad in [a, b] {
            if pad.net.is_some_and(|net| net != self.id) {
                log::warn!(
                    "{}: {} gehört bereits zu einem anderen Netz",
                    self.name,
                    pad.id
                );
                return false;
            }
        }

        if self.graph.contains_edge(p0, p1) {
            log::debug!("{}: {} und {} sind bereits verbunden", self.name, p0, p1);
            return false;
        }

        let (start_pos, end_pos) = (a.position, b.position);

        for pad_id in [p0, p1] {
            if let Some(pad) = pads.get_mut(&pad_id) {
                pad.net = Some(self.id);
                pad.subscribe(id);
            }
            self.graph.add_vertex(pad_id);
        }
        self.graph.add_edge(p0, p1);

        let mut segment = Segment::new(id, self.id, p0, p1, width, color, start_pos, end_pos);
        segment.selected = self.selected;
        self.segments.push(segment);
        true
    }

    /// Entfernt die Leiterbahn zwischen `p0` und `p1` (beliebige Reihenfolge)
    pub fn remove_segment_between(&mut self, pads: &mut PadArena, p0: PadId, p1: PadId) -> bool {
        match self.segment_between(p0, p1).map(|segment| segment.id) {
            Some(id) => self.remove_segment(pads, id),
            None => false,
        }
    }

    /// Entfernt eine Leiterbahn samt Kante und Beobachter-Registrierung.
    ///
    /// Unsichtbare Endpunkte ohne verbleibende Kante werden aus dem Graphen
    /// entfernt, schwebende zusätzlich aus der Arena.
    pub fn remove_segment(&mut self, pads: &mut PadArena, id: SegmentId) -> bool {
        let Some(index) = self.segments.iter().position(|s| s.id == id) else {
            return false;
        };

        let (start, end) = (self.segments[index].start, self.segments[index].end);
        if !self.graph.remove_edge(start, end) {
            log::warn!("{}: Kante zu {} fehlt im Graphen", self.name, id);
            return false;
        }
        self.segments.remove(index);

        for pad_id in [start, end] {
            if let Some(pad) = pads.get_mut(&pad_id) {
                pad.unsubscribe(id);
            }
            self.collect_orphan(pads, pad_id);
        }
        true
    }

    /// Nimmt ein Pad ohne Verbindung in das Netz auf
    pub fn add_pad(&mut self, pads: &mut PadArena, pad_id: PadId) -> bool {
        let Some(pad) = pads.get_mut(&pad_id) else {
            return false;
        };
        if pad.net.is_some_and(|net| net != self.id) {
            log::warn!("{}: {} gehört bereits zu einem anderen Netz", self.name, pad_id);
            return false;
        }
        if !self.graph.add_vertex(pad_id) {
            return false;
        }
        pad.net = Some(self.id);
        true
    }

    /// Löst ein Pad samt aller daran hängenden Leiterbahnen aus dem Netz.
    ///
    /// Sichtbare Pads bleiben netzlos in der Arena, nur unsichtbare
    /// Knickpunkte werden eingesammelt.
    pub fn remove_pad(&mut self, pads: &mut PadArena, pad_id: PadId) -> bool {
        if !self.graph.contains_vertex(pad_id) {
            return false;
        }

        let neighbors = self.graph.adjacent(pad_id).to_vec();
        for neighbor in neighbors {
            self.remove_segment_between(pads, pad_id, neighbor);
        }

        // Unsichtbare Pads wurden ggf. schon beim letzten Segment eingesammelt
        self.graph.remove_vertex(pad_id);
        let orphan_corner = match pads.get_mut(&pad_id) {
            Some(pad) => {
                pad.net = None;
                pad.is_floating() && !pad.visible
            }
            None => false,
        };
        if orphan_corner {
            pads.remove(&pad_id);
        }
        true
    }

    fn collect_orphan(&mut self, pads: &mut PadArena, pad_id: PadId) {
        if !self.graph.contains_vertex(pad_id) || !self.graph.adjacent(pad_id).is_empty() {
            return;
        }

        let (visible, floating) = pads
            .get(&pad_id)
            .map_or((false, false), |pad| (pad.visible, pad.is_floating()));
        if visible {
            return;
        }

        self.graph.remove_vertex(pad_id);
        if floating {
            pads.remove(&pad_id);
        } else if let Some(pad) = pads.get_mut(&pad_id) {
            pad.net = None;
        }
    }

    // ── Geometrie ───────────────────────────────────────────────────

    /// Verschiebt alle vom ersten Pad aus erreichbaren Pads per Tiefensuche.
    ///
    /// Die Leiterbahnen folgen über ihre Beobachter-Registrierung. Bei nicht
    /// zusammenhängendem Graphen wird nur eine Komponente verschoben.
    pub fn translate(&mut self, pads: &mut PadArena, delta: Vec2) -> usize {
        let mut moved = Vec::new();
        traversal::depth_first(&self.graph, |pad_id| {
            if let Some(pad) = pads.get_mut(&pad_id) {
                pad.position += delta;
            }
            moved.push(pad_id);
        });

        for pad_id in &moved {
            self.refresh_observers(pads, *pad_id);
        }
        moved.len()
    }

    /// Führt die Linien aller bei `pad_id` registrierten Leiterbahnen nach
    pub fn refresh_observers(&mut self, pads: &PadArena, pad_id: PadId) {
        let Some(pad) = pads.get(&pad_id) else {
            return;
        };

        for observer in pad.observers() {
            let Some(segment) = self.segments.iter_mut().find(|s| s.id == *observer) else {
                continue;
            };
            if let (Some(start), Some(end)) = (pads.get(&segment.start), pads.get(&segment.end)) {
                segment.update_geometry(start.position, end.position);
            }
        }
    }

    /// `true`, wenn eine Leiterbahn oder ein sichtbares Pad den Punkt enthält
    pub fn contains(&self, pads: &PadArena, point: Vec2) -> bool {
        self.segments.iter().any(|s| s.contains(point))
            || self.visible_pads(pads).any(|pad| pad.contains(point))
    }

    /// Oberstes Element unter dem Punkt, Pads vor Leiterbahnen
    pub fn component_at(&self, pads: &PadArena, point: Vec2) -> Option<NetComponent> {
        let pad_hit = self
            .graph
            .vertices()
            .filter_map(|id| pads.get(&id))
            .find(|pad| pad.contains(point))
            .map(|pad| NetComponent::Pad(pad.id));

        pad_hit.or_else(|| {
            self.segments
                .iter()
                .find(|s| s.contains(point))
                .map(|s| NetComponent::Segment(s.id))
        })
    }

    // ── Abfragen ────────────────────────────────────────────────────

    /// Alle Pads des Netzes in Graph-Reihenfolge
    pub fn pad_ids(&self) -> impl Iterator<Item = PadId> + '_ {
        self.graph.vertices()
    }

    /// Sichtbare Pads des Netzes
    pub fn visible_pads<'a>(
        &'a self,
        pads: &'a PadArena,
    ) -> impl Iterator<Item = &'a super::Pad> + 'a {
        self.graph
            .vertices()
            .filter_map(move |id| pads.get(&id))
            .filter(|pad| pad.visible)
    }

    /// Alle Leiterbahnen in Einfügereihenfolge
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Leiterbahn per Handle
    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Leiterbahn zwischen zwei Pads
    pub fn segment_between(&self, a: PadId, b: PadId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.joins(a, b))
    }

    /// Nachbarn eines Pads im Graphen
    pub fn adjacent(&self, pad: PadId) -> &[PadId] {
        self.graph.adjacent(pad)
    }

    /// Prüft, ob das Pad Vertex dieses Netzes ist
    pub fn contains_pad(&self, pad: PadId) -> bool {
        self.graph.contains_vertex(pad)
    }

    /// Anzahl der Pads
    pub fn pad_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Anzahl der Leiterbahnen
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Anzahl der Graph-Kanten
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    // ── Darstellung ─────────────────────────────────────────────────

    /// Farbe der ersten Leiterbahn
    pub fn color(&self) -> Option<[f32; 4]> {
        self.segments.first().map(|s| s.color)
    }

    /// Färbt alle Leiterbahnen ein
    pub fn set_color(&mut self, color: [f32; 4]) {
        for segment in &mut self.segments {
            segment.color = color;
        }
    }

    /// Setzt die Bahnbreite einer Leiterbahn
    pub fn set_segment_width(&mut self, id: SegmentId, width: f32) -> bool {
        match self.segments.iter_mut().find(|s| s.id == id) {
            Some(segment) => {
                segment.width = width;
                true
            }
            None => false,
        }
    }

    /// Markiert eine einzelne Leiterbahn
    pub fn set_segment_selected(&mut self, id: SegmentId, selected: bool) -> bool {
        match self.segments.iter_mut().find(|s| s.id == id) {
            Some(segment) => {
                segment.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Markiert das Netz samt aller Leiterbahnen
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        for segment in &mut self.segments {
            segment.selected = selected;
        }
    }

    /// `true`, wenn das Netz markiert ist
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Zeichnet erst die Leiterbahnen, dann die sichtbaren Pads
    pub fn draw(&self, pads: &PadArena, painter: &mut dyn Painter) {
        for segment in &self.segments {
            if segment.selected {
                segment.draw_selected(painter);
            } else {
                segment.draw(painter);
            }
        }
        for pad in self.visible_pads(pads) {
            if pad.selected {
                pad.draw_selected(painter);
            } else {
                pad.draw(painter);
            }
        }
    }

    /// Zeichnet das ganze Netz in Selektionsfarbe
    pub fn draw_selected(&self, pads: &PadArena, painter: &mut dyn Painter) {
        for segment in &self.segments {
            segment.draw_selected(painter);
        }
        for pad in self.visible_pads(pads) {
            pad.draw_selected(painter);
        }
    }
}
