//! Board: Arena aller Pads plus geordnete Bauteil- und Netzlisten.

use super::catalog::PartTemplate;
use super::net::NetComponent;
use super::{Footprint, Net, NetId, Pad, PadAnchor, PadArena, PadId, Part, PartId, Segment, SegmentId};
use glam::Vec2;
use indexmap::IndexMap;

/// Gesamtes Layout eines Projekts
#[derive(Debug, Clone, Default)]
pub struct Board {
    pads: PadArena,
    parts: IndexMap<PartId, Part>,
    nets: IndexMap<NetId, Net>,
    next_id: u64,
}

impl Board {
    /// Erstellt ein leeres Board
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    // ── Pads ────────────────────────────────────────────────────────

    /// Pad per Handle
    pub fn pad(&self, id: PadId) -> Option<&Pad> {
        self.pads.get(&id)
    }

    /// Read-only Sicht auf die Pad-Arena
    pub fn pads(&self) -> &PadArena {
        &self.pads
    }

    /// Anzahl aller Pads in der Arena
    pub fn pad_count(&self) -> usize {
        self.pads.len()
    }

    /// Legt ein sichtbares, schwebendes Pad an
    pub fn add_free_pad(
        &mut self,
        position: Vec2,
        ring_diameter: f32,
        hole_diameter: f32,
        color: [f32; 4],
    ) -> PadId {
        let id = PadId(self.allocate_id());
        let pad = Pad::new(id, position, ring_diameter, hole_diameter, color, PadAnchor::Floating);
        self.pads.insert(id, pad);
        id
    }

    /// Legt ein unsichtbares virtuelles Pad an
    pub fn spawn_virtual_pad(&mut self, position: Vec2, diameter: f32, color: [f32; 4]) -> PadId {
        let id = PadId(self.allocate_id());
        self.pads
            .insert(id, Pad::virtual_at(id, position, diameter, color));
        id
    }

    /// Klont ein Pad als unsichtbares virtuelles Pad an derselben Position
    pub fn clone_as_virtual(&mut self, source: PadId) -> Option<PadId> {
        let id = PadId(self.allocate_id());
        let mut copy = self.pads.get(&source)?.clone_as(id);
        copy.visible = false;
        self.pads.insert(id, copy);
        Some(id)
    }

    /// Setzt die Position eines Pads und führt beobachtende Leiterbahnen nach
    pub fn set_pad_position(&mut self, id: PadId, position: Vec2) -> bool {
        let Some(pad) = self.pads.get_mut(&id) else {
            return false;
        };
        pad.position = position;
        self.notify_pad_moved(id);
        true
    }

    /// Verschiebt ein Pad relativ
    pub fn translate_pad(&mut self, id: PadId, delta: Vec2) -> bool {
        let Some(position) = self.pads.get(&id).map(|pad| pad.position) else {
            return false;
        };
        self.set_pad_position(id, position + delta)
    }

    /// Ändert Ring- und Bohrungsdurchmesser
    pub fn set_pad_geometry(&mut self, id: PadId, ring_diameter: f32, hole_diameter: f32) -> bool {
        match self.pads.get_mut(&id) {
            Some(pad) => {
                pad.ring_diameter = ring_diameter;
                pad.hole_diameter = hole_diameter;
                true
            }
            None => false,
        }
    }

    /// Markiert ein Pad
    pub fn set_pad_selected(&mut self, id: PadId, selected: bool) -> bool {
        match self.pads.get_mut(&id) {
            Some(pad) => {
                pad.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Löscht ein Pad: über sein Netz (inkl. Leiterbahnen), schwebende Pads
    /// ohne Netz direkt aus der Arena. Bauteil-Pads ohne Netz bleiben.
    pub fn delete_pad(&mut self, id: PadId) -> bool {
        let Some((net, floating)) = self.pads.get(&id).map(|pad| (pad.net, pad.is_floating()))
        else {
            return false;
        };
        let detached = match net.and_then(|net_id| self.nets.get_mut(&net_id)) {
            Some(net) => net.remove_pad(&mut self.pads, id),
            None => false,
        };
        if floating {
            // unsichtbare Knickpunkte hat das Netz bereits eingesammelt
            self.pads.remove(&id).is_some() || detached
        } else {
            detached
        }
    }

    fn notify_pad_moved(&mut self, id: PadId) {
        let Some(net_id) = self.pads.get(&id).and_then(|pad| pad.net) else {
            return;
        };
        if let Some(net) = self.nets.get_mut(&net_id) {
            net.refresh_observers(&self.pads, id);
        }
    }

    // ── Bauteile ────────────────────────────────────────────────────

    /// Platziert ein Bauteil aus einer Vorlage mit Mittelpunkt `center`
    pub fn place_part(&mut self, template: &PartTemplate, center: Vec2, pad_color: [f32; 4]) -> PartId {
        let part_id = PartId(self.allocate_id());

        let mut pad_ids = Vec::with_capacity(template.pads.len());
        for (index, pad_template) in template.pads.iter().enumerate() {
            let pad_id = PadId(self.allocate_id());
            let mut pad = Pad::new(
                pad_id,
                center + pad_template.offset,
                pad_template.ring_diameter,
                pad_template.hole_diameter,
                pad_color,
                PadAnchor::Anchored(part_id),
            );
            pad.name = format!("{}", index + 1);
            self.pads.insert(pad_id, pad);
            pad_ids.push(pad_id);
        }

        let part = Part {
            id: part_id,
            identity: template.identity.clone(),
            name: template.name.clone(),
            footprint: Footprint::new(center, pad_ids),
            width: template.width,
            height: template.height,
            selected: false,
        };
        self.parts.insert(part_id, part);
        part_id
    }

    /// Bauteil per Handle
    pub fn part(&self, id: PartId) -> Option<&Part> {
        self.parts.get(&id)
    }

    /// Alle Bauteile in Platzierungsreihenfolge
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.values()
    }

    /// Anzahl der Bauteile
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Erstes Bauteil, dessen Umriss den Punkt enthält
    pub fn part_at(&self, point: Vec2) -> Option<PartId> {
        self.parts
            .values()
            .find(|part| part.contains(point))
            .map(|part| part.id)
    }

    /// Verschiebt ein Bauteil samt Pads und angeschlossenen Leiterbahnen
    pub fn translate_part(&mut self, id: PartId, delta: Vec2) -> bool {
        let Some(part) = self.parts.get_mut(&id) else {
            return false;
        };
        part.translate(&mut self.pads, delta);
        self.refresh_part_pads(id);
        true
    }

    /// Setzt den Mittelpunkt eines Bauteils
    pub fn set_part_position(&mut self, id: PartId, position: Vec2) -> bool {
        let Some(center) = self.parts.get(&id).map(|part| part.center()) else {
            return false;
        };
        self.translate_part(id, position - center)
    }

    /// Dreht ein Bauteil um 90°
    pub fn rotate_part(&mut self, id: PartId, clockwise: bool) -> bool {
        let Some(part) = self.parts.get_mut(&id) else {
            return false;
        };
        part.rotate_90(&mut self.pads, clockwise);
        self.refresh_part_pads(id);
        true
    }

    /// Markiert ein Bauteil samt Pads
    pub fn set_part_selected(&mut self, id: PartId, selected: bool) -> bool {
        match self.parts.get_mut(&id) {
            Some(part) => {
                part.set_selected(&mut self.pads, selected);
                true
            }
            None => false,
        }
    }

    /// Entfernt ein Bauteil: erst seine Pads aus ihren Netzen, dann aus der
    /// Arena, zuletzt das Bauteil selbst.
    pub fn remove_part(&mut self, id: PartId) -> bool {
        let Some(pad_ids) = self.parts.get(&id).map(|part| part.footprint.pads().to_vec()) else {
            return false;
        };

        for pad_id in &pad_ids {
            if let Some(net_id) = self.pads.get(pad_id).and_then(|pad| pad.net) {
                if let Some(net) = self.nets.get_mut(&net_id) {
                    net.remove_pad(&mut self.pads, *pad_id);
                }
            }
            self.pads.remove(pad_id);
        }

        self.parts.shift_remove(&id);
        true
    }

    fn refresh_part_pads(&mut self, id: PartId) {
        let pad_ids = match self.parts.get(&id) {
            Some(part) => part.footprint.pads().to_vec(),
            None => return,
        };
        for pad_id in pad_ids {
            self.notify_pad_moved(pad_id);
        }
    }

    // ── Netze ───────────────────────────────────────────────────────

    /// Legt ein leeres Netz an
    pub fn add_net(&mut self, name: impl Into<String>) -> NetId {
        let id = NetId(self.allocate_id());
        self.nets.insert(id, Net::new(id, name));
        id
    }

    /// Netz per Handle
    pub fn net(&self, id: NetId) -> Option<&Net> {
        self.nets.get(&id)
    }

    /// Netz per Name
    pub fn net_by_name(&self, name: &str) -> Option<&Net> {
        self.nets.values().find(|net| net.name == name)
    }

    /// Alle Netze in Anlagereihenfolge
    pub fn nets(&self) -> impl Iterator<Item = &Net> {
        self.nets.values()
    }

    /// Anzahl der Netze
    pub fn net_count(&self) -> usize {
        self.nets.len()
    }

    /// Verbindet zwei Pads im Netz `net` mit einer neuen Leiterbahn
    pub fn add_segment(
        &mut self,
        net: NetId,
        p0: PadId,
        p1: PadId,
        width: f32,
        color: [f32; 4],
    ) -> Option<SegmentId> {
        let id = SegmentId(self.allocate_id());
        let net = self.nets.get_mut(&net)?;
        net.add_segment(&mut self.pads, id, p0, p1, width, color)
            .then_some(id)
    }

    /// Entfernt die Leiterbahn zwischen zwei Pads eines Netzes
    pub fn remove_segment_between(&mut self, net: NetId, p0: PadId, p1: PadId) -> bool {
        match self.nets.get_mut(&net) {
            Some(net) => net.remove_segment_between(&mut self.pads, p0, p1),
            None => false,
        }
    }

    /// Entfernt eine Leiterbahn aus ihrem Netz
    pub fn remove_segment(&mut self, id: SegmentId) -> bool {
        let Some(net_id) = self.segment_net(id) else {
            return false;
        };
        match self.nets.get_mut(&net_id) {
            Some(net) => net.remove_segment(&mut self.pads, id),
            None => false,
        }
    }

    /// Leiterbahn per Handle (über alle Netze)
    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.nets.values().find_map(|net| net.segment(id))
    }

    /// Netz, das die Leiterbahn besitzt
    pub fn segment_net(&self, id: SegmentId) -> Option<NetId> {
        self.segment(id).map(|segment| segment.net)
    }

    /// Gesamtzahl der Leiterbahnen
    pub fn segment_count(&self) -> usize {
        self.nets.values().map(Net::segment_count).sum()
    }

    /// Nimmt ein Pad in ein Netz auf
    pub fn add_pad_to_net(&mut self, net: NetId, pad: PadId) -> bool {
        match self.nets.get_mut(&net) {
            Some(net) => net.add_pad(&mut self.pads, pad),
            None => false,
        }
    }

    /// Löst ein Pad aus seinem Netz (inkl. Leiterbahnen). Sichtbare Pads
    /// bleiben als netzlose Pads auf dem Board.
    pub fn remove_pad_from_net(&mut self, pad: PadId) -> bool {
        let Some(net_id) = self.pads.get(&pad).and_then(|p| p.net) else {
            return false;
        };
        match self.nets.get_mut(&net_id) {
            Some(net) => net.remove_pad(&mut self.pads, pad),
            None => false,
        }
    }

    /// Verschiebt ein Netz per Tiefensuche
    pub fn translate_net(&mut self, net: NetId, delta: Vec2) -> usize {
        match self.nets.get_mut(&net) {
            Some(net) => net.translate(&mut self.pads, delta),
            None => 0,
        }
    }

    /// Markiert ein Netz samt Leiterbahnen
    pub fn set_net_selected(&mut self, net: NetId, selected: bool) -> bool {
        match self.nets.get_mut(&net) {
            Some(net) => {
                net.set_selected(selected);
                true
            }
            None => false,
        }
    }

    /// Färbt alle Leiterbahnen eines Netzes ein
    pub fn set_net_color(&mut self, net: NetId, color: [f32; 4]) -> bool {
        match self.nets.get_mut(&net) {
            Some(net) => {
                net.set_color(color);
                true
            }
            None => false,
        }
    }

    /// Markiert eine einzelne Leiterbahn
    pub fn set_segment_selected(&mut self, id: SegmentId, selected: bool) -> bool {
        match self.segment_net(id).and_then(|net| self.nets.get_mut(&net)) {
            Some(net) => net.set_segment_selected(id, selected),
            None => false,
        }
    }

    /// Setzt die Bahnbreite einer Leiterbahn
    pub fn set_segment_width(&mut self, id: SegmentId, width: f32) -> bool {
        match self.segment_net(id).and_then(|net| self.nets.get_mut(&net)) {
            Some(net) => net.set_segment_width(id, width),
            None => false,
        }
    }

    /// Erstes Netz-Element unter dem Punkt (Netze in Anlagereihenfolge)
    pub fn net_component_at(&self, point: Vec2) -> Option<(NetId, NetComponent)> {
        self.nets.values().find_map(|net| {
            net.component_at(&self.pads, point)
                .map(|component| (net.id, component))
        })
    }

    /// Erstes Pad unter dem Punkt über alle Netze
    pub fn net_pad_at(&self, point: Vec2) -> Option<(NetId, PadId)> {
        self.nets.values().find_map(|net| {
            match net.component_at(&self.pads, point) {
                Some(NetComponent::Pad(pad)) => Some((net.id, pad)),
                _ => None,
            }
        })
    }

    /// Hebt alle Markierungen auf
    pub fn clear_selection_flags(&mut self) {
        for pad in self.pads.values_mut() {
            pad.selected = false;
        }
        for part in self.parts.values_mut() {
            part.selected = false;
        }
        for net in self.nets.values_mut() {
            net.set_selected(false);
        }
    }

    // ── Konsistenz ──────────────────────────────────────────────────

    /// Prüft alle Rückverweise, z.B. nach externer Rekonstruktion.
    pub fn validate_links(&self) -> anyhow::Result<()> {
        for net in self.nets.values() {
            if net.segment_count() != net.edge_count() {
                anyhow::bail!(
                    "{}: {} Leiterbahnen, aber {} Kanten",
                    net.name,
                    net.segment_count(),
                    net.edge_count()
                );
            }
            for pad_id in net.pad_ids() {
                let Some(pad) = self.pads.get(&pad_id) else {
                    anyhow::bail!("{}: {} fehlt in der Arena", net.name, pad_id);
                };
                if pad.net != Some(net.id) {
                    anyhow::bail!("{}: {} verweist nicht auf das Netz", net.name, pad_id);
                }
            }
            for segment in net.segments() {
                if segment.net != net.id
                    || !net.contains_pad(segment.start)
                    || !net.contains_pad(segment.end)
                {
                    anyhow::bail!("{}: {} hat ungültige Endpunkte", net.name, segment.id);
                }
            }
        }

        for part in self.parts.values() {
            for pad_id in part.footprint.pads() {
                match self.pads.get(pad_id) {
                    Some(pad) if pad.part() == Some(part.id) => {}
                    _ => anyhow::bail!("{}: {} gehört nicht zum Bauteil", part.name, pad_id),
                }
            }
        }

        for pad in self.pads.values() {
            if let Some(net_id) = pad.net {
                if !self.nets.get(&net_id).is_some_and(|net| net.contains_pad(pad.id)) {
                    anyhow::bail!("{} verweist auf {}, ist dort aber kein Vertex", pad.id, net_id);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::find_template;

    const GRAY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

    fn board_with_resistor() -> (Board, PartId) {
        let mut board = Board::new();
        let template = find_template("R-12.7").expect("Vorlage vorhanden");
        let part = board.place_part(&template, Vec2::new(20.0, 20.0), GRAY);
        (board, part)
    }

    #[test]
    fn test_place_part_anchors_pads() {
        let (board, part_id) = board_with_resistor();
        let part = board.part(part_id).expect("Bauteil vorhanden");

        assert_eq!(part.footprint.pads().len(), 2);
        for pad_id in part.footprint.pads() {
            assert_eq!(board.pad(*pad_id).and_then(Pad::part), Some(part_id));
        }
        assert!(board.validate_links().is_ok());
    }

    #[test]
    fn test_moving_part_drags_connected_segment() {
        let (mut board, part_id) = board_with_resistor();
        let pad = board.part(part_id).expect("Bauteil").footprint.pads()[0];
        let free = board.add_free_pad(Vec2::new(0.0, 0.0), 1.0, 0.5, GRAY);
        let net = board.add_net("VCC");
        let segment = board
            .add_segment(net, pad, free, 0.3, GREEN)
            .expect("Leiterbahn angelegt");

        board.translate_part(part_id, Vec2::new(5.0, 0.0));

        let line = board.segment(segment).expect("Leiterbahn").line();
        assert_eq!(line.0, board.pad(pad).expect("Pad").position);
        assert_eq!(line.0.x, 25.0);
    }

    #[test]
    fn test_rotate_part_refreshes_segments() {
        let (mut board, part_id) = board_with_resistor();
        let pad = board.part(part_id).expect("Bauteil").footprint.pads()[0];
        let free = board.add_free_pad(Vec2::ZERO, 1.0, 0.5, GRAY);
        let net = board.add_net("VCC");
        let segment = board.add_segment(net, pad, free, 0.3, GREEN).expect("Leiterbahn");

        assert!(board.rotate_part(part_id, false));

        let expected = board.pad(pad).expect("Pad").position;
        assert_eq!(board.segment(segment).expect("Leiterbahn").line().0, expected);
    }

    #[test]
    fn test_remove_part_clears_nets_and_arena() {
        let (mut board, part_id) = board_with_resistor();
        let pads = board.part(part_id).expect("Bauteil").footprint.pads().to_vec();
        let net = board.add_net("GND");
        board.add_segment(net, pads[0], pads[1], 0.3, GREEN);

        assert!(board.remove_part(part_id));

        assert_eq!(board.part_count(), 0);
        assert_eq!(board.pad_count(), 0);
        let net = board.net(net).expect("Netz bleibt");
        assert_eq!(net.pad_count(), 0);
        assert_eq!(net.segment_count(), 0);
        assert!(board.validate_links().is_ok());
    }

    #[test]
    fn test_add_segment_across_nets_fails() {
        let mut board = Board::new();
        let a = board.add_free_pad(Vec2::ZERO, 1.0, 0.5, GRAY);
        let b = board.add_free_pad(Vec2::new(5.0, 0.0), 1.0, 0.5, GRAY);
        let c = board.add_free_pad(Vec2::new(10.0, 0.0), 1.0, 0.5, GRAY);
        let gnd = board.add_net("GND");
        let vcc = board.add_net("VCC");

        assert!(board.add_segment(gnd, a, b, 0.3, GREEN).is_some());
        assert!(board.add_segment(vcc, b, c, 0.3, GREEN).is_none());
        assert_eq!(board.pad(c).and_then(|p| p.net), None);
    }

    #[test]
    fn test_delete_unconnected_free_pad() {
        let mut board = Board::new();
        let pad = board.add_free_pad(Vec2::ZERO, 1.0, 0.5, GRAY);

        assert!(board.delete_pad(pad));
        assert!(board.pad(pad).is_none());
        assert!(!board.delete_pad(pad));
    }
}
