use super::{MarkerHost, NodeSet};
use crate::core::ControlPoints;
use crate::geometry::{LanePair, LanePoints, LaneSampler};
use crate::mesh::StripMesh;
use glam::Vec3;

/// Ereignis im Test-Host.
#[derive(Debug, Clone, PartialEq)]
enum Event {
    CreateMarker(u32),
    DestroyMarker(u32),
    CreateMesh(u32),
    DestroyMesh(u32),
}

/// Host, der fortlaufende IDs vergibt und alle Aufrufe protokolliert.
#[derive(Default)]
struct RecordingHost {
    next_id: u32,
    live: Vec<u32>,
    events: Vec<Event>,
}

impl RecordingHost {
    fn allocate(&mut self) -> u32 {
        self.next_id += 1;
        self.live.push(self.next_id);
        self.next_id
    }

    fn release(&mut self, id: u32) {
        self.live.retain(|&live| live != id);
    }
}

impl MarkerHost for RecordingHost {
    type Marker = u32;
    type Mesh = u32;

    fn create_marker(&mut self, _pair: &LanePair) -> u32 {
        let id = self.allocate();
        self.events.push(Event::CreateMarker(id));
        id
    }

    fn destroy_marker(&mut self, marker: u32) {
        self.release(marker);
        self.events.push(Event::DestroyMarker(marker));
    }

    fn create_mesh(&mut self, _mesh: StripMesh) -> u32 {
        let id = self.allocate();
        self.events.push(Event::CreateMesh(id));
        id
    }

    fn destroy_mesh(&mut self, mesh: u32) {
        self.release(mesh);
        self.events.push(Event::DestroyMesh(mesh));
    }
}

fn lanes(count: usize) -> LanePoints {
    let points = ControlPoints::line(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 2);
    LaneSampler::default().by_count(&points, 2.0, count).unwrap()
}

#[test]
fn test_regenerate_creates_marker_per_pair_and_mesh() {
    let mut host = RecordingHost::default();
    let mut nodes = NodeSet::new();

    nodes.regenerate(&mut host, &lanes(4)).unwrap();

    assert_eq!(nodes.marker_count(), 4);
    assert!(nodes.has_mesh());
    assert_eq!(nodes.generation(), 1);
    assert_eq!(host.live.len(), 5);
}

#[test]
fn test_regenerate_tears_down_before_creating() {
    let mut host = RecordingHost::default();
    let mut nodes = NodeSet::new();
    nodes.regenerate(&mut host, &lanes(3)).unwrap();
    let old: Vec<u32> = nodes.markers().to_vec();
    host.events.clear();

    nodes.regenerate(&mut host, &lanes(5)).unwrap();

    let first_create = host
        .events
        .iter()
        .position(|e| matches!(e, Event::CreateMarker(_) | Event::CreateMesh(_)))
        .expect("Create-Ereignis erwartet");
    let last_destroy = host
        .events
        .iter()
        .rposition(|e| matches!(e, Event::DestroyMarker(_) | Event::DestroyMesh(_)))
        .expect("Destroy-Ereignis erwartet");
    assert!(last_destroy < first_create, "Abbau muss vor Neuaufbau abgeschlossen sein");

    assert_eq!(nodes.marker_count(), 5);
    assert!(nodes.markers().iter().all(|m| !old.contains(m)));
    assert_eq!(host.live.len(), 6, "nur neue Marker + Mesh leben");
    assert_eq!(nodes.generation(), 2);
}

#[test]
fn test_failed_regenerate_keeps_previous_state() {
    let mut host = RecordingHost::default();
    let mut nodes = NodeSet::new();
    nodes.regenerate(&mut host, &lanes(3)).unwrap();
    let before = nodes.markers().to_vec();
    host.events.clear();

    let too_short = LanePoints::from_pairs(&[LanePair {
        index: 0,
        t: 0.0,
        center: Vec3::ZERO,
        left: Vec3::Z,
        right: -Vec3::Z,
    }]);
    assert!(nodes.regenerate(&mut host, &too_short).is_err());

    assert!(host.events.is_empty(), "kein Host-Aufruf bei Fehler");
    assert_eq!(nodes.markers(), before.as_slice());
    assert!(nodes.has_mesh());
    assert_eq!(nodes.generation(), 1);
}

#[test]
fn test_clear_twice_is_idempotent() {
    let mut host = RecordingHost::default();
    let mut nodes = NodeSet::new();
    nodes.regenerate(&mut host, &lanes(3)).unwrap();

    nodes.clear(&mut host);
    assert!(nodes.is_empty());
    assert!(host.live.is_empty());
    let events_after_first = host.events.len();

    nodes.clear(&mut host);
    assert!(nodes.is_empty());
    assert_eq!(host.events.len(), events_after_first);
}

#[test]
fn test_clear_on_fresh_set_does_nothing() {
    let mut host = RecordingHost::default();
    let mut nodes: NodeSet<RecordingHost> = NodeSet::default();
    nodes.clear(&mut host);
    nodes.clear(&mut host);
    assert!(nodes.is_empty());
    assert!(host.events.is_empty());
}
