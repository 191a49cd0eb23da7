use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::notation::{NoteEvent, compile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackRole {
    Lead,
    Harmony,
    Bass,
    Percussion,
}

impl TrackRole {
    pub const ALL: [TrackRole; 4] = [
        TrackRole::Lead,
        TrackRole::Harmony,
        TrackRole::Bass,
        TrackRole::Percussion,
    ];

    pub fn index(self) -> usize {
        match self {
            TrackRole::Lead => 0,
            TrackRole::Harmony => 1,
            TrackRole::Bass => 2,
            TrackRole::Percussion => 3,
        }
    }
}

/// The four notation strings making up one composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSet {
    pub lead: String,
    pub harmony: String,
    pub bass: String,
    pub percussion: String,
}

impl TrackSet {
    pub fn get(&self, role: TrackRole) -> &str {
        match role {
            TrackRole::Lead => &self.lead,
            TrackRole::Harmony => &self.harmony,
            TrackRole::Bass => &self.bass,
            TrackRole::Percussion => &self.percussion,
        }
    }
}

/// Anything that can look up the notation of a composition by id.
pub trait CompositionSource {
    fn notation(&self, id: u32) -> Option<TrackSet>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub role: TrackRole,
    events: Vec<NoteEvent>,
}

impl Track {
    pub fn compile(role: TrackRole, text: &str) -> Self {
        Self {
            role,
            events: compile(text),
        }
    }

    pub fn events(&self) -> &[NoteEvent] {
        &self.events
    }

    /// End of the last event, 0 for a track without events.
    pub fn length(&self) -> f64 {
        self.events.last().map_or(0.0, NoteEvent::end)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub id: u32,
    tracks: [Track; 4],
    loop_length: f64,
}

impl Composition {
    pub fn compile(id: u32, notation: &TrackSet) -> Self {
        let tracks = TrackRole::ALL.map(|role| Track::compile(role, notation.get(role)));
        let loop_length = tracks.iter().map(Track::length).fold(0.0, f64::max);
        Self {
            id,
            tracks,
            loop_length,
        }
    }

    pub fn tracks(&self) -> &[Track; 4] {
        &self.tracks
    }

    pub fn track(&self, role: TrackRole) -> &Track {
        &self.tracks[role.index()]
    }

    /// Seconds per cycle. Zero for a composition made only of rests.
    pub fn loop_length(&self) -> f64 {
        self.loop_length
    }

    /// A composition that cannot be looped and plays as silence.
    pub fn is_degenerate(&self) -> bool {
        self.loop_length.is_nan() || self.loop_length <= 0.0
    }
}

#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The id was already current; nothing changed.
    Unchanged(Arc<Composition>),
    /// A different composition was compiled and is now current.
    Replaced(Arc<Composition>),
    /// The source does not know the id; the current composition stays.
    Missing,
}

pub struct CompositionStore<S> {
    source: S,
    current: Option<Arc<Composition>>,
}

impl<S: CompositionSource> CompositionStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            current: None,
        }
    }

    pub fn load(&mut self, id: u32) -> LoadOutcome {
        if let Some(current) = self.current.as_ref().filter(|c| c.id == id) {
            return LoadOutcome::Unchanged(current.clone());
        }

        let Some(notation) = self.source.notation(id) else {
            warn!("No composition with id {}", id);
            return LoadOutcome::Missing;
        };

        let composition = Arc::new(Composition::compile(id, &notation));
        info!(
            "Compiled composition {}: {:.2}s loop, {} events",
            id,
            composition.loop_length(),
            composition
                .tracks()
                .iter()
                .map(|t| t.events().len())
                .sum::<usize>()
        );
        self.current = Some(composition.clone());
        LoadOutcome::Replaced(composition)
    }

    /// Forgets the current composition so the next `load` recompiles.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Arc<Composition>> {
        self.current.as_ref()
    }

    pub fn current_id(&self) -> Option<u32> {
        self.current.as_ref().map(|c| c.id)
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory source for tests across the crate.
    pub(crate) struct MapSource(pub HashMap<u32, TrackSet>);

    impl MapSource {
        pub(crate) fn new(entries: &[(u32, [&str; 4])]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(id, [lead, harmony, bass, percussion])| {
                        (
                            *id,
                            TrackSet {
                                lead: lead.to_string(),
                                harmony: harmony.to_string(),
                                bass: bass.to_string(),
                                percussion: percussion.to_string(),
                            },
                        )
                    })
                    .collect(),
            )
        }
    }

    impl CompositionSource for MapSource {
        fn notation(&self, id: u32) -> Option<TrackSet> {
            self.0.get(&id).cloned()
        }
    }

    #[test]
    fn loop_length_is_longest_track() {
        let source = MapSource::new(&[(
            0,
            ["t120 l4 c d", "t120 l2 c", "t120 l1 c", "t120 l8 k s k"],
        )]);
        let composition = Composition::compile(0, &source.notation(0).unwrap());
        assert_eq!(composition.track(TrackRole::Lead).length(), 1.0);
        assert_eq!(composition.track(TrackRole::Bass).length(), 2.0);
        assert_eq!(composition.track(TrackRole::Percussion).length(), 0.75);
        assert_eq!(composition.loop_length(), 2.0);
    }

    #[test]
    fn trailing_rests_do_not_extend_the_loop() {
        let source = MapSource::new(&[(0, ["t120 l4 c r r", "", "", ""])]);
        let composition = Composition::compile(0, &source.notation(0).unwrap());
        assert_eq!(composition.loop_length(), 0.5);
    }

    #[test]
    fn all_rest_composition_is_degenerate() {
        let source = MapSource::new(&[(0, ["r r", "r1", "", "xyz"])]);
        let composition = Composition::compile(0, &source.notation(0).unwrap());
        assert_eq!(composition.loop_length(), 0.0);
        assert!(composition.is_degenerate());
    }

    #[test]
    fn reloading_same_id_keeps_the_compiled_composition() {
        let mut store = CompositionStore::new(MapSource::new(&[(7, ["c", "d", "e", "k"])]));
        let first = match store.load(7) {
            LoadOutcome::Replaced(c) => c,
            other => panic!("expected Replaced, got {:?}", other),
        };
        match store.load(7) {
            LoadOutcome::Unchanged(c) => assert!(Arc::ptr_eq(&first, &c)),
            other => panic!("expected Unchanged, got {:?}", other),
        }
    }

    #[test]
    fn clear_forces_a_real_reload() {
        let mut store = CompositionStore::new(MapSource::new(&[(7, ["c", "d", "e", "k"])]));
        store.load(7);
        store.clear();
        assert_eq!(store.current_id(), None);
        assert!(matches!(store.load(7), LoadOutcome::Replaced(_)));
    }

    #[test]
    fn unknown_id_keeps_current() {
        let mut store = CompositionStore::new(MapSource::new(&[(1, ["c", "", "", ""])]));
        store.load(1);
        assert!(matches!(store.load(2), LoadOutcome::Missing));
        assert_eq!(store.current_id(), Some(1));
    }
}
