//! The built-in soundtrack: five looping songs, one per stage, cycled in order.

mod songs;

use crate::composition::{CompositionSource, TrackSet};

pub(crate) struct SongData {
    title: &'static str,
    lead: &'static str,
    harmony: &'static str,
    bass: &'static str,
    percussion: &'static str,
}

const SONGS: [SongData; 5] = [
    songs::THE_AWAKENING,
    songs::CLOCKWORK_TOWER,
    songs::SPECTRAL_WALTZ,
    songs::BLOOD_MOON,
    songs::THE_CASTLE_KEEP,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn len(&self) -> usize {
        SONGS.len()
    }

    pub fn is_empty(&self) -> bool {
        SONGS.is_empty()
    }

    /// Song id for a 1-based stage number. Stage 0 plays like stage 1.
    pub fn for_stage(&self, stage: u32) -> u32 {
        stage.saturating_sub(1) % SONGS.len() as u32
    }

    pub fn title(&self, id: u32) -> Option<&'static str> {
        SONGS.get(id as usize).map(|song| song.title)
    }
}

impl CompositionSource for Catalog {
    fn notation(&self, id: u32) -> Option<TrackSet> {
        SONGS.get(id as usize).map(|song| TrackSet {
            lead: song.lead.to_string(),
            harmony: song.harmony.to_string(),
            bass: song.bass.to_string(),
            percussion: song.percussion.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::{Composition, TrackRole};

    #[test]
    fn stages_cycle_through_songs() {
        let catalog = Catalog;
        let ids: Vec<u32> = (1..=7).map(|stage| catalog.for_stage(stage)).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 0, 1]);
        assert_eq!(catalog.for_stage(0), 0);
    }

    #[test]
    fn titles() {
        assert_eq!(Catalog.title(0), Some("The Awakening"));
        assert_eq!(Catalog.title(4), Some("The Castle Keep"));
        assert_eq!(Catalog.title(5), None);
    }

    #[test]
    fn every_song_loops() {
        for id in 0..Catalog.len() as u32 {
            let notation = Catalog.notation(id).unwrap();
            let composition = Composition::compile(id, &notation);
            assert!(!composition.is_degenerate(), "song {} is silent", id);
            for role in TrackRole::ALL {
                let events = composition.track(role).events();
                assert!(!events.is_empty(), "song {} {:?} is empty", id, role);
                assert!(events.windows(2).all(|w| w[0].start <= w[1].start));
            }
        }
    }

    #[test]
    fn drums_only_hit_percussion() {
        let composition = Composition::compile(3, &Catalog.notation(3).unwrap());
        assert!(
            composition
                .track(TrackRole::Percussion)
                .events()
                .iter()
                .all(|e| e.voice.frequency().is_none())
        );
        assert!(
            composition
                .track(TrackRole::Bass)
                .events()
                .iter()
                .all(|e| e.voice.frequency().is_some())
        );
    }

    #[test]
    fn unknown_song() {
        assert!(Catalog.notation(99).is_none());
    }
}
