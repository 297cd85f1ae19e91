use crate::shuffle;
use crate::{DrawError, Result};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One setup-through-results drawing cycle.
///
/// Holds the shuffled permutation of gift numbers 1..=n, the draw cursor and
/// the history of gifts drawn so far. The history is always the prefix of the
/// permutation up to the cursor, in draw order.
#[derive(Debug)]
pub struct DrawSession {
    id: Uuid,
    participant_count: u32,
    permutation: Vec<u32>,
    cursor: usize,
    history: Vec<u32>,
    created_at: DateTime<Utc>,
}

impl DrawSession {
    pub fn new(participant_count: u32) -> Result<Self> {
        Self::new_with_rng(participant_count, &mut rand::thread_rng())
    }

    pub fn new_with_rng<R: Rng>(participant_count: u32, rng: &mut R) -> Result<Self> {
        if participant_count == 0 {
            return Err(DrawError::invalid_count(participant_count.to_string()));
        }

        let mut permutation = shuffle::sequence(participant_count);
        shuffle::fisher_yates(&mut permutation, rng);

        let session = Self {
            id: Uuid::new_v4(),
            participant_count,
            permutation,
            cursor: 0,
            history: Vec::with_capacity(participant_count as usize),
            created_at: Utc::now(),
        };

        tracing::info!(
            "Session {} created for {} participants",
            session.id,
            participant_count
        );
        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn participant_count(&self) -> u32 {
        self.participant_count
    }

    /// Number of draws taken so far.
    pub fn draws_taken(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.participant_count as usize
    }

    /// Gifts drawn so far, in draw order.
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    pub fn last_drawn(&self) -> Option<u32> {
        self.history.last().copied()
    }

    /// Reveal the next gift number. Returns `None` once every participant
    /// has drawn; drawing past the end is a no-op, not an error.
    pub fn draw_next(&mut self) -> Option<u32> {
        if self.is_exhausted() {
            return None;
        }

        let gift = self.permutation[self.cursor];
        self.history.push(gift);
        self.cursor += 1;

        tracing::info!(
            "Session {} drew gift {} ({}/{})",
            self.id,
            gift,
            self.cursor,
            self.participant_count
        );
        Some(gift)
    }

    /// Discard all draws and reshuffle the same set of gift numbers.
    pub fn reshuffle(&mut self) {
        self.reshuffle_with_rng(&mut rand::thread_rng());
    }

    pub fn reshuffle_with_rng<R: Rng>(&mut self, rng: &mut R) {
        self.permutation = shuffle::sequence(self.participant_count);
        shuffle::fisher_yates(&mut self.permutation, rng);
        self.cursor = 0;
        self.history.clear();

        tracing::info!("Session {} reshuffled", self.id);
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id,
            participant_count: self.participant_count,
            draws_taken: self.cursor,
            history: self.history.clone(),
            created_at: self.created_at,
        }
    }
}

/// Session snapshot for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub participant_count: u32,
    pub draws_taken: usize,
    pub history: Vec<u32>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rejects_zero_count() {
        assert!(matches!(
            DrawSession::new(0),
            Err(DrawError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_draws_are_a_permutation() {
        for n in [1u32, 2, 7, 25] {
            let mut session = DrawSession::new(n).unwrap();
            let mut seen = HashSet::new();
            for _ in 0..n {
                let gift = session.draw_next().unwrap();
                assert!((1..=n).contains(&gift));
                assert!(seen.insert(gift), "gift {} drawn twice", gift);
            }
            assert!(session.is_exhausted());
            assert_eq!(session.history().len(), n as usize);
        }
    }

    #[test]
    fn test_exhausted_draw_is_noop() {
        let mut session = DrawSession::new(2).unwrap();
        session.draw_next().unwrap();
        session.draw_next().unwrap();

        let history_before = session.history().to_vec();
        assert_eq!(session.draw_next(), None);
        assert_eq!(session.history(), history_before.as_slice());
        assert_eq!(session.draws_taken(), 2);
    }

    #[test]
    fn test_reshuffle_resets_cursor_and_history() {
        let mut session = DrawSession::new(3).unwrap();
        session.draw_next().unwrap();
        assert_eq!(session.draws_taken(), 1);

        session.reshuffle();
        assert_eq!(session.draws_taken(), 0);
        assert!(session.history().is_empty());
        assert!(!session.is_exhausted());

        // A full run after the reshuffle still covers 1..=3.
        let drawn: HashSet<u32> = std::iter::from_fn(|| session.draw_next()).collect();
        assert_eq!(drawn, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_info_snapshot_serializes() {
        let mut session = DrawSession::new(3).unwrap();
        session.draw_next().unwrap();

        let info = session.info();
        assert_eq!(info.participant_count, 3);
        assert_eq!(info.draws_taken, 1);
        assert_eq!(info.history, session.history());

        let json = serde_json::to_string(&info).unwrap();
        let restored: SessionInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.id, info.id);
        assert_eq!(restored.history, info.history);
    }
}
