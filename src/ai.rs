// Computer opponent: hunt at random (or by ranking in hard mode), then probe
// around a hit until the ship is confirmed sunk.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::mem;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::bitboard::CellSet;
use crate::coord::Coordinate;

/// How hunt-mode targets are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Uniformly random among undiscovered fields.
    #[default]
    Normal,
    /// Uniformly random among the fields that fit the longest ship.
    Hard,
}

/// Stateful targeting for one match.
#[derive(Debug, Clone)]
pub struct TargetingAi {
    difficulty: Difficulty,
    undiscovered: CellSet,
    to_shoot: VecDeque<Coordinate>,
    to_mark_as_empty: Vec<Coordinate>,
    last_target: Option<Coordinate>,
}

impl TargetingAi {
    /// Fresh state with every field undiscovered.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            undiscovered: CellSet::full(),
            to_shoot: VecDeque::new(),
            to_mark_as_empty: Vec::new(),
            last_target: None,
        }
    }

    pub fn last_target(&self) -> Option<Coordinate> {
        self.last_target
    }

    /// Number of fields not yet fired upon or excluded.
    pub fn remaining(&self) -> usize {
        self.undiscovered.count_ones()
    }

    pub fn is_undiscovered(&self, coord: Coordinate) -> bool {
        self.undiscovered.contains(coord)
    }

    /// Next field to fire at. Queued targets go first, in order; otherwise a
    /// hunt target is picked. Returns `None` once every field is used up.
    pub fn shoot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coordinate> {
        let chosen = loop {
            match self.to_shoot.pop_front() {
                Some(queued) if self.undiscovered.contains(queued) => break Some(queued),
                Some(_) => continue,
                None => break None,
            }
        };
        let chosen = match chosen {
            Some(target) => target,
            None => match self.difficulty {
                Difficulty::Normal => self.choose_random(rng)?,
                Difficulty::Hard => self.rank_and_choose(rng)?,
            },
        };
        self.undiscovered.remove(chosen);
        self.last_target = Some(chosen);
        log::debug!("computer targets {}", chosen);
        Some(chosen)
    }

    fn choose_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coordinate> {
        let pool: Vec<Coordinate> = self.undiscovered.coords().collect();
        pool.choose(rng).copied()
    }

    /// Pick uniformly among the undiscovered fields whose longest run of
    /// undiscovered fields, vertical or horizontal, is the global maximum.
    pub fn rank_and_choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coordinate> {
        let scored: Vec<(Coordinate, usize)> = self
            .undiscovered
            .coords()
            .map(|coord| (coord, self.score(coord)))
            .collect();
        let best = scored.iter().map(|&(_, score)| score).max()?;
        let top: Vec<Coordinate> = scored
            .into_iter()
            .filter(|&(_, score)| score == best)
            .map(|(coord, _)| coord)
            .collect();
        top.choose(rng).copied()
    }

    /// Length of the longest ship that could still pass through `coord`.
    fn score(&self, coord: Coordinate) -> usize {
        let vertical = 1 + self.run(coord, 0, -1) + self.run(coord, 0, 1);
        let horizontal = 1 + self.run(coord, -1, 0) + self.run(coord, 1, 0);
        vertical.max(horizontal)
    }

    /// Count of consecutive undiscovered fields stepping away from `from`.
    fn run(&self, from: Coordinate, dcol: i8, drow: i8) -> usize {
        let mut count = 0;
        let mut cursor = from.shifted(dcol, drow);
        while self.undiscovered.contains(cursor) {
            count += 1;
            cursor = cursor.shifted(dcol, drow);
        }
        count
    }

    /// The last shot hit. Diagonal neighbours cannot hold a ship and are queued
    /// for marking; orthogonal neighbours are queued to shoot in random order.
    pub fn react_to_hit<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Some(target) = self.last_target else {
            return;
        };
        for diagonal in target.diagonal_neighbors() {
            if self.undiscovered.remove(diagonal) {
                self.to_mark_as_empty.push(diagonal);
            }
        }
        let mut adjacent: Vec<Coordinate> = target
            .orthogonal_neighbors()
            .filter(|&c| self.undiscovered.contains(c))
            .collect();
        adjacent.shuffle(rng);
        self.to_shoot.extend(adjacent);
    }

    /// The last shot sank a ship. Its remaining neighbours and every queued
    /// guess are provably empty.
    pub fn react_to_sink(&mut self) {
        if let Some(target) = self.last_target {
            for adjacent in target.orthogonal_neighbors() {
                if self.undiscovered.remove(adjacent) {
                    self.to_mark_as_empty.push(adjacent);
                }
            }
        }
        for queued in self.to_shoot.drain(..) {
            if self.undiscovered.remove(queued) {
                self.to_mark_as_empty.push(queued);
            }
        }
    }

    /// Take the fields to mark as empty after this move.
    pub fn drain_marks(&mut self) -> Vec<Coordinate> {
        mem::take(&mut self.to_mark_as_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn c(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    fn ai_with_undiscovered(difficulty: Difficulty, cells: &[&str]) -> TargetingAi {
        let mut ai = TargetingAi::new(difficulty);
        ai.undiscovered = CellSet::new();
        for cell in cells {
            ai.undiscovered.insert(c(cell));
        }
        ai
    }

    fn force_shot(ai: &mut TargetingAi, at: &str) {
        ai.undiscovered.remove(c(at));
        ai.last_target = Some(c(at));
    }

    #[test]
    fn rank_prefers_cell_that_fits_longest_ship() {
        // a1 and j10 are isolated; e3 sits in a vertical run of four.
        let ai = ai_with_undiscovered(Difficulty::Hard, &["a1", "j10", "e3", "e4", "e5", "e6"]);
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let choice = ai.rank_and_choose(&mut rng).unwrap();
            assert!(["e3", "e4", "e5", "e6"].contains(&choice.to_string().as_str()));
        }
    }

    #[test]
    fn rank_single_long_cell_is_certain() {
        let ai = ai_with_undiscovered(Difficulty::Hard, &["a1", "c3", "h8"]);
        let mut lone = ai.clone();
        lone.undiscovered.insert(c("h9"));
        lone.undiscovered.insert(c("h10"));
        lone.undiscovered.insert(c("h7"));
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..20 {
            let choice = lone.rank_and_choose(&mut rng).unwrap();
            assert_eq!(choice.column, 'h');
        }
        assert_eq!(ai.score(c("a1")), 1);
        assert_eq!(lone.score(c("h8")), 4);
    }

    #[test]
    fn rank_skips_fields_next_to_two_shots() {
        let mut ai = TargetingAi::new(Difficulty::Hard);
        force_shot(&mut ai, "d3");
        force_shot(&mut ai, "e4");
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..100 {
            let choice = ai.rank_and_choose(&mut rng).unwrap();
            assert_ne!(choice, c("d4"));
            assert_ne!(choice, c("e3"));
        }
    }

    #[test]
    fn hit_queues_neighbors_and_marks_diagonals() {
        let mut ai = TargetingAi::new(Difficulty::Normal);
        let mut rng = SmallRng::seed_from_u64(3);
        force_shot(&mut ai, "b5");
        ai.react_to_hit(&mut rng);
        let mut queued: Vec<_> = ai.to_shoot.iter().map(|c| c.to_string()).collect();
        queued.sort();
        assert_eq!(queued, ["a5", "b4", "b6", "c5"]);
        let mut marks: Vec<_> = ai.drain_marks().iter().map(|c| c.to_string()).collect();
        marks.sort();
        assert_eq!(marks, ["a4", "a6", "c4", "c6"]);
        assert!(ai.drain_marks().is_empty());
    }

    #[test]
    fn hit_in_corner_ignores_off_board_fields() {
        let mut ai = TargetingAi::new(Difficulty::Normal);
        let mut rng = SmallRng::seed_from_u64(3);
        force_shot(&mut ai, "a1");
        ai.react_to_hit(&mut rng);
        assert_eq!(ai.to_shoot.len(), 2);
        assert_eq!(ai.to_mark_as_empty, [c("b2")]);
    }

    #[test]
    fn sink_of_single_ship_marks_whole_buffer() {
        let mut ai = TargetingAi::new(Difficulty::Normal);
        let mut rng = SmallRng::seed_from_u64(11);
        force_shot(&mut ai, "a1");
        ai.react_to_hit(&mut rng);
        ai.react_to_sink();
        let mut marks: Vec<_> = ai.drain_marks().iter().map(|c| c.to_string()).collect();
        marks.sort();
        assert_eq!(marks, ["a2", "b1", "b2"]);
        assert!(ai.to_shoot.is_empty());
        assert_eq!(ai.remaining(), 96);
    }

    #[test]
    fn queued_targets_are_shot_before_hunting() {
        let mut ai = TargetingAi::new(Difficulty::Normal);
        let mut rng = SmallRng::seed_from_u64(5);
        force_shot(&mut ai, "e5");
        ai.react_to_hit(&mut rng);
        let expected: Vec<Coordinate> = ai.to_shoot.iter().copied().collect();
        for want in expected {
            assert_eq!(ai.shoot(&mut rng), Some(want));
        }
    }
}
