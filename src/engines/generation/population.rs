// src/engines/generation/population.rs
use crate::engines::evaluation::Evaluator;
use crate::engines::generation::sequence::InstructionSequence;
use crate::engines::generation::vocabulary;
use crate::error::{Result, TrackfitError};
use rand::Rng;
use rayon::prelude::*;
use std::cmp::Ordering;

/// The current generation of candidate programs, in insertion order.
pub struct Population {
    members: Vec<InstructionSequence>,
}

impl Population {
    /// Seed `size` random starter programs from the mutation catalog.
    pub fn seed<R: Rng>(size: usize, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(TrackfitError::Validation(
                "population size must be at least 1".to_string(),
            ));
        }
        let mut members = Vec::with_capacity(size);
        for _ in 0..size {
            members.push(InstructionSequence::from_instructions(
                vocabulary::random_chain(rng),
            )?);
        }
        Ok(Population { members })
    }

    /// Start from caller-provided candidates instead of random ones.
    pub fn from_members(members: Vec<InstructionSequence>) -> Self {
        Population { members }
    }

    /// Score every member against the evaluator's series, failing fast on the
    /// first error.
    ///
    /// Members are scored in parallel; each one writes only its own state and
    /// nothing here draws randomness, so the outcome is independent of
    /// scheduling.
    pub fn evaluate_all(&mut self, evaluator: &Evaluator) -> Result<()> {
        self.members
            .par_iter_mut()
            .try_for_each(|member| evaluator.score(member).map(|_| ()))
    }

    /// Keep the better half: stable sort descending by score, then truncate
    /// to floor(len / 2). NaN scores sort below every real score, and ties
    /// keep their insertion order.
    pub fn select_survivors(&mut self) {
        self.members
            .sort_by(|a, b| descending_by_score(a.score(), b.score()));
        let keep = self.members.len() / 2;
        self.members.truncate(keep);
    }

    /// Clone every survivor, mutate one instruction of each clone, and append
    /// it, doubling the population.
    ///
    /// A clone that is only the identity seed has no mutable position; it is
    /// appended unchanged.
    pub fn mutate_and_repopulate<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let survivors = self.members.len();
        for i in 0..survivors {
            let mut child = self.members[i].clone();
            if child.len() <= 1 {
                log::debug!("clone has no mutable position, appending unmutated");
                self.members.push(child);
                continue;
            }
            let index = rng.gen_range(1..child.len());
            let instruction = vocabulary::random_instruction(rng);
            child.substitute_instruction(index, instruction)?;
            self.members.push(child);
        }
        Ok(())
    }

    /// The highest-scoring member; ties go to the earliest one.
    pub fn best(&self) -> Result<&InstructionSequence> {
        self.members
            .iter()
            .min_by(|a, b| descending_by_score(a.score(), b.score()))
            .ok_or_else(|| TrackfitError::Validation("population is empty".to_string()))
    }

    pub fn members(&self) -> &[InstructionSequence] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Descending score order with NaN pinned after every real score.
fn descending_by_score(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
