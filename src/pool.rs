use crate::error::QuizError;
use crate::question::{Question, QuestionPair};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Largest table number a pool can be built from.
pub const MAX_TABLE: u32 = 12;

/// A randomized, non-repeating traversal over every (multiplicand,
/// multiplier) pair for the selected tables.
///
/// The pool holds the full Cartesian product of the selected tables against
/// 1..=12 in a shuffled order. Serving walks the shuffle front to back; when
/// the cursor falls off the end the same multiset is reshuffled and the
/// cursor resets. The pair at the seam may repeat (last of one cycle, first
/// of the next); the seam is served as-is rather than smoothed.
#[derive(Debug)]
pub struct QuestionPool {
    pairs: Vec<QuestionPair>,
    cursor: usize,
    rng: StdRng,
}

impl QuestionPool {
    /// Builds a shuffled pool for `tables`. Duplicates in the input are
    /// collapsed. Fails when no valid table is selected or a table falls
    /// outside 1..=MAX_TABLE.
    pub fn new(tables: &[u32], seed: Option<u64>) -> Result<Self, QuizError> {
        let mut tables = tables.to_vec();
        tables.sort_unstable();
        tables.dedup();

        if tables.is_empty() {
            return Err(QuizError::InvalidInput(
                "at least one table must be selected".to_string(),
            ));
        }
        if let Some(&bad) = tables.iter().find(|&&t| t == 0 || t > MAX_TABLE) {
            return Err(QuizError::InvalidInput(format!(
                "table {bad} is out of range (1-{MAX_TABLE})"
            )));
        }

        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        let mut pairs: Vec<QuestionPair> = tables
            .iter()
            .copied()
            .cartesian_product(1..=MAX_TABLE)
            .map(|(m, n)| QuestionPair::new(m, n))
            .collect();
        pairs.shuffle(&mut rng);

        Ok(Self {
            pairs,
            cursor: 0,
            rng,
        })
    }

    /// Number of pairs in one full cycle.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Position within the current shuffle cycle.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Serves the next pair, reshuffling once the current cycle is spent.
    pub fn next_pair(&mut self) -> QuestionPair {
        if self.cursor >= self.pairs.len() {
            self.pairs.shuffle(&mut self.rng);
            self.cursor = 0;
        }
        let pair = self.pairs[self.cursor];
        self.cursor += 1;
        pair
    }

    /// Serves the next pair dressed up as a four-option question.
    pub fn next_question(&mut self) -> Question {
        let pair = self.next_pair();
        Question::from_pair(pair, &mut self.rng)
    }
}
