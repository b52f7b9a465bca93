use rand::seq::SliceRandom;
use rand::Rng;

/// Furthest a distractor may sit from the correct answer.
const MAX_DISTRACTOR_OFFSET: i64 = 10;

/// An ordered (multiplicand, multiplier) pair drawn from the session pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionPair {
    pub multiplicand: u32,
    pub multiplier: u32,
}

impl QuestionPair {
    pub fn new(multiplicand: u32, multiplier: u32) -> Self {
        Self {
            multiplicand,
            multiplier,
        }
    }

    pub fn product(&self) -> u32 {
        self.multiplicand * self.multiplier
    }

    /// The prompt shown to the user, e.g. "7 × 8 = ?"
    pub fn prompt(&self) -> String {
        format!("{} × {} = ?", self.multiplicand, self.multiplier)
    }
}

/// A multiple-choice question: one pair, four options in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub pair: QuestionPair,
    pub options: [u32; 4],
}

impl Question {
    /// Builds a question for `pair` with three distractors.
    ///
    /// Distractors are sampled as non-zero offsets in
    /// [-MAX_DISTRACTOR_OFFSET, MAX_DISTRACTOR_OFFSET] from the correct
    /// answer, kept only when positive and not already present. The four
    /// options end up in uniformly random display order.
    pub fn from_pair(pair: QuestionPair, rng: &mut impl Rng) -> Self {
        let correct = pair.product();
        let mut options = [correct; 4];
        let mut filled = 1;

        while filled < 4 {
            let offset = rng.gen_range(-MAX_DISTRACTOR_OFFSET..=MAX_DISTRACTOR_OFFSET);
            if offset == 0 {
                continue;
            }
            let candidate = correct as i64 + offset;
            if candidate <= 0 {
                continue;
            }
            let candidate = candidate as u32;
            if options[..filled].contains(&candidate) {
                continue;
            }
            options[filled] = candidate;
            filled += 1;
        }

        options.shuffle(rng);

        Self { pair, options }
    }

    pub fn prompt(&self) -> String {
        self.pair.prompt()
    }

    pub fn correct_answer(&self) -> u32 {
        self.pair.product()
    }

    pub fn is_correct(&self, selected: u32) -> bool {
        selected == self.correct_answer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pair_product() {
        assert_eq!(QuestionPair::new(7, 8).product(), 56);
        assert_eq!(QuestionPair::new(1, 1).product(), 1);
        assert_eq!(QuestionPair::new(12, 12).product(), 144);
    }

    #[test]
    fn test_pair_prompt() {
        assert_eq!(QuestionPair::new(3, 4).prompt(), "3 × 4 = ?");
    }

    #[test]
    fn test_options_distinct_positive_one_correct() {
        let mut rng = StdRng::seed_from_u64(7);

        for m in 1..=12u32 {
            for n in 1..=12u32 {
                let pair = QuestionPair::new(m, n);
                let q = Question::from_pair(pair, &mut rng);

                let correct_count = q
                    .options
                    .iter()
                    .filter(|&&o| o == pair.product())
                    .count();
                assert_eq!(correct_count, 1, "exactly one correct option for {m}x{n}");

                for (i, &a) in q.options.iter().enumerate() {
                    assert!(a > 0, "option {a} must be positive");
                    for &b in &q.options[i + 1..] {
                        assert_ne!(a, b, "options must be pairwise distinct for {m}x{n}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_distractors_within_offset_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let pair = QuestionPair::new(6, 9);
        let correct = pair.product() as i64;

        for _ in 0..50 {
            let q = Question::from_pair(pair, &mut rng);
            for &opt in &q.options {
                let distance = (opt as i64 - correct).abs();
                assert!(distance <= MAX_DISTRACTOR_OFFSET);
            }
        }
    }

    #[test]
    fn test_smallest_product_still_yields_positive_options() {
        let mut rng = StdRng::seed_from_u64(3);
        let pair = QuestionPair::new(1, 1);

        for _ in 0..50 {
            let q = Question::from_pair(pair, &mut rng);
            assert!(q.options.iter().all(|&o| o >= 1));
            assert!(q.options.contains(&1));
        }
    }

    #[test]
    fn test_same_seed_same_question() {
        let pair = QuestionPair::new(9, 7);

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let qa = Question::from_pair(pair, &mut rng_a);
        let qb = Question::from_pair(pair, &mut rng_b);

        assert_eq!(qa, qb);
    }

    #[test]
    fn test_is_correct() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = Question::from_pair(QuestionPair::new(4, 5), &mut rng);

        assert!(q.is_correct(20));
        assert!(!q.is_correct(21));
        assert!(!q.is_correct(0));
    }
}
