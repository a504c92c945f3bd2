//! Quiz component - fixed question deck, cursor, and score tally
//!
//! Deliberately shallow: static question/option data, one optional
//! selection per question, next/previous navigation with a results mode
//! past the last question, and a count-plus-percentage score.
//!
//! # Example
//!
//! ```
//! use parlor::quiz::Quiz;
//!
//! let mut quiz = Quiz::with_default_deck();
//! quiz.select(2);
//! quiz.next();
//! assert_eq!(quiz.current_index(), 1);
//! ```

// =============================================================================
// QUESTIONS
// =============================================================================

/// One multiple-choice question with exactly four options.
#[derive(Clone, Copy, Debug)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    /// Index of the correct option.
    pub answer: usize,
}

/// The built-in general-knowledge deck.
pub const DEFAULT_DECK: &[Question] = &[
    Question {
        prompt: "Which planet is the largest in the Solar System?",
        options: ["Earth", "Mars", "Jupiter", "Saturn"],
        answer: 2,
    },
    Question {
        prompt: "Which chemical element has the symbol \"O\"?",
        options: ["Ozone", "Oxygen", "Gold", "Osmium"],
        answer: 1,
    },
    Question {
        prompt: "Who wrote the novel \"War and Peace\"?",
        options: [
            "Fyodor Dostoevsky",
            "Leo Tolstoy",
            "Anton Chekhov",
            "Ivan Turgenev",
        ],
        answer: 1,
    },
    Question {
        prompt: "Which language runs natively in web browsers?",
        options: ["Java", "Swift", "JavaScript", "C++"],
        answer: 2,
    },
    Question {
        prompt: "Which year marked the start of World War II?",
        options: ["1937", "1939", "1941", "1945"],
        answer: 1,
    },
    Question {
        prompt: "Which country is the largest by area?",
        options: ["China", "USA", "Canada", "Russia"],
        answer: 3,
    },
    Question {
        prompt: "Which element comes first in the periodic table?",
        options: ["Helium", "Hydrogen", "Lithium", "Oxygen"],
        answer: 1,
    },
];

// =============================================================================
// QUIZ STATE
// =============================================================================

/// Cursor plus one selection slot per question.
#[derive(Clone, Debug)]
pub struct Quiz {
    questions: &'static [Question],
    current: usize,
    selected: Vec<Option<usize>>,
    finished: bool,
}

impl Default for Quiz {
    fn default() -> Self {
        Self::with_default_deck()
    }
}

impl Quiz {
    /// A quiz over the built-in deck.
    pub fn with_default_deck() -> Self {
        Self::new(DEFAULT_DECK)
    }

    /// A quiz over an arbitrary non-empty deck.
    pub fn new(questions: &'static [Question]) -> Self {
        assert!(!questions.is_empty(), "quiz needs at least one question");
        Self {
            questions,
            current: 0,
            selected: vec![None; questions.len()],
            finished: false,
        }
    }

    // -------------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Zero-based cursor position.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question under the cursor.
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn questions(&self) -> &[Question] {
        self.questions
    }

    /// Selected option index for the current question.
    pub fn selection(&self) -> Option<usize> {
        self.selected[self.current]
    }

    /// Selected option index for question `index`.
    pub fn selection_for(&self, index: usize) -> Option<usize> {
        self.selected.get(index).copied().flatten()
    }

    /// True once the cursor advanced past the last question.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Count of selections matching the correct option.
    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .zip(&self.selected)
            .filter(|(q, s)| **s == Some(q.answer))
            .count()
    }

    /// Score as a rounded percentage of the deck size.
    pub fn percentage(&self) -> u32 {
        (self.score() as f64 / self.len() as f64 * 100.0).round() as u32
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Select an option (0-3) for the current question, replacing any
    /// previous choice.
    pub fn select(&mut self, option: usize) {
        if option < self.current_question().options.len() {
            self.selected[self.current] = Some(option);
        }
    }

    /// Advance the cursor; past the last question this enters the
    /// results mode instead.
    pub fn next(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.finished = true;
        }
    }

    /// Step the cursor back; a no-op on the first question.
    pub fn previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Clear all selections and return to the first question.
    pub fn restart(&mut self) {
        self.current = 0;
        self.selected = vec![None; self.questions.len()];
        self.finished = false;
    }
}

// =============================================================================
// TESTS
// =============================================================================
