use super::io::TextIo;
use crate::error::ConsoleError;

const AFFIRMATIVE: &str = "y";
const NEGATIVE: &str = "n";

/// A yes/no question asked until answered with `y` or `n`.
pub struct YesNoDialog {
    question: String,
    answer: String,
}

impl YesNoDialog {
    pub fn new(question: impl Into<String>) -> Self {
        YesNoDialog {
            question: question.into(),
            answer: String::new(),
        }
    }

    pub fn is_affirmative(&self) -> bool {
        self.answer == AFFIRMATIVE
    }

    pub fn is_negative(&self) -> bool {
        self.answer == NEGATIVE
    }

    pub fn ask<T: TextIo>(&mut self, io: &mut T) -> Result<(), ConsoleError> {
        loop {
            self.answer = io.read_string(&self.question)?;
            if self.is_affirmative() || self.is_negative() {
                return Ok(());
            }
            tracing::warn!(answer = %self.answer, "invalid yes/no answer");
            io.writeln(r#"Please, answer "y" or "n""#)?;
        }
    }
}
