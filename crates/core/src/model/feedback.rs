/// Classification of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    TooLow,
    TooHigh,
    Correct,
    /// The response could not be read as a number.
    Invalid,
}

impl Feedback {
    /// Banner text shown to the player.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Feedback::TooLow => "Too Low.",
            Feedback::TooHigh => "Too High.",
            Feedback::Correct => "Correct!",
            Feedback::Invalid => "Invalid Input.",
        }
    }

    /// Modifier class for the banner container, derived from the message
    /// (lowercased, dashed, trailing punctuation dropped).
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Feedback::TooLow => "too-low",
            Feedback::TooHigh => "too-high",
            Feedback::Correct => "correct",
            Feedback::Invalid => "invalid-input",
        }
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_class_follows_message() {
        for kind in [
            Feedback::TooLow,
            Feedback::TooHigh,
            Feedback::Correct,
            Feedback::Invalid,
        ] {
            let derived = kind
                .message()
                .to_lowercase()
                .split(' ')
                .collect::<Vec<_>>()
                .join("-");
            let derived = &derived[..derived.len() - 1];
            assert_eq!(kind.css_class(), derived);
        }
    }
}
