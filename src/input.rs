pub const MAX_MESSAGE_CHARS: usize = 500;

const CAUTION_ABOVE: usize = 400;
const LIMIT_ABOVE: usize = 450;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountLevel {
    #[default]
    Normal,
    Caution,
    Limit,
}

/// Composer counter shown as `len/500`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharacterCount {
    pub len: usize,
    pub level: CountLevel,
}

impl CharacterCount {
    pub fn of(text: &str) -> Self {
        let len = text.chars().count();
        let level = if len > LIMIT_ABOVE {
            CountLevel::Limit
        } else if len > CAUTION_ABOVE {
            CountLevel::Caution
        } else {
            CountLevel::Normal
        };
        Self { len, level }
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.len, MAX_MESSAGE_CHARS)
    }

    pub fn color(&self) -> &'static str {
        match self.level {
            CountLevel::Normal => "var(--text-muted)",
            CountLevel::Caution => "#f59e0b",
            CountLevel::Limit => "#ef4444",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(CharacterCount::of("").label(), "0/500");
        assert_eq!(
            CharacterCount::of(&"a".repeat(400)).level,
            CountLevel::Normal
        );
        assert_eq!(
            CharacterCount::of(&"a".repeat(401)).level,
            CountLevel::Caution
        );
        assert_eq!(
            CharacterCount::of(&"a".repeat(450)).level,
            CountLevel::Caution
        );
        assert_eq!(CharacterCount::of(&"a".repeat(451)).color(), "#ef4444");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(CharacterCount::of("• é").len, 3);
    }
}
