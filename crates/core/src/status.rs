//! Status lines a tick can ask the terminal to show.

use std::fmt;
use std::time::Duration;

/// One renderable status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Waiting for the player to start a round.
    Prompt { trigger: char },
    /// Time left before the window opens.
    Countdown(Duration),
    /// Inside the timing window.
    Now,
    Perfect,
    TooEarly,
    TooSlow,
}

impl Status {
    /// Whether this status ends a round.
    pub fn is_outcome(&self) -> bool {
        matches!(self, Status::Perfect | Status::TooEarly | Status::TooSlow)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Prompt { trigger } => {
                write!(f, "press ")?;
                for ch in trigger.to_uppercase() {
                    write!(f, "{ch}")?;
                }
                write!(f, " to start")
            }
            Status::Countdown(remaining) => write!(f, "{:.2}", remaining.as_secs_f64()),
            Status::Now => write!(f, "Now!"),
            Status::Perfect => write!(f, "Perfect!"),
            Status::TooEarly => write!(f, "Too early!"),
            Status::TooSlow => write!(f, "You were too slow!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Prompt { trigger: 'W' }.to_string(), "press W to start");
        assert_eq!(Status::Prompt { trigger: 'w' }.to_string(), "press W to start");
        assert_eq!(Status::Now.to_string(), "Now!");
        assert_eq!(Status::Perfect.to_string(), "Perfect!");
        assert_eq!(Status::TooEarly.to_string(), "Too early!");
        assert_eq!(Status::TooSlow.to_string(), "You were too slow!");
    }

    #[test]
    fn test_countdown_two_decimals() {
        assert_eq!(Status::Countdown(Duration::from_secs(2)).to_string(), "2.00");
        assert_eq!(
            Status::Countdown(Duration::from_millis(1234)).to_string(),
            "1.23"
        );
        assert_eq!(Status::Countdown(Duration::ZERO).to_string(), "0.00");
    }

    #[test]
    fn test_outcomes() {
        assert!(Status::Perfect.is_outcome());
        assert!(Status::TooEarly.is_outcome());
        assert!(Status::TooSlow.is_outcome());
        assert!(!Status::Now.is_outcome());
        assert!(!Status::Countdown(Duration::from_secs(1)).is_outcome());
    }
}
