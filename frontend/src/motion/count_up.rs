use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::spring::{Spring, SpringConfig};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseStatError {
    #[error("stat value `{0}` does not start with a number")]
    MissingNumber(String),
    #[error("stat value `{0}` is too large")]
    Overflow(String),
}

/// A headline figure such as `10+` or `100%`: a leading integer and
/// whatever text follows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatValue {
    pub number: u32,
    pub suffix: String,
}

impl StatValue {
    /// Renders `shown` with this value's suffix.
    pub fn display(&self, shown: u32) -> String {
        format!("{}{}", shown, self.suffix)
    }
}

impl FromStr for StatValue {
    type Err = ParseStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits_end = s
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        if digits_end == 0 {
            return Err(ParseStatError::MissingNumber(s.to_string()));
        }
        let number = s[..digits_end]
            .parse()
            .map_err(|_| ParseStatError::Overflow(s.to_string()))?;
        Ok(Self {
            number,
            suffix: s[digits_end..].to_string(),
        })
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.suffix)
    }
}

/// Spring-driven counter from zero to a target integer.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: u32,
    config: SpringConfig,
    spring: Option<Spring>,
    shown: u32,
}

impl CountUp {
    pub fn new(target: u32, config: SpringConfig) -> Self {
        Self {
            target,
            config,
            spring: None,
            shown: 0,
        }
    }

    /// Releases the spring. Calling it again has no effect.
    pub fn start(&mut self) {
        if self.spring.is_none() {
            self.spring = Some(Spring::new(self.config, 0.0, self.target as f64));
        }
    }

    /// True between `start` and the spring coming to rest.
    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.spring.as_ref().map_or(false, |s| !s.is_settled())
    }

    /// Advances one frame. Returns whether another frame is needed.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        let Some(spring) = self.spring.as_mut() else {
            return false;
        };
        let position = spring.step(dt_ms);
        self.shown = position.round().max(0.0) as u32;
        !spring.is_settled()
    }

    pub fn displayed(&self) -> u32 {
        self.shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stat_values() {
        let ten: StatValue = "10+".parse().unwrap();
        assert_eq!(ten, StatValue { number: 10, suffix: "+".into() });

        let full: StatValue = "100%".parse().unwrap();
        assert_eq!(full.number, 100);
        assert_eq!(full.suffix, "%");

        let always: StatValue = "24/7".parse().unwrap();
        assert_eq!(always.number, 24);
        assert_eq!(always.to_string(), "24/7");
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!("N/A".parse::<StatValue>(), Err(ParseStatError::MissingNumber(_))));
        assert!(matches!(
            "99999999999%".parse::<StatValue>(),
            Err(ParseStatError::Overflow(_))
        ));
    }

    #[test]
    fn test_nothing_happens_before_start() {
        let mut count = CountUp::new(100, SpringConfig::COUNT_UP);
        assert!(!count.advance(16.0));
        assert_eq!(count.displayed(), 0);
        assert!(!count.is_running());
    }

    #[test]
    fn test_count_up_is_monotonic_and_ends_on_target() {
        let stat: StatValue = "100%".parse().unwrap();
        let mut count = CountUp::new(stat.number, SpringConfig::COUNT_UP);
        count.start();

        let mut shown = vec![count.displayed()];
        let mut frames = 0;
        while count.advance(1000.0 / 60.0) {
            shown.push(count.displayed());
            frames += 1;
            assert!(frames < 1_000, "count-up never settled");
        }
        shown.push(count.displayed());

        for pair in shown.windows(2) {
            assert!(pair[1] >= pair[0], "went backwards: {:?}", pair);
        }
        assert_eq!(count.displayed(), 100);
        assert_eq!(stat.display(count.displayed()), "100%");
        assert!(!count.is_running());
    }

    #[test]
    fn test_settled_counter_requests_no_more_frames() {
        let mut count = CountUp::new(10, SpringConfig::COUNT_UP);
        count.start();
        while count.advance(50.0) {}
        assert!(!count.advance(50.0));
        assert_eq!(count.displayed(), 10);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut count = CountUp::new(24, SpringConfig::COUNT_UP);
        count.start();
        count.advance(200.0);
        let mid = count.displayed();
        count.start();
        count.advance(0.0);
        assert_eq!(count.displayed(), mid);
    }
}
