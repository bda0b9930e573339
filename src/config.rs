use serde::Deserialize;

/// Default width of the label column.
pub const DEFAULT_WIDTH: usize = 40;

/// Options for a timing session.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TimedOptions {
    pub label: String,
    #[serde(alias = "column_width")]
    pub width: usize, // minimum width of the label column, never truncates
}

impl Default for TimedOptions {
    fn default() -> Self {
        Self {
            label: String::new(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl TimedOptions {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl From<&str> for TimedOptions {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for TimedOptions {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_defaults() {
        let options = TimedOptions::default();
        assert_eq!(options.label, "");
        assert_eq!(options.width, 40);
    }

    #[test]
    fn test_builder() {
        let options = TimedOptions::new("load").width(12);
        assert_eq!(options.label, "load");
        assert_eq!(options.width, 12);

        let options: TimedOptions = "parse".into();
        assert_eq!(options, TimedOptions::new("parse"));
    }

    #[test]
    fn test_deserialize() -> Result<()> {
        let options: TimedOptions = serde_yaml::from_str("label: load\nwidth: 20\n")?;
        assert_eq!(options, TimedOptions::new("load").width(20));

        let options: TimedOptions = serde_yaml::from_str("column_width: 8\n")?;
        assert_eq!(options, TimedOptions::default().width(8));

        let options: TimedOptions = serde_yaml::from_str("{}")?;
        assert_eq!(options, TimedOptions::default());

        Ok(())
    }
}
