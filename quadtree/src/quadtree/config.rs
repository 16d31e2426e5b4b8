use crate::error::{QuadtreeError, QuadtreeResult};

/// Tuning knobs for a [`QuadTree`](super::QuadTree).
///
/// `node_capacity` is how many values a leaf holds before it splits; `max_depth`
/// caps how far below the root splitting may go. Leaves at `max_depth` grow
/// without limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub node_capacity: usize,
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_capacity: 16,
            max_depth: 8,
        }
    }
}

impl Config {
    pub fn validate(&self) -> QuadtreeResult<()> {
        if self.node_capacity == 0 {
            return Err(QuadtreeError::InvalidConfig {
                node_capacity: self.node_capacity,
                max_depth: self.max_depth,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::error::QuadtreeError;

    #[test]
    fn default_matches_documented_limits() {
        let config = Config::default();
        assert_eq!(config.node_capacity, 16);
        assert_eq!(config.max_depth, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = Config {
            node_capacity: 0,
            max_depth: 3,
        };
        assert_eq!(
            config.validate(),
            Err(QuadtreeError::InvalidConfig {
                node_capacity: 0,
                max_depth: 3
            })
        );
    }
}
