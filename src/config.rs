//! Configuration for label pairing.

/// Options for associating diagrams with labels.
#[derive(Debug, Clone, PartialEq)]
pub struct PairingConfig {
    /// Compress union-find paths while building the spanning tree.
    ///
    /// Only affects speed; the accepted edges are the same either way.
    pub path_compression: bool,

    /// Leave diagrams marked as repeating without a label.
    pub skip_repeating: bool,

    /// Largest center-to-center distance accepted for an association.
    pub max_separation: Option<f64>,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PairingConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            path_compression: false,
            skip_repeating: true,
            max_separation: None,
        }
    }

    /// Enable union-find path compression.
    pub fn with_path_compression(mut self, enable: bool) -> Self {
        self.path_compression = enable;
        self
    }

    /// Skip diagrams marked as repeating.
    pub fn with_skip_repeating(mut self, enable: bool) -> Self {
        self.skip_repeating = enable;
        self
    }

    /// Reject associations farther apart than `distance`.
    pub fn with_max_separation(mut self, distance: f64) -> Self {
        self.max_separation = Some(distance);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PairingConfig::default();
        assert!(!config.path_compression);
        assert!(config.skip_repeating);
        assert_eq!(config.max_separation, None);
    }

    #[test]
    fn test_builder() {
        let config = PairingConfig::new()
            .with_path_compression(true)
            .with_skip_repeating(false)
            .with_max_separation(120.0);
        assert!(config.path_compression);
        assert!(!config.skip_repeating);
        assert_eq!(config.max_separation, Some(120.0));
    }
}
