use crate::distance::Heuristic;
use crate::error::{SearchError, SearchResult};
use crate::neighbors::Connectivity;

/// Default bound on line-of-sight length, in cells.
pub const DEFAULT_MAX_LINE_OF_SIGHT: u32 = 30;

/// Tuning parameters for a search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Neighbour set expanded around each node.
    pub connectivity: Connectivity,
    /// Longest line of sight accepted for a shortcut, in cells.
    pub max_line_of_sight: u32,
    /// Multiplier applied to per-cell risk when it is added to `g`.
    pub cost_weight: f32,
    /// Frontier heuristic.
    pub heuristic: Heuristic,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::default(),
            max_line_of_sight: DEFAULT_MAX_LINE_OF_SIGHT,
            cost_weight: 1.0,
            heuristic: Heuristic::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn with_max_line_of_sight(mut self, cells: u32) -> Self {
        self.max_line_of_sight = cells;
        self
    }

    pub fn with_cost_weight(mut self, weight: f32) -> Self {
        self.cost_weight = weight;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Check that the parameters describe a usable search.
    ///
    /// A line of sight shorter than one cell would reject even adjacent
    /// parents, so it is refused along with negative or non-finite weights.
    pub fn validate(&self) -> SearchResult<()> {
        if self.max_line_of_sight == 0 {
            return Err(SearchError::InvalidConfig(
                "max_line_of_sight must be at least 1 cell".into(),
            ));
        }
        if !self.cost_weight.is_finite() || self.cost_weight < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "cost_weight must be finite and >= 0, got {}",
                self.cost_weight
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.connectivity, Connectivity::TwentySix);
        assert_eq!(cfg.max_line_of_sight, DEFAULT_MAX_LINE_OF_SIGHT);
        assert_eq!(cfg.cost_weight, 1.0);
        assert_eq!(cfg.heuristic, Heuristic::Euclidean);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builders_set_fields() {
        let cfg = SearchConfig::default()
            .with_connectivity(Connectivity::Flat8)
            .with_max_line_of_sight(4)
            .with_cost_weight(2.5)
            .with_heuristic(Heuristic::Octile);
        assert_eq!(cfg.connectivity, Connectivity::Flat8);
        assert_eq!(cfg.max_line_of_sight, 4);
        assert_eq!(cfg.cost_weight, 2.5);
        assert_eq!(cfg.heuristic, Heuristic::Octile);
    }

    #[test]
    fn rejects_bad_parameters() {
        let zero_los = SearchConfig::default().with_max_line_of_sight(0);
        assert!(matches!(zero_los.validate(), Err(SearchError::InvalidConfig(_))));
        let negative = SearchConfig::default().with_cost_weight(-1.0);
        assert!(negative.validate().is_err());
        let nan = SearchConfig::default().with_cost_weight(f32::NAN);
        assert!(nan.validate().is_err());
    }
}
