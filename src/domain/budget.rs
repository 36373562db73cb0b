//! Node budget shared by one generation run

/// Caps the number of nodes produced by a single generation.
///
/// A fresh budget is created for each run and threaded through the recursion,
/// so independent runs never share accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeBudget {
    limit: usize,
    produced: usize,
}

impl NodeBudget {
    pub fn new(limit: usize) -> Self {
        Self { limit, produced: 0 }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn produced(&self) -> usize {
        self.produced
    }

    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.produced)
    }

    pub fn is_exhausted(&self) -> bool {
        self.produced >= self.limit
    }

    /// Count one produced node against the budget.
    pub fn charge(&mut self) {
        self.produced += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_budget_when_charging_then_tracks_remaining_until_exhausted() {
        let mut budget = NodeBudget::new(2);
        assert_eq!(budget.remaining(), 2);
        assert!(!budget.is_exhausted());

        budget.charge();
        assert_eq!(budget.produced(), 1);
        assert_eq!(budget.remaining(), 1);

        budget.charge();
        assert!(budget.is_exhausted());
        assert_eq!(budget.remaining(), 0);
        assert_eq!(budget.limit(), 2);
    }

    #[test]
    fn given_zero_limit_when_created_then_already_exhausted() {
        assert!(NodeBudget::new(0).is_exhausted());
    }
}
