use bevy::prelude::*;
use std::collections::VecDeque;

const DEFAULT_MAX_POINTS: usize = 10_000;

/// Rolling trace of `(theta, theta_dot)` phase-space points for plotting.
///
/// Bounded; once full, the oldest points are discarded. Cleared on reset.
#[derive(Resource, Debug, Clone)]
pub struct PhaseHistory {
    points: VecDeque<[f64; 2]>,
    max_points: usize,
}

impl Default for PhaseHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_POINTS)
    }
}

impl PhaseHistory {
    pub fn with_capacity(max_points: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_points.min(DEFAULT_MAX_POINTS)),
            max_points,
        }
    }

    pub fn push(&mut self, theta: f64, theta_dot: f64) {
        if self.points.len() == self.max_points {
            self.points.pop_front();
        }
        self.points.push_back([theta, theta_dot]);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64; 2]> {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<[f64; 2]> {
        self.points.back().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_clear() {
        let mut history = PhaseHistory::default();
        history.push(0.1, 0.2);
        history.push(0.3, -0.4);

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest(), Some([0.3, -0.4]));

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = PhaseHistory::with_capacity(3);
        for i in 0..5 {
            history.push(i as f64, 0.0);
        }

        assert_eq!(history.len(), 3);
        let first = *history.iter().next().unwrap();
        assert_eq!(first, [2.0, 0.0]);
    }
}
