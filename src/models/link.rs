use serde::{Deserialize, Serialize};

/// An undirected track segment between two node ids.
///
/// `from`/`to` record the order the link was supplied in, but the segment has
/// no direction; matching against a node pair ignores orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackLink {
    pub from: String,
    pub to: String,
}

impl TrackLink {
    #[must_use]
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Whether this link joins `a` and `b`, in either orientation
    #[must_use]
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connects_either_orientation() {
        let link = TrackLink::new("st-01", "st-02");
        assert!(link.connects("st-01", "st-02"));
        assert!(link.connects("st-02", "st-01"));
    }

    #[test]
    fn test_connects_rejects_other_pairs() {
        let link = TrackLink::new("st-01", "st-02");
        assert!(!link.connects("st-01", "st-03"));
        assert!(!link.connects("st-03", "st-02"));
    }
}
