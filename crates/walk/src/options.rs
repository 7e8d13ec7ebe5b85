/// Options recognised by the recursive iterators.
///
/// ```
/// use walk::WalkOptions;
///
/// let options = WalkOptions::new().max_depth(2).follow_symlinks(true);
/// assert_eq!(options.depth_limit(), Some(2));
/// assert!(options.follows_symlinks());
/// assert!(!options.detects_cycles());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WalkOptions {
    /// Deepest level yielded; `0` means unlimited. Directories at this depth
    /// are yielded but not descended into.
    pub max_depth: usize,
    /// Descend into symbolic links that point at directories.
    pub follow_symlinks: bool,
    /// Track canonical paths of visited directories and never descend into
    /// the same directory twice.
    pub detect_cycles: bool,
}

impl WalkOptions {
    /// Returns the default options: unlimited depth, symlinks not followed,
    /// no cycle detection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: 0,
            follow_symlinks: false,
            detect_cycles: false,
        }
    }

    /// Bounds the traversal depth (`0` for unlimited).
    #[must_use]
    pub const fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Configures whether directory symlinks are descended into.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Configures visited-directory tracking.
    #[must_use]
    pub const fn detect_cycles(mut self, detect: bool) -> Self {
        self.detect_cycles = detect;
        self
    }

    /// Returns the configured depth limit, `None` when unlimited.
    #[must_use]
    pub const fn depth_limit(&self) -> Option<usize> {
        if self.max_depth == 0 {
            None
        } else {
            Some(self.max_depth)
        }
    }

    /// Reports whether directory symlinks are descended into.
    #[must_use]
    pub const fn follows_symlinks(&self) -> bool {
        self.follow_symlinks
    }

    /// Reports whether visited directories are tracked.
    #[must_use]
    pub const fn detects_cycles(&self) -> bool {
        self.detect_cycles
    }

    /// Reports whether entries at `depth` may be descended into.
    pub(crate) const fn allows_descent_from(&self, depth: usize) -> bool {
        match self.depth_limit() {
            Some(limit) => depth < limit,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_depth_means_unlimited() {
        let options = WalkOptions::default();
        assert_eq!(options.depth_limit(), None);
        assert!(options.allows_descent_from(10_000));
    }

    #[test]
    fn depth_limit_stops_descent_at_the_limit() {
        let options = WalkOptions::new().max_depth(2);
        assert!(options.allows_descent_from(1));
        assert!(!options.allows_descent_from(2));
    }

    #[test]
    fn new_matches_default() {
        assert_eq!(WalkOptions::new(), WalkOptions::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_with_missing_fields() {
        let options: WalkOptions =
            serde_json::from_str(r#"{"max_depth": 3}"#).expect("deserialize");
        assert_eq!(options, WalkOptions::new().max_depth(3));
    }
}
