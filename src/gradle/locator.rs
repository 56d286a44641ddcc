//! Finds the region of a build file that gets replaced by the generated block.

pub const START_TOKEN: &str = "version";
pub const END_TOKEN: &str = "dependencies";

/// Zero-based line indices of the splice region.
///
/// Both indices stay `0` when their token never shows up; the `*_found`
/// flags tell a real match on line 0 apart from a miss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnchorRange {
    pub start: usize,
    pub end: usize,
    pub version_found: bool,
    pub dependencies_found: bool,
}

impl AnchorRange {
    /// End index used for slicing; never before `start`.
    pub fn effective_end(&self) -> usize {
        self.end.max(self.start)
    }

    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    pub fn missing_tokens(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.version_found {
            missing.push(START_TOKEN);
        }
        if !self.dependencies_found {
            missing.push(END_TOKEN);
        }
        missing
    }
}

/// Scans every line; the last line whose trimmed text starts with a token wins.
pub fn locate<S: AsRef<str>>(lines: &[S]) -> AnchorRange {
    let mut range = AnchorRange::default();

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.as_ref().trim();
        if trimmed.starts_with(START_TOKEN) {
            range.start = index;
            range.version_found = true;
        }
        if trimmed.starts_with(END_TOKEN) {
            range.end = index;
            range.dependencies_found = true;
        }
    }

    range
}
