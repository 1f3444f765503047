/// Compiled-size ceiling for a single user regex, matching the `regex` crate default.
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Nesting ceiling for a single user regex, matching the `regex` crate default.
pub const DEFAULT_REGEX_NEST_LIMIT: u32 = 250;

/// Limits applied when compiling user-supplied regular expressions.
///
/// A pattern that exceeds either limit is treated like a malformed one: its
/// clause never raw-matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    regex_size_limit: usize,
    regex_nest_limit: u32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            regex_nest_limit: DEFAULT_REGEX_NEST_LIMIT,
        }
    }
}

impl CompileOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Approximate upper bound, in bytes, of a compiled regex.
    #[must_use]
    pub fn regex_size_limit(mut self, bytes: usize) -> Self {
        self.regex_size_limit = bytes;
        self
    }

    /// Maximum nesting depth of groups and repetitions in a regex.
    #[must_use]
    pub fn regex_nest_limit(mut self, depth: u32) -> Self {
        self.regex_nest_limit = depth;
        self
    }

    #[must_use]
    pub fn size_limit(&self) -> usize {
        self.regex_size_limit
    }

    #[must_use]
    pub fn nest_limit(&self) -> u32 {
        self.regex_nest_limit
    }
}
