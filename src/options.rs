use crate::constants::DEFAULT_MAX_DEPTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
}

impl Indent {
    pub fn spaces(count: usize) -> Self {
        Indent::Spaces(count)
    }

    pub(crate) fn as_bytes(self) -> Vec<u8> {
        let Indent::Spaces(count) = self;
        vec![b' '; count]
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(2)
    }
}

/// How condition filters compare a field against its expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Type-juggling equality: `1 == "1"`, `null == false`.
    #[default]
    Loose,
    /// Structural equality of the JSON values.
    Strict,
}

#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    /// Compact output when `None`.
    pub indent: Option<Indent>,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self::default().with_indent(Indent::default())
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = Some(indent);
        self
    }
}

#[derive(Debug, Clone)]
pub struct DecodeOptions {
    pub max_depth: usize,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
