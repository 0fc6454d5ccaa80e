/// Column attributes consumed when generating a dialect declaration.
///
/// Passed per call; never owned by a type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub length: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub fixed: bool,
    pub unsigned: bool,
    pub notnull: bool,
    pub default: Option<String>,
}

impl ColumnDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn unsigned(mut self, unsigned: bool) -> Self {
        self.unsigned = unsigned;
        self
    }

    pub fn notnull(mut self, notnull: bool) -> Self {
        self.notnull = notnull;
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}
