use std::fmt;

/// The manageable sub-resource kinds of a Gen2+ device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Device-level identity (singleton, always exists).
    Identity,
    /// One input terminal, addressed by instance index.
    Input,
    /// One switch/relay channel, addressed by instance index.
    Switch,
}

impl ResourceKind {
    /// Lowercase name used in diagnostics and import-identifier messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Input => "input",
            Self::Switch => "switch",
        }
    }

    /// Indexed kinds carry an instance index in their import identifier.
    pub fn is_indexed(self) -> bool {
        !matches!(self, Self::Identity)
    }

    /// Whether create/delete is a meaningful lifecycle operation. Device
    /// identity always exists on hardware; it can only be read and written.
    pub fn supports_create_delete(self) -> bool {
        !matches!(self, Self::Identity)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
