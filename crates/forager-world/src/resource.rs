/// A resource type, e.g. `ResourceKind("wood")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKind(pub &'static str);

impl core::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}

/// An indivisible unit of a resource.
///
/// Exclusively owned by exactly one of source, agent, or structure; ownership
/// moves as a whole value, never shared. Sources mint these on a successful
/// take and structures consume them on deposit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    kind: ResourceKind,
}

impl Resource {
    pub fn new(kind: ResourceKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
}
