use core::fmt::Debug;

/// Stable identifier for an agent.
///
/// Hosts address agents by id; all mutable per-agent state lives in the body
/// the controller owns. Deterministic simulation requires stable ordering
/// (`Ord`) and a stable numeric id for logs.
pub trait AgentId: Copy + Ord + Eq + Debug {
    fn stable_id(self) -> u64;
}

impl AgentId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

impl AgentId for u32 {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

impl AgentId for usize {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

/// Read-only world access.
///
/// The core intentionally does not prescribe which queries a world must
/// expose; subsystems (bodies, targets, steering) define extension traits.
pub trait WorldView {
    type Agent: AgentId;
}

/// Write access / effect sink.
pub trait WorldMut: WorldView {}
