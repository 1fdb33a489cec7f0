/// Per-frame timing passed to every state hook.
///
/// `tick` is the host scheduler's frame counter; `dt_seconds` is the fixed
/// timestep. The core draws no random numbers, so no seed travels with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
}
