use crate::context::AppContext;
use crate::error::AppResult;
use crate::swap::{self, SwapState};

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let status = swap::status(&ctx.paths)?;

    let text = match status.state {
        SwapState::Idle => format!("idle: {} is in place, no backup", status.active),
        SwapState::Swapped if status.active_exists => format!(
            "swapped: backup at {}, test config at {}",
            status.backup, status.active
        ),
        SwapState::Swapped => format!(
            "swapped: backup at {}, nothing at {}",
            status.backup, status.active
        ),
        SwapState::Missing => format!(
            "missing: neither {} nor {} exists",
            status.active, status.backup
        ),
    };
    ctx.output.emit(&text, &status)
}
