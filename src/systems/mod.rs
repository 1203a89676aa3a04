mod commands;
pub mod physics;

pub use commands::{
    handle_driving_rate_events, handle_pause_events, handle_reset_events, ResetRequestEvent,
    SetDrivingRateEvent, SetPausedEvent,
};
pub use physics::{bead_integrator_system, record_history_system};
