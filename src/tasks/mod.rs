//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Cache Sweep: Removes expired response cache entries at configured intervals

mod sweep;

pub use sweep::spawn_sweep_task;
