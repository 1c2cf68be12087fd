//! Background Tasks Module
//!
//! Contains background tasks that run during server operation.
//!
//! # Tasks
//! - Pre-warm: warms the window around today at startup, then keeps the
//!   forward window warm as days roll over

mod prewarm;

pub use prewarm::spawn_prewarm_task;
