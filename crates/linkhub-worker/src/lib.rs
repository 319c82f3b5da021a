//! Background scheduled tasks for LinkHub.
//!
//! This crate provides:
//! - A cron scheduler for periodic maintenance tasks
//! - The retention sweep job that purges links past their retention window
//! - The expiry notice job that surfaces links expiring soon

pub mod jobs;
pub mod scheduler;

pub use scheduler::CronScheduler;
