pub mod clock;
pub mod config;
pub mod controller;
pub mod dates;
pub mod error;
pub mod handle;
pub mod item;
pub mod marks;
pub mod observer;
pub mod seed;
pub mod store;
pub mod timeline;

pub use crate::controller::{AgendaController, AgendaControllerBuilder, DayPage, ScrollRequest};
pub use crate::error::{AgendaError, Result};
