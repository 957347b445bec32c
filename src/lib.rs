//! EXTI blinky - debounced button events handed off to a blinking lamp loop.
//!
//! The library holds everything that can run on the host: the debounce
//! controller, the refresh loop, setup through the device access layer and the
//! GPIO adapters built on `embedded-hal`. The `blinky` binary adds the
//! embassy-stm32 wiring for the STM32F407 Discovery board.
//!
//! # Testing
//!
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

// Must come first so the logging macros are visible to every module below.
#[macro_use]
mod fmt;

pub mod board;
pub mod channel;
pub mod config;
pub mod debounce;
pub mod device;
pub mod error;
pub mod hardware;
pub mod pin;
pub mod refresh;
pub mod setup;
pub mod task;

#[cfg(feature = "async")]
pub mod edge;

#[cfg(test)]
mod mock;

pub use board::{Board, DISCOVERY_F407};
pub use channel::{BlinkPhase, ChannelId, ChannelSet};
pub use debounce::{BouncePolicy, DebounceConfig, EdgeController, EdgeVerdict, Frame};
pub use device::{DeviceAccess, Millis, MonotonicClock, Pacer, PinHandle};
pub use error::{DeviceError, RefreshError, SetupError, TaskExit};
pub use task::Task;
