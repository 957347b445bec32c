//! STM32F407 Discovery EXTI Blinky
//! =============================================================================================
//!
//! Four lamps (LD4 green PD12, LD3 orange PD13, LD5 red PD14, LD6 blue PD15) blink at 500 ms.
//! The blue user button B1 (PA0, rising edge, pull-down) toggles which lamps are lit; contact
//! bounce within 20 ms is discarded.
//!
//! Tasks:
//! 1. main: bring-up through the GPIO panel, then the refresh loop (never returns)
//! 2. button_task: waits on EXTI0 and feeds the debounce controller
//!
//! Any setup or output failure stops the task with status 1 and parks the core.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

#[cfg(target_arch = "arm")]
use {
    defmt::{error, info},
    defmt_rtt as _, // Global logger
    embassy_executor::Spawner,
    embassy_stm32::{
        exti::ExtiInput,
        gpio::{Level, Output, Pull, Speed},
    },
    exti_blinky::{
        Board, DISCOVERY_F407, DebounceConfig, EdgeController, Task, TaskExit, edge,
        hardware::{
            embassy::{EmbassyClock, TimerPacer},
            gpio_button::GpioButton,
            gpio_led::GpioLed,
            gpio_panel::GpioPanel,
        },
    },
    panic_probe as _, // Panic handler
    static_cell::StaticCell,
};

#[cfg(target_arch = "arm")]
static BOARD: Board = DISCOVERY_F407;

// Shared state between the button task and the refresh loop
#[cfg(target_arch = "arm")]
static CONTROLLER: StaticCell<EdgeController> = StaticCell::new();

#[cfg(target_arch = "arm")]
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());

    info!("Hello, I'm the BLINKY task on {=str}", BOARD.name);

    // Board-table order: A green, B orange, C red, D blue
    let leds = [
        GpioLed::active_high(Output::new(p.PD12, Level::Low, Speed::High)),
        GpioLed::active_high(Output::new(p.PD13, Level::Low, Speed::High)),
        GpioLed::active_high(Output::new(p.PD14, Level::Low, Speed::High)),
        GpioLed::active_high(Output::new(p.PD15, Level::Low, Speed::High)),
    ];
    let panel = GpioPanel::new(&BOARD, leds);

    // B1 is pulled down and reads high while pressed
    let button = GpioButton::new(ExtiInput::new(p.PA0, p.EXTI0, Pull::Down), BOARD.button.trigger);

    let controller: &'static EdgeController =
        CONTROLLER.init(EdgeController::for_board(&BOARD, DebounceConfig::new()));

    let mut task = Task::new(panel, TimerPacer, controller, &BOARD);
    let lines = match task.setup() {
        Ok(lines) => lines,
        Err(exit) => halt(exit),
    };

    if !lines.button_armed {
        error!("button line not armed, presses will be ignored");
    } else if spawner.spawn(button_task(button, controller)).is_err() {
        error!("failed to spawn button task");
    }

    halt(task.run().await)
}

/// Button Monitoring Task
///
/// The EXTI wakeup stands in for the interrupt handler: each rising edge is
/// timestamped on arrival and debounced by the shared controller.
#[cfg(target_arch = "arm")]
#[embassy_executor::task]
async fn button_task(mut button: GpioButton<ExtiInput<'static>>, controller: &'static EdgeController) {
    edge::watch(&mut button, controller, &EmbassyClock).await;
}

/// Stop the task: log the exit and park the core with the executor blocked.
#[cfg(target_arch = "arm")]
fn halt(exit: TaskExit) -> ! {
    error!("task stopped with status {}: {}", exit.status(), exit);
    loop {
        cortex_m::asm::wfi();
    }
}

#[cfg(not(target_arch = "arm"))]
fn main() {
    eprintln!("blinky only runs on thumbv7em-none-eabihf; use `cargo test --lib` on the host");
}
