pub mod gpio_led;
pub mod gpio_panel;
pub mod traits;

#[cfg(feature = "async")]
pub mod gpio_button;

#[cfg(target_arch = "arm")]
pub mod embassy;
