//! Select-line abstractions
//!
//! The encoder owns its output lines exclusively and drives them through
//! [`OutputLine`], so the same switching logic runs against real GPIO on
//! the Pi and against simulated lines in tests and off-target builds.

/// A single digital output line of the relay select bus
///
/// Implementations hold the claimed line for the life of the process;
/// claiming happens once at startup and failure there is fatal, so the
/// per-request drive operations are infallible.
pub trait OutputLine {
    /// Drive the line to its active (high) level
    fn set_high(&mut self);

    /// Drive the line to its inactive (low) level
    fn set_low(&mut self);

    /// Read back the level the line is currently driven to
    fn read(&self) -> bool;
}

/// In-memory stand-in for a select line
///
/// Used by tests and by builds without the `rpi` feature, where the
/// daemon runs the full web surface against a simulated relay bank.
#[derive(Debug)]
pub struct SimulatedLine {
    label: &'static str,
    level: bool,
}

impl SimulatedLine {
    /// Create a simulated line, initially low
    #[must_use]
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            level: false,
        }
    }

    /// Get the line's label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }
}

impl OutputLine for SimulatedLine {
    fn set_high(&mut self) {
        self.level = true;
        tracing::trace!(line = self.label, "simulated line high");
    }

    fn set_low(&mut self) {
        self.level = false;
        tracing::trace!(line = self.label, "simulated line low");
    }

    fn read(&self) -> bool {
        self.level
    }
}

/// Raspberry Pi GPIO backing for the select bus
#[cfg(feature = "rpi")]
pub mod rpi {
    //! Real select lines on the Pi's GPIO header.
    //!
    //! Pins are claimed once at startup and held as push-pull outputs for
    //! the life of the process. `read` is the controller's set-level
    //! read-back, not an input sample.

    use rppal::gpio::{Gpio, OutputPin};
    use thiserror::Error;

    use super::OutputLine;

    /// Failure to bring up the GPIO subsystem or claim a select line
    ///
    /// Always fatal: the daemon refuses to start without its select bus.
    #[derive(Debug, Error)]
    pub enum GpioInitError {
        /// The GPIO controller itself could not be opened
        #[error("cannot open gpio controller: {0}")]
        Controller(#[source] rppal::gpio::Error),

        /// A select line could not be claimed
        #[error("cannot claim BCM pin {pin}: {source}")]
        Claim {
            /// BCM number of the pin that failed
            pin: u8,
            /// Underlying GPIO error
            source: rppal::gpio::Error,
        },
    }

    /// Open the Pi's GPIO controller
    pub fn open() -> Result<Gpio, GpioInitError> {
        Gpio::new().map_err(GpioInitError::Controller)
    }

    /// A claimed select line on the GPIO header
    #[derive(Debug)]
    pub struct RpiLine {
        pin: OutputPin,
    }

    impl RpiLine {
        /// Claim a BCM pin as a push-pull output, initially low
        pub fn claim(gpio: &Gpio, bcm: u8) -> Result<Self, GpioInitError> {
            let pin = gpio
                .get(bcm)
                .map_err(|source| GpioInitError::Claim { pin: bcm, source })?
                .into_output_low();
            Ok(Self { pin })
        }

        /// BCM number of the claimed pin
        #[must_use]
        pub fn bcm(&self) -> u8 {
            self.pin.pin()
        }
    }

    impl OutputLine for RpiLine {
        fn set_high(&mut self) {
            self.pin.set_high();
        }

        fn set_low(&mut self) {
            self.pin.set_low();
        }

        fn read(&self) -> bool {
            self.pin.is_set_high()
        }
    }
}
