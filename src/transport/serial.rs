//! # Serial Transport
//!
//! This module provides communication with ESC/POS printers over a serial
//! TTY: USB-serial adapters (`/dev/ttyUSB0`), USB CDC printers
//! (`/dev/ttyACM0`), RS-232 ports, or a Bluetooth SPP binding
//! (`/dev/rfcomm0`).
//!
//! ## Device Access (Linux)
//!
//! ```bash
//! # Find the device
//! $ dmesg | grep tty
//! # Serial devices are usually group "dialout"
//! $ sudo usermod -aG dialout $USER
//! ```
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so binary data is transmitted without
//! modification:
//!
//! - **No input processing**: Disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: Disable OPOST (no CR/LF translation)
//! - **No echo**: Disable ECHO, ECHONL
//! - **Non-canonical mode**: Disable ICANON (no line buffering)
//! - **Line settings** from [`SerialConfig`]: baud, data bits, stop bits, parity

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, trace};

use super::ByteSink;
use crate::error::{Result, StrukError};
use crate::printer::SerialConfig;

/// Default serial device path
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

/// # Serial Printer Transport
///
/// An open, configured serial device.
///
/// ## Example
///
/// ```no_run
/// use struk::printer::SerialConfig;
/// use struk::protocol::commands;
/// use struk::transport::{ByteSink, SerialTransport};
///
/// let mut transport = SerialTransport::open("/dev/ttyUSB0", &SerialConfig::default())?;
/// transport.write(&commands::init())?;
/// transport.close()?;
///
/// # Ok::<(), struk::StrukError>(())
/// ```
pub struct SerialTransport {
    file: File,
}

impl SerialTransport {
    /// Open and configure a serial device.
    ///
    /// ## Errors
    ///
    /// - `InvalidParameter` if `config` does not validate
    /// - `UnsupportedEnvironment` if the device doesn't exist, access is
    ///   denied (may need the dialout group), it is not a TTY, or the
    ///   platform has no termios
    pub fn open<P: AsRef<Path>>(device: P, config: &SerialConfig) -> Result<Self> {
        let path = device.as_ref();
        config.validate()?;

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            StrukError::UnsupportedEnvironment(format!("Failed to open {}: {}", path.display(), e))
        })?;

        configure_tty(&file, config)?;
        debug!(device = %path.display(), baud = config.baud_rate, "serial transport opened");

        Ok(Self { file })
    }
}

impl ByteSink for SerialTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        trace!(len = bytes.len(), "serial write");
        self.file.write_all(bytes).map_err(write_failed)
    }

    fn close(&mut self) -> Result<()> {
        self.file
            .flush()
            .map_err(|e| StrukError::TransmissionFailure(format!("Flush failed: {}", e)))?;
        debug!("serial transport closed");
        Ok(())
    }
}

fn write_failed(e: io::Error) -> StrukError {
    StrukError::TransmissionFailure(format!("Write failed: {}", e))
}

#[cfg(unix)]
fn baud_constant(baud: u32) -> Option<libc::speed_t> {
    Some(match baud {
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        230400 => libc::B230400,
        _ => return None,
    })
}

/// Configure a serial device for raw transmission with the given line
/// settings.
///
/// ## What Gets Disabled
///
/// - **Input flags**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR, ICRNL, IXON, IXOFF, IXANY
/// - **Output flags**: OPOST
/// - **Local flags**: ECHO, ECHONL, ICANON, ISIG, IEXTEN
///
/// IXON/IXOFF/IXANY are off because 0x11 and 0x13 are ordinary bytes in
/// ESC/POS parameters and text.
#[cfg(unix)]
fn configure_tty(file: &File, config: &SerialConfig) -> Result<()> {
    use crate::printer::Parity;
    use std::mem::MaybeUninit;
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(StrukError::UnsupportedEnvironment(format!(
            "not a serial device: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // Character size
    termios.c_cflag &= !libc::CSIZE;
    termios.c_cflag |= match config.data_bits {
        5 => libc::CS5,
        6 => libc::CS6,
        7 => libc::CS7,
        _ => libc::CS8,
    };

    // Stop bits
    if config.stop_bits == 2 {
        termios.c_cflag |= libc::CSTOPB;
    } else {
        termios.c_cflag &= !libc::CSTOPB;
    }

    // Parity
    termios.c_cflag &= !(libc::PARENB | libc::PARODD);
    match config.parity {
        Parity::None => {}
        Parity::Even => termios.c_cflag |= libc::PARENB,
        Parity::Odd => termios.c_cflag |= libc::PARENB | libc::PARODD,
    }

    termios.c_cflag |= libc::CLOCAL | libc::CREAD;

    let speed = baud_constant(config.baud_rate).ok_or_else(|| {
        StrukError::InvalidParameter(format!("unsupported baud rate {}", config.baud_rate))
    })?;
    let result = unsafe {
        libc::cfsetispeed(&mut termios, speed) | libc::cfsetospeed(&mut termios, speed)
    };
    if result != 0 {
        return Err(StrukError::UnsupportedEnvironment(format!(
            "cfsetspeed failed: {}",
            io::Error::last_os_error()
        )));
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(StrukError::UnsupportedEnvironment(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(not(unix))]
fn configure_tty(_file: &File, _config: &SerialConfig) -> Result<()> {
    Err(StrukError::UnsupportedEnvironment(
        "serial transport requires termios (Unix)".into(),
    ))
}
