//! Platform capabilities
//!
//! Everything that differs between operating systems is answered here,
//! once, at startup: which output formats can be offered and whether the
//! process display name can be set.

use crate::codec::OutputFormat;

/// Operating system families the app distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    MacOs,
    Other,
}

/// Capabilities of the platform the app runs on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    os: HostOs,
}

impl Platform {
    pub fn new(os: HostOs) -> Self {
        Platform { os }
    }

    /// Query the platform the binary was built for
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Platform::new(HostOs::MacOs)
        } else {
            Platform::new(HostOs::Other)
        }
    }

    /// Whether `format` can be offered in the format selector.
    /// The WebP encoder is not available on macOS builds.
    pub fn supports(&self, format: OutputFormat) -> bool {
        !(self.os == HostOs::MacOs && format == OutputFormat::WebP)
    }

    /// Formats for the selector, in display order
    pub fn output_formats(&self) -> Vec<OutputFormat> {
        OutputFormat::ALL
            .into_iter()
            .filter(|format| self.supports(*format))
            .collect()
    }

    /// Set the name shown for the process by the OS (the macOS menu bar).
    /// Best-effort: does nothing where there is no such name.
    pub fn apply_display_name(&self, name: &str) {
        match self.os {
            HostOs::MacOs => {
                set_process_name(name);
                log::debug!("Process display name set to {}", name);
            }
            HostOs::Other => {}
        }
    }
}

#[cfg(target_os = "macos")]
fn set_process_name(name: &str) {
    use objc2_foundation::{NSProcessInfo, NSString};

    let name = NSString::from_str(name);
    let info = NSProcessInfo::processInfo();
    // setProcessName is generated as `unsafe fn`; the argument is a valid NSString
    unsafe { info.setProcessName(&name) };
}

#[cfg(not(target_os = "macos"))]
fn set_process_name(_name: &str) {}
