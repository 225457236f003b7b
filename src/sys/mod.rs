//! Platform-specific toast implementations.

/// Android platform implementation.
#[cfg(target_os = "android")]
pub mod android;

#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
mod desktop;

#[cfg(target_os = "ios")]
mod apple;

// Re-export platform implementations
#[cfg(target_os = "android")]
pub(crate) use android::show_short_toast;

#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
pub(crate) use desktop::show_short_toast;

#[cfg(target_os = "ios")]
pub(crate) use apple::show_short_toast;

// Fallback for unsupported platforms
#[cfg(not(any(
    target_os = "ios",
    target_os = "macos",
    target_os = "android",
    target_os = "windows",
    target_os = "linux"
)))]
pub(crate) fn show_short_toast(_text: &str) {}
