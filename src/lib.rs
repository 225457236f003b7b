//! Cross-platform transient toast notifications.
//!
//! This crate provides a single call site for showing a short, non-modal
//! on-screen text notification across Android, iOS, and desktop platforms.
//! The text is forwarded unmodified to the platform's toast primitive, which
//! owns rendering, display duration, and dismissal.

#![warn(missing_docs)]

// Internal platform-specific implementations.
mod sys;

/// Errors that can occur when showing a toast.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ToastError {
    /// Toasts are not supported on this platform.
    #[error("toast not supported")]
    NotSupported,
    /// An unknown error occurred.
    #[error("unknown error: {0}")]
    Unknown(String),
}

/// Show `text` as a short-lived, non-blocking toast.
///
/// Fire-and-forget: the call returns immediately and any failure in the
/// platform layer is not surfaced to the caller.
pub fn show_short(text: &str) {
    sys::show_short_toast(text);
}

/// Show `text` as a short-lived toast using an Android `Context`.
///
/// The plain [`show_short`] call cannot reach a `Context` on Android; use
/// this variant from JNI entry points that hold one.
///
/// # Errors
/// Returns an error if the JNI plumbing to the platform toast fails.
#[cfg(target_os = "android")]
pub fn show_short_with_context(
    env: &mut jni::JNIEnv,
    context: &jni::objects::JObject,
    text: &str,
) -> Result<(), ToastError> {
    sys::android::show_toast_with_context(env, context, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_short_is_fire_and_forget() {
        // No display service may be present; the call must not panic.
        show_short("Tracking lost");
    }

    #[test]
    fn empty_text_is_accepted() {
        show_short("");
    }

    #[test]
    fn error_messages_name_the_failure() {
        assert_eq!(ToastError::NotSupported.to_string(), "toast not supported");
        let err = ToastError::Unknown("loadClass: class not found".into());
        assert_eq!(err.to_string(), "unknown error: loadClass: class not found");
    }
}
