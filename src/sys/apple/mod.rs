#[swift_bridge::bridge]
mod ffi {
    extern "Swift" {
        fn show_toast(text: &str);
    }
}

pub(crate) fn show_short_toast(text: &str) {
    ffi::show_toast(text);
}
