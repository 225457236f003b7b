//! Android toast implementation using JNI.

use crate::ToastError;
use jni::JNIEnv;
use jni::objects::{GlobalRef, JObject, JValue};
use std::sync::OnceLock;

/// Embedded DEX bytecode containing ToastHelper class.
static DEX_BYTES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/classes.dex"));

/// Cached class loader for the embedded DEX.
static CLASS_LOADER: OnceLock<GlobalRef> = OnceLock::new();

/// Initialize the DEX class loader. Must be called with a valid Context.
pub fn init_with_context(env: &mut JNIEnv, context: &JObject) -> Result<(), ToastError> {
    if CLASS_LOADER.get().is_some() {
        return Ok(());
    }

    // Write DEX to cache directory
    let cache_dir = env
        .call_method(context, "getCacheDir", "()Ljava/io/File;", &[])
        .map_err(|e| ToastError::Unknown(format!("getCacheDir failed: {e}")))?
        .l()
        .map_err(|e| ToastError::Unknown(format!("getCacheDir result: {e}")))?;

    let cache_path = env
        .call_method(&cache_dir, "getAbsolutePath", "()Ljava/lang/String;", &[])
        .map_err(|e| ToastError::Unknown(format!("getAbsolutePath failed: {e}")))?
        .l()
        .map_err(|e| ToastError::Unknown(format!("getAbsolutePath result: {e}")))?;

    let dex_path = format!(
        "{}/toastkit.dex",
        env.get_string((&cache_path).into())
            .map_err(|e| ToastError::Unknown(format!("get_string failed: {e}")))?
            .to_str()
            .map_err(|e| ToastError::Unknown(format!("to_str failed: {e}")))?
    );

    // Write DEX bytes to file
    std::fs::write(&dex_path, DEX_BYTES)
        .map_err(|e| ToastError::Unknown(format!("write DEX failed: {e}")))?;

    // Create DexClassLoader
    let dex_path_jstring = env
        .new_string(&dex_path)
        .map_err(|e| ToastError::Unknown(format!("new_string failed: {e}")))?;

    let parent_loader = env
        .call_method(context, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])
        .map_err(|e| ToastError::Unknown(format!("getClassLoader failed: {e}")))?
        .l()
        .map_err(|e| ToastError::Unknown(format!("getClassLoader result: {e}")))?;

    let dex_class_loader_class = env
        .find_class("dalvik/system/DexClassLoader")
        .map_err(|e| ToastError::Unknown(format!("find DexClassLoader: {e}")))?;

    let class_loader = env
        .new_object(
            dex_class_loader_class,
            "(Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;Ljava/lang/ClassLoader;)V",
            &[
                JValue::Object(&dex_path_jstring),
                JValue::Object(&cache_path),
                JValue::Object(&JObject::null()),
                JValue::Object(&parent_loader),
            ],
        )
        .map_err(|e| ToastError::Unknown(format!("new DexClassLoader: {e}")))?;

    let global_ref = env
        .new_global_ref(class_loader)
        .map_err(|e| ToastError::Unknown(format!("new_global_ref: {e}")))?;

    let _ = CLASS_LOADER.set(global_ref);
    Ok(())
}

/// Show a short toast using the Context.
pub fn show_toast_with_context(
    env: &mut JNIEnv,
    context: &JObject,
    text: &str,
) -> Result<(), ToastError> {
    init_with_context(env, context)?;

    let class_loader = CLASS_LOADER
        .get()
        .ok_or_else(|| ToastError::Unknown("Class loader not initialized".into()))?;

    let helper_class_name = env
        .new_string("toastkit.ToastHelper")
        .map_err(|e| ToastError::Unknown(format!("new_string: {e}")))?;

    let helper_class = env
        .call_method(
            class_loader.as_obj(),
            "loadClass",
            "(Ljava/lang/String;)Ljava/lang/Class;",
            &[JValue::Object(&helper_class_name)],
        )
        .map_err(|e| ToastError::Unknown(format!("loadClass: {e}")))?
        .l()
        .map_err(|e| ToastError::Unknown(format!("loadClass result: {e}")))?;

    let jtext = env
        .new_string(text)
        .map_err(|e| ToastError::Unknown(format!("new_string: {e}")))?;

    let helper_jclass: jni::objects::JClass = helper_class.into();
    env.call_static_method(
        helper_jclass,
        "showShort",
        "(Landroid/content/Context;Ljava/lang/String;)V",
        &[JValue::Object(context), JValue::Object(&jtext)],
    )
    .map_err(|e| ToastError::Unknown(format!("showShort call failed: {e}")))?;

    Ok(())
}

// Stub for the context-free entry point; a toast cannot be shown without a Context.
pub(crate) fn show_short_toast(_text: &str) {
    log::error!("Android toast requires show_short_with_context() with a Context");
}
