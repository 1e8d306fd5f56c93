// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// Android platform bridge via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. Each trait method invokes the corresponding
// Android API through JNI calls into the ART runtime.
//
// ## Architecture notes
//
// The permission check completes synchronously. Camera capture and image
// picking go through `startActivityForResult`, which is inherently
// asynchronous: these methods launch the Intent and return
// `SnapTextError::Bridge` explaining that the result must be collected
// through the Activity's `onActivityResult` callback. The host Activity is
// responsible for wiring that callback back into SnapText.

#![cfg(target_os = "android")]

use std::path::{Path, PathBuf};

use jni::JNIEnv;
use jni::objects::{JObject, JString, JValue};

use snaptext_core::error::{Result, SnapTextError};

use crate::traits::*;

/// Request codes for `startActivityForResult` / `requestPermissions`. The
/// host Activity must recognise these in its result callbacks.
pub const REQUEST_IMAGE_CAPTURE: i32 = 0x5354_0001; // "ST" + 1
pub const REQUEST_PICK_IMAGE: i32 = 0x5354_0002;
pub const REQUEST_CAMERA_PERMISSION: i32 = 0x5354_0003;

const CAMERA_PERMISSION: &str = "android.permission.CAMERA";

/// `PackageManager.PERMISSION_GRANTED`.
const PERMISSION_GRANTED: i32 = 0;

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// Obtain a [`JNIEnv`] from the global Android context, attaching the
/// current thread if needed.
fn jni_env() -> Result<JNIEnv<'static>> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` is the `JavaVM*` set by the NDK glue code, valid
    // for the lifetime of the process.
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| SnapTextError::Bridge(format!("failed to obtain JavaVM: {e}")))?;
    vm.attach_current_thread()
        .map_err(|e| SnapTextError::Bridge(format!("failed to attach JNI thread: {e}")))
}

/// The hosting `Activity` as a [`JObject`].
fn activity() -> Result<JObject<'static>> {
    let ctx = ndk_context::android_context();
    let ptr = ctx.context();
    if ptr.is_null() {
        return Err(SnapTextError::Bridge(
            "Android context is null — native activity not initialised".into(),
        ));
    }
    // SAFETY: the NDK guarantees this pointer is a valid global jobject for
    // the hosting Activity.
    Ok(unsafe { JObject::from_raw(ptr.cast()) })
}

/// Map any `jni::errors::Error` into `SnapTextError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> SnapTextError {
    SnapTextError::Bridge(format!("{context}: {e}"))
}

/// FileProvider authority: `<package>.provider`.
fn provider_authority(env: &mut JNIEnv, activity: &JObject) -> Result<String> {
    let package: JObject = env
        .call_method(activity, "getPackageName", "()Ljava/lang/String;", &[])
        .map_err(|e| jni_err("getPackageName", e))?
        .l()
        .map_err(|e| jni_err("getPackageName->l", e))?;
    let package: String = env
        .get_string(&JString::from(package))
        .map_err(|e| jni_err("get_string(package)", e))?
        .into();
    Ok(format!("{package}.provider"))
}

// ---------------------------------------------------------------------------
// Bridge struct
// ---------------------------------------------------------------------------

/// Android implementation of the SnapText platform bridge.
///
/// Zero-sized; all state lives on the Java side. The first JNI call happens
/// lazily when a trait method is invoked.
pub struct AndroidBridge;

impl AndroidBridge {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AndroidBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBridge for AndroidBridge {
    fn platform_name(&self) -> &str {
        "Android"
    }
}

// ---------------------------------------------------------------------------
// NativeCamera — ACTION_IMAGE_CAPTURE
// ---------------------------------------------------------------------------

impl NativeCamera for AndroidBridge {
    /// Check (and if necessary prompt for) the CAMERA runtime permission.
    ///
    /// Returns `Ok(true)` when the permission is already held. Otherwise a
    /// system permission prompt is dispatched with
    /// [`REQUEST_CAMERA_PERMISSION`] and `Ok(false)` is returned — the
    /// outcome arrives via `onRequestPermissionsResult`.
    fn request_camera_permission(&self) -> Result<bool> {
        let mut env = jni_env()?;
        let activity = activity()?;

        let j_permission: JString = env
            .new_string(CAMERA_PERMISSION)
            .map_err(|e| jni_err("new_string(CAMERA)", e))?;

        let status: i32 = env
            .call_method(
                &activity,
                "checkSelfPermission",
                "(Ljava/lang/String;)I",
                &[JValue::Object(&j_permission)],
            )
            .map_err(|e| jni_err("checkSelfPermission", e))?
            .i()
            .map_err(|e| jni_err("checkSelfPermission->i", e))?;

        if status == PERMISSION_GRANTED {
            return Ok(true);
        }

        tracing::info!("Android: requesting CAMERA permission");

        let string_class = env
            .find_class("java/lang/String")
            .map_err(|e| jni_err("find_class(String)", e))?;
        let permissions = env
            .new_object_array(1, &string_class, &j_permission)
            .map_err(|e| jni_err("new_object_array(permissions)", e))?;

        env.call_method(
            &activity,
            "requestPermissions",
            "([Ljava/lang/String;I)V",
            &[
                JValue::Object(&permissions),
                JValue::Int(REQUEST_CAMERA_PERMISSION),
            ],
        )
        .map_err(|e| jni_err("requestPermissions", e))?;

        Ok(false)
    }

    /// Launch the system camera via `MediaStore.ACTION_IMAGE_CAPTURE`,
    /// targeting `output` through a FileProvider `content://` URI.
    ///
    /// The intent is dispatched with [`REQUEST_IMAGE_CAPTURE`]; whether a
    /// photo was written arrives via `onActivityResult`, so this returns
    /// `Err(Bridge(...))` to signal that the caller must await the Activity
    /// callback.
    fn capture_image(&self, output: &Path) -> Result<bool> {
        let mut env = jni_env()?;
        let activity = activity()?;

        tracing::info!(output = %output.display(), "Android: launching ACTION_IMAGE_CAPTURE");

        let j_path: JString = env
            .new_string(output.to_string_lossy())
            .map_err(|e| jni_err("new_string(output)", e))?;
        let photo_file: JObject = env
            .new_object(
                "java/io/File",
                "(Ljava/lang/String;)V",
                &[JValue::Object(&j_path)],
            )
            .map_err(|e| jni_err("new File(output)", e))?;

        // content:// URI via FileProvider so the camera app can write to it.
        let authority = provider_authority(&mut env, &activity)?;
        let j_authority: JString = env
            .new_string(&authority)
            .map_err(|e| jni_err("new_string(authority)", e))?;
        let photo_uri: JObject = env
            .call_static_method(
                "androidx/core/content/FileProvider",
                "getUriForFile",
                "(Landroid/content/Context;Ljava/lang/String;Ljava/io/File;)Landroid/net/Uri;",
                &[
                    JValue::Object(&activity),
                    JValue::Object(&j_authority),
                    JValue::Object(&photo_file),
                ],
            )
            .map_err(|e| jni_err("FileProvider.getUriForFile", e))?
            .l()
            .map_err(|e| jni_err("getUriForFile->l", e))?;

        let j_action: JString = env
            .new_string("android.media.action.IMAGE_CAPTURE")
            .map_err(|e| jni_err("new_string(IMAGE_CAPTURE)", e))?;
        let intent: JObject = env
            .new_object(
                "android/content/Intent",
                "(Ljava/lang/String;)V",
                &[JValue::Object(&j_action)],
            )
            .map_err(|e| jni_err("new Intent(capture)", e))?;

        // intent.putExtra(MediaStore.EXTRA_OUTPUT, photoUri)
        let j_extra_output: JString = env
            .new_string("output")
            .map_err(|e| jni_err("new_string(EXTRA_OUTPUT)", e))?;
        env.call_method(
            &intent,
            "putExtra",
            "(Ljava/lang/String;Landroid/os/Parcelable;)Landroid/content/Intent;",
            &[JValue::Object(&j_extra_output), JValue::Object(&photo_uri)],
        )
        .map_err(|e| jni_err("putExtra(EXTRA_OUTPUT)", e))?;

        // Grant the camera app read+write on the target URI.
        env.call_method(
            &intent,
            "addFlags",
            "(I)Landroid/content/Intent;",
            &[JValue::Int(0x0000_0003)],
        )
        .map_err(|e| jni_err("addFlags(capture)", e))?;

        env.call_method(
            &activity,
            "startActivityForResult",
            "(Landroid/content/Intent;I)V",
            &[JValue::Object(&intent), JValue::Int(REQUEST_IMAGE_CAPTURE)],
        )
        .map_err(|e| jni_err("startActivityForResult(capture)", e))?;

        Err(SnapTextError::Bridge(
            "camera intent dispatched — the capture result arrives via \
             onActivityResult with request code 0x53540001; wire the \
             Activity callback back into the capture session"
                .into(),
        ))
    }
}

// ---------------------------------------------------------------------------
// NativeImagePicker — ACTION_PICK on the images media store
// ---------------------------------------------------------------------------

impl NativeImagePicker for AndroidBridge {
    /// Launch the system gallery picker via
    /// `Intent(ACTION_PICK, MediaStore.Images.Media.EXTERNAL_CONTENT_URI)`.
    ///
    /// Like capture, the chosen `content://` URI arrives asynchronously via
    /// `onActivityResult` with [`REQUEST_PICK_IMAGE`].
    fn pick_image(&self) -> Result<Option<PathBuf>> {
        let mut env = jni_env()?;
        let activity = activity()?;

        tracing::info!("Android: launching ACTION_PICK for images");

        let j_action: JString = env
            .new_string("android.intent.action.PICK")
            .map_err(|e| jni_err("new_string(ACTION_PICK)", e))?;

        let images_uri: JObject = env
            .get_static_field(
                "android/provider/MediaStore$Images$Media",
                "EXTERNAL_CONTENT_URI",
                "Landroid/net/Uri;",
            )
            .map_err(|e| jni_err("EXTERNAL_CONTENT_URI", e))?
            .l()
            .map_err(|e| jni_err("EXTERNAL_CONTENT_URI->l", e))?;

        let intent: JObject = env
            .new_object(
                "android/content/Intent",
                "(Ljava/lang/String;Landroid/net/Uri;)V",
                &[JValue::Object(&j_action), JValue::Object(&images_uri)],
            )
            .map_err(|e| jni_err("new Intent(pick)", e))?;

        env.call_method(
            &activity,
            "startActivityForResult",
            "(Landroid/content/Intent;I)V",
            &[JValue::Object(&intent), JValue::Int(REQUEST_PICK_IMAGE)],
        )
        .map_err(|e| jni_err("startActivityForResult(pick)", e))?;

        Err(SnapTextError::Bridge(
            "gallery picker dispatched — the chosen content:// URI arrives \
             via onActivityResult with request code 0x53540002; wire the \
             Activity callback back into the capture session"
                .into(),
        ))
    }
}
