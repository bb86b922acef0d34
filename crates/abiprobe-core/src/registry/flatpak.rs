//! libflatpak constants.
//!
//! Values and types as declared by `flatpak.h` and its enum headers. Enum
//! members are typed `gint` and flag members `guint`, the way the GObject
//! introspection data describes them; the version macros are plain `int`
//! literals.
//!
//! [`registry`] lists them in the order the generated C harness prints them
//! (alphabetical by symbol). Keep the two in lockstep: when libflatpak adds,
//! removes or renumbers a constant, regenerate both sides.

#![allow(non_camel_case_types, missing_docs)]

use super::Registry;
use crate::constant;
use std::os::raw::{c_int, c_uint};
use std::sync::LazyLock;

pub type gint = c_int;
pub type guint = c_uint;

// FlatpakError
pub const FLATPAK_ERROR_ALREADY_INSTALLED: gint = 0;
pub const FLATPAK_ERROR_NOT_INSTALLED: gint = 1;
pub const FLATPAK_ERROR_ONLY_PULLED: gint = 2;
pub const FLATPAK_ERROR_DIFFERENT_REMOTE: gint = 3;
pub const FLATPAK_ERROR_ABORTED: gint = 4;
pub const FLATPAK_ERROR_SKIPPED: gint = 5;
pub const FLATPAK_ERROR_NEED_NEW_FLATPAK: gint = 6;
pub const FLATPAK_ERROR_REMOTE_NOT_FOUND: gint = 7;
pub const FLATPAK_ERROR_RUNTIME_NOT_FOUND: gint = 8;
pub const FLATPAK_ERROR_DOWNGRADE: gint = 9;
pub const FLATPAK_ERROR_INVALID_REF: gint = 10;
pub const FLATPAK_ERROR_INVALID_DATA: gint = 11;
pub const FLATPAK_ERROR_UNTRUSTED: gint = 12;
pub const FLATPAK_ERROR_SETUP_FAILED: gint = 13;
pub const FLATPAK_ERROR_EXPORT_FAILED: gint = 14;
pub const FLATPAK_ERROR_REMOTE_USED: gint = 15;
pub const FLATPAK_ERROR_RUNTIME_USED: gint = 16;
pub const FLATPAK_ERROR_INVALID_NAME: gint = 17;
pub const FLATPAK_ERROR_OUT_OF_SPACE: gint = 18;
pub const FLATPAK_ERROR_WRONG_USER: gint = 19;
pub const FLATPAK_ERROR_NOT_CACHED: gint = 20;
pub const FLATPAK_ERROR_REF_NOT_FOUND: gint = 21;
pub const FLATPAK_ERROR_PERMISSION_DENIED: gint = 22;
pub const FLATPAK_ERROR_AUTHENTICATION_FAILED: gint = 23;
pub const FLATPAK_ERROR_NOT_AUTHORIZED: gint = 24;

// FlatpakInstallFlags
pub const FLATPAK_INSTALL_FLAGS_NONE: guint = 0;
pub const FLATPAK_INSTALL_FLAGS_NO_STATIC_DELTAS: guint = 1;
pub const FLATPAK_INSTALL_FLAGS_NO_DEPLOY: guint = 4;
pub const FLATPAK_INSTALL_FLAGS_NO_PULL: guint = 8;
pub const FLATPAK_INSTALL_FLAGS_NO_TRIGGERS: guint = 16;

// FlatpakLaunchFlags
pub const FLATPAK_LAUNCH_FLAGS_NONE: guint = 0;
pub const FLATPAK_LAUNCH_FLAGS_DO_NOT_REAP: guint = 1;

// Version macros
pub const FLATPAK_MAJOR_VERSION: c_int = 1;
pub const FLATPAK_MINOR_VERSION: c_int = 14;
pub const FLATPAK_MICRO_VERSION: c_int = 4;

// FlatpakPortalError
pub const FLATPAK_PORTAL_ERROR_FAILED: gint = 0;
pub const FLATPAK_PORTAL_ERROR_INVALID_ARGUMENT: gint = 1;
pub const FLATPAK_PORTAL_ERROR_NOT_FOUND: gint = 2;
pub const FLATPAK_PORTAL_ERROR_EXISTS: gint = 3;
pub const FLATPAK_PORTAL_ERROR_NOT_ALLOWED: gint = 4;
pub const FLATPAK_PORTAL_ERROR_CANCELLED: gint = 5;
pub const FLATPAK_PORTAL_ERROR_WINDOW_DESTROYED: gint = 6;

// FlatpakQueryFlags
pub const FLATPAK_QUERY_FLAGS_NONE: guint = 0;
pub const FLATPAK_QUERY_FLAGS_ONLY_CACHED: guint = 1;
pub const FLATPAK_QUERY_FLAGS_ONLY_SIDELOADED: guint = 2;
pub const FLATPAK_QUERY_FLAGS_ALL_ARCHES: guint = 4;

// FlatpakRefKind
pub const FLATPAK_REF_KIND_APP: gint = 0;
pub const FLATPAK_REF_KIND_RUNTIME: gint = 1;

// FlatpakRemoteType
pub const FLATPAK_REMOTE_TYPE_STATIC: gint = 0;
pub const FLATPAK_REMOTE_TYPE_USB: gint = 1;
pub const FLATPAK_REMOTE_TYPE_LAN: gint = 2;

// FlatpakStorageType
pub const FLATPAK_STORAGE_TYPE_DEFAULT: gint = 0;
pub const FLATPAK_STORAGE_TYPE_HARD_DISK: gint = 1;
pub const FLATPAK_STORAGE_TYPE_SDCARD: gint = 2;
pub const FLATPAK_STORAGE_TYPE_MMC: gint = 3;
pub const FLATPAK_STORAGE_TYPE_NETWORK: gint = 4;

// FlatpakTransactionErrorDetails
pub const FLATPAK_TRANSACTION_ERROR_DETAILS_NON_FATAL: guint = 1;

// FlatpakTransactionOperationType
pub const FLATPAK_TRANSACTION_OPERATION_INSTALL: gint = 0;
pub const FLATPAK_TRANSACTION_OPERATION_UPDATE: gint = 1;
pub const FLATPAK_TRANSACTION_OPERATION_INSTALL_BUNDLE: gint = 2;
pub const FLATPAK_TRANSACTION_OPERATION_UNINSTALL: gint = 3;
pub const FLATPAK_TRANSACTION_OPERATION_LAST_TYPE: gint = 4;

// FlatpakTransactionRemoteReason
pub const FLATPAK_TRANSACTION_REMOTE_GENERIC_REPO: gint = 0;
pub const FLATPAK_TRANSACTION_REMOTE_RUNTIME_DEPS: gint = 1;

// FlatpakTransactionResult
pub const FLATPAK_TRANSACTION_RESULT_NO_CHANGE: guint = 1;

// FlatpakUninstallFlags
pub const FLATPAK_UNINSTALL_FLAGS_NONE: guint = 0;
pub const FLATPAK_UNINSTALL_FLAGS_NO_PRUNE: guint = 1;
pub const FLATPAK_UNINSTALL_FLAGS_NO_TRIGGERS: guint = 2;

// FlatpakUpdateFlags
pub const FLATPAK_UPDATE_FLAGS_NONE: guint = 0;
pub const FLATPAK_UPDATE_FLAGS_NO_DEPLOY: guint = 1;
pub const FLATPAK_UPDATE_FLAGS_NO_PULL: guint = 2;
pub const FLATPAK_UPDATE_FLAGS_NO_STATIC_DELTAS: guint = 4;
pub const FLATPAK_UPDATE_FLAGS_NO_PRUNE: guint = 8;
pub const FLATPAK_UPDATE_FLAGS_NO_TRIGGERS: guint = 16;

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    Registry::new(vec![
        constant!(FLATPAK_ERROR_ABORTED as gint),
        constant!(FLATPAK_ERROR_ALREADY_INSTALLED as gint),
        constant!(FLATPAK_ERROR_AUTHENTICATION_FAILED as gint),
        constant!(FLATPAK_ERROR_DIFFERENT_REMOTE as gint),
        constant!(FLATPAK_ERROR_DOWNGRADE as gint),
        constant!(FLATPAK_ERROR_EXPORT_FAILED as gint),
        constant!(FLATPAK_ERROR_INVALID_DATA as gint),
        constant!(FLATPAK_ERROR_INVALID_NAME as gint),
        constant!(FLATPAK_ERROR_INVALID_REF as gint),
        constant!(FLATPAK_ERROR_NEED_NEW_FLATPAK as gint),
        constant!(FLATPAK_ERROR_NOT_AUTHORIZED as gint),
        constant!(FLATPAK_ERROR_NOT_CACHED as gint),
        constant!(FLATPAK_ERROR_NOT_INSTALLED as gint),
        constant!(FLATPAK_ERROR_ONLY_PULLED as gint),
        constant!(FLATPAK_ERROR_OUT_OF_SPACE as gint),
        constant!(FLATPAK_ERROR_PERMISSION_DENIED as gint),
        constant!(FLATPAK_ERROR_REF_NOT_FOUND as gint),
        constant!(FLATPAK_ERROR_REMOTE_NOT_FOUND as gint),
        constant!(FLATPAK_ERROR_REMOTE_USED as gint),
        constant!(FLATPAK_ERROR_RUNTIME_NOT_FOUND as gint),
        constant!(FLATPAK_ERROR_RUNTIME_USED as gint),
        constant!(FLATPAK_ERROR_SETUP_FAILED as gint),
        constant!(FLATPAK_ERROR_SKIPPED as gint),
        constant!(FLATPAK_ERROR_UNTRUSTED as gint),
        constant!(FLATPAK_ERROR_WRONG_USER as gint),
        constant!(FLATPAK_INSTALL_FLAGS_NONE as guint),
        constant!(FLATPAK_INSTALL_FLAGS_NO_DEPLOY as guint),
        constant!(FLATPAK_INSTALL_FLAGS_NO_PULL as guint),
        constant!(FLATPAK_INSTALL_FLAGS_NO_STATIC_DELTAS as guint),
        constant!(FLATPAK_INSTALL_FLAGS_NO_TRIGGERS as guint),
        constant!(FLATPAK_LAUNCH_FLAGS_DO_NOT_REAP as guint),
        constant!(FLATPAK_LAUNCH_FLAGS_NONE as guint),
        constant!(FLATPAK_MAJOR_VERSION),
        constant!(FLATPAK_MICRO_VERSION),
        constant!(FLATPAK_MINOR_VERSION),
        constant!(FLATPAK_PORTAL_ERROR_CANCELLED as gint),
        constant!(FLATPAK_PORTAL_ERROR_EXISTS as gint),
        constant!(FLATPAK_PORTAL_ERROR_FAILED as gint),
        constant!(FLATPAK_PORTAL_ERROR_INVALID_ARGUMENT as gint),
        constant!(FLATPAK_PORTAL_ERROR_NOT_ALLOWED as gint),
        constant!(FLATPAK_PORTAL_ERROR_NOT_FOUND as gint),
        constant!(FLATPAK_PORTAL_ERROR_WINDOW_DESTROYED as gint),
        constant!(FLATPAK_QUERY_FLAGS_ALL_ARCHES as guint),
        constant!(FLATPAK_QUERY_FLAGS_NONE as guint),
        constant!(FLATPAK_QUERY_FLAGS_ONLY_CACHED as guint),
        constant!(FLATPAK_QUERY_FLAGS_ONLY_SIDELOADED as guint),
        constant!(FLATPAK_REF_KIND_APP as gint),
        constant!(FLATPAK_REF_KIND_RUNTIME as gint),
        constant!(FLATPAK_REMOTE_TYPE_LAN as gint),
        constant!(FLATPAK_REMOTE_TYPE_STATIC as gint),
        constant!(FLATPAK_REMOTE_TYPE_USB as gint),
        constant!(FLATPAK_STORAGE_TYPE_DEFAULT as gint),
        constant!(FLATPAK_STORAGE_TYPE_HARD_DISK as gint),
        constant!(FLATPAK_STORAGE_TYPE_MMC as gint),
        constant!(FLATPAK_STORAGE_TYPE_NETWORK as gint),
        constant!(FLATPAK_STORAGE_TYPE_SDCARD as gint),
        constant!(FLATPAK_TRANSACTION_ERROR_DETAILS_NON_FATAL as guint),
        constant!(FLATPAK_TRANSACTION_OPERATION_INSTALL as gint),
        constant!(FLATPAK_TRANSACTION_OPERATION_INSTALL_BUNDLE as gint),
        constant!(FLATPAK_TRANSACTION_OPERATION_LAST_TYPE as gint),
        constant!(FLATPAK_TRANSACTION_OPERATION_UNINSTALL as gint),
        constant!(FLATPAK_TRANSACTION_OPERATION_UPDATE as gint),
        constant!(FLATPAK_TRANSACTION_REMOTE_GENERIC_REPO as gint),
        constant!(FLATPAK_TRANSACTION_REMOTE_RUNTIME_DEPS as gint),
        constant!(FLATPAK_TRANSACTION_RESULT_NO_CHANGE as guint),
        constant!(FLATPAK_UNINSTALL_FLAGS_NONE as guint),
        constant!(FLATPAK_UNINSTALL_FLAGS_NO_PRUNE as guint),
        constant!(FLATPAK_UNINSTALL_FLAGS_NO_TRIGGERS as guint),
        constant!(FLATPAK_UPDATE_FLAGS_NONE as guint),
        constant!(FLATPAK_UPDATE_FLAGS_NO_DEPLOY as guint),
        constant!(FLATPAK_UPDATE_FLAGS_NO_PRUNE as guint),
        constant!(FLATPAK_UPDATE_FLAGS_NO_PULL as guint),
        constant!(FLATPAK_UPDATE_FLAGS_NO_STATIC_DELTAS as guint),
        constant!(FLATPAK_UPDATE_FLAGS_NO_TRIGGERS as guint),
    ])
});

/// The libflatpak constant registry, built on first use
pub fn registry() -> &'static Registry {
    &REGISTRY
}
