//! C ABI for host applications.
//!
//! Exposes scan and cleanup to non-Rust hosts:
//!
//! - `findBranchesToCleanup(projectRoot, branchMaxDepth, refBranchName)` returns a
//!   JSON array of `{"name": ...}` objects, or null on failure
//! - `cleanupBranches(projectRoot, branchList)` takes the same JSON array and
//!   returns null on success, or a JSON error payload on failure
//! - `lastErrorMessage()` returns the error payload of the last failed call on
//!   this thread, or null
//! - `freeString(ptr)` releases any string returned by the functions above
//!
//! Errors and panics never cross the boundary; they become a null or payload
//! return plus the thread-local last error.

mod payload;


use crate::cleaner::GitBranchCleaner;
use crate::config::CleanerConfig;
use crate::error::{CleanerError, Result};
use crate::model::Branch;
use payload::{ErrorPayload, decode_branches, encode_branches};
use std::cell::RefCell;
use std::ffi::{CStr, CString, c_char};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Scan `project_root` for merged branches.
///
/// # Safety
///
/// `project_root` and `ref_branch_name` must be null or point to valid
/// NUL-terminated strings that stay alive for the duration of the call.
#[unsafe(export_name = "findBranchesToCleanup")]
pub unsafe extern "C" fn find_branches_to_cleanup(
    project_root: *const c_char,
    branch_max_depth: i32,
    ref_branch_name: *const c_char,
) -> *mut c_char {
    let result = run_catching(|| {
        // SAFETY: the caller guarantees both pointers are null or valid C strings.
        let project_root = unsafe { read_str(project_root, "projectRoot") }?;
        let ref_branch_name = unsafe { read_str(ref_branch_name, "refBranchName") }?;
        log::debug!(
            "findBranchesToCleanup(projectRoot={}, branchMaxDepth={}, refBranchName={})",
            project_root,
            branch_max_depth,
            ref_branch_name
        );

        let config = config_from_scalars(branch_max_depth, ref_branch_name)?;
        let branches = GitBranchCleaner::new(project_root).scan_branches(&config)?;
        encode_branches(&branches)
    });

    match result {
        Ok(json) => into_raw(json),
        Err(_) => ptr::null_mut(),
    }
}

/// Delete the JSON-encoded `branch_list` from `project_root`.
///
/// # Safety
///
/// `project_root` and `branch_list` must be null or point to valid
/// NUL-terminated strings that stay alive for the duration of the call.
#[unsafe(export_name = "cleanupBranches")]
pub unsafe extern "C" fn cleanup_branches(
    project_root: *const c_char,
    branch_list: *const c_char,
) -> *mut c_char {
    let result = run_catching(|| {
        // SAFETY: the caller guarantees both pointers are null or valid C strings.
        let project_root = unsafe { read_str(project_root, "projectRoot") }?;
        let branch_list = unsafe { read_str(branch_list, "branchList") }?;
        log::debug!(
            "cleanupBranches(projectRoot={}, branchList={})",
            project_root,
            branch_list
        );

        let branches: Vec<Branch> = decode_branches(&branch_list)?;
        GitBranchCleaner::new(project_root).cleanup_branches(&branches)
    });

    match result {
        Ok(()) => ptr::null_mut(),
        Err(payload) => into_raw(payload),
    }
}

/// Error payload of the last failed call on this thread, or null.
///
/// The returned string is a fresh copy and must be released with `freeString`.
#[unsafe(export_name = "lastErrorMessage")]
pub extern "C" fn last_error_message() -> *mut c_char {
    LAST_ERROR.with(|last| match last.borrow().as_ref() {
        Some(payload) => into_raw(payload.clone()),
        None => ptr::null_mut(),
    })
}

/// Release a string returned by this library. Null is ignored.
///
/// # Safety
///
/// `ptr` must be null or a pointer returned by this library that has not been
/// freed yet.
#[unsafe(export_name = "freeString")]
pub unsafe extern "C" fn free_string(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: the pointer came from CString::into_raw in this library.
    drop(unsafe { CString::from_raw(ptr) });
}

fn config_from_scalars(branch_max_depth: i32, ref_branch_name: String) -> Result<CleanerConfig> {
    let branch_max_depth = u32::try_from(branch_max_depth).map_err(|_| {
        CleanerError::InvalidConfig(format!(
            "config validation failed: branch_max_depth must be greater than 0 (got {})",
            branch_max_depth
        ))
    })?;

    let config = CleanerConfig {
        branch_max_depth,
        ref_branch_name,
        ..Default::default()
    };
    config.validate()?;
    Ok(config)
}

/// Run `f`, converting errors and panics into a JSON payload recorded as the
/// thread's last error. A successful call clears the last error.
fn run_catching<T>(f: impl FnOnce() -> Result<T>) -> std::result::Result<T, String> {
    let payload = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => {
            set_last_error(None);
            return Ok(value);
        }
        Ok(Err(err)) => {
            log::debug!("FFI call failed: {}", err);
            ErrorPayload::from_error(&err)
        }
        Err(panic) => ErrorPayload::from_panic(panic.as_ref()),
    };

    let json = payload.to_json();
    set_last_error(Some(json.clone()));
    Err(json)
}

fn set_last_error(payload: Option<String>) {
    LAST_ERROR.with(|last| *last.borrow_mut() = payload);
}

/// Read a borrowed C string as UTF-8.
///
/// # Safety
///
/// `ptr` must be null or point to a valid NUL-terminated string.
unsafe fn read_str(ptr: *const c_char, what: &str) -> Result<String> {
    if ptr.is_null() {
        return Err(CleanerError::InvalidInput(format!("{} must not be null", what)));
    }
    // SAFETY: non-null and NUL-terminated per the caller's contract.
    let c_str = unsafe { CStr::from_ptr(ptr) };
    c_str
        .to_str()
        .map(str::to_string)
        .map_err(|e| CleanerError::InvalidInput(format!("{} is not valid UTF-8: {}", what, e)))
}

/// Hand a string to the host. JSON never contains a raw NUL byte, so the
/// conversion only fails for foreign input, which is returned as null.
fn into_raw(s: String) -> *mut c_char {
    CString::new(s)
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut())
}
