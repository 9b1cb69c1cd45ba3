// Embedding surface for hosts that load the library directly.
// Uses raw pointers and catch_unwind so no panic crosses the boundary.
use crate::core::dictionary::Dictionary;
use std::ffi::{c_char, CStr, CString};
use std::panic::catch_unwind;
use std::ptr;
use std::sync::Once;

static INIT: Once = Once::new();

/// Validates the built-in dictionary. Calling it again is a no-op, and the
/// other entry points work whether or not it was called.
#[no_mangle]
pub extern "C" fn ptbr_init() -> bool {
    INIT.call_once(|| {
        if catch_unwind(Dictionary::builtin).is_ok() {
            tracing::info!("ptbr dictionary ready");
        } else {
            eprintln!("[ptbr FATAL] built-in dictionary failed validation.");
        }
    });
    catch_unwind(Dictionary::builtin).is_ok()
}

/// Translates a NUL-terminated UTF-8 string. Returns NULL for NULL or
/// non-UTF-8 input. Free the result with `ptbr_free_string`.
///
/// # Safety
/// `source` must be NULL or point to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn ptbr_translate(source: *const c_char) -> *mut c_char {
    if source.is_null() {
        return ptr::null_mut();
    }
    let Ok(text) = CStr::from_ptr(source).to_str() else {
        return ptr::null_mut();
    };

    match catch_unwind(|| crate::translate(text)) {
        // input had no interior NUL, and rewriting only inserts words
        Ok(translated) => CString::new(translated).map_or(ptr::null_mut(), CString::into_raw),
        Err(_) => {
            eprintln!("[ptbr FATAL] Panic in translate.");
            ptr::null_mut()
        }
    }
}

/// # Safety
/// `s` must be NULL or a pointer returned by `ptbr_translate`, freed once.
#[no_mangle]
pub unsafe extern "C" fn ptbr_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_through_the_c_boundary() {
        assert!(ptbr_init());
        assert!(ptbr_init());

        let input = CString::new("para i em intervalo(3):\n    imprimir(i)").unwrap();
        unsafe {
            let out = ptbr_translate(input.as_ptr());
            assert!(!out.is_null());
            assert_eq!(
                CStr::from_ptr(out).to_str().unwrap(),
                "for i in range(3):\n    print(i)"
            );
            ptbr_free_string(out);
        }
    }

    #[test]
    fn null_and_invalid_input_give_null() {
        unsafe {
            assert!(ptbr_translate(ptr::null()).is_null());
            let bad = [0xffu8, 0xfe, 0x00];
            assert!(ptbr_translate(bad.as_ptr().cast()).is_null());
            ptbr_free_string(ptr::null_mut());
        }
    }
}
