//! File Commands
//!
//! Reading a user-picked file into a displayable form.

use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

/// Read `file` as a `data:` URL.
///
/// One-shot: resolves once with the encoded content, no cancellation.
pub async fn read_as_data_url(file: &File) -> Result<String, String> {
    let reader = FileReader::new().map_err(|e| format!("Failed to create reader: {:?}", e))?;

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let loaded = reader.clone();
        let onload = Closure::once_into_js(move || {
            let result = loaded.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("read failed"));
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader
        .read_as_data_url(file)
        .map_err(|e| format!("Failed to start read: {:?}", e))?;

    let result = JsFuture::from(promise)
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;

    result.as_string().ok_or_else(|| "Reader result is not a string".to_string())
}
