//! Browser file upload and download.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Name and contents of a file the user picked, filled in asynchronously.
pub type UploadSlot = Rc<RefCell<Option<(String, Vec<u8>)>>>;

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

fn document() -> Result<web_sys::Document, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())
}

/// Open the browser file picker. The chosen file lands in `slot` once read.
pub fn pick_file(slot: UploadSlot, ctx: egui::Context) -> Result<(), String> {
    let input: web_sys::HtmlInputElement = document()?
        .create_element("input")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "not an input element".to_string())?;
    input.set_type("file");
    input.set_accept("image/png,image/jpeg");

    let picker = input.clone();
    let on_change = Closure::<dyn FnMut()>::new(move || {
        let Some(file) = picker.files().and_then(|files| files.get(0)) else {
            return;
        };
        if let Err(e) = read_file(file, slot.clone(), ctx.clone()) {
            log::error!("Failed to read upload: {e}");
        }
    });
    input.set_onchange(Some(on_change.as_ref().unchecked_ref()));
    on_change.forget();

    input.click();
    Ok(())
}

fn read_file(file: web_sys::File, slot: UploadSlot, ctx: egui::Context) -> Result<(), String> {
    let reader = web_sys::FileReader::new().map_err(js_err)?;
    let name = file.name();

    let result_reader = reader.clone();
    let on_load = Closure::<dyn FnMut()>::new(move || match result_reader.result() {
        Ok(buffer) => {
            let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
            *slot.borrow_mut() = Some((name.clone(), bytes));
            ctx.request_repaint();
        }
        Err(e) => log::error!("Failed to read upload: {}", js_err(e)),
    });
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    on_load.forget();

    reader.read_as_array_buffer(&file).map_err(js_err)
}

/// Offer `bytes` to the user as a file download.
pub fn download(bytes: &[u8], file_name: &str, mime: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor: web_sys::HtmlAnchorElement = document()?
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "not an anchor element".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)
}
