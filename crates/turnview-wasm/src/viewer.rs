//! WASM bindings for the image viewer component.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! import { JsImageViewer } from '@turnview/wasm';
//!
//! const viewer = new JsImageViewer(src, (data) => { resultImg.src = data; });
//! img.onload = async () => {
//!   const bytes = new Uint8Array(await (await fetch(src)).arrayBuffer());
//!   viewer.load(bytes);
//! };
//!
//! frame.onclick = (e) => {
//!   const r = frame.getBoundingClientRect();
//!   viewer.on_click(e.clientX, e.clientY, r.x, r.y, r.width, r.height);
//!   Object.assign(frame.style, viewer.style());
//! };
//! cwButton.onclick = () => viewer.rotate_cw();
//! saveButton.hidden = !viewer.can_save;
//! saveButton.onclick = () => viewer.save();
//! ```

use turnview_core::{
    decode_source, FrameRect, ImageViewer, PointerPosition, SaveOutcome, SourceImage,
    ViewerConfig,
};
use wasm_bindgen::prelude::*;

use crate::download::{AnchorDownload, JsSaveHandler};
use crate::types::JsSurface;

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Zoomable, rotatable image viewer for a single image URL.
#[wasm_bindgen]
pub struct JsImageViewer {
    inner: ImageViewer<JsSaveHandler, AnchorDownload>,
}

#[wasm_bindgen]
impl JsImageViewer {
    /// Create a viewer with the default configuration.
    ///
    /// `on_save` receives the PNG data URI every time `save()` succeeds.
    #[wasm_bindgen(constructor)]
    pub fn new(src: String, on_save: js_sys::Function) -> JsImageViewer {
        Self {
            inner: ImageViewer::with_default_config(
                src,
                JsSaveHandler::new(on_save),
                AnchorDownload,
            ),
        }
    }

    /// Create a viewer from a partial config object, e.g.
    /// `{ zoom_step: 1, centering: "width_based" }`.
    ///
    /// Throws if `rotation_step` is not a non-zero multiple of 90, or
    /// `zoom_step` is 0.
    pub fn with_config(
        src: String,
        on_save: js_sys::Function,
        config: JsValue,
    ) -> Result<JsImageViewer, JsValue> {
        let config: ViewerConfig = if config.is_undefined() || config.is_null() {
            ViewerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let inner = ImageViewer::new(src, config, JsSaveHandler::new(on_save), AnchorDownload)
            .map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Decode the loaded image bytes and draw the baseline surface.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        match decode_source(self.inner.source_url(), bytes) {
            Ok(source) => {
                self.inner.on_load(source);
                Ok(())
            }
            Err(e) => {
                self.inner.on_load_error(&e);
                Err(to_js_error(e))
            }
        }
    }

    /// Load already-decoded RGBA pixels, e.g. from `ImageData`.
    pub fn load_rgba(&mut self, width: u32, height: u32, pixels: Vec<u8>) -> Result<(), JsValue> {
        let source = SourceImage::from_rgba(self.inner.source_url(), width, height, pixels)
            .map_err(to_js_error)?;
        self.inner.on_load(source);
        Ok(())
    }

    pub fn on_click(
        &mut self,
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) {
        self.inner.on_primary_click(
            PointerPosition::new(client_x, client_y),
            FrameRect::new(left, top, width, height),
        );
    }

    pub fn on_move(
        &mut self,
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) {
        self.inner.on_pointer_move(
            PointerPosition::new(client_x, client_y),
            FrameRect::new(left, top, width, height),
        );
    }

    pub fn on_leave(
        &mut self,
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) {
        self.inner.on_pointer_leave(
            PointerPosition::new(client_x, client_y),
            FrameRect::new(left, top, width, height),
        );
    }

    pub fn rotate_cw(&mut self) {
        self.inner.rotate_clockwise();
    }

    pub fn rotate_ccw(&mut self) {
        self.inner.rotate_counter_clockwise();
    }

    #[wasm_bindgen(getter)]
    pub fn zoom_factor(&self) -> u32 {
        self.inner.view_state().zoom_factor
    }

    /// Stored angle; may exceed 360 or go negative.
    #[wasm_bindgen(getter)]
    pub fn rotation_degrees(&self) -> f64 {
        self.inner.view_state().rotation_degrees as f64
    }

    /// Whether the save control should be shown.
    #[wasm_bindgen(getter)]
    pub fn can_save(&self) -> bool {
        self.inner.can_save()
    }

    /// CSS properties as a plain object with `background_image`,
    /// `background_position`, `background_size` and `transform`.
    pub fn style(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.style()).map_err(Into::into)
    }

    #[wasm_bindgen(getter)]
    pub fn background_position(&self) -> String {
        self.inner.style().background_position
    }

    #[wasm_bindgen(getter)]
    pub fn background_size(&self) -> String {
        self.inner.style().background_size
    }

    #[wasm_bindgen(getter)]
    pub fn transform(&self) -> String {
        self.inner.style().transform
    }

    /// Export, call `on_save`, and download `image.png`.
    ///
    /// Returns the data URI, or `undefined` when saving is unavailable.
    pub fn save(&mut self) -> Result<Option<String>, JsValue> {
        match self.inner.save().map_err(to_js_error)? {
            SaveOutcome::Saved(artifact) => Ok(Some(artifact.into_data_uri())),
            SaveOutcome::Unavailable => Ok(None),
        }
    }

    /// Copy of the current raster surface, if loaded.
    pub fn surface(&self) -> Option<JsSurface> {
        self.inner.compositor().surface().map(JsSurface::from_surface)
    }
}
