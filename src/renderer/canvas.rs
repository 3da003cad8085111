//! Canvas 2D executor for draw intents (WASM only)

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::frame::{BUTTON_FONT_SIZE, Color, DrawCommand, Frame};
use crate::assets::{AssetError, AssetManifest};
use crate::consts::{BLACK, ITEM_SIZE};
use crate::sim::{ItemKind, Rect};

/// High contrast rim around item sprites
const OUTLINE_WIDTH: f64 = 3.0;

fn css(color: Color) -> String {
    format!("rgb({},{},{})", color[0], color[1], color[2])
}

/// Load one image and wait for it to decode
async fn load_image(path: &str) -> Result<HtmlImageElement, AssetError> {
    let failed = |reason: String| AssetError::LoadFailed {
        path: path.to_string(),
        reason,
    };
    let img = HtmlImageElement::new().map_err(|e| failed(format!("{:?}", e)))?;
    let promise = {
        let img = img.clone();
        js_sys::Promise::new(&mut move |resolve, reject| {
            img.set_onload(Some(&resolve));
            img.set_onerror(Some(&reject));
        })
    };
    img.set_src(path);
    JsFuture::from(promise)
        .await
        .map_err(|_| failed("image failed to decode".to_string()))?;
    Ok(img)
}

/// Decoded sprites and background
pub struct ImageSet {
    items: Vec<HtmlImageElement>,
    background: HtmlImageElement,
}

impl ImageSet {
    /// Load every image in the manifest; the first failure aborts
    pub async fn load(manifest: &AssetManifest) -> Result<Self, AssetError> {
        manifest.validate()?;
        let mut items = Vec::with_capacity(ItemKind::ALL.len());
        for kind in ItemKind::ALL {
            items.push(load_image(manifest.item_path(kind)).await?);
        }
        let background = load_image(&manifest.background).await?;
        log::info!("Loaded {} images", items.len() + 1);
        Ok(Self { items, background })
    }

    pub fn background_size(&self) -> (u32, u32) {
        (self.background.natural_width(), self.background.natural_height())
    }

    fn item(&self, kind: ItemKind) -> &HtmlImageElement {
        &self.items[kind.index()]
    }
}

/// Paints frames onto a 2D canvas
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    images: ImageSet,
}

impl CanvasPainter {
    pub fn new(canvas: &HtmlCanvasElement, images: ImageSet) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx, images })
    }

    fn fill_rect(&self, rect: &Rect, color: Color) {
        self.ctx.set_fill_style_str(&css(color));
        self.ctx
            .fill_rect(rect.min.x as f64, rect.min.y as f64, rect.size.x as f64, rect.size.y as f64);
    }

    fn text(&self, text: &str, x: f32, y: f32, size: f32, color: Color, centered: bool) -> Result<(), JsValue> {
        self.ctx.set_font(&format!("{}px sans-serif", size as u32));
        self.ctx.set_fill_style_str(&css(color));
        if centered {
            self.ctx.set_text_align("center");
            self.ctx.set_text_baseline("middle");
        } else {
            self.ctx.set_text_align("left");
            self.ctx.set_text_baseline("top");
        }
        self.ctx.fill_text(text, x as f64, y as f64)
    }

    /// Sprite clipped to a circle, like a plate
    fn item(&self, kind: ItemKind, x: f32, y: f32, scale: f32, alpha: u8, outlined: bool) -> Result<(), JsValue> {
        let size = (ITEM_SIZE * scale).max(1.0) as f64;
        let (x, y) = (x as f64, y as f64);
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64 / 255.0);
        self.ctx.begin_path();
        self.ctx.arc(x, y, size / 2.0, 0.0, TAU)?;
        self.ctx.clip();
        let result = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            self.images.item(kind),
            x - size / 2.0,
            y - size / 2.0,
            size,
            size,
        );
        self.ctx.restore();
        result?;

        if outlined {
            self.ctx.set_stroke_style_str(&css(BLACK));
            self.ctx.set_line_width(OUTLINE_WIDTH);
            self.ctx.begin_path();
            self.ctx.arc(x, y, size / 2.0, 0.0, TAU)?;
            self.ctx.stroke();
        }
        Ok(())
    }

    /// Paint all commands in order
    pub fn paint(&self, frame: &Frame) -> Result<(), JsValue> {
        for cmd in frame.iter() {
            match cmd {
                DrawCommand::Background { x, width, height } => {
                    self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        &self.images.background,
                        *x as f64,
                        0.0,
                        *width as f64,
                        *height as f64,
                    )?;
                }
                DrawCommand::Item {
                    kind,
                    center,
                    scale,
                    alpha,
                    outlined,
                } => self.item(*kind, center.x, center.y, *scale, *alpha, *outlined)?,
                DrawCommand::Trail { points, width, color } => {
                    let Some(first) = points.first() else { continue };
                    self.ctx.set_stroke_style_str(&css(*color));
                    self.ctx.set_line_width(*width as f64);
                    self.ctx.begin_path();
                    self.ctx.move_to(first.x as f64, first.y as f64);
                    for p in &points[1..] {
                        self.ctx.line_to(p.x as f64, p.y as f64);
                    }
                    self.ctx.stroke();
                }
                DrawCommand::LifeIndicator { rect, color } => self.fill_rect(rect, *color),
                DrawCommand::Text {
                    text,
                    pos,
                    size,
                    color,
                    centered,
                } => self.text(text, pos.x, pos.y, *size, *color, *centered)?,
                DrawCommand::Button {
                    label,
                    top,
                    base,
                    visual,
                } => {
                    self.fill_rect(base, visual.bottom_color());
                    self.fill_rect(top, visual.top_color());
                    let c = top.center();
                    self.text(label, c.x, c.y, BUTTON_FONT_SIZE, BLACK, true)?;
                }
            }
        }
        Ok(())
    }
}
