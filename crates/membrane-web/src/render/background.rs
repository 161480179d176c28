//! Text texture the membrane refracts: white title on black, drawn through a
//! throwaway 2D canvas and read back as RGBA8.

use crate::constants::{BACKGROUND_FONT, BACKGROUND_TEXT, BACKGROUND_TEXT_OFFSET};
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct BackgroundImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub fn draw_text_image(document: &web::Document, size: u32) -> anyhow::Result<BackgroundImage> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!(format!("create canvas: {:?}", e)))?
        .dyn_into()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    canvas.set_width(size);
    canvas.set_height(size);

    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow!(format!("get_context: {:?}", e)))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;

    let side = size as f64;
    ctx.set_fill_style_str("#000000");
    ctx.fill_rect(0.0, 0.0, side, side);
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font(BACKGROUND_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(
        BACKGROUND_TEXT,
        side * 0.5 + BACKGROUND_TEXT_OFFSET[0],
        side * 0.5 + BACKGROUND_TEXT_OFFSET[1],
    )
    .map_err(|e| anyhow!(format!("fill_text: {:?}", e)))?;

    let data = ctx
        .get_image_data(0.0, 0.0, side, side)
        .map_err(|e| anyhow!(format!("get_image_data: {:?}", e)))?;
    let rgba = data.data().0;
    if rgba.len() != (size * size * 4) as usize {
        return Err(anyhow!("unexpected image size {}", rgba.len()));
    }
    Ok(BackgroundImage {
        width: size,
        height: size,
        rgba,
    })
}
