use paint_core::{
    palette, PaletteColor, StrokeSegment, BRUSH_INDICATOR_ALPHA, BRUSH_INDICATOR_DIAMETER,
    CANVAS_HEIGHT, CANVAS_WIDTH, PALETTE, PALETTE_WIDTH, SWATCH_HEIGHT, SWATCH_OUTLINE_INSET,
    SWATCH_OUTLINE_WIDTH,
};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D drawing for the paint surface and the palette strip.
///
/// The canvas is never cleared between frames; strokes accumulate.
#[derive(Clone)]
pub struct Renderer {
    ctx: web::CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        Ok(Self { ctx })
    }

    /// Paint the whole canvas white.
    pub fn clear(&self) {
        self.ctx.set_fill_style_str("white");
        self.ctx
            .fill_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
    }

    pub fn stroke(&self, segment: &StrokeSegment, color: PaletteColor, width: f32) {
        self.ctx.set_stroke_style_str(color.css_name());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(segment.from.x as f64, segment.from.y as f64);
        self.ctx.line_to(segment.to.x as f64, segment.to.y as f64);
        self.ctx.stroke();
    }

    /// Translucent white dot marking the brush position.
    pub fn draw_brush_indicator(&self, at: Vec2) {
        let fill = format!("rgba(255, 255, 255, {:.3})", BRUSH_INDICATOR_ALPHA);
        self.ctx.set_fill_style_str(&fill);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            at.x as f64,
            at.y as f64,
            (BRUSH_INDICATOR_DIAMETER * 0.5) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    /// Swatches stacked top to bottom, with the selected one outlined.
    pub fn draw_palette(&self, selected: PaletteColor) {
        let w = PALETTE_WIDTH as f64;
        let h = SWATCH_HEIGHT as f64;
        for (i, entry) in PALETTE.iter().enumerate() {
            self.ctx.set_fill_style_str(entry.color.css_name());
            self.ctx.fill_rect(0.0, i as f64 * h, w, h);
        }
        let inset = SWATCH_OUTLINE_INSET as f64;
        let row = palette::index_of(selected) as f64;
        self.ctx.set_stroke_style_str("white");
        self.ctx.set_line_width(SWATCH_OUTLINE_WIDTH as f64);
        self.ctx
            .stroke_rect(inset, row * h + inset, w - 2.0 * inset, h - 2.0 * inset);
    }
}
