//=========================================================================
// Rendering Contracts
//=========================================================================
//
// What the core needs from the presentation layer.
//
//   Renderer             frame lifecycle + primitive draws + present
//   TextRenderer         UI text layout on top of a Renderer
//   SpriteSheetRenderer  tiles of the UI sprite sheet (HUD icons)
//
// Frame lifecycle:
//   begin_frame() → draw_*()* → present(overlay_alpha)*
//
// `present` may be called several times for the same frame. Screen
// fades rely on this: they re-present the last drawn frame with a
// growing or shrinking black overlay.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::math::Vector;
use crate::data::ActorId;

//=== Renderer ============================================================

pub trait Renderer {
    /// Discards the previous frame and starts a new one.
    fn begin_frame(&mut self);

    fn draw_sprite(&mut self, actor: ActorId, frame: usize, position: Vector);

    /// Draws one line of text at a tile position.
    fn draw_text(&mut self, position: Vector, text: &str);

    /// Shows the current frame covered by a black overlay.
    /// `0` shows the frame as drawn, `255` shows a black screen.
    fn present(&mut self, overlay_alpha: u8);
}

//=== HeadlessRenderer ====================================================

/// Renderer without a display. Counts work so it can be inspected.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames_begun: u64,
    presents: u64,
    draw_calls: usize,
    last_overlay: u8,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_begun(&self) -> u64 {
        self.frames_begun
    }

    pub fn presents(&self) -> u64 {
        self.presents
    }

    pub fn last_overlay(&self) -> u8 {
        self.last_overlay
    }
}

impl Renderer for HeadlessRenderer {
    fn begin_frame(&mut self) {
        self.frames_begun += 1;
        self.draw_calls = 0;
    }

    fn draw_sprite(&mut self, _actor: ActorId, _frame: usize, _position: Vector) {
        self.draw_calls += 1;
    }

    fn draw_text(&mut self, _position: Vector, _text: &str) {
        self.draw_calls += 1;
    }

    fn present(&mut self, overlay_alpha: u8) {
        trace!(
            target: "render",
            "Present frame {} ({} draws, overlay {})",
            self.frames_begun,
            self.draw_calls,
            overlay_alpha
        );
        self.presents += 1;
        self.last_overlay = overlay_alpha;
    }
}

//=== TextRenderer ========================================================

pub trait TextRenderer {
    fn draw_text(&self, renderer: &mut dyn Renderer, position: Vector, text: &str);

    /// Draws text wrapped to `max_width` characters, one line per row.
    fn draw_wrapped_text(
        &self,
        renderer: &mut dyn Renderer,
        position: Vector,
        max_width: usize,
        text: &str,
    ) {
        for (row, line) in wrap_text(text, max_width).iter().enumerate() {
            self.draw_text(renderer, position + Vector::new(0, row as i32), line);
        }
    }
}

/// Menu font renderer. The bitmap font only has upper case glyphs.
#[derive(Debug, Default)]
pub struct MenuTextRenderer;

impl TextRenderer for MenuTextRenderer {
    fn draw_text(&self, renderer: &mut dyn Renderer, position: Vector, text: &str) {
        renderer.draw_text(position, &text.to_uppercase());
    }
}

/// Greedy word wrap. Words longer than `max_width` get a line of their own.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.len()
        } else {
            current.len() + 1 + word.len()
        };

        if needed > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

//=== SpriteSheetRenderer =================================================

pub trait SpriteSheetRenderer {
    /// Draws tile `index` of the UI sprite sheet.
    fn draw_tile(&self, renderer: &mut dyn Renderer, index: usize, position: Vector);
}

/// Draws tiles from the status bar sprite sheet.
#[derive(Debug)]
pub struct UiSpriteSheet {
    sheet: ActorId,
}

impl UiSpriteSheet {
    pub fn new(sheet: ActorId) -> Self {
        Self { sheet }
    }
}

impl Default for UiSpriteSheet {
    fn default() -> Self {
        Self::new(ActorId::HUD_SHEET)
    }
}

impl SpriteSheetRenderer for UiSpriteSheet {
    fn draw_tile(&self, renderer: &mut dyn Renderer, index: usize, position: Vector) {
        renderer.draw_sprite(self.sheet, index, position);
    }
}

//=========================================================================
// Tests
//=========================================================================
