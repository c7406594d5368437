//=========================================================================
// Scripts
//=========================================================================
//
// The text/script driven UI layer: intro sequences, menus and story
// screens. Modes start a named script and poll the runner until it
// finishes.
//
// Script flow:
//   execute_script() → (handle_event() | update_and_render())*
//                    → has_finished() → result()
//
// A script shows its pages one after another. If it offers options, the
// last page stays up until one is selected or the menu is cancelled.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::time::Duration;

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::render::{Renderer, TextRenderer};
use crate::core::input::{InputEvent, KeyCode};
use crate::core::math::Vector;

//=== Script ==============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub pages: Vec<String>,

    /// Selectable entries shown below the last page.
    pub options: Vec<String>,

    /// How long a page stays up before the next one is shown.
    pub page_duration: Duration,
}

impl Script {
    pub fn pages<I, S>(pages: I, page_duration: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
            options: Vec::new(),
            page_duration,
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

//=== ScriptBundle ========================================================

/// Named scripts loaded from the game data.
#[derive(Debug, Clone, Default)]
pub struct ScriptBundle {
    scripts: HashMap<String, Script>,
}

impl ScriptBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, script: Script) {
        self.scripts.insert(name.into(), script);
    }

    pub fn get(&self, name: &str) -> Option<&Script> {
        self.scripts.get(name)
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

//=== ScriptRunner ========================================================

/// How a script ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptResult {
    /// All pages shown, nothing to choose.
    Completed,

    /// The player picked the option at this index.
    Selected(usize),

    /// The player backed out with Escape.
    Cancelled,
}

pub trait ScriptRunner {
    /// Starts a script, abandoning the one currently running.
    fn execute_script(&mut self, script: &Script);

    fn handle_event(&mut self, event: &InputEvent);

    fn update_and_render(
        &mut self,
        dt: Duration,
        renderer: &mut dyn Renderer,
        text: &dyn TextRenderer,
    );

    fn has_finished(&self) -> bool;

    /// Outcome of the last script, once it finished.
    fn result(&self) -> Option<ScriptResult>;
}

//=== PagedScriptRunner ===================================================

const TEXT_POSITION: Vector = Vector::new(2, 4);
const TEXT_WIDTH: usize = 36;
const OPTIONS_POSITION: Vector = Vector::new(6, 14);

/// Shows script pages as wrapped text and runs option menus.
#[derive(Debug, Default)]
pub struct PagedScriptRunner {
    script: Option<Script>,
    page: usize,
    page_elapsed: Duration,
    selection: usize,
    result: Option<ScriptResult>,
}

impl PagedScriptRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> Option<&str> {
        self.script
            .as_ref()
            .and_then(|s| s.pages.get(self.page))
            .map(String::as_str)
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    fn finish(&mut self, result: ScriptResult) {
        debug!(target: "script", "Script finished: {:?}", result);
        self.result = Some(result);
        self.script = None;
    }

    fn is_on_last_page(&self, script: &Script) -> bool {
        self.page + 1 >= script.pages.len()
    }

    fn advance_page(&mut self) {
        let Some(script) = &self.script else { return };

        if !self.is_on_last_page(script) {
            self.page += 1;
            self.page_elapsed = Duration::ZERO;
            trace!(target: "script", "Page {}", self.page);
        } else if script.options.is_empty() {
            self.finish(ScriptResult::Completed);
        }
    }
}

impl ScriptRunner for PagedScriptRunner {
    fn execute_script(&mut self, script: &Script) {
        debug!(
            target: "script",
            "Executing script ({} pages, {} options)",
            script.pages.len(),
            script.options.len()
        );
        self.script = Some(script.clone());
        self.page = 0;
        self.page_elapsed = Duration::ZERO;
        self.selection = 0;
        self.result = None;
    }

    fn handle_event(&mut self, event: &InputEvent) {
        let InputEvent::KeyDown(key) = *event else { return };
        let Some(script) = &self.script else { return };
        let option_count = script.options.len();
        let awaiting_choice = option_count > 0 && self.is_on_last_page(script);

        match key {
            KeyCode::Escape => self.finish(ScriptResult::Cancelled),
            KeyCode::ArrowUp if awaiting_choice => {
                self.selection = (self.selection + option_count - 1) % option_count;
            }
            KeyCode::ArrowDown if awaiting_choice => {
                self.selection = (self.selection + 1) % option_count;
            }
            KeyCode::Enter if awaiting_choice => {
                let selected = self.selection;
                self.finish(ScriptResult::Selected(selected));
            }
            _ if !awaiting_choice => self.advance_page(),
            _ => {}
        }
    }

    fn update_and_render(
        &mut self,
        dt: Duration,
        renderer: &mut dyn Renderer,
        text: &dyn TextRenderer,
    ) {
        let Some(script) = &self.script else { return };

        if let Some(page) = script.pages.get(self.page) {
            text.draw_wrapped_text(renderer, TEXT_POSITION, TEXT_WIDTH, page);
        }

        if self.is_on_last_page(script) {
            for (index, option) in script.options.iter().enumerate() {
                let marker = if index == self.selection { "> " } else { "  " };
                let position = OPTIONS_POSITION + Vector::new(0, 2 * index as i32);
                text.draw_text(renderer, position, &format!("{marker}{option}"));
            }
        }

        let waits_for_choice = !script.options.is_empty() && self.is_on_last_page(script);
        if waits_for_choice {
            return;
        }

        self.page_elapsed += dt;
        if self.page_elapsed >= script.page_duration {
            self.advance_page();
        }
    }

    fn has_finished(&self) -> bool {
        self.result.is_some()
    }

    fn result(&self) -> Option<ScriptResult> {
        self.result
    }
}

//=========================================================================
// Tests
//=========================================================================
