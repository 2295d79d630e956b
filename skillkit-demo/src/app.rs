//! Demo app: a column of selects driven by terminal events, with skill cards
//! beside them.

use std::io::Write;
use std::sync::Arc;

use crossterm::event::EventStream;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use futures::StreamExt;
use log::{debug, info};
use skillkit::render::{Line, Span, SpanStyle, draw_lines};
use skillkit::{
    Event, Key, Mounted, PointerHub, PointerSource, Select, SelectOption, SelectProps,
    SelectTheme, SkillCard, convert_event,
};

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::terminal::TerminalGuard;

const LEFT: u16 = 4;
const TOP: u16 = 3;
/// Rows between the top rows of consecutive selects
const ROW_GAP: u16 = 2;
/// Columns between the select column and the card column
const CARD_MARGIN: u16 = 4;
const CARD_WIDTH: u16 = 28;
/// Card height plus one blank row
const CARD_STRIDE: u16 = 4;

fn labels(options: &[SelectOption]) -> String {
    options
        .iter()
        .map(|o| o.value.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct DemoApp {
    hub: PointerHub,
    selects: Vec<Select>,
    _mounted: Vec<Mounted>,
    cards: Vec<SkillCard>,
    cards_left: u16,
    focus: usize,
    theme: SelectTheme,
    force_redraw: bool,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> Result<Self, DemoError> {
        let hub = PointerHub::new();
        let source: Arc<dyn PointerSource> = Arc::new(hub.clone());
        let mut selects = Vec::with_capacity(config.selects.len());
        let mut mounted = Vec::with_capacity(config.selects.len());

        for (i, cfg) in config.selects.into_iter().enumerate() {
            let caption = cfg.caption.clone();
            let select = Select::try_new(
                SelectProps::new(cfg.options)
                    .multi(cfg.multi)
                    .caption(cfg.caption)
                    .placeholder(cfg.placeholder)
                    .on_change(move |selection| {
                        info!("{}: [{}]", caption, labels(&selection));
                    }),
            )?;
            select.place(LEFT, TOP + i as u16 * ROW_GAP, config.width);
            mounted.push(select.mount(Arc::clone(&source)));
            selects.push(select);
        }

        let cards: Vec<SkillCard> = config.cards.into_iter().map(SkillCard::from).collect();
        info!(
            "Demo started with {} selects and {} cards",
            selects.len(),
            cards.len()
        );
        Ok(Self {
            hub,
            selects,
            _mounted: mounted,
            cards,
            cards_left: LEFT.saturating_add(config.width).saturating_add(CARD_MARGIN),
            focus: 0,
            theme: config.theme.resolve(),
            force_redraw: true,
        })
    }

    #[cfg(test)]
    pub fn selects(&self) -> &[Select] {
        &self.selects
    }

    #[cfg(test)]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Caption and final selection of every select.
    pub fn selections(&self) -> Vec<(String, Vec<SelectOption>)> {
        self.selects
            .iter()
            .map(|s| (s.caption().to_string(), s.selected()))
            .collect()
    }

    /// Apply one event. Returns `false` when the demo should quit.
    pub fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::Quit => return false,
            Event::Key {
                key: Key::Char('q'),
                modifiers,
            } if modifiers.ctrl => return false,
            Event::Key { key: Key::Tab, .. } => self.cycle_focus(),
            Event::Key { .. } => {
                if let Some(select) = self.selects.get(self.focus) {
                    select.handle_event(&event);
                }
            }
            Event::Pointer(pointer) => {
                // Outside listeners first, then the topmost widget under the pointer
                self.hub.dispatch(&pointer);
                for index in self.hit_order() {
                    if self.selects[index].handle_event(&event).is_handled() {
                        debug!("Press at ({}, {}) hit select #{}", pointer.x, pointer.y, index);
                        self.focus = index;
                        break;
                    }
                }
            }
            Event::Resize { .. } => self.force_redraw = true,
        }
        true
    }

    fn cycle_focus(&mut self) {
        if self.selects.is_empty() {
            return;
        }
        self.selects[self.focus].close();
        self.focus = (self.focus + 1) % self.selects.len();
        self.force_redraw = true;
    }

    /// Open selects overlay the ones below them, so they are hit first.
    fn hit_order(&self) -> Vec<usize> {
        let (mut open, closed): (Vec<usize>, Vec<usize>) =
            (0..self.selects.len()).rev().partition(|&i| self.selects[i].is_open());
        open.extend(closed);
        open
    }

    pub fn needs_redraw(&self) -> bool {
        self.force_redraw || self.selects.iter().any(Select::is_dirty)
    }

    pub fn draw<W: Write>(&mut self, out: &mut W) -> Result<(), DemoError> {
        queue!(out, Clear(ClearType::All))?;

        let title = SpanStyle::new().fg(self.theme.text).bold();
        let help = SpanStyle::new().fg(self.theme.muted);
        draw_lines(
            out,
            LEFT,
            0,
            &[
                Line::new(vec![Span::styled("skillkit select demo", title)]),
                Line::new(vec![Span::styled(
                    "click to open, type to filter, Tab to switch, Ctrl+Q to quit",
                    help,
                )]),
            ],
        )?;

        if let Some(select) = self.selects.get(self.focus) {
            let marker = Line::new(vec![Span::styled("›", title)]);
            if let Some(layout) = select.layout() {
                draw_lines(out, LEFT - 2, layout.top.y, &[marker])?;
            }
        }

        for (i, card) in self.cards.iter().enumerate() {
            let y = TOP.saturating_add((i as u16).saturating_mul(CARD_STRIDE));
            draw_lines(out, self.cards_left, y, &card.render(CARD_WIDTH, &self.theme))?;
        }

        // Closed selects first so open panels paint over them
        for select in self.selects.iter().filter(|s| !s.is_open()) {
            select.draw(out, &self.theme)?;
        }
        for select in self.selects.iter().filter(|s| s.is_open()) {
            select.draw(out, &self.theme)?;
        }

        out.flush()?;
        self.force_redraw = false;
        Ok(())
    }
}

/// Run the event loop until the user quits or input ends.
pub async fn run(app: &mut DemoApp, terminal: &mut TerminalGuard) -> Result<(), DemoError> {
    let mut events = EventStream::new();
    app.draw(terminal.out())?;

    while let Some(next) = events.next().await {
        let Some(event) = convert_event(next?) else {
            continue;
        };
        if !app.handle(event) {
            info!("Quit requested");
            break;
        }
        if app.needs_redraw() {
            app.draw(terminal.out())?;
        }
    }
    Ok(())
}
