use std::collections::VecDeque;
use std::sync::atomic::Ordering;
use std::time::Duration;

use casedesk_client::GenerateSettings;
use casedesk_core::{update, AppState, AppViewModel, GenerateKind, Msg};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::tui;
use super::ui::{self, Screen};

/// Which pane receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Keys act as commands; the materials list is clickable.
    Browse,
    /// Keys edit the import path input.
    EditPath,
}

enum Input {
    Quit,
    Emit(Msg),
    Redraw,
    None,
}

pub fn run_app() -> std::io::Result<()> {
    logging::initialize(LogDestination::File);

    tui::install_panic_hook();
    let term_flag = tui::register_sigterm();
    let mut terminal = tui::init_tui()?;

    let mut state = AppState::new();
    let mut runner = EffectRunner::new(GenerateSettings::default());
    // Start in the input so the user can type a path right away.
    let mut mode = Mode::EditPath;
    let mut screen = Screen::default();
    let mut view = state.view();

    terminal.draw(|frame| screen = ui::render(frame, &view, mode == Mode::EditPath))?;

    'event_loop: loop {
        let mut queue: VecDeque<Msg> = VecDeque::new();
        let mut needs_redraw = false;

        // The poll timeout doubles as the cadence for draining completed
        // generations below.
        if crossterm::event::poll(Duration::from_millis(50))? {
            let input = match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    translate_key(key, &mut mode, &view)
                }
                Event::Mouse(mouse) => translate_mouse(mouse, &screen, &view),
                Event::Resize(_, _) => Input::Redraw,
                _ => Input::None,
            };
            match input {
                Input::Quit => break 'event_loop,
                Input::Emit(msg) => queue.push_back(msg),
                Input::Redraw => needs_redraw = true,
                Input::None => {}
            }
        } else {
            queue.push_back(Msg::Tick);
        }

        queue.extend(runner.poll());

        while let Some(msg) = queue.pop_front() {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            queue.extend(runner.run(effects));
        }

        if state.consume_dirty() || needs_redraw {
            view = state.view();
            terminal.draw(|frame| screen = ui::render(frame, &view, mode == Mode::EditPath))?;
        }

        if term_flag.load(Ordering::Relaxed) {
            break 'event_loop;
        }
    }

    tui::restore_tui()
}

fn translate_key(key: KeyEvent, mode: &mut Mode, view: &AppViewModel) -> Input {
    if view.alert.is_some() {
        // The alert is blocking: only dismissal gets through.
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Input::Emit(Msg::AlertDismissed),
            _ => Input::None,
        };
    }

    match *mode {
        Mode::EditPath => match key.code {
            KeyCode::Enter => {
                *mode = Mode::Browse;
                Input::Emit(Msg::ImportRequested)
            }
            KeyCode::Esc => {
                *mode = Mode::Browse;
                Input::Redraw
            }
            KeyCode::Backspace => {
                let mut text = view.path_input.clone();
                text.pop();
                Input::Emit(Msg::PathInputChanged(text))
            }
            KeyCode::Char(c) => {
                Input::Emit(Msg::PathInputChanged(format!("{}{c}", view.path_input)))
            }
            _ => Input::None,
        },
        Mode::Browse => match key.code {
            KeyCode::Char('i') | KeyCode::Char('I') => {
                *mode = Mode::EditPath;
                Input::Redraw
            }
            KeyCode::Char('b') | KeyCode::Char('B') => Input::Emit(Msg::GenerateRequested {
                kind: GenerateKind::Brief,
            }),
            KeyCode::Char('o') | KeyCode::Char('O') => Input::Emit(Msg::GenerateRequested {
                kind: GenerateKind::Outline,
            }),
            KeyCode::Char('q') | KeyCode::Char('Q') => Input::Quit,
            _ => Input::None,
        },
    }
}

fn translate_mouse(mouse: MouseEvent, screen: &Screen, view: &AppViewModel) -> Input {
    if view.alert.is_some() {
        return Input::None;
    }
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if let Some(index) = screen.material_row_at(mouse.column, mouse.row) {
            if index < view.materials.len() {
                return Input::Emit(Msg::MaterialSelected { index });
            }
        }
    }
    Input::None
}
