use crate::config::UiConfig;
use crate::game::MatchController;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

pub fn run(
    controller: MatchController,
    ui: &UiConfig,
    shutdown: ShutdownHandle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(ui.mouse)?;
    let tick_rate = Duration::from_millis(ui.tick_rate_ms);
    let mut app = App::new(controller, ui.show_round);
    let events = EventHandler::new(tick_rate, shutdown.clone());
    match terminal.size() {
        Ok(size) => app.on_resize(size.width, size.height),
        Err(err) => tracing::warn!(error = %err, "terminal size unknown until first frame"),
    }
    tracing::info!(mouse = ui.mouse, "game started");

    loop {
        if app.take_redraw() {
            let area = terminal.draw(|frame| draw(frame, &app))?.area;
            app.on_frame_drawn(area);
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stops the input thread.
    shutdown.signal();
    drop(guard);
    tracing::info!(round = app.round(), "game closed");
    Ok(())
}
