//! Main TUI runner - terminal lifecycle and event loop

use bikemap_app::Engine;
use bikemap_core::prelude::*;
use bikemap_platform::{LocationProvider, StationFeed};

use crate::event::{self, TerminalEvent};
use crate::surface::TerminalSurface;
use crate::terminal;

/// Run the terminal map until the user quits or a signal arrives
pub async fn run<L, F>(mut engine: Engine<L, F>) -> Result<()>
where
    L: LocationProvider + Send + Sync + 'static,
    F: StationFeed + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut surface = TerminalSurface::new(ratatui::init());

    engine.spawn_signal_handler();
    engine.start();

    let result = run_loop(&mut engine, &mut surface);

    engine.shutdown();
    ratatui::restore();

    info!("Terminal restored");
    result
}

fn run_loop<L, F, B>(engine: &mut Engine<L, F>, surface: &mut TerminalSurface<B>) -> Result<()>
where
    L: LocationProvider + Send + Sync + 'static,
    F: StationFeed + Send + Sync + 'static,
    B: ratatui::backend::Backend,
{
    while !engine.should_quit() {
        // Results from background tasks and the signal handler
        engine.drain_pending_messages();

        engine.present(surface)?;

        match event::poll()? {
            Some(TerminalEvent::Message(message)) => engine.process_message(message),
            Some(TerminalEvent::Resize) => engine.force_redraw(),
            None => {}
        }
    }

    Ok(())
}
