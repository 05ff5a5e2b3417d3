use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use scout_core::{update, AppState, FetchStatus, Msg};
use scout_engine::{ChannelEventSink, EngineEvent, EngineHandle, ReqwestSearchClient};
use scout_logging::{scout_debug, scout_info};

use super::config::AppConfig;
use super::effects::{map_event, EffectRunner};
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render;

/// Everything the coordinating loop reacts to, funnelled through one channel.
enum Input {
    Line(String),
    Engine(EngineEvent),
    Closed,
}

pub fn run_app(config: AppConfig, token: Option<String>) -> anyhow::Result<()> {
    let (input_tx, input_rx) = mpsc::channel::<Input>();

    let client = ReqwestSearchClient::new(config.fetch_settings(token))
        .context("failed to build search client")?;
    let sink = ChannelEventSink::new(input_tx.clone(), Input::Engine);
    let engine =
        EngineHandle::new(Arc::new(client), Arc::new(sink)).context("failed to start engine")?;
    let runner = EffectRunner::new(engine);

    spawn_stdin_reader(input_tx)?;

    let mut app = App {
        state: AppState::new(config.search_config()),
        runner,
    };
    println!("{HELP}");
    app.dispatch(Msg::SessionStarted);
    app.present();

    for input in input_rx {
        match input {
            Input::Line(line) => match parse_command(&line) {
                Ok(Some(Command::Dispatch(msg))) => app.dispatch(msg),
                Ok(Some(Command::Show)) => {
                    let view = app.state.view();
                    println!("{}", render::render_status(&view));
                    print!("{}", render::render_results(&view));
                }
                Ok(Some(Command::Languages)) => {
                    println!("{}", render::render_list("languages", &app.state.view().languages));
                }
                Ok(Some(Command::Vocabulary)) => {
                    println!("{}", render::render_list("topics", &app.state.view().vocabulary));
                }
                Ok(Some(Command::Help)) => println!("{HELP}"),
                Ok(Some(Command::Quit)) => break,
                Ok(None) => {}
                Err(err) => println!("{err}"),
            },
            Input::Engine(event) => app.dispatch(map_event(event)),
            Input::Closed => break,
        }
        app.present();
    }

    scout_info!("Session closed");
    Ok(())
}

struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    /// Prints a fresh status line (and results once a page lands) if anything changed.
    fn present(&mut self) {
        if !self.state.consume_dirty() {
            return;
        }
        let view = self.state.view();
        println!("{}", render::render_status(&view));
        if view.status == FetchStatus::Settled {
            print!("{}", render::render_results(&view));
        }
        let _ = io::stdout().flush();
    }
}

fn spawn_stdin_reader(tx: mpsc::Sender<Input>) -> io::Result<()> {
    thread::Builder::new()
        .name("scout-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(Input::Line(line)).is_err() {
                    return;
                }
            }
            scout_debug!("stdin closed");
            let _ = tx.send(Input::Closed);
        })?;
    Ok(())
}
