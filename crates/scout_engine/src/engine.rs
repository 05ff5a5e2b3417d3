use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use scout_core::{Generation, SearchRequest};
use scout_logging::{scout_debug, scout_warn};

use crate::{Debouncer, EngineEvent, SearchClient};

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

/// Forwards engine events into a channel, mapping them on the way.
pub struct ChannelEventSink<T> {
    tx: mpsc::Sender<T>,
    map: fn(EngineEvent) -> T,
}

impl<T> ChannelEventSink<T> {
    pub fn new(tx: mpsc::Sender<T>, map: fn(EngineEvent) -> T) -> Self {
        Self { tx, map }
    }
}

impl ChannelEventSink<EngineEvent> {
    pub fn direct(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self::new(tx, std::convert::identity)
    }
}

impl<T: Send> EventSink for ChannelEventSink<T> {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send((self.map)(event));
    }
}

enum EngineCommand {
    ScheduleFetch {
        generation: Generation,
        delay: Duration,
    },
    Fetch {
        generation: Generation,
        page: u32,
        request: SearchRequest,
    },
}

/// Runs timers and requests on a background tokio runtime. Requests are
/// fire-and-forget; results are reported through the sink in completion order.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        client: Arc<dyn SearchClient>,
        sink: Arc<dyn EventSink>,
    ) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .thread_name("scout-engine")
            .build()?;

        thread::Builder::new()
            .name("scout-engine-commands".to_string())
            .spawn(move || {
                let mut debouncer = Debouncer::new(runtime.handle().clone());
                while let Ok(command) = cmd_rx.recv() {
                    handle_command(&runtime, &mut debouncer, &client, &sink, command);
                }
                scout_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn schedule_fetch(&self, generation: Generation, delay: Duration) {
        self.send(EngineCommand::ScheduleFetch { generation, delay });
    }

    pub fn fetch(&self, generation: Generation, page: u32, request: SearchRequest) {
        self.send(EngineCommand::Fetch {
            generation,
            page,
            request,
        });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            scout_warn!("Engine thread is gone; command dropped");
        }
    }
}

fn handle_command(
    runtime: &tokio::runtime::Runtime,
    debouncer: &mut Debouncer,
    client: &Arc<dyn SearchClient>,
    sink: &Arc<dyn EventSink>,
    command: EngineCommand,
) {
    match command {
        EngineCommand::ScheduleFetch { generation, delay } => {
            let sink = sink.clone();
            let superseded = debouncer.schedule(delay, async move {
                sink.emit(EngineEvent::TimerElapsed { generation });
            });
            if superseded {
                scout_debug!("Debounce restarted for generation {}", generation);
            }
        }
        EngineCommand::Fetch {
            generation,
            page,
            request,
        } => {
            let client = client.clone();
            let sink = sink.clone();
            runtime.spawn(async move {
                let result = client.search(&request).await;
                sink.emit(EngineEvent::FetchCompleted {
                    generation,
                    page,
                    result,
                });
            });
        }
    }
}
