use scout_core::{Effect, Msg};
use scout_engine::{outcome_from, EngineEvent, EngineHandle};
use scout_logging::{scout_debug, scout_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleFetch { generation, delay } => {
                    scout_debug!(
                        "ScheduleFetch generation={} delay_ms={}",
                        generation,
                        delay.as_millis()
                    );
                    self.engine.schedule_fetch(generation, delay);
                }
                Effect::Fetch {
                    generation,
                    page,
                    request,
                } => {
                    self.engine.fetch(generation, page, request);
                }
            }
        }
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::TimerElapsed { generation } => Msg::DebounceElapsed { generation },
        EngineEvent::FetchCompleted {
            generation,
            page,
            result,
        } => {
            if let Err(err) = &result {
                scout_warn!("Fetch generation {} failed: {}", generation, err);
            }
            Msg::FetchCompleted {
                generation,
                page,
                outcome: outcome_from(result),
            }
        }
    }
}
