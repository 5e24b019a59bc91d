/// The six fire-and-forget cues the game can trigger. Game logic pushes
/// these into the queue; the audio backend drains it once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioEvent {
    PowerUp,
    PowerDown,
    Shot,
    Hit,
    Explosion,
    Shield,
}

pub struct AudioEventQueue {
    pub events: Vec<AudioEvent>,
}

impl AudioEventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: AudioEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<AudioEvent> {
        self.events.drain(..).collect()
    }
}

impl Default for AudioEventQueue {
    fn default() -> Self {
        Self::new()
    }
}
