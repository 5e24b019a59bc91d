pub mod events;

use std::collections::HashMap;

use events::AudioEvent;
use kira::{
    manager::{backend::DefaultBackend, AudioManager, AudioManagerSettings},
    sound::static_sound::{StaticSoundData, StaticSoundSettings},
    Volume,
};

use crate::resource_path::find_resource;

/// Cue playback over kira. Playback problems never reach game logic: a
/// missing file is a startup warning, a refused play is dropped on the
/// floor.
pub struct AudioSystem {
    manager: AudioManager,
    sounds: HashMap<&'static str, StaticSoundData>,
    enabled: bool,
}

impl AudioSystem {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())?;
        Ok(Self {
            manager,
            sounds: HashMap::new(),
            enabled: true,
        })
    }

    pub fn load_sound(
        &mut self,
        name: &'static str,
        path: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let resolved = find_resource(path).ok_or_else(|| format!("not found: {}", path))?;
        let sound_data = StaticSoundData::from_file(resolved)?;
        self.sounds.insert(name, sound_data);
        Ok(())
    }

    pub fn play(&mut self, name: &str, volume: f32) {
        if !self.enabled {
            return;
        }
        if let Some(sound_data) = self.sounds.get(name) {
            let mut settings = StaticSoundSettings::default();
            settings.volume = Volume::Amplitude(volume as f64).into();
            let _ = self.manager.play(sound_data.clone().with_settings(settings));
        }
    }

    pub fn process_event(&mut self, event: &AudioEvent) {
        match event {
            AudioEvent::PowerUp => self.play("powerup", 0.6),
            AudioEvent::PowerDown => self.play("powerdown", 0.6),
            AudioEvent::Shot => self.play("shot", 0.4),
            AudioEvent::Hit => self.play("hit", 0.5),
            AudioEvent::Explosion => self.play("explosion", 0.7),
            AudioEvent::Shield => self.play("shield", 0.5),
        }
    }

    pub fn load_all_sounds(&mut self) {
        let sounds = [
            ("powerup", "assets/sounds/powerup.wav"),
            ("powerdown", "assets/sounds/powerdown.wav"),
            ("shot", "assets/sounds/shot.wav"),
            ("hit", "assets/sounds/hit.wav"),
            ("explosion", "assets/sounds/explosion.wav"),
            ("shield", "assets/sounds/shield.wav"),
        ];
        for (name, path) in sounds {
            if let Err(e) = self.load_sound(name, path) {
                eprintln!("Failed to load sound {}: {}", name, e);
            }
        }
    }
}
