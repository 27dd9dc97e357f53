use crate::protocol::Setting;

/// Match configuration, sent once before the first hand.
///
/// `name` is the engine-assigned name of this bot. Every later player line
/// is classified as ours or the opponent's by comparing against it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    game_type: Option<String>,
    game_mode: Option<String>,
    time_bank: i64,
    time_per_move: i64,
    hands_per_level: i32,
    name: Option<String>,
}

impl Settings {
    pub fn game_type(&self) -> Option<&str> {
        self.game_type.as_deref()
    }
    pub fn game_mode(&self) -> Option<&str> {
        self.game_mode.as_deref()
    }
    pub fn time_bank(&self) -> i64 {
        self.time_bank
    }
    pub fn time_per_move(&self) -> i64 {
        self.time_per_move
    }
    pub fn hands_per_level(&self) -> i32 {
        self.hands_per_level
    }
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn apply(&mut self, setting: Setting) {
        match setting {
            Setting::GameType(value) => self.game_type = Some(value.to_string()),
            Setting::GameMode(value) => self.game_mode = Some(value.to_string()),
            Setting::TimeBank(ms) => self.time_bank = ms,
            Setting::TimePerMove(ms) => self.time_per_move = ms,
            Setting::HandsPerLevel(n) => self.hands_per_level = n,
            Setting::YourBot(name) => {
                if let Some(old) = self.name.as_deref().filter(|old| *old != name) {
                    log::warn!("renamed from ``{}'' to ``{}''", old, name);
                }
                log::info!("playing as {}", name);
                self.name = Some(name.to_string());
            }
            Setting::Unknown(key, value) => log::warn!("unknown setting {}={}", key, value),
        }
    }
}
