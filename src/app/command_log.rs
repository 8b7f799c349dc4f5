//! Begrenzter Verlauf der vom Controller ausgeführten Commands.

use super::AppCommand;

/// Obergrenze, ab der die ältere Hälfte verworfen wird
const CAPACITY: usize = 1000;

/// Ausgeführte Commands in Ausführungsreihenfolge
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    /// Leerer Verlauf
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Command an, bei voller Kapazität fällt die ältere Hälfte weg
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= CAPACITY {
            self.entries.drain(..CAPACITY / 2);
        }
        self.entries.push(command.clone());
    }

    /// Verlauf, ältester Eintrag zuerst
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
