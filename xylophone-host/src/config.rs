use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

use xylophone_core::{
    sim::{InputEvent, TimedEvent},
    Mode, CHANNEL_COUNT, DEBOUNCE_THRESHOLD,
};

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Debounce threshold in ticks
    #[serde(default = "default_threshold")]
    pub threshold: u8,

    /// Number of ticks to simulate
    pub ticks: u32,

    /// Input changes, in any order
    #[serde(default)]
    pub events: Vec<EventConfig>,
}

/// A single input change. Exactly one of `press`, `release` or `mode` is set.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct EventConfig {
    pub at: u32,

    pub press: Option<usize>,

    pub release: Option<usize>,

    pub mode: Option<ModeConfig>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModeConfig {
    Direct,
    Song,
}

fn default_threshold() -> u8 {
    DEBOUNCE_THRESHOLD
}

impl EventConfig {
    fn input(&self) -> Result<InputEvent> {
        let input = match (self.press, self.release, self.mode) {
            (Some(channel), None, None) => InputEvent::Press(channel),
            (None, Some(channel), None) => InputEvent::Release(channel),
            (None, None, Some(ModeConfig::Direct)) => InputEvent::Mode(Mode::Direct),
            (None, None, Some(ModeConfig::Song)) => InputEvent::Mode(Mode::Song),
            _ => bail!(
                "event at tick {} must set exactly one of `press`, `release` or `mode`",
                self.at
            ),
        };

        if let InputEvent::Press(channel) | InputEvent::Release(channel) = input {
            if channel >= CHANNEL_COUNT {
                bail!(
                    "event at tick {} uses channel {}, but there are only {} channels",
                    self.at,
                    channel,
                    CHANNEL_COUNT
                );
            }
        }

        Ok(input)
    }
}

impl ScenarioConfig {
    /// Validates the events and orders them by time
    pub fn timeline(&self) -> Result<Vec<TimedEvent>> {
        if self.threshold == 0 {
            bail!("threshold must be at least one tick");
        }

        let mut events = self
            .events
            .iter()
            .map(|event| Ok(TimedEvent::new(event.at, event.input()?)))
            .collect::<Result<Vec<_>>>()?;

        events.sort_by_key(|event| event.at);

        Ok(events)
    }
}

pub fn parse_scenario_config(path: &Path) -> Result<ScenarioConfig> {
    if !path.exists() {
        return Err(anyhow!(
            "scenario file `{}` does not exist",
            path.display()
        ));
    }

    let config_file = std::fs::read_to_string(path)
        .with_context(|| format!("could not read file `{}`", path.display()))?;

    parse_scenario_str(&config_file)
        .with_context(|| format!("could not parse file `{}`", path.display()))
}

pub fn parse_scenario_str(text: &str) -> Result<ScenarioConfig> {
    let value = jsonc_parser::parse_to_serde_value(text, &Default::default())
        .map_err(|err| anyhow!("{}", err))?
        .ok_or_else(|| anyhow!("scenario is empty"))?;

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use xylophone_core::{
        sim::{Simulator, Timeline},
        SongBook,
    };

    #[test]
    fn parses_bundled_scenario() {
        let config = parse_scenario_str(include_str!("../scenarios/two_modes.jsonc")).unwrap();

        assert_eq!(config.threshold, 12);
        assert_eq!(config.ticks, 20_000);
        assert_eq!(config.events.len(), 6);
        assert_eq!(config.events[2].mode, Some(ModeConfig::Song));
    }

    #[test]
    fn timeline_is_sorted() {
        let config = parse_scenario_str(
            r#"{
                "ticks": 10,
                "events": [
                    { "at": 9, "release": 1 },
                    // comments are fine
                    { "at": 2, "press": 1 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.threshold, DEBOUNCE_THRESHOLD);
        assert_eq!(
            config.timeline().unwrap(),
            [
                TimedEvent::new(2, InputEvent::Press(1)),
                TimedEvent::new(9, InputEvent::Release(1)),
            ]
        );
    }

    #[test]
    fn rejects_unknown_channel() {
        let config = parse_scenario_str(r#"{ "ticks": 10, "events": [{ "at": 0, "press": 8 }] }"#)
            .unwrap();

        assert!(config.timeline().is_err());
    }

    #[test]
    fn rejects_ambiguous_event() {
        let config = parse_scenario_str(
            r#"{ "ticks": 10, "events": [{ "at": 0, "press": 1, "release": 1 }] }"#,
        )
        .unwrap();

        assert!(config.timeline().is_err());
    }

    #[test]
    fn rejects_event_without_action() {
        let config = parse_scenario_str(r#"{ "ticks": 10, "events": [{ "at": 0 }] }"#).unwrap();

        assert!(config.timeline().is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(parse_scenario_str(
            r#"{ "ticks": 10, "events": [{ "at": 0, "press": 1, "bogus": 3 }] }"#
        )
        .is_err());
        assert!(parse_scenario_str(r#"{ "ticks": 10, "tempo": 120 }"#).is_err());
    }

    #[test]
    fn runs_bundled_scenario() {
        let config = parse_scenario_str(include_str!("../scenarios/two_modes.jsonc")).unwrap();
        let events = config.timeline().unwrap();
        let simulator =
            Simulator::new(config.threshold, SongBook::builtin(), Timeline::new(&events));

        let mut out = Vec::new();
        simulator.run(config.ticks, |tick, symbol| {
            out.push((tick, symbol.to_ascii() as char))
        });

        // Button 3 in direct mode, then song 2 from button 2, then song 5 from
        // button 5 once song 2 has ended at tick 12_212
        assert_eq!(out.len(), 41);
        assert_eq!(out[0], (12, '3'));
        assert_eq!(out[1], (212, '4'));
        assert_eq!(out[21], (12_224, '1'));
    }

    #[test]
    fn rejects_zero_threshold() {
        let config = parse_scenario_str(r#"{ "threshold": 0, "ticks": 10 }"#).unwrap();

        assert!(config.timeline().is_err());
    }

    #[test]
    fn rejects_missing_ticks() {
        assert!(parse_scenario_str(r#"{ "events": [] }"#).is_err());
    }
}
