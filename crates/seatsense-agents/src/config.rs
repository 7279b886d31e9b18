//! Behavior configuration for the actor pool.
//!
//! Mirrors the `population` section of `seatsense-config.yaml`. All fields
//! have defaults matching the reference deployment.

use serde::Deserialize;

/// Parameters controlling actor spawning and behavior sampling.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BehaviorConfig {
    /// Maximum simultaneously active (non-terminal) actors.
    #[serde(default = "default_max_actors")]
    pub max_actors: u32,

    /// Delay before the first spawn, in seconds.
    #[serde(default = "default_first_spawn_delay_s")]
    pub first_spawn_delay_s: f32,

    /// Lower bound of the randomized spawn interval, in seconds.
    #[serde(default = "default_min_spawn_interval_s")]
    pub min_spawn_interval_s: f32,

    /// Upper bound of the randomized spawn interval, in seconds.
    #[serde(default = "default_max_spawn_interval_s")]
    pub max_spawn_interval_s: f32,

    /// Lower bound of sampled walk speed, in units per second.
    #[serde(default = "default_min_walk_speed")]
    pub min_walk_speed: f32,

    /// Upper bound of sampled walk speed, in units per second.
    #[serde(default = "default_max_walk_speed")]
    pub max_walk_speed: f32,

    /// Lower bound of the first study session, in seconds.
    #[serde(default = "default_min_study_s")]
    pub min_study_s: f32,

    /// Upper bound of the first study session, in seconds.
    #[serde(default = "default_max_study_s")]
    pub max_study_s: f32,

    /// Lower bound of the post-break study session, in seconds.
    #[serde(default = "default_min_second_study_s")]
    pub min_second_study_s: f32,

    /// Upper bound of the post-break study session, in seconds.
    #[serde(default = "default_max_second_study_s")]
    pub max_second_study_s: f32,

    /// Probability that an actor plans a water break.
    #[serde(default = "default_water_break_chance")]
    pub water_break_chance: f64,

    /// Probability that an actor leaves their bag behind on departure.
    #[serde(default = "default_ghost_chance")]
    pub ghost_chance: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            max_actors: default_max_actors(),
            first_spawn_delay_s: default_first_spawn_delay_s(),
            min_spawn_interval_s: default_min_spawn_interval_s(),
            max_spawn_interval_s: default_max_spawn_interval_s(),
            min_walk_speed: default_min_walk_speed(),
            max_walk_speed: default_max_walk_speed(),
            min_study_s: default_min_study_s(),
            max_study_s: default_max_study_s(),
            min_second_study_s: default_min_second_study_s(),
            max_second_study_s: default_max_second_study_s(),
            water_break_chance: default_water_break_chance(),
            ghost_chance: default_ghost_chance(),
        }
    }
}

const fn default_max_actors() -> u32 {
    7
}

const fn default_first_spawn_delay_s() -> f32 {
    2.0
}

const fn default_min_spawn_interval_s() -> f32 {
    8.0
}

const fn default_max_spawn_interval_s() -> f32 {
    18.0
}

const fn default_min_walk_speed() -> f32 {
    1.5
}

const fn default_max_walk_speed() -> f32 {
    2.2
}

const fn default_min_study_s() -> f32 {
    30.0
}

const fn default_max_study_s() -> f32 {
    90.0
}

const fn default_min_second_study_s() -> f32 {
    15.0
}

const fn default_max_second_study_s() -> f32 {
    40.0
}

const fn default_water_break_chance() -> f64 {
    0.35
}

const fn default_ghost_chance() -> f64 {
    0.20
}
