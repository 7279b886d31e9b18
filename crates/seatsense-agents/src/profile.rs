//! Per-actor behavior parameters sampled at spawn time.

use rand::Rng;

use crate::config::BehaviorConfig;

/// Randomized parameters fixed for an actor's whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorProfile {
    /// Walking speed in units per second.
    pub walk_speed: f32,
    /// Length of the first study session, in seconds.
    pub study_duration: f32,
    /// Length of the post-break study session, in seconds.
    pub second_study_duration: f32,
    /// Whether the actor will take a water break mid-session.
    pub will_take_water_break: bool,
    /// Whether the actor will leave their bag behind on departure.
    pub will_ghost_leave: bool,
}

impl ActorProfile {
    /// Sample a profile from the behavior configuration.
    pub fn sample(rng: &mut impl Rng, config: &BehaviorConfig) -> Self {
        Self {
            walk_speed: rng.random_range(config.min_walk_speed..=config.max_walk_speed),
            study_duration: rng.random_range(config.min_study_s..=config.max_study_s),
            second_study_duration: rng
                .random_range(config.min_second_study_s..=config.max_second_study_s),
            will_take_water_break: rng.random_bool(config.water_break_chance),
            will_ghost_leave: rng.random_bool(config.ghost_chance),
        }
    }

    /// One-line behavior summary for spawn logging, e.g.
    /// `"will take water break + GHOST"`.
    pub fn behavior_summary(&self) -> String {
        let mut summary = if self.will_take_water_break {
            String::from("will take water break")
        } else {
            String::from("straight study")
        };
        if self.will_ghost_leave {
            summary.push_str(" + GHOST");
        }
        summary
    }
}
