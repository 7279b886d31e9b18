//! The actor behavior state machine.
//!
//! Each actor runs the same script: enter, walk to the assigned seat, sit,
//! lay out belongings, study, optionally fetch water and study again, pack
//! up, and leave. The machine is driven by [`Actor::tick`] from the global
//! simulation loop; an actor never mutates anything but itself.
//!
//! State timing mirrors the physical pacing of a person: a short settle-in
//! dwell on spawn, 1.0 s to sit, 0.7 s to stand, 4.0 s at the cooler, and
//! staged placement/packing of the bag, laptop, and books.

use rand::Rng;
use seatsense_types::{ActorId, ActorState, Point3, SeatId, smoothstep};
use seatsense_world::{RoomPlan, SeatRegistry};
use tracing::{debug, warn};

use crate::path;
use crate::profile::ActorProfile;

/// Settle-in dwell after spawning, before pathing begins.
const SPAWN_DWELL_S: f32 = 0.3;

/// Distance at which a waypoint counts as reached.
const ARRIVAL_TOLERANCE: f32 = 0.15;

/// Duration of the standing-to-seated interpolation.
const SIT_DURATION_S: f32 = 1.0;

/// Duration of the seated-to-standing interpolation.
const STAND_DURATION_S: f32 = 0.7;

/// Dwell at the water cooler.
const DRINK_DURATION_S: f32 = 4.0;

/// Where one of an actor's belongings currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemSpot {
    /// On the actor's body.
    Carried,
    /// Resting at a fixed position in the room.
    Placed(Point3),
}

impl ItemSpot {
    /// The item's room position, if it has been set down.
    pub const fn placed_at(self) -> Option<Point3> {
        match self {
            Self::Carried => None,
            Self::Placed(p) => Some(p),
        }
    }
}

/// The three belongings every actor carries in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Belongings {
    /// The backpack; dropped beside the chair, and the one item a ghost
    /// leaver abandons.
    pub bag: ItemSpot,
    /// The laptop; placed on the desk.
    pub laptop: ItemSpot,
    /// The book stack; placed on the desk.
    pub books: ItemSpot,
}

impl Belongings {
    const fn all_carried() -> Self {
        Self {
            bag: ItemSpot::Carried,
            laptop: ItemSpot::Carried,
            books: ItemSpot::Carried,
        }
    }
}

/// A simulated occupant working through the behavior script.
#[derive(Debug, Clone)]
pub struct Actor {
    id: ActorId,
    seat_id: SeatId,
    profile: ActorProfile,
    state: ActorState,
    /// Seconds spent in the current state.
    timer: f32,
    position: Point3,
    waypoints: Vec<Point3>,
    waypoint_index: usize,
    /// Chair position from the seat catalog.
    chair_point: Point3,
    /// Floor position in front of the chair (standing pose).
    stand_point: Point3,
    /// Floor position of the seated pose.
    seat_point: Point3,
    belongings: Belongings,
    /// Whether the belongings have been laid out (the `Place` stage ran).
    placed: bool,
}

impl Actor {
    /// Create an actor assigned to `seat_id`, positioned at the entrance.
    ///
    /// If the seat id is not in the registry the actor fails fast to
    /// [`ActorState::Done`] without ever entering the room; the pool will
    /// retire it on the next tick.
    pub fn spawn(
        id: ActorId,
        seat_id: SeatId,
        profile: ActorProfile,
        registry: &SeatRegistry,
        plan: &RoomPlan,
        rng: &mut impl Rng,
    ) -> Self {
        let entry = plan.entry_point();
        let position = Point3::new(entry.x + rng.random_range(-0.5..=0.5), 0.0, entry.z);

        let Some(seat) = registry.seat(&seat_id) else {
            warn!(actor_id = %id, seat_id = %seat_id, "Assigned seat not in registry, retiring actor");
            return Self {
                id,
                seat_id,
                profile,
                state: ActorState::Done,
                timer: 0.0,
                position,
                waypoints: Vec::new(),
                waypoint_index: 0,
                chair_point: Point3::ZERO,
                stand_point: Point3::ZERO,
                seat_point: Point3::ZERO,
                belongings: Belongings::all_carried(),
                placed: false,
            };
        };

        let chair_point = seat.position;
        let stand_point = Point3::new(chair_point.x, 0.0, chair_point.z);
        // Seated pose: a small shift toward the desk.
        let seat_point = Point3::new(chair_point.x, 0.0, chair_point.z - 0.08);

        Self {
            id,
            seat_id,
            profile,
            state: ActorState::Spawn,
            timer: 0.0,
            position,
            waypoints: path::route_to_seat(plan, &chair_point),
            waypoint_index: 0,
            chair_point,
            stand_point,
            seat_point,
            belongings: Belongings::all_carried(),
            placed: false,
        }
    }

    /// Advance the state machine by `dt` seconds.
    pub fn tick(&mut self, dt: f32, rng: &mut impl Rng, plan: &RoomPlan) {
        self.timer += dt;
        match self.state {
            ActorState::Spawn => {
                if self.timer > SPAWN_DWELL_S {
                    self.transition(ActorState::WalkToSeat);
                }
            }
            ActorState::WalkToSeat
            | ActorState::WalkToCooler
            | ActorState::WalkBack
            | ActorState::WalkOut => self.walk(dt),
            ActorState::Sit | ActorState::Sit2 => self.sit(),
            ActorState::Place => self.place(),
            ActorState::Study => {
                if self.timer >= self.profile.study_duration {
                    let next = if self.profile.will_take_water_break {
                        ActorState::Stand
                    } else {
                        ActorState::Pack
                    };
                    self.transition(next);
                }
            }
            ActorState::Stand | ActorState::Stand2 => self.stand(rng, plan),
            ActorState::Drink => {
                if self.timer >= DRINK_DURATION_S {
                    self.set_route(path::route_back(plan, &self.chair_point));
                    self.transition(ActorState::WalkBack);
                }
            }
            ActorState::Study2 => {
                if self.timer >= self.profile.second_study_duration {
                    self.transition(ActorState::Pack);
                }
            }
            ActorState::Pack => self.pack(),
            ActorState::Done => {}
        }
    }

    /// Move along the current waypoint route.
    fn walk(&mut self, dt: f32) {
        let Some(target) = self.waypoints.get(self.waypoint_index).copied() else {
            self.walk_done();
            return;
        };

        if self.position.xz_distance(&target) > ARRIVAL_TOLERANCE {
            let step = self.profile.walk_speed * dt;
            self.position = self.position.stepped_toward_xz(&target, step);
        } else {
            self.position = Point3::new(target.x, 0.0, target.z);
            self.waypoint_index = self.waypoint_index.saturating_add(1);
        }
    }

    /// Route finished: transition per the walking context.
    fn walk_done(&mut self) {
        match self.state {
            ActorState::WalkToSeat => {
                self.prepare_sit();
                self.transition(ActorState::Sit);
            }
            ActorState::WalkToCooler => self.transition(ActorState::Drink),
            ActorState::WalkBack => {
                self.prepare_sit();
                self.transition(ActorState::Sit2);
            }
            ActorState::WalkOut => self.transition(ActorState::Done),
            // walk() only runs in the four walking states.
            _ => {}
        }
    }

    /// Snap to the standing spot in front of the chair before sitting.
    fn prepare_sit(&mut self) {
        self.position = self.stand_point;
    }

    /// Interpolate from standing to seated over [`SIT_DURATION_S`].
    fn sit(&mut self) {
        let t = smoothstep(self.timer / SIT_DURATION_S);
        self.position = self.stand_point.lerp(&self.seat_point, t);
        if self.timer >= SIT_DURATION_S {
            let next = if self.state == ActorState::Sit {
                if self.placed {
                    ActorState::Study
                } else {
                    ActorState::Place
                }
            } else {
                ActorState::Study2
            };
            self.transition(next);
        }
    }

    /// Interpolate from seated to standing, then head for the cooler or
    /// the exit.
    fn stand(&mut self, rng: &mut impl Rng, plan: &RoomPlan) {
        let t = smoothstep(self.timer / STAND_DURATION_S);
        self.position = self.seat_point.lerp(&self.stand_point, t);
        if self.timer >= STAND_DURATION_S {
            if self.state == ActorState::Stand {
                self.set_route(path::route_to_cooler(plan, &self.chair_point, rng));
                self.transition(ActorState::WalkToCooler);
            } else {
                self.set_route(path::route_out(plan, &self.chair_point));
                self.transition(ActorState::WalkOut);
            }
        }
    }

    /// Staged reveal of belongings: bag on the floor at +0.3 s, laptop on
    /// the desk at +0.8 s, books at +1.3 s, then study begins.
    fn place(&mut self) {
        if self.timer > 0.3 && self.belongings.bag == ItemSpot::Carried {
            self.belongings.bag = ItemSpot::Placed(self.bag_drop_point());
        }
        if self.timer > 0.8 && self.belongings.laptop == ItemSpot::Carried {
            self.belongings.laptop = ItemSpot::Placed(self.desk_point());
        }
        if self.timer > 1.3 && self.belongings.books == ItemSpot::Carried {
            self.belongings.books = ItemSpot::Placed(self.books_point());
            self.placed = true;
            self.transition(ActorState::Study);
        }
    }

    /// Staged re-attachment of belongings before leaving.
    ///
    /// A ghost leaver picks up the laptop and books but shifts the bag
    /// onto the chair instead of shouldering it; the bag stays behind
    /// permanently.
    fn pack(&mut self) {
        if self.timer > 0.3 && self.belongings.laptop != ItemSpot::Carried {
            self.belongings.laptop = ItemSpot::Carried;
        }
        if self.timer > 0.6 && self.belongings.books != ItemSpot::Carried {
            self.belongings.books = ItemSpot::Carried;
        }
        if self.profile.will_ghost_leave {
            if self.timer > 0.8 {
                if let ItemSpot::Placed(_) = self.belongings.bag {
                    self.belongings.bag = ItemSpot::Placed(Point3::new(
                        self.chair_point.x,
                        0.48,
                        self.chair_point.z,
                    ));
                }
            }
            if self.timer > 1.0 {
                self.transition(ActorState::Stand2);
            }
        } else {
            if self.timer > 0.9 && self.belongings.bag != ItemSpot::Carried {
                self.belongings.bag = ItemSpot::Carried;
            }
            if self.timer > 1.2 {
                self.transition(ActorState::Stand2);
            }
        }
    }

    /// Enter `next` and reset the state timer.
    fn transition(&mut self, next: ActorState) {
        debug!(actor_id = %self.id, from = ?self.state, to = ?next, "Actor transition");
        self.state = next;
        self.timer = 0.0;
    }

    /// Replace the waypoint route and restart traversal.
    fn set_route(&mut self, waypoints: Vec<Point3>) {
        self.waypoints = waypoints;
        self.waypoint_index = 0;
    }

    /// Where the bag is dropped during `Place`: on the floor beside the
    /// chair.
    fn bag_drop_point(&self) -> Point3 {
        Point3::new(self.chair_point.x + 0.45, 0.15, self.chair_point.z)
    }

    /// Desk surface in front of the chair.
    fn desk_point(&self) -> Point3 {
        Point3::new(self.chair_point.x, 0.78, self.chair_point.z - 0.55)
    }

    /// Book stack position: beside the laptop.
    fn books_point(&self) -> Point3 {
        Point3::new(self.chair_point.x + 0.24, 0.78, self.chair_point.z - 0.55)
    }

    /// The actor's unique id.
    pub const fn id(&self) -> ActorId {
        self.id
    }

    /// The reserved seat.
    pub const fn seat_id(&self) -> &SeatId {
        &self.seat_id
    }

    /// Current behavioral state.
    pub const fn state(&self) -> ActorState {
        self.state
    }

    /// Current room position.
    pub const fn position(&self) -> Point3 {
        self.position
    }

    /// The sampled behavior profile.
    pub const fn profile(&self) -> &ActorProfile {
        &self.profile
    }

    /// The bag's room position, if it is currently set down.
    pub const fn bag_position(&self) -> Option<Point3> {
        self.belongings.bag.placed_at()
    }

    /// Current placement of all three belongings.
    pub const fn belongings(&self) -> &Belongings {
        &self.belongings
    }
}
