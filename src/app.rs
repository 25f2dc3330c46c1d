//! Application loop
//!
//! Turns raw host events into world ticks. Every event is an [`Action`]
//! folded into the current [`Session`] by the pure [`update`] reducer; the
//! [`App`] wrapper owns the session, derives frame times and hands each new
//! session to a [`Renderer`].
//!
//! Screen convention: y grows downward, so `Key::Up` moves toward -y.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Vector};
use crate::settings::SimSettings;
use crate::sim::{TickError, TickInput, World, tick};

/// Movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    pub fn direction(self) -> Vector {
        match self {
            Key::Up => Vector::new(0.0, -1.0),
            Key::Down => Vector::new(0.0, 1.0),
            Key::Left => Vector::new(-1.0, 0.0),
            Key::Right => Vector::new(1.0, 0.0),
        }
    }
}

/// One event from the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    KeyDown(Key),
    KeyUp(Key),
    PointerMove(Point),
    /// Attack trigger
    PointerDown,
    /// Frame boundary; advances the world
    Tick { elapsed_ms: f64 },
}

/// World plus the input state accumulated between ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub world: World,
    pub held: BTreeSet<Key>,
    pub pointer: Option<Point>,
    /// Set by `PointerDown`, consumed by the next tick
    pub attack_pending: bool,
}

impl Session {
    pub fn new(world: World) -> Self {
        Self {
            world,
            held: BTreeSet::new(),
            pointer: None,
            attack_pending: false,
        }
    }

    /// Sum of held key directions; opposite keys cancel
    pub fn direction(&self) -> Vector {
        self.held.iter().map(|key| key.direction()).sum()
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            direction: self.direction(),
            pointer: self.pointer,
            attack: self.attack_pending,
        }
    }
}

/// Fold one action into a session, producing the next session
pub fn update(
    session: &Session,
    action: &Action,
    settings: &SimSettings,
) -> Result<Session, TickError> {
    let mut next = session.clone();
    match *action {
        Action::KeyDown(key) => {
            next.held.insert(key);
        }
        Action::KeyUp(key) => {
            next.held.remove(&key);
        }
        Action::PointerMove(p) => next.pointer = Some(p),
        Action::PointerDown => next.attack_pending = true,
        Action::Tick { elapsed_ms } => {
            next.world = tick(&session.world, &session.tick_input(), elapsed_ms, settings)?;
            next.attack_pending = false;
        }
    }
    Ok(next)
}

/// Presentation side of the loop
pub trait Renderer {
    fn render(&mut self, session: &Session);
}

/// Drives a session frame by frame
pub struct App<R: Renderer> {
    session: Session,
    settings: SimSettings,
    renderer: R,
    /// Host timestamp of the previous frame
    last_frame_ms: f64,
}

impl<R: Renderer> App<R> {
    /// Renders the initial session once
    pub fn new(session: Session, settings: SimSettings, mut renderer: R) -> Self {
        renderer.render(&session);
        Self {
            session,
            settings,
            renderer,
            last_frame_ms: 0.0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn dispatch(&mut self, action: Action) -> Result<(), TickError> {
        self.session = update(&self.session, &action, &self.settings)?;
        Ok(())
    }

    /// Advance to host time `ms_from_start` and render
    pub fn frame(&mut self, ms_from_start: f64) -> Result<(), TickError> {
        let elapsed_ms = ms_from_start - self.last_frame_ms;
        self.dispatch(Action::Tick { elapsed_ms })?;
        self.last_frame_ms = ms_from_start;
        self.renderer.render(&self.session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Size;
    use crate::sim::Body;

    fn session() -> Session {
        let player = Body::new(Point::new(10.0, 10.0), Size::square(2.0), Vector::new(1.0, 0.0));
        Session::new(World::new(player, Vec::new(), Vec::new()))
    }

    #[derive(Default)]
    struct CountingRenderer {
        frames: usize,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, _session: &Session) {
            self.frames += 1;
        }
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let s = SimSettings::default();
        let mut state = session();
        for action in [Action::KeyDown(Key::Left), Action::KeyDown(Key::Right)] {
            state = update(&state, &action, &s).unwrap();
        }
        assert_eq!(state.direction(), Vector::ZERO);

        state = update(&state, &Action::KeyDown(Key::Up), &s).unwrap();
        assert_eq!(state.direction(), Vector::new(0.0, -1.0));

        state = update(&state, &Action::KeyUp(Key::Left), &s).unwrap();
        assert_eq!(state.direction(), Vector::new(1.0, -1.0));
    }

    #[test]
    fn test_input_events_do_not_advance_world() {
        let s = SimSettings::default();
        let before = session();
        let after = update(&before, &Action::KeyDown(Key::Down), &s).unwrap();
        assert_eq!(after.world, before.world);
    }

    #[test]
    fn test_attack_edge_consumed_by_tick() {
        let s = SimSettings::default();
        let mut state = update(&session(), &Action::PointerDown, &s).unwrap();
        assert!(state.attack_pending);
        state = update(&state, &Action::Tick { elapsed_ms: 4.0 }, &s).unwrap();
        assert!(!state.attack_pending);
        assert!(state.world.is_attacking());
    }

    #[test]
    fn test_frame_uses_elapsed_between_timestamps() {
        let s = SimSettings {
            player_speed: 0.1,
            ..Default::default()
        };
        let mut app = App::new(session(), s, CountingRenderer::default());
        assert_eq!(app.renderer().frames, 1);

        app.dispatch(Action::KeyDown(Key::Right)).unwrap();
        app.frame(20.0).unwrap();
        app.frame(60.0).unwrap();

        assert_eq!(app.renderer().frames, 3);
        assert_eq!(app.session().world.elapsed_ms, 60.0);
        assert!(app.session().world.player.center().approx_eq(Point::new(16.0, 10.0)));
    }

    #[test]
    fn test_pointer_turns_player() {
        let s = SimSettings::default();
        let mut app = App::new(session(), s, CountingRenderer::default());
        app.dispatch(Action::PointerMove(Point::new(10.0, 0.0))).unwrap();
        app.frame(4.0).unwrap();
        let facing = app.session().world.player.facing;
        assert!(facing.normalize().unwrap().approx_eq(Vector::new(0.0, -1.0)));
    }

    #[test]
    fn test_invalid_settings_fail_the_frame() {
        let s = SimSettings {
            planck_space: 0.0,
            ..Default::default()
        };
        let mut app = App::new(session(), s, CountingRenderer::default());
        app.dispatch(Action::KeyDown(Key::Right)).unwrap();
        assert!(matches!(app.frame(16.0), Err(TickError::Settings(_))));
        assert_eq!(app.session().world.elapsed_ms, 0.0);
        assert_eq!(app.renderer().frames, 1);
    }
}
