// src/update.rs
//
// Reducer for a particle field. Pure with respect to the DOM: every browser
// side effect is returned as a `Command` and executed by the ui layer.
//
use crate::canvas::background::{seed_particles, step_all, Particle};
use crate::debug_log;
use crate::messages::{Command, Message};
use crate::state::{FieldState, Phase};

pub fn update(state: &mut FieldState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    match (state.phase, msg) {
        (Phase::Stopped, Message::Mount { width, height }) => {
            if state.torn_down {
                debug_log!("[particles] mount ignored: field already torn down");
                return commands;
            }
            reseed(state, width, height);
            state.phase = Phase::Running;
            state.frame = 0;
            debug_log!(
                "[particles] mounted {}x{} with {} particles",
                state.width,
                state.height,
                state.particles.len()
            );
            commands.push(Command::ResizeCanvas {
                width: state.width,
                height: state.height,
            });
            commands.push(Command::Redraw);
            commands.push(Command::ScheduleFrame);
        }

        // Nothing reaches a stopped field: stale listeners or an in-flight
        // frame must not touch the particles.
        (Phase::Stopped, _) => {}

        (Phase::Running, Message::Mount { .. }) => {
            debug_log!("[particles] mount ignored: already running");
        }

        (Phase::Running, Message::Teardown) => {
            state.phase = Phase::Stopped;
            state.torn_down = true;
            state.pointer = None;
            debug_log!("[particles] teardown after {} frames", state.frame);
            commands.push(Command::CancelFrame);
            commands.push(Command::DetachListeners);
        }

        (Phase::Running, Message::Resize { width, height }) => {
            reseed(state, width, height);
            debug_log!("[particles] resized to {}x{}", state.width, state.height);
            commands.push(Command::ResizeCanvas {
                width: state.width,
                height: state.height,
            });
            commands.push(Command::Redraw);
        }

        (Phase::Running, Message::PointerMove { x, y }) => {
            state.pointer = Some((x, y));
        }

        (Phase::Running, Message::PointerLeave) => {
            state.pointer = None;
        }

        (Phase::Running, Message::PointerPress { x, y }) => {
            if !state.config.spawn_on_press {
                return commands;
            }
            if let Some(cap) = state.config.max_particles {
                if state.particles.len() >= cap {
                    return commands;
                }
            }
            let particle = Particle::at(&mut state.rng, x, y, &state.config);
            state.particles.push(particle);
        }

        (Phase::Running, Message::AnimationTick) => {
            let forces = state.forces();
            step_all(&mut state.particles, &forces);
            state.frame += 1;
            commands.push(Command::Redraw);
            commands.push(Command::ScheduleFrame);
        }
    }

    commands
}

/// Resynchronize the surface and replace the population.
fn reseed(state: &mut FieldState, width: f64, height: f64) {
    state.set_surface(width, height);
    state.particles = seed_particles(&mut state.rng, state.width, state.height, &state.config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;

    fn seeded(count: usize) -> FieldConfig {
        FieldConfig {
            particle_count: count,
            seed: Some(42),
            ..FieldConfig::default()
        }
    }

    fn in_bounds(state: &FieldState) -> bool {
        state.particles.iter().all(|p| {
            p.x >= p.radius
                && p.x <= state.width - p.radius
                && p.y >= p.radius
                && p.y <= state.height - p.radius
        })
    }

    #[test]
    fn mount_seeds_and_starts_loop() {
        let mut state = FieldState::new(seeded(200));
        assert_eq!(state.phase, Phase::Stopped);

        let cmds = state.dispatch(Message::Mount {
            width: 1024.0,
            height: 768.0,
        });

        assert!(state.is_running());
        assert_eq!(state.particles.len(), 200);
        assert_eq!(state.anchor, (512.0, 384.0));
        assert!(cmds.contains(&Command::ScheduleFrame));
        assert!(cmds.contains(&Command::ResizeCanvas {
            width: 1024.0,
            height: 768.0
        }));
    }

    #[test]
    fn tick_keeps_everything_in_bounds() {
        let mut state = FieldState::mounted(seeded(200), 640.0, 480.0);
        state.dispatch(Message::PointerMove { x: 320.0, y: 240.0 });
        for _ in 0..120 {
            let cmds = state.dispatch(Message::AnimationTick);
            assert_eq!(cmds, vec![Command::Redraw, Command::ScheduleFrame]);
            assert!(in_bounds(&state));
        }
        assert_eq!(state.frame, 120);
    }

    #[test]
    fn resize_reseeds_exactly_n_inside_new_bounds() {
        let mut state = FieldState::mounted(
            FieldConfig {
                spawn_on_press: true,
                ..seeded(200)
            },
            1920.0,
            1080.0,
        );
        state.dispatch(Message::PointerPress { x: 10.0, y: 10.0 });
        assert_eq!(state.particles.len(), 201);

        state.dispatch(Message::Resize {
            width: 400.0,
            height: 300.0,
        });

        assert_eq!(state.particles.len(), 200);
        assert_eq!(state.anchor, (200.0, 150.0));
        assert!(state
            .particles
            .iter()
            .all(|p| (0.0..400.0).contains(&p.x) && (0.0..300.0).contains(&p.y)));

        state.dispatch(Message::AnimationTick);
        assert!(in_bounds(&state));
    }

    #[test]
    fn press_appends_particle_at_pointer() {
        let mut state = FieldState::mounted(
            FieldConfig {
                spawn_on_press: true,
                ..seeded(10)
            },
            800.0,
            600.0,
        );

        state.dispatch(Message::PointerPress { x: 123.0, y: 456.0 });

        assert_eq!(state.particles.len(), 11);
        let added = state.particles.last().unwrap();
        assert_eq!((added.x, added.y), (123.0, 456.0));
        assert!(state.config.palette.contains(&added.color));
    }

    #[test]
    fn press_is_ignored_without_spawn_on_press() {
        let mut state = FieldState::mounted(seeded(10), 800.0, 600.0);
        state.dispatch(Message::PointerPress { x: 1.0, y: 1.0 });
        assert_eq!(state.particles.len(), 10);
    }

    #[test]
    fn press_respects_particle_cap() {
        let mut state = FieldState::mounted(
            FieldConfig {
                spawn_on_press: true,
                max_particles: Some(11),
                ..seeded(10)
            },
            800.0,
            600.0,
        );
        state.dispatch(Message::PointerPress { x: 5.0, y: 5.0 });
        state.dispatch(Message::PointerPress { x: 6.0, y: 6.0 });
        assert_eq!(state.particles.len(), 11);
    }

    #[test]
    fn pointer_move_overwrites_and_leave_clears() {
        let mut state = FieldState::mounted(seeded(1), 100.0, 100.0);
        state.dispatch(Message::PointerMove { x: 1.0, y: 2.0 });
        state.dispatch(Message::PointerMove { x: 3.0, y: 4.0 });
        assert_eq!(state.pointer, Some((3.0, 4.0)));
        state.dispatch(Message::PointerLeave);
        assert_eq!(state.pointer, None);
    }

    #[test]
    fn teardown_stops_and_detaches() {
        let mut state = FieldState::mounted(seeded(5), 100.0, 100.0);
        let cmds = state.dispatch(Message::Teardown);
        assert_eq!(state.phase, Phase::Stopped);
        assert_eq!(cmds, vec![Command::CancelFrame, Command::DetachListeners]);
    }

    #[test]
    fn stale_events_after_teardown_do_not_mutate() {
        let mut state = FieldState::mounted(
            FieldConfig {
                spawn_on_press: true,
                ..seeded(20)
            },
            300.0,
            200.0,
        );
        state.dispatch(Message::PointerMove { x: 150.0, y: 100.0 });
        state.dispatch(Message::Teardown);
        let snapshot = state.particles.clone();

        let stale = [
            Message::AnimationTick,
            Message::PointerMove { x: 10.0, y: 10.0 },
            Message::PointerPress { x: 10.0, y: 10.0 },
            Message::Resize {
                width: 50.0,
                height: 50.0,
            },
            Message::Mount {
                width: 50.0,
                height: 50.0,
            },
        ];
        for msg in stale {
            assert!(state.dispatch(msg).is_empty());
        }

        assert_eq!(state.particles, snapshot);
        assert_eq!((state.width, state.height), (300.0, 200.0));
        assert_eq!(state.pointer, None);
        assert!(!state.is_running());
    }

    #[test]
    fn messages_before_mount_are_ignored() {
        let mut state = FieldState::new(seeded(3));
        assert!(state.dispatch(Message::AnimationTick).is_empty());
        assert!(state.dispatch(Message::PointerMove { x: 1.0, y: 1.0 }).is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.pointer, None);
    }
}
