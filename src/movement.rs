use crate::config::MovementConfig;
use crate::input::Intents;
use crate::map::GridMap;
use crate::player::PlayerState;
use glam::Vec2;

/// Which axes were rejected by collision during a tick.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct MoveOutcome {
    pub blocked_x: bool,
    pub blocked_y: bool,
}

impl MoveOutcome {
    fn merge(self, other: Self) -> Self {
        Self {
            blocked_x: self.blocked_x || other.blocked_x,
            blocked_y: self.blocked_y || other.blocked_y,
        }
    }
}

/// Advance the player by one tick.
///
/// Turning is applied before translation. Forward and backward are checked
/// independently, so holding both moves forward and then back from the
/// updated position.
pub fn advance(
    player: &mut PlayerState,
    map: &GridMap,
    intents: &Intents,
    config: &MovementConfig,
) -> MoveOutcome {
    if intents.turn_left {
        player.turn(-config.turn_increment);
    }
    if intents.turn_right {
        player.turn(config.turn_increment);
    }

    let mut outcome = MoveOutcome::default();
    if intents.forward {
        outcome = outcome.merge(translate(player, map, player.velocity()));
    }
    if intents.backward {
        outcome = outcome.merge(translate(player, map, -player.velocity()));
    }

    outcome
}

/// Move by `step`, resolving each axis against the map on its own so the
/// player slides along walls.
fn translate(player: &mut PlayerState, map: &GridMap, step: Vec2) -> MoveOutcome {
    let pos = player.pos();
    let candidate = pos + step;

    let blocked_x = map.is_wall(Vec2::new(candidate.x, pos.y));
    let blocked_y = map.is_wall(Vec2::new(pos.x, candidate.y));

    let next = Vec2::new(
        if blocked_x { pos.x } else { candidate.x },
        if blocked_y { pos.y } else { candidate.y },
    );
    if blocked_x || blocked_y {
        log::trace!("move {pos} -> {candidate} blocked (x: {blocked_x}, y: {blocked_y})");
    }
    player.set_pos(next);

    MoveOutcome {
        blocked_x,
        blocked_y,
    }
}

#[cfg(test)]
#[path = "movement_test.rs"]
mod tests;
