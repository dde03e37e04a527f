use hecs::World;

use crate::{Paddle, PaddleIntent, Side};

/// The six logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Launch,
    Restart,
}

impl Key {
    pub const ALL: [Key; 6] = [
        Key::LeftUp,
        Key::LeftDown,
        Key::RightUp,
        Key::RightDown,
        Key::Launch,
        Key::Restart,
    ];

    /// Map a key name (SDL or browser spelling) to a logical key
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "w" | "W" => Some(Key::LeftUp),
            "s" | "S" => Some(Key::LeftDown),
            "Up" | "ArrowUp" => Some(Key::RightUp),
            "Down" | "ArrowDown" => Some(Key::RightDown),
            "Space" | " " => Some(Key::Launch),
            "r" | "R" => Some(Key::Restart),
            _ => None,
        }
    }

    /// The paddle and direction a movement key drives
    pub fn movement(self) -> Option<(Side, Direction)> {
        match self {
            Key::LeftUp => Some((Side::Left, Direction::Up)),
            Key::LeftDown => Some((Side::Left, Direction::Down)),
            Key::RightUp => Some((Side::Right, Direction::Up)),
            Key::RightDown => Some((Side::Right, Direction::Down)),
            Key::Launch | Key::Restart => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Set or clear a paddle's movement flag. Non-movement keys are ignored.
pub fn apply_movement_key(world: &mut World, key: Key, held: bool) {
    let Some((side, direction)) = key.movement() else {
        return;
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side != side {
            continue;
        }
        match direction {
            Direction::Up => intent.up = held,
            Direction::Down => intent.down = held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Config};

    fn intent(world: &World, side: Side) -> PaddleIntent {
        world
            .query::<(&Paddle, &PaddleIntent)>()
            .iter()
            .find(|(_e, (p, _i))| p.side == side)
            .map(|(_e, (_p, i))| *i)
            .unwrap()
    }

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("W"), Some(Key::LeftUp));
        assert_eq!(Key::from_name("s"), Some(Key::LeftDown));
        assert_eq!(Key::from_name("Up"), Some(Key::RightUp));
        assert_eq!(Key::from_name("ArrowDown"), Some(Key::RightDown));
        assert_eq!(Key::from_name("Space"), Some(Key::Launch));
        assert_eq!(Key::from_name("R"), Some(Key::Restart));
        assert_eq!(Key::from_name("Q"), None);
    }

    #[test]
    fn test_movement_key_sets_only_its_paddle() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Left);
        create_paddle(&mut world, &config, Side::Right);

        apply_movement_key(&mut world, Key::RightDown, true);

        assert_eq!(intent(&world, Side::Right), PaddleIntent { up: false, down: true });
        assert_eq!(intent(&world, Side::Left), PaddleIntent::new());

        apply_movement_key(&mut world, Key::RightDown, false);
        assert_eq!(intent(&world, Side::Right), PaddleIntent::new());
    }

    #[test]
    fn test_non_movement_keys_ignored() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Left);

        apply_movement_key(&mut world, Key::Launch, true);
        apply_movement_key(&mut world, Key::Restart, true);

        assert_eq!(intent(&world, Side::Left), PaddleIntent::new());
    }
}
