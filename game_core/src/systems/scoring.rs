use crate::{Ball, Config, Events, GameMap, MatchState, Side};
use hecs::World;

/// Check if ball left the arena (scoring)
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    state: &mut MatchState,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let bounds = ball.bounds(config.ball_radius);
        let scorer = if bounds.left() < 0.0 {
            Side::Right
        } else if bounds.right() > map.width {
            Side::Left
        } else {
            continue;
        };

        state.score.increment(scorer);
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        tracing::debug!(
            scorer = scorer.name(),
            left = state.score.left,
            right = state.score.right,
            "point scored"
        );

        ball.reset(map.ball_spawn());
        state.started = false;
    }
}

/// End the match once a side reaches the winning score.
///
/// Runs every tick; the match-won event is raised only the first time.
pub fn check_match_over(world: &mut World, state: &mut MatchState, events: &mut Events) {
    let Some(winner) = state.winner() else {
        return;
    };

    state.over = true;
    state.started = false;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = glam::Vec2::ZERO;
    }

    if !state.win_sound_played {
        state.win_sound_played = true;
        events.match_won = true;
        tracing::info!(
            winner = winner.name(),
            left = state.score.left,
            right = state.score.right,
            "match won"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Ball, Config, Events, GameMap, MatchState};
    use glam::Vec2;

    fn setup_world() -> (World, Config, GameMap, MatchState, Events) {
        let config = Config::new();
        let map = config.map();
        let mut state = MatchState::new(config.win_score);
        state.started = true;
        (World::new(), config, map, state, Events::new())
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .unwrap()
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, map, mut state, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(8.0, 300.0), Vec2::new(-4.0, 4.0));

        check_scoring(&mut world, &map, &config, &mut state, &mut events);

        assert_eq!(state.score.right, 1, "Right player should score");
        assert_eq!(state.score.left, 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");
        assert!(!state.started);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, map, mut state, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(792.0, 300.0), Vec2::new(4.0, 4.0));

        check_scoring(&mut world, &map, &config, &mut state, &mut events);

        assert_eq!(state.score.left, 1, "Left player should score");
        assert_eq!(state.score.right, 0, "Right player should not score");
        assert!(events.left_scored, "Should trigger left_scored event");
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, map, mut state, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(8.0, 120.0), Vec2::new(-4.0, -4.0));

        check_scoring(&mut world, &map, &config, &mut state, &mut events);

        let ball = ball(&world);
        assert_eq!(ball.pos, map.ball_spawn(), "Ball should reset to center");
        assert_eq!(ball.vel, Vec2::ZERO, "Ball waits for the next launch");
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, map, mut state, mut events) = setup_world();
        // Touching the edge is still in bounds
        create_ball(&mut world, Vec2::new(10.0, 300.0), Vec2::new(-4.0, 4.0));

        check_scoring(&mut world, &map, &config, &mut state, &mut events);

        assert_eq!(state.score, crate::Score::new(), "No score when ball in bounds");
        assert!(!events.left_scored && !events.right_scored, "No scoring events");
        assert!(state.started);
    }

    #[test]
    fn test_match_over_at_threshold() {
        let (mut world, _config, _map, mut state, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(4.0, 4.0));
        state.score.right = state.max_points;

        check_match_over(&mut world, &mut state, &mut events);

        assert!(state.over);
        assert!(!state.started);
        assert!(state.win_sound_played);
        assert!(events.match_won);
        assert_eq!(ball(&world).vel, Vec2::ZERO);
    }

    #[test]
    fn test_match_won_event_raised_once() {
        let (mut world, _config, _map, mut state, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::ZERO);
        state.score.left = state.max_points;

        check_match_over(&mut world, &mut state, &mut events);
        assert!(events.match_won);

        events.clear();
        check_match_over(&mut world, &mut state, &mut events);
        assert!(!events.match_won, "Applause plays only once per match");
        assert!(state.over);
    }

    #[test]
    fn test_match_not_over_below_threshold() {
        let (mut world, _config, _map, mut state, mut events) = setup_world();
        state.score.left = state.max_points - 1;
        state.score.right = state.max_points - 1;

        check_match_over(&mut world, &mut state, &mut events);

        assert!(!state.over);
        assert!(!events.match_won);
    }
}
