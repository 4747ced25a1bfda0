use mathsprint::board::Board;
use mathsprint::display::Screen;
use mathsprint::game::{GameController, GameState, GameSummary, Outcome, Rules};
use rand::{rngs::StdRng, SeedableRng};

type Game = GameController<Board, StdRng>;

fn new_game(seed: u64) -> Game {
    GameController::new(Board::default(), StdRng::seed_from_u64(seed), Rules::default())
}

fn submit(game: &mut Game, answer: u32) {
    for c in answer.to_string().chars() {
        game.enter_digit(c);
    }
    game.submit_answer();
}

fn correct(game: &Game) -> u32 {
    game.current_question().unwrap().correct_answer()
}

#[test]
fn full_session_wrong_then_right_then_timeout() {
    let mut game = new_game(5);
    assert_eq!(game.state(), GameState::Idle);

    game.start();
    let first = *game.current_question().unwrap();
    assert_eq!(first.level(), 1);
    assert_eq!(game.timer_remaining(), Some(30));
    assert_eq!(game.display().timer, "00:30");
    assert_eq!(game.display().question, first.text());

    let wrong = correct(&game) + 3;
    submit(&mut game, wrong);
    assert_eq!(game.current_question(), Some(&first));
    assert!(game.session().pending_input.is_empty());
    assert_eq!(game.display().answer, "");
    assert_eq!(game.session().score, 0);

    let right = correct(&game);
    game.tick();
    submit(&mut game, right);
    assert_eq!(game.session().score, 10);
    assert_eq!(game.session().correct_count, 1);
    assert_eq!(game.timer_remaining(), Some(30));
    assert_eq!(game.display().score, 10);

    for _ in 0..30 {
        game.tick();
    }

    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.display().screen, Screen::Finished);
    assert!(!game.display().input_enabled);
    assert_eq!(
        game.display().summary,
        Some(GameSummary {
            score: 10,
            level: 1,
            correct_count: 1,
            outcome: Outcome::TimeUp,
        })
    );
}

#[test]
fn levels_advance_at_five_ten_and_finish_at_fifteen() {
    let mut game = new_game(77);
    game.start();

    let mut levels = Vec::new();
    for _ in 0..15 {
        let answer = correct(&game);
        submit(&mut game, answer);
        levels.push(game.session().level);
    }

    assert_eq!(&levels[..4], &[1, 1, 1, 1]);
    assert_eq!(levels[4], 2);
    assert_eq!(levels[9], 3);
    assert_eq!(levels[14], 3);
    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(
        game.display().summary.map(|s| s.outcome),
        Some(Outcome::Completed)
    );
    assert!(!game.timer_running());
}

#[test]
fn questions_scale_with_level() {
    let mut game = new_game(8);
    game.start();

    for _ in 0..14 {
        let q = *game.current_question().unwrap();
        let (a, b) = q.operands();
        let bound = mathsprint::question::max_operand(q.level());
        assert!(a <= bound && b <= bound, "{} exceeds level {}", q.text(), q.level());
        submit(&mut game, q.correct_answer());
    }
}

#[test]
fn stopped_timer_never_fires_after_finish() {
    let mut game = new_game(3);
    game.start();
    for _ in 0..15 {
        let answer = correct(&game);
        submit(&mut game, answer);
    }
    let summary = game.display().summary;
    let timer = game.display().timer.clone();

    for _ in 0..100 {
        game.tick();
    }

    assert_eq!(game.display().summary, summary);
    assert_eq!(game.display().timer, timer);
}

#[test]
fn restart_then_play_again() {
    let mut game = new_game(12);
    game.start();
    for _ in 0..30 {
        game.tick();
    }
    assert_eq!(game.state(), GameState::Finished);

    game.restart();
    assert_eq!(game.state(), GameState::Idle);
    assert_eq!(game.display().screen, Screen::Start);
    assert_eq!(game.display().score, 0);
    assert_eq!(game.display().level, 1);
    assert!(game.current_question().is_none());

    game.start();
    let answer = correct(&game);
    submit(&mut game, answer);
    assert_eq!(game.session().score, 10);
}
