//! Difficulty strategies: move scoring and draw policy.
//!
//! A strategy is a pair of pure function pointers selected by tier. The
//! table keeps tiers data instead of types: adding a tier is one more
//! row, not a trait hierarchy.
//!
//! Scores only rank a hand's valid plays against each other and carry no
//! meaning across states. Easy and medium take their base score from the
//! injected RNG; hard is fully deterministic.

use im::Vector;

use crate::core::{Card, CardKind, Difficulty, GameRng, GameState};
use crate::rules;

/// Decision functions for one difficulty tier.
#[derive(Clone, Copy, Debug)]
pub struct Strategy {
    /// Score one valid card against the state. Higher wins.
    pub evaluate_move: fn(&Card, &GameState, &mut GameRng) -> f64,
    /// Whether to draw instead of playing.
    pub should_draw: fn(&Vector<Card>, &Card) -> bool,
}

impl Difficulty {
    /// The strategy row for this tier.
    #[must_use]
    pub fn strategy(self) -> Strategy {
        match self {
            Difficulty::Easy => EASY,
            Difficulty::Medium => MEDIUM,
            Difficulty::Hard => HARD,
        }
    }
}

const EASY: Strategy = Strategy {
    evaluate_move: easy_evaluate,
    should_draw: draw_when_stuck,
};

const MEDIUM: Strategy = Strategy {
    evaluate_move: medium_evaluate,
    should_draw: draw_when_stuck,
};

const HARD: Strategy = Strategy {
    evaluate_move: hard_evaluate,
    should_draw: hard_should_draw,
};

const MEDIUM_ACTION_BONUS: f64 = 2.0;
const MEDIUM_COLOR_BONUS: f64 = 1.0;

const HARD_COLOR_BONUS: f64 = 1.0;
const HARD_COLOR_WEIGHT: f64 = 0.5;

/// An opponent about to go out is worth spending an attack card on.
const DEFENSIVE_HAND_THRESHOLD: usize = 2;

/// Hard holds its wilds while the hand is at least this large.
const WILD_HOARD_THRESHOLD: usize = 5;

fn draw_when_stuck(hand: &Vector<Card>, top: &Card) -> bool {
    rules::valid_plays(hand, top).is_empty()
}

fn easy_evaluate(_card: &Card, _state: &GameState, rng: &mut GameRng) -> f64 {
    rng.gen_unit()
}

fn medium_evaluate(card: &Card, state: &GameState, rng: &mut GameRng) -> f64 {
    let mut score = rng.gen_unit();
    if matches!(
        card.kind,
        CardKind::Skip | CardKind::Reverse | CardKind::DrawTwo | CardKind::WildDrawFour
    ) {
        score += MEDIUM_ACTION_BONUS;
    }
    if color_matches_top(card, state) {
        score += MEDIUM_COLOR_BONUS;
    }
    score
}

fn hard_evaluate(card: &Card, state: &GameState, _rng: &mut GameRng) -> f64 {
    let mut score = 0.0;

    if next_hand_size(state).is_some_and(|n| n <= DEFENSIVE_HAND_THRESHOLD) {
        score += match card.kind {
            CardKind::WildDrawFour => 6.0,
            CardKind::DrawTwo => 5.0,
            CardKind::Skip => 4.0,
            _ => 0.0,
        };
    }

    score += match card.kind {
        CardKind::WildDrawFour => 3.0,
        CardKind::DrawTwo => 2.5,
        CardKind::Wild => 2.0,
        CardKind::Skip => 1.75,
        CardKind::Reverse => 1.5,
        CardKind::Number(_) => 1.0,
    };

    if color_matches_top(card, state) {
        score += HARD_COLOR_BONUS;
    }

    score += HARD_COLOR_WEIGHT * same_color_count(card, state) as f64;

    score
}

fn hard_should_draw(hand: &Vector<Card>, top: &Card) -> bool {
    let plays = rules::valid_plays(hand, top);
    if plays.is_empty() {
        return true;
    }
    plays.iter().all(Card::is_wild) && hand.len() >= WILD_HOARD_THRESHOLD
}

fn color_matches_top(card: &Card, state: &GameState) -> bool {
    matches!(
        (card.color, state.top_card().and_then(|t| t.color)),
        (Some(a), Some(b)) if a == b
    )
}

/// Hand size one seat ahead of the actor, direction-aware.
fn next_hand_size(state: &GameState) -> Option<usize> {
    let seat = state.current_seat()?;
    let next = state.seat_after(seat, 1);
    state.players().get(next).map(crate::core::Player::hand_size)
}

/// How many cards of the candidate's color the actor holds, the
/// candidate itself included.
fn same_color_count(card: &Card, state: &GameState) -> usize {
    let color = match card.color {
        Some(color) => color,
        None => return 0,
    };
    state
        .player(state.current_player())
        .map(|p| p.hand.iter().filter(|c| c.color == Some(color)).count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        CardColor, CardId, Direction, GameConfig, GameStatus, Player, PlayerId,
    };

    /// Three seats; seat 0 (id 1) is the actor holding `hand`, seat 1
    /// holds `next_hand` cards, `top` sits on the discard.
    fn fixture(hand: &[Card], next_hand: usize, top: Card) -> GameState {
        let mut players: Vector<Player> = Vector::new();
        let mut actor = Player::human(PlayerId::new(1), "actor");
        actor.hand = hand.iter().copied().collect();
        players.push_back(actor);

        let mut second = Player::human(PlayerId::new(2), "next");
        for i in 0..next_hand {
            second
                .hand
                .push_back(Card::number(CardId::new(300 + i as u32), CardColor::Green, 9));
        }
        players.push_back(second);
        players.push_back(Player::human(PlayerId::new(3), "third"));

        GameState {
            players,
            current: PlayerId::new(1),
            direction: Direction::Clockwise,
            deck: Vector::new(),
            discard: std::iter::once(top).collect(),
            status: GameStatus::Playing,
            config: GameConfig::default(),
            rng: GameRng::new(42),
        }
    }

    #[test]
    fn test_easy_is_seeded_random() {
        let top = Card::number(CardId::new(100), CardColor::Blue, 2);
        let card = Card::number(CardId::new(1), CardColor::Blue, 7);
        let state = fixture(&[card], 3, top);

        let mut rng1 = GameRng::new(9);
        let mut rng2 = GameRng::new(9);
        let strategy = Difficulty::Easy.strategy();

        for _ in 0..20 {
            let a = (strategy.evaluate_move)(&card, &state, &mut rng1);
            let b = (strategy.evaluate_move)(&card, &state, &mut rng2);
            assert_eq!(a, b);
            assert!((0.0..1.0).contains(&a));
        }
    }

    #[test]
    fn test_medium_prefers_action_cards() {
        let top = Card::number(CardId::new(100), CardColor::Blue, 2);
        let skip = Card::action(CardId::new(1), CardColor::Red, CardKind::Skip);
        let seven = Card::number(CardId::new(2), CardColor::Red, 7);
        let state = fixture(&[skip, seven], 3, top);

        let mut rng = GameRng::new(5);
        let strategy = Difficulty::Medium.strategy();

        // No color matches here, so the 2.0 action bonus dominates any
        // random base in [0, 1)
        let skip_score = (strategy.evaluate_move)(&skip, &state, &mut rng);
        let seven_score = (strategy.evaluate_move)(&seven, &state, &mut rng);
        assert!(skip_score >= MEDIUM_ACTION_BONUS);
        assert!(seven_score < 1.0);
    }

    #[test]
    fn test_medium_color_bonus() {
        let top = Card::number(CardId::new(100), CardColor::Blue, 2);
        let blue7 = Card::number(CardId::new(1), CardColor::Blue, 7);
        let state = fixture(&[blue7], 3, top);

        let mut rng = GameRng::new(5);
        let strategy = Difficulty::Medium.strategy();

        let score = (strategy.evaluate_move)(&blue7, &state, &mut rng);
        assert!((1.0..2.0).contains(&score));
    }

    #[test]
    fn test_hard_scores_exactly() {
        let top = Card::number(CardId::new(100), CardColor::Blue, 2);
        let yellow5 = Card::number(CardId::new(1), CardColor::Yellow, 5);
        let red_skip = Card::action(CardId::new(2), CardColor::Red, CardKind::Skip);
        let wild = Card::wild(CardId::new(3), CardKind::Wild);
        let state = fixture(&[yellow5, red_skip, wild], 3, top);

        let mut rng = GameRng::new(0);
        let strategy = Difficulty::Hard.strategy();

        // base + 0.5 per same-colored card in hand (one each here)
        assert_eq!((strategy.evaluate_move)(&yellow5, &state, &mut rng), 1.5);
        assert_eq!((strategy.evaluate_move)(&red_skip, &state, &mut rng), 2.25);
        assert_eq!((strategy.evaluate_move)(&wild, &state, &mut rng), 2.0);
    }

    #[test]
    fn test_hard_color_match_bonus() {
        let top = Card::number(CardId::new(100), CardColor::Yellow, 2);
        let yellow5 = Card::number(CardId::new(1), CardColor::Yellow, 5);
        let state = fixture(&[yellow5], 3, top);

        let mut rng = GameRng::new(0);
        let strategy = Difficulty::Hard.strategy();

        assert_eq!((strategy.evaluate_move)(&yellow5, &state, &mut rng), 2.5);
    }

    #[test]
    fn test_hard_defensive_bonuses() {
        let top = Card::number(CardId::new(100), CardColor::Blue, 2);
        let red_skip = Card::action(CardId::new(1), CardColor::Red, CardKind::Skip);
        let green_draw2 = Card::action(CardId::new(2), CardColor::Green, CardKind::DrawTwo);
        let wild4 = Card::wild(CardId::new(3), CardKind::WildDrawFour);

        // Next seat holds two cards
        let state = fixture(&[red_skip, green_draw2, wild4], 2, top);

        let mut rng = GameRng::new(0);
        let strategy = Difficulty::Hard.strategy();

        assert_eq!((strategy.evaluate_move)(&red_skip, &state, &mut rng), 6.25);
        assert_eq!((strategy.evaluate_move)(&green_draw2, &state, &mut rng), 8.0);
        assert_eq!((strategy.evaluate_move)(&wild4, &state, &mut rng), 9.0);
    }

    #[test]
    fn test_hard_defensive_respects_direction() {
        let top = Card::number(CardId::new(100), CardColor::Blue, 2);
        let green_draw2 = Card::action(CardId::new(1), CardColor::Green, CardKind::DrawTwo);

        // Seat 1 holds two cards, but play runs the other way: the seat
        // behind the actor (empty-handed seat 2) is the one targeted
        let mut state = fixture(&[green_draw2], 2, top);
        state.direction = Direction::Counterclockwise;

        let mut rng = GameRng::new(0);
        let strategy = Difficulty::Hard.strategy();

        // Defensive bonus still applies: seat 2 has zero cards
        assert_eq!((strategy.evaluate_move)(&green_draw2, &state, &mut rng), 8.0);
    }

    #[test]
    fn test_draw_when_stuck() {
        let top = Card::number(CardId::new(100), CardColor::Blue, 2);
        let red7 = Card::number(CardId::new(1), CardColor::Red, 7);
        let blue9 = Card::number(CardId::new(2), CardColor::Blue, 9);

        let hand: Vector<Card> = std::iter::once(red7).collect();
        assert!(draw_when_stuck(&hand, &top));

        let hand: Vector<Card> = [red7, blue9].into_iter().collect();
        assert!(!draw_when_stuck(&hand, &top));
    }

    #[test]
    fn test_hard_hoards_wilds_with_large_hand() {
        let top = Card::number(CardId::new(100), CardColor::Blue, 2);
        let wild = Card::wild(CardId::new(1), CardKind::Wild);
        let off_color = |i: u32| Card::number(CardId::new(10 + i), CardColor::Red, 7);

        // Five cards, only the wild playable: hold it
        let hand: Vector<Card> = [wild, off_color(1), off_color(2), off_color(3), off_color(4)]
            .into_iter()
            .collect();
        assert!(hard_should_draw(&hand, &top));

        // Four cards: spend the wild
        let hand: Vector<Card> = [wild, off_color(1), off_color(2), off_color(3)]
            .into_iter()
            .collect();
        assert!(!hard_should_draw(&hand, &top));

        // Large hand but a non-wild play exists: play
        let blue9 = Card::number(CardId::new(2), CardColor::Blue, 9);
        let hand: Vector<Card> = [wild, blue9, off_color(1), off_color(2), off_color(3)]
            .into_iter()
            .collect();
        assert!(!hard_should_draw(&hand, &top));
    }
}
