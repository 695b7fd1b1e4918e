//! Turning a strategy into a concrete action.
//!
//! `decide` runs the tier's draw policy, then scores every valid play and
//! keeps the strict maximum. Ties keep the earliest card in hand order, so
//! deterministic tiers always resolve the same way.

use im::Vector;

use crate::core::{Action, Card, CardColor, Difficulty, GameRng, GameState, PlayerId};
use crate::rules;

/// Decide the acting player's move.
///
/// Callers pass a forked RNG; the decision never touches the state's own
/// stream. If `player` is not seated or no card has been discarded yet,
/// falls back to a draw.
#[must_use]
pub fn decide(
    state: &GameState,
    player: PlayerId,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Action {
    let seated = match state.player(player) {
        Some(p) => p,
        None => return Action::Draw,
    };
    let top = match state.top_card() {
        Some(top) => *top,
        None => return Action::Draw,
    };

    let strategy = difficulty.strategy();
    if (strategy.should_draw)(&seated.hand, &top) {
        return Action::Draw;
    }

    let mut best: Option<(f64, Card)> = None;
    for card in rules::valid_plays(&seated.hand, &top) {
        let score = (strategy.evaluate_move)(&card, state, rng);
        let better = match best {
            Some((best_score, _)) => score > best_score,
            None => true,
        };
        if better {
            best = Some((score, card));
        }
    }

    match best {
        Some((_, card)) if card.is_wild() => {
            Action::play_wild(card, choose_wild_color(&seated.hand))
        }
        Some((_, card)) => Action::play(card),
        None => Action::Draw,
    }
}

/// The color to declare when playing a wild: the one most represented in
/// `hand`.
///
/// Ties resolve in `CardColor::ALL` order; a hand with no colored cards
/// gets red.
#[must_use]
pub fn choose_wild_color(hand: &Vector<Card>) -> CardColor {
    let mut best = CardColor::ALL[0];
    let mut best_count = 0;
    for color in CardColor::ALL {
        let count = hand.iter().filter(|c| c.color == Some(color)).count();
        if count > best_count {
            best = color;
            best_count = count;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        CardId, CardKind, Direction, GameConfig, GameStatus, Player, PlayerId,
    };

    fn fixture(hand: &[Card], next_hand: usize, top: Card) -> GameState {
        let mut players: Vector<Player> = Vector::new();
        let mut actor = Player::ai(PlayerId::new(1), "actor", Difficulty::Hard);
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
    fn test_draws_when_nothing_valid() {
        let top = Card::number(CardId::new(100), CardColor::Blue, 2);
        let red7 = Card::number(CardId::new(1), CardColor::Red, 7);
        let state = fixture(&[red7], 3, top);

        let mut rng = GameRng::new(0);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let action = decide(&state, PlayerId::new(1), difficulty, &mut rng);
            assert_eq!(action, Action::Draw);
        }
    }

    #[test]
    fn test_decision_is_always_legal() {
        let top = Card::number(CardId::new(100), CardColor::Blue, 2);
        let hand = [
            Card::number(CardId::new(1), CardColor::Red, 7),
            Card::number(CardId::new(2), CardColor::Blue, 9),
            Card::action(CardId::new(3), CardColor::Yellow, CardKind::Skip),
            Card::wild(CardId::new(4), CardKind::Wild),
        ];
        let state = fixture(&hand, 3, top);

        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
                match decide(&state, PlayerId::new(1), difficulty, &mut rng) {
                    Action::Play { card, chosen_color } => {
                        assert!(rules::is_valid_play(&card, &top));
                        assert_eq!(card.is_wild(), chosen_color.is_some());
                    }
                    Action::Draw => {}
                }
            }
        }
    }

    #[test]
    fn test_hard_ties_keep_hand_order() {
        let top = Card::number(CardId::new(100), CardColor::Red, 2);
        let red5 = Card::number(CardId::new(1), CardColor::Red, 5);
        let red7 = Card::number(CardId::new(2), CardColor::Red, 7);
        let state = fixture(&[red5, red7], 3, top);

        let mut rng = GameRng::new(0);
        let action = decide(&state, PlayerId::new(1), Difficulty::Hard, &mut rng);
        assert_eq!(action, Action::play(red5));
    }

    #[test]
    fn test_hard_targets_short_handed_opponent() {
        let top = Card::number(CardId::new(100), CardColor::Green, 2);
        let green9 = Card::number(CardId::new(1), CardColor::Green, 9);
        let green_draw2 = Card::action(CardId::new(2), CardColor::Green, CardKind::DrawTwo);

        // Next seat is down to two cards: hard reaches for the draw two
        let state = fixture(&[green9, green_draw2], 2, top);
        let mut rng = GameRng::new(0);
        let action = decide(&state, PlayerId::new(1), Difficulty::Hard, &mut rng);
        assert_eq!(action, Action::play(green_draw2));
    }

    #[test]
    fn test_wild_play_declares_dominant_color() {
        let top = Card::number(CardId::new(100), CardColor::Blue, 2);
        let hand = [
            Card::wild(CardId::new(1), CardKind::Wild),
            Card::number(CardId::new(2), CardColor::Yellow, 1),
            Card::number(CardId::new(3), CardColor::Yellow, 4),
            Card::number(CardId::new(4), CardColor::Red, 6),
        ];
        let state = fixture(&hand, 3, top);

        let mut rng = GameRng::new(0);
        let action = decide(&state, PlayerId::new(1), Difficulty::Hard, &mut rng);
        assert_eq!(
            action,
            Action::play_wild(hand[0], CardColor::Yellow)
        );
    }

    #[test]
    fn test_easy_is_deterministic_under_seed() {
        let top = Card::number(CardId::new(100), CardColor::Blue, 2);
        let hand = [
            Card::number(CardId::new(1), CardColor::Blue, 1),
            Card::number(CardId::new(2), CardColor::Blue, 4),
            Card::number(CardId::new(3), CardColor::Blue, 6),
        ];
        let state = fixture(&hand, 3, top);

        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);
        let a = decide(&state, PlayerId::new(1), Difficulty::Easy, &mut rng1);
        let b = decide(&state, PlayerId::new(1), Difficulty::Easy, &mut rng2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_choose_wild_color_frequency_and_ties() {
        let hand: Vector<Card> = [
            Card::number(CardId::new(1), CardColor::Green, 1),
            Card::number(CardId::new(2), CardColor::Green, 2),
            Card::number(CardId::new(3), CardColor::Yellow, 3),
            Card::wild(CardId::new(4), CardKind::Wild),
        ]
        .into_iter()
        .collect();
        assert_eq!(choose_wild_color(&hand), CardColor::Green);

        // One of each: priority order breaks the tie
        let hand: Vector<Card> = [
            Card::number(CardId::new(1), CardColor::Yellow, 1),
            Card::number(CardId::new(2), CardColor::Blue, 2),
        ]
        .into_iter()
        .collect();
        assert_eq!(choose_wild_color(&hand), CardColor::Blue);

        let empty: Vector<Card> = Vector::new();
        assert_eq!(choose_wild_color(&empty), CardColor::Red);
    }
}
