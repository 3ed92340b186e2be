//! The turn resolver: pure transitions between turn states.
//!
//! Every transition takes a state by reference and a caller-owned RNG for
//! the fresh roll, and returns a new state value. A rejected action returns
//! `Err` and leaves the input state untouched; rejection is a normal,
//! recoverable outcome (a UI re-prompts), not a fault.

use crate::core::{Board, DiceRoll, Field, GameRng, Player};
use crate::rules::{make_move, possible_moves, winner};

use super::state::{GameState, Terminal, TurnState};

/// Why an action was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The acting player is not the current player.
    NotCurrentPlayer { current: Player, acted: Player },
    /// Legal moves exist but no source field was chosen.
    SourceRequired,
    /// The chosen source field is not in the legal-move set.
    NotAPossibleMove(Field),
    /// The game already has a winner.
    GameFinished,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::NotCurrentPlayer { current, acted } => {
                write!(f, "player {acted} acted but it is {current}'s turn")
            }
            Rejection::SourceRequired => write!(f, "a source field must be chosen"),
            Rejection::NotAPossibleMove(field) => {
                write!(f, "field {field} is not a legal source")
            }
            Rejection::GameFinished => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Begin a turn: roll the dice and compute the legal moves.
#[must_use]
pub fn start_turn(player: Player, dice_count: usize, board: Board, rng: &mut GameRng) -> TurnState {
    let dice = DiceRoll::cast(dice_count, rng);
    let dice_result = dice.result();
    TurnState {
        current_player: player,
        possible_moves: possible_moves(player, dice_result, &board),
        dice,
        dice_result,
        board,
    }
}

/// Resolve the current turn with the acting player's chosen source field.
///
/// - Rejects a player out of turn, and a source that is missing or not in
///   the legal-move set while legal moves exist.
/// - An empty legal-move set is a forced pass: the board is unchanged and
///   the opponent rolls.
/// - Otherwise the move is applied. A winner yields the terminal state;
///   landing on a reroll field keeps the turn with the same player;
///   anything else passes it to the opponent. Either way the next turn
///   starts with a fresh roll and freshly computed moves.
pub fn take_turn(
    state: &TurnState,
    acting: Player,
    source: Option<Field>,
    rng: &mut GameRng,
) -> Result<GameState, Rejection> {
    if acting != state.current_player {
        return Err(Rejection::NotCurrentPlayer {
            current: state.current_player,
            acted: acting,
        });
    }

    let chosen = if state.possible_moves.is_empty() {
        None
    } else {
        let source = source.ok_or(Rejection::SourceRequired)?;
        let dest = *state
            .possible_moves
            .get(&source)
            .ok_or(Rejection::NotAPossibleMove(source))?;
        Some((source, dest))
    };

    let board = match chosen {
        Some((source, dest)) => make_move(acting, source, dest, &state.board),
        None => state.board.clone(),
    };

    if let Some(winner) = winner(&board) {
        return Ok(GameState::GameOver(Terminal { winner, board }));
    }

    let next_player = match chosen {
        Some((_, dest)) if dest.is_reroll() => acting,
        _ => acting.opponent(),
    };

    Ok(GameState::AwaitingMove(start_turn(
        next_player,
        state.dice.count(),
        board,
        rng,
    )))
}

/// Forfeit the current turn unconditionally.
///
/// Used when the current player cannot or will not act despite having legal
/// moves. Only the current player may forfeit; the board is unchanged and
/// the opponent rolls.
pub fn void_turn(
    state: &TurnState,
    acting: Player,
    rng: &mut GameRng,
) -> Result<TurnState, Rejection> {
    if acting != state.current_player {
        return Err(Rejection::NotCurrentPlayer {
            current: state.current_player,
            acted: acting,
        });
    }
    Ok(start_turn(
        acting.opponent(),
        state.dice.count(),
        state.board.clone(),
        rng,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Moves;

    fn forced_pass_state(player: Player) -> TurnState {
        TurnState {
            current_player: player,
            dice: DiceRoll::from_values(&[0, 0, 0, 0]),
            dice_result: 0,
            possible_moves: Moves::default(),
            board: Board::new(1),
        }
    }

    fn state_with_move(player: Player, source: Field, dest: Field) -> TurnState {
        let mut possible_moves = Moves::default();
        possible_moves.insert(source, dest);
        TurnState {
            current_player: player,
            dice: DiceRoll::from_values(&[1, 1, 0, 0]),
            dice_result: 2,
            possible_moves,
            board: Board::new(1),
        }
    }

    #[test]
    fn test_start_turn_fields_are_consistent() {
        let mut rng = GameRng::new(3);
        let turn = start_turn(Player::White, 4, Board::new(7), &mut rng);

        assert_eq!(turn.current_player, Player::White);
        assert_eq!(turn.dice.count(), 4);
        assert_eq!(turn.dice_result, turn.dice.result());
        assert_eq!(
            turn.possible_moves,
            possible_moves(Player::White, turn.dice_result, &turn.board)
        );
    }

    #[test]
    fn test_forced_pass_alternates_players() {
        let mut rng = GameRng::new(1);
        let state = forced_pass_state(Player::White);

        let next = take_turn(&state, Player::White, Some(Field::START), &mut rng).unwrap();
        let turn = next.turn().unwrap();
        assert_eq!(turn.current_player, Player::Black);
        assert_eq!(turn.board, state.board);
    }

    #[test]
    fn test_forced_pass_ignores_source_choice() {
        let mut rng = GameRng::new(1);
        let state = forced_pass_state(Player::White);
        assert!(take_turn(&state, Player::White, None, &mut rng).is_ok());
        assert!(take_turn(&state, Player::White, Some(Field::new(13)), &mut rng).is_ok());
    }

    #[test]
    fn test_wrong_player_is_rejected() {
        let mut rng = GameRng::new(1);
        let state = forced_pass_state(Player::White);

        let result = take_turn(&state, Player::Black, Some(Field::START), &mut rng);
        assert_eq!(
            result,
            Err(Rejection::NotCurrentPlayer {
                current: Player::White,
                acted: Player::Black,
            })
        );
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let mut rng = GameRng::new(1);
        let state = state_with_move(Player::White, Field::START, Field::new(2));

        let result = take_turn(&state, Player::White, Some(Field::new(9)), &mut rng);
        assert_eq!(result, Err(Rejection::NotAPossibleMove(Field::new(9))));
    }

    #[test]
    fn test_missing_source_is_rejected_when_moves_exist() {
        let mut rng = GameRng::new(1);
        let state = state_with_move(Player::White, Field::START, Field::new(2));
        assert_eq!(
            take_turn(&state, Player::White, None, &mut rng),
            Err(Rejection::SourceRequired)
        );
    }

    #[test]
    fn test_rejection_leaves_state_usable() {
        let mut rng = GameRng::new(1);
        let state = state_with_move(Player::White, Field::START, Field::new(2));
        let before = state.clone();

        let _ = take_turn(&state, Player::Black, Some(Field::START), &mut rng);
        assert_eq!(state, before);

        // the same state still resolves
        assert!(take_turn(&state, Player::White, Some(Field::START), &mut rng).is_ok());
    }

    #[test]
    fn test_reroll_field_keeps_the_turn() {
        let mut rng = GameRng::new(1);
        let state = state_with_move(Player::White, Field::START, Field::new(4));

        let next = take_turn(&state, Player::White, Some(Field::START), &mut rng).unwrap();
        assert_eq!(next.turn().unwrap().current_player, Player::White);
    }

    #[test]
    fn test_plain_field_passes_the_turn() {
        let mut rng = GameRng::new(1);
        let state = state_with_move(Player::White, Field::START, Field::new(3));

        let next = take_turn(&state, Player::White, Some(Field::START), &mut rng).unwrap();
        assert_eq!(next.turn().unwrap().current_player, Player::Black);
    }

    #[test]
    fn test_finishing_move_announces_winner() {
        let mut rng = GameRng::new(1);
        let state = state_with_move(Player::White, Field::START, Field::FINISH);

        let next = take_turn(&state, Player::White, Some(Field::START), &mut rng).unwrap();
        assert_eq!(next.winner(), Some(Player::White));
        assert_eq!(next.board().stones(Field::FINISH, Player::White), 1);
    }

    #[test]
    fn test_void_turn_passes_with_board_unchanged() {
        let mut rng = GameRng::new(1);
        let state = state_with_move(Player::White, Field::START, Field::new(2));

        let next = void_turn(&state, Player::White, &mut rng).unwrap();
        assert_eq!(next.current_player, Player::Black);
        assert_eq!(next.board, state.board);
    }

    #[test]
    fn test_void_turn_rejects_wrong_player() {
        let mut rng = GameRng::new(1);
        let state = state_with_move(Player::White, Field::START, Field::new(2));
        assert!(void_turn(&state, Player::Black, &mut rng).is_err());
    }

    #[test]
    fn test_applied_move_updates_board() {
        let mut rng = GameRng::new(1);
        let state = state_with_move(Player::White, Field::START, Field::new(2));

        let next = take_turn(&state, Player::White, Some(Field::START), &mut rng).unwrap();
        assert_eq!(next.board().stones(Field::new(2), Player::White), 1);
        assert_eq!(next.board().stones(Field::START, Player::White), 0);
        // prior state still shows the old board
        assert_eq!(state.board.stones(Field::START, Player::White), 1);
    }
}
