//! Turning snapshots into text.

use unscramble::prelude::GameUiState;

pub const HELP: &str = "\
Type your guess and press enter.
  :skip   skip this word (no points)
  :reset  start a new game
  :help   show this help
  :quit   leave";

/// Renders one snapshot as a block of text.
pub fn frame(state: &GameUiState, max_rounds: usize) -> String {
    if state.is_game_over {
        return format!(
            "Game over! Final score: {}. Type :reset to play again or :quit to leave.",
            state.score
        );
    }

    let mut out = format!(
        "Round {}/{max_rounds}  Score {}\nUnscramble: {}",
        state.current_word_count, state.score, state.current_scrambled_word
    );
    if state.is_guessed_word_wrong {
        out.push_str("\nWrong guess, try again.");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_shows_round_and_scramble() {
        let state = GameUiState::first_round("tca".into());
        assert_eq!(frame(&state, 10), "Round 1/10  Score 0\nUnscramble: tca");
    }

    #[test]
    fn test_frame_flags_wrong_guess() {
        let state = GameUiState::first_round("tca".into()).with_wrong_guess();
        assert!(frame(&state, 10).ends_with("Wrong guess, try again."));
    }

    #[test]
    fn test_frame_game_over() {
        let state = GameUiState::first_round("tca".into()).finished(60);
        let text = frame(&state, 3);
        assert!(text.starts_with("Game over!"));
        assert!(text.contains("60"));
    }
}
