//! Two-player score tracker.
//!
//! A game is won by the first player to reach [`WIN_SCORE`] points with a
//! lead of at least [`WIN_MARGIN`]. Totals only ever grow by one point at a
//! time until the board is reset.

use crate::config::{WIN_MARGIN, WIN_SCORE};
use crate::PageError;
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = PageError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(PageError::UnknownPlayer(other)),
        }
    }
}

/// Running totals for both players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    score1: u32,
    score2: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::One => self.score1,
            Player::Two => self.score2,
        }
    }

    /// Credit exactly one point to `player`.
    pub fn add_point(&mut self, player: Player) {
        match player {
            Player::One => self.score1 += 1,
            Player::Two => self.score2 += 1,
        }
        debug!(
            "Point for player {}: {} - {}",
            player.number(),
            self.score1,
            self.score2
        );
        if let Some(winner) = self.winner() {
            info!("Player {} wins {} - {}", winner.number(), self.score1, self.score2);
        }
    }

    pub fn reset(&mut self) {
        self.score1 = 0;
        self.score2 = 0;
        debug!("Score reset");
    }

    /// The player satisfying the win rule, if any.
    ///
    /// Both conditions can never hold together: each requires that side to
    /// lead by at least `WIN_MARGIN > 0`.
    pub fn winner(&self) -> Option<Player> {
        if self.score1 >= WIN_SCORE && self.score1.saturating_sub(self.score2) >= WIN_MARGIN {
            Some(Player::One)
        } else if self.score2 >= WIN_SCORE && self.score2.saturating_sub(self.score1) >= WIN_MARGIN
        {
            Some(Player::Two)
        } else {
            None
        }
    }

    /// Text for the winner display; empty while nobody has won.
    pub fn winner_label(&self) -> &'static str {
        match self.winner() {
            Some(Player::One) => "Player 1 Wins!",
            Some(Player::Two) => "Player 2 Wins!",
            None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_after(points: &[Player]) -> ScoreBoard {
        let mut board = ScoreBoard::new();
        for &p in points {
            board.add_point(p);
        }
        board
    }

    #[test]
    fn totals_count_every_call() {
        let points = [
            Player::One,
            Player::Two,
            Player::Two,
            Player::One,
            Player::Two,
        ];
        let board = board_after(&points);
        assert_eq!(board.score(Player::One) + board.score(Player::Two), points.len() as u32);
        assert_eq!(board.score(Player::One), 2);
        assert_eq!(board.score(Player::Two), 3);
    }

    #[test]
    fn eleven_with_two_point_lead_wins() {
        let mut points = vec![Player::Two; 9];
        points.extend(std::iter::repeat(Player::One).take(11));
        let board = board_after(&points);
        assert_eq!(board.winner(), Some(Player::One));
        assert_eq!(board.winner_label(), "Player 1 Wins!");
    }

    #[test]
    fn deuce_needs_two_point_lead() {
        let mut board = ScoreBoard::new();
        for _ in 0..10 {
            board.add_point(Player::One);
            board.add_point(Player::Two);
        }
        board.add_point(Player::Two);
        assert_eq!(board.score(Player::Two), 11);
        assert_eq!(board.winner_label(), "");

        board.add_point(Player::One);
        board.add_point(Player::Two);
        assert_eq!(board.winner_label(), "");

        board.add_point(Player::Two);
        assert_eq!((board.score(Player::One), board.score(Player::Two)), (11, 13));
        assert_eq!(board.winner_label(), "Player 2 Wins!");
    }

    #[test]
    fn ten_point_lead_below_eleven_is_not_a_win() {
        let board = board_after(&[Player::One; 10]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn winners_are_mutually_exclusive() {
        for s1 in 0..30u32 {
            for s2 in 0..30u32 {
                let board = ScoreBoard { score1: s1, score2: s2 };
                let one = s1 >= 11 && s1 as i64 - s2 as i64 >= 2;
                let two = s2 >= 11 && s2 as i64 - s1 as i64 >= 2;
                assert!(!(one && two));
                assert_eq!(board.winner_label().is_empty(), !(one || two), "{} - {}", s1, s2);
            }
        }
    }

    #[test]
    fn reset_clears_everything() {
        let mut board = board_after(&[Player::One; 12]);
        assert!(board.winner().is_some());
        board.reset();
        assert_eq!(board, ScoreBoard::new());
        assert_eq!(board.winner_label(), "");
    }

    #[test]
    fn raw_player_numbers() {
        assert_eq!(Player::try_from(1), Ok(Player::One));
        assert_eq!(Player::try_from(2), Ok(Player::Two));
        assert_eq!(Player::try_from(3), Err(PageError::UnknownPlayer(3)));
        assert_eq!(Player::try_from(0), Err(PageError::UnknownPlayer(0)));
    }
}
