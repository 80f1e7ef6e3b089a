use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{Square, MAX_SIZE};
use crate::level::Level;
use crate::square_set::SquareSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    TooLarge,
    MultiplePlayers,
    NoPlayer,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::TooLarge => write!(f, "Map larger than {} rows/columns", MAX_SIZE),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
///
/// Rows are separated by newlines or `|`. Both the classic (`@$*+`) and the letter (`pbBP`) glyphs
/// are accepted. The result is not validated, that's up to the solver.
pub fn parse(level: &str) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily,
    // only newlines though - trailing spaces are floors
    let level = level.trim_matches('\n');

    let mut player = None;
    let mut boxes = SquareSet::new();
    let mut goals = SquareSet::new();
    let mut floors = SquareSet::new();

    for (r, line) in level.split(|c: char| c == '\n' || c == '|').enumerate() {
        if r >= MAX_SIZE {
            return Err(ParserErr::TooLarge);
        }
        for (c, cur_char) in line.trim_end_matches('\r').chars().enumerate() {
            if c >= MAX_SIZE {
                return Err(ParserErr::TooLarge);
            }
            let square = Square::new(c as i8, r as i8);

            let (is_player, is_box, is_goal) = match cur_char {
                '#' => continue,
                'p' | '@' => (true, false, false),
                'P' | '+' => (true, false, true),
                'b' | '$' => (false, true, false),
                'B' | '*' => (false, true, true),
                '.' => (false, false, true),
                ' ' | '-' | '_' => (false, false, false),
                _ => return Err(ParserErr::Pos(r, c)),
            };

            if is_player {
                if player.is_some() {
                    return Err(ParserErr::MultiplePlayers);
                }
                player = Some(square);
            }
            if is_box {
                boxes.add(square);
            }
            if is_goal {
                goals.add(square);
            }
            floors.add(square);
        }
    }

    let player = player.ok_or(ParserErr::NoPlayer)?;
    Ok(Level::new(player, boxes, goals, floors))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(x: i8, y: i8) -> Square {
        Square::new(x, y)
    }

    #[test]
    fn fail_empty() {
        assert_failure("", ParserErr::NoPlayer);
    }

    #[test]
    fn fail_no_player() {
        let level = r"
#####
#$ .#
#####
";
        assert_failure(level, ParserErr::NoPlayer);
    }

    #[test]
    fn fail_multiple_players() {
        let level = r"
#####
#@+$#
#####
";
        assert_failure(level, ParserErr::MultiplePlayers);
    }

    #[test]
    fn fail_pos() {
        let level = r"
#####
#@X.#
#####
";
        assert_failure(level, ParserErr::Pos(1, 2));
    }

    #[test]
    fn fail_too_large() {
        let level = format!("@{}", " ".repeat(MAX_SIZE));
        assert_failure(&level, ParserErr::TooLarge);
    }

    #[test]
    fn trailing_floors() {
        let level: Level = "@  ".parse().unwrap();
        assert_eq!(level.floors, (0..3).map(|x| sq(x, 0)).collect::<SquareSet>());

        let level: Level = "#####\n#@$.#\n#   \n".parse().unwrap();
        assert!(level.floors.contains(sq(3, 2)));
        assert_eq!(level.floors.len(), 6);
    }

    #[test]
    fn simplest() {
        let level = r"
#####
#@$.#
#####
";
        let level: Level = level.parse().unwrap();
        assert_eq!(level.player, sq(1, 1));
        assert_eq!(level.boxes, vec![sq(2, 1)].into_iter().collect::<SquareSet>());
        assert_eq!(level.goals, vec![sq(3, 1)].into_iter().collect::<SquareSet>());
        assert_eq!(level.floors, (1..4).map(|x| sq(x, 1)).collect::<SquareSet>());
    }

    #[test]
    fn letters_and_pipes() {
        let letters: Level = "######|#Pb_.#|#-B  #|######".parse().unwrap();
        let classic: Level = r"
######
#+$ .#
# *  #
######
"
        .parse()
        .unwrap();
        assert_eq!(letters, classic);
        assert_eq!(letters.player, sq(1, 1));
        assert!(letters.goals.contains(sq(1, 1)));
        assert!(letters.boxes.contains(sq(2, 2)));
    }

    #[test]
    fn round_trip() {
        let input = r"
#######
#.@ # #
#$* $ #
#   $ #
# ..  #
#  *  #
#######
";
        let level: Level = input.parse().unwrap();
        assert_eq!(level.to_string(), input.trim_start_matches('\n'));
    }

    fn assert_failure(input_level: &str, expected_err: ParserErr) {
        assert_eq!(input_level.parse::<Level>().unwrap_err(), expected_err);
    }
}
