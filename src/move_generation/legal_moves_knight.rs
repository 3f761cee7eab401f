use crate::game_state::chess_types::Position;

/// Knight move rule: an L-shaped jump, obstruction is irrelevant.
#[inline]
pub fn knight_geometry(from: Position, to: Position) -> bool {
    let (d_file, d_rank) = from.delta_to(to);
    matches!((d_file.abs(), d_rank.abs()), (1, 2) | (2, 1))
}

#[cfg(test)]
mod tests {
    use super::knight_geometry;
    use crate::game_state::chess_types::Position;

    #[test]
    fn knight_on_d4_reaches_eight_squares() {
        let d4 = Position::new(3, 3);
        let targets = Position::all().filter(|&to| knight_geometry(d4, to)).count();
        assert_eq!(targets, 8);
    }

    #[test]
    fn knight_in_the_corner_reaches_two_squares() {
        let a1 = Position::new(0, 0);
        let targets: Vec<_> = Position::all().filter(|&to| knight_geometry(a1, to)).collect();
        assert_eq!(targets, vec![Position::new(2, 1), Position::new(1, 2)]);
    }
}
