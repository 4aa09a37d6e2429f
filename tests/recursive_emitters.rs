use matecheck::chess::direction::Direction;
use matecheck::recursive::{bishop_diagonal, queen_left, rook_right};
use matecheck::transcript::{MoveLog, Transcript};

fn rendered(f: impl FnOnce(&mut Transcript<Vec<u8>>)) -> String {
    let mut t = Transcript::new(Vec::new());
    f(&mut t);
    String::from_utf8(t.into_inner()).unwrap()
}

#[test]
fn each_emitter_prints_count_repetitions() {
    for n in [0u32, 1, 5, 8] {
        let mut log = MoveLog::new();
        bishop_diagonal(&mut log, n).unwrap();
        assert_eq!(log.steps.len(), 2 * n as usize);

        let mut log = MoveLog::new();
        rook_right(&mut log, n).unwrap();
        assert_eq!(log.steps, vec![Direction::Right; n as usize]);

        let mut log = MoveLog::new();
        queen_left(&mut log, n).unwrap();
        assert_eq!(log.steps, vec![Direction::Left; n as usize]);
    }
}

#[test]
fn emitters_write_one_token_per_line() {
    let text = rendered(|t| bishop_diagonal(t, 2).unwrap());
    assert_eq!(text, "Direita\nCima\nDireita\nCima\n");

    let text = rendered(|t| rook_right(t, 3).unwrap());
    assert_eq!(text, "Direita\nDireita\nDireita\n");

    let text = rendered(|t| queen_left(t, 0).unwrap());
    assert!(text.is_empty());
}
