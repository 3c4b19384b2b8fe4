use itertools::Itertools;
use replay_core::{
    Color, ColorNotationMap, Face, FaceletString, MoveSequence, Playback, ScanError, ScanLabel,
    ScanResult, SolveFailed, Status, Step, Turn, oracle,
};

const SCAN: &str = r#"
Top = [["White", "White", "White"], ["White", "White", "White"], ["White", "White", "White"]]
Right = [["red", "red", "red"], ["red", "red", "red"], ["red", "red", "red"]]
Front = [["Green", "Green", "Green"], ["Green", "Green", "Green"], ["Green", "Green", "Green"]]
Bottom = [["Yellow", "Yellow", "Yellow"], ["Yellow", "Yellow", "Yellow"], ["Yellow", "Yellow", "Yellow"]]
Left = [["Orange", "Orange", "Orange"], ["Orange", "Orange", "Orange"], ["Orange", "Orange", "Orange"]]
Back = [["Blue", "Blue", "Blue"], ["Blue", "Blue", "Blue"], ["Blue", "Blue", "Blue"]]
"#;

fn centers() -> [Color; 6] {
    [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Blue,
    ]
}

/// The scan a camera would produce of the cube described by `facelets`
fn scan_of(facelets: &str) -> ScanResult {
    let facelets = facelets.parse::<FaceletString>().unwrap();
    let map = ColorNotationMap::from_centers(centers()).unwrap();

    Face::ALL
        .into_iter()
        .fold(ScanResult::new(), |scan, face| {
            let stickers = facelets.face(face).map(|v| map.color_for(v));
            let grid = [0, 1, 2].map(|row| [0, 1, 2].map(|column| stickers[row * 3 + column]));
            scan.with_face(ScanLabel::from_face(face), grid)
        })
}

#[test_log::test]
fn solved_scan_needs_no_moves() {
    let scan = toml::from_str::<ScanResult>(SCAN).unwrap();
    let map = ColorNotationMap::resolve(&scan).unwrap();
    let facelets = FaceletString::encode(&scan, &map).unwrap();

    assert_eq!(
        facelets.to_string(),
        "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
    );

    let mut solver = |_: &FaceletString| -> Result<String, SolveFailed> { Ok(String::new()) };
    let solution = oracle::solve(&mut solver, &facelets).unwrap();
    let mut playback = Playback::new(map, solution);

    assert_eq!(playback.status(), Status::Solved);
    assert_eq!(playback.cursor(), 0);
    assert_eq!(playback.len(), 0);
    assert_eq!(playback.advance(), Step::Finished);
    assert_eq!(playback.status().to_string(), "Solved!");
}

#[test_log::test]
fn scrambled_scan_replays_to_solved() {
    // The result of `R U R' U' F2 D' L B2` on a solved cube
    let scrambled = {
        let mut cube = replay_core::LogicalCube::solved();
        for token in MoveSequence::parse("R U R' U' F2 D' L B2").iter() {
            cube.apply_all(token.turns().unwrap());
        }
        cube.facelet_string().to_string()
    };

    let scan = scan_of(&scrambled);
    let map = ColorNotationMap::resolve(&scan).unwrap();
    let facelets = FaceletString::encode(&scan, &map).unwrap();
    assert_eq!(facelets.to_string(), scrambled);

    let mut solver = |given: &FaceletString| -> Result<String, SolveFailed> {
        assert_eq!(given.to_string(), scrambled);
        Ok("B2 L' D F2 U R U' R'".to_owned())
    };
    let solution = oracle::solve(&mut solver, &facelets).unwrap();
    let mut playback = Playback::new(map, solution);

    assert_eq!(playback.cube().facelet_string(), facelets);

    let mut cursors = vec![playback.cursor()];
    while !playback.is_finished() {
        assert!(matches!(playback.advance(), Step::Applied { .. }));
        cursors.push(playback.cursor());
    }

    assert_eq!(cursors, (0..=8).collect_vec());
    assert!(playback.cube().is_solved());
    assert_eq!(playback.advance(), Step::Finished);
    assert_eq!(playback.cursor(), 8);
}

#[test_log::test]
fn rotation_steps_expand_in_order() {
    let map = ColorNotationMap::from_centers(centers()).unwrap();
    let mut playback = Playback::new(map, MoveSequence::parse("R U' X"));

    let mut primitives = Vec::new();
    let mut steps = 0;
    loop {
        match playback.advance() {
            Step::Applied { turns, .. } => {
                steps += 1;
                primitives.extend(turns.iter().map(Turn::to_string));
            }
            Step::Skipped { token, .. } => panic!("skipped {token}"),
            Step::Finished => break,
        }
    }

    assert_eq!(steps, 3);
    assert_eq!(primitives, ["R", "U'", "R", "L'"]);
    assert!(playback.cube().is_solved());
}

#[test_log::test]
fn cursor_is_bounded_and_monotonic() {
    let map = ColorNotationMap::from_centers(centers()).unwrap();
    let mut playback = Playback::new(map, MoveSequence::parse("R Qw F2 M'"));

    let mut last = playback.cursor();
    for _ in 0..10 {
        playback.advance();
        assert!(playback.cursor() >= last);
        assert!(playback.cursor() <= playback.len());
        last = playback.cursor();
    }

    assert_eq!(last, 4);
    assert!(playback.cube().is_solved());
}

#[test_log::test]
fn scan_errors_stop_the_pipeline() {
    let mut scan = toml::from_str::<ScanResult>(SCAN).unwrap();
    scan.insert(ScanLabel::Left, [[Color::Green; 3]; 3]);

    assert_eq!(
        ColorNotationMap::resolve(&scan),
        Err(ScanError::Ambiguous {
            color: Color::Green,
            first: ScanLabel::Front,
            second: ScanLabel::Left,
        })
    );

    let partial = toml::from_str::<ScanResult>(
        r#"Top = [["White", "White", "White"], ["White", "White", "White"], ["White", "White", "White"]]"#,
    )
    .unwrap();
    assert!(matches!(
        ColorNotationMap::resolve(&partial),
        Err(ScanError::Incomplete { missing }) if missing.len() == 5
    ));

    assert!(toml::from_str::<ScanResult>(r#"Top = [["Pink", "White", "White"], ["White", "White", "White"], ["White", "White", "White"]]"#).is_err());
}
