use cart_madness::{Cart, CartState, Direction, Error, Position, Segment, Turn};

const ALL_DIRS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

#[test]
fn straight_segments_keep_direction_and_turn() {
    for segment in [Segment::Vertical, Segment::Horizontal] {
        for dir in ALL_DIRS {
            assert_eq!(segment.reorient(dir, Turn::Right), (dir, Turn::Right));
        }
    }
}

#[test]
fn curves_reorient_without_touching_turn() {
    assert_eq!(
        Segment::CurveSlash.reorient(Direction::Right, Turn::Left),
        (Direction::Up, Turn::Left)
    );
    assert_eq!(
        Segment::CurveBackslash.reorient(Direction::Right, Turn::Left),
        (Direction::Down, Turn::Left)
    );

    let slash = [
        (Direction::Up, Direction::Right),
        (Direction::Right, Direction::Up),
        (Direction::Down, Direction::Left),
        (Direction::Left, Direction::Down),
    ];
    for (from, to) in slash {
        assert_eq!(
            Segment::CurveSlash.reorient(from, Turn::Straight),
            (to, Turn::Straight)
        );
    }

    let backslash = [
        (Direction::Up, Direction::Left),
        (Direction::Left, Direction::Up),
        (Direction::Down, Direction::Right),
        (Direction::Right, Direction::Down),
    ];
    for (from, to) in backslash {
        assert_eq!(
            Segment::CurveBackslash.reorient(from, Turn::Straight),
            (to, Turn::Straight)
        );
    }
}

#[test]
fn junction_turns_and_advances_cursor() {
    assert_eq!(
        Segment::Junction.reorient(Direction::Up, Turn::Left),
        (Direction::Left, Turn::Straight)
    );
    assert_eq!(
        Segment::Junction.reorient(Direction::Up, Turn::Straight),
        (Direction::Up, Turn::Right)
    );
    assert_eq!(
        Segment::Junction.reorient(Direction::Up, Turn::Right),
        (Direction::Right, Turn::Left)
    );
    assert_eq!(
        Segment::Junction.reorient(Direction::Down, Turn::Left),
        (Direction::Right, Turn::Straight)
    );
    assert_eq!(
        Segment::Junction.reorient(Direction::Left, Turn::Right),
        (Direction::Up, Turn::Left)
    );
}

#[test]
fn turning_left_then_right_comes_back() {
    for dir in ALL_DIRS {
        assert_eq!(dir.turn(Turn::Left).turn(Turn::Right), dir);
        assert_eq!(dir.turn(Turn::Straight), dir);
    }
}

#[test]
fn cart_cycles_its_own_junction_turns() {
    let mut cart = Cart::new(Position::new(3, 3), Direction::Up);
    let mut other = Cart::new(Position::new(5, 5), Direction::Up);
    assert_eq!(cart.next_turn(), Turn::Left);

    cart.reorient(Segment::Junction);
    assert_eq!(cart.dir(), Direction::Left);
    assert_eq!(cart.next_turn(), Turn::Straight);

    // Curves never touch the cursor.
    cart.reorient(Segment::CurveSlash);
    assert_eq!(cart.dir(), Direction::Down);
    assert_eq!(cart.next_turn(), Turn::Straight);

    cart.reorient(Segment::Junction);
    assert_eq!(cart.dir(), Direction::Down);
    assert_eq!(cart.next_turn(), Turn::Right);

    cart.reorient(Segment::Junction);
    assert_eq!(cart.dir(), Direction::Left);
    assert_eq!(cart.next_turn(), Turn::Left);

    other.reorient(Segment::Junction);
    assert_eq!(other.dir(), Direction::Left);
    assert_eq!(other.next_turn(), Turn::Straight);
    assert_eq!(cart.next_turn(), Turn::Left);
}

#[test]
fn cart_rolls_along_its_direction() {
    let mut cart = Cart::from_char(Position::new(2, 2), '>').unwrap();
    cart.roll().unwrap();
    assert_eq!(cart.pos(), Position::new(3, 2));

    let mut cart = Cart::from_char(Position::new(2, 2), '^').unwrap();
    cart.roll().unwrap();
    assert_eq!(cart.pos(), Position::new(2, 1));

    let mut cart = Cart::from_char(Position::new(2, 2), 'v').unwrap();
    cart.roll().unwrap();
    assert_eq!(cart.pos(), Position::new(2, 3));

    let mut cart = Cart::from_char(Position::new(2, 2), '<').unwrap();
    cart.roll().unwrap();
    assert_eq!(cart.pos(), Position::new(1, 2));
}

#[test]
fn crashed_cart_stays_put() {
    let mut cart = Cart::new(Position::new(4, 1), Direction::Down);
    cart.crash();
    cart.crash();
    assert_eq!(cart.state(), CartState::Crashed);
    assert_eq!(cart.glyph(), 'X');

    cart.roll().unwrap();
    assert_eq!(cart.pos(), Position::new(4, 1));
    assert_eq!(cart.dir(), Direction::Down);
}

#[test]
fn cart_off_grid_is_an_error() {
    let mut cart = Cart::new(Position::new(0, 0), Direction::Left);
    assert_eq!(
        cart.roll(),
        Err(Error::CartOffGrid(Position::new(0, 0), Direction::Left))
    );
}

#[test]
fn unknown_cart_glyph_is_rejected() {
    assert_eq!(
        Cart::from_char(Position::new(0, 0), 'x').unwrap_err(),
        Error::InvalidCartChar('x')
    );
}

#[test]
fn positions_order_by_row_then_column() {
    let mut positions = vec![
        Position::new(5, 1),
        Position::new(0, 2),
        Position::new(9, 0),
        Position::new(2, 1),
    ];
    positions.sort();
    assert_eq!(
        positions,
        vec![
            Position::new(9, 0),
            Position::new(2, 1),
            Position::new(5, 1),
            Position::new(0, 2),
        ]
    );
}
