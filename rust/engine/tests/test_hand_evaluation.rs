use greenfelt_engine::cards::{Card, Rank as R, Suit as S};
use greenfelt_engine::errors::GameError;
use greenfelt_engine::hand::{best_hand_name, hand_rank, score_five, Category};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn quads_tiebreak_lists_quad_then_kicker() {
    let hand = [
        c(S::Spades, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Clubs, R::Ace),
        c(S::Spades, R::Two),
    ];
    let score = score_five(&hand);
    assert_eq!(score.category, Category::FourOfAKind);
    assert_eq!(score.tiebreak, vec![14, 2]);
}

#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = [
        c(S::Spades, R::Five),
        c(S::Hearts, R::Four),
        c(S::Diamonds, R::Three),
        c(S::Clubs, R::Two),
        c(S::Spades, R::Ace),
    ];
    let six_high = [
        c(S::Spades, R::Six),
        c(S::Hearts, R::Five),
        c(S::Diamonds, R::Four),
        c(S::Clubs, R::Three),
        c(S::Spades, R::Two),
    ];
    let w = score_five(&wheel);
    let s = score_five(&six_high);
    assert_eq!(w.category, Category::Straight);
    assert_eq!(w.tiebreak, vec![5, 4, 3, 2, 1]);
    assert!(w < s);
}

#[test]
fn wheel_straight_flush_ranks_below_six_high_straight_flush() {
    let wheel_sf = [
        c(S::Hearts, R::Five),
        c(S::Hearts, R::Four),
        c(S::Hearts, R::Three),
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Ace),
    ];
    let six_sf = [
        c(S::Clubs, R::Six),
        c(S::Clubs, R::Five),
        c(S::Clubs, R::Four),
        c(S::Clubs, R::Three),
        c(S::Clubs, R::Two),
    ];
    let w = score_five(&wheel_sf);
    let s = score_five(&six_sf);
    assert_eq!(w.category, Category::StraightFlush);
    assert_eq!(s.category, Category::StraightFlush);
    assert!(w < s);
}

#[test]
fn category_precedence_is_strict() {
    let royal = [
        c(S::Hearts, R::Ace),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Ten),
    ];
    let quads = [
        c(S::Spades, R::King),
        c(S::Hearts, R::King),
        c(S::Diamonds, R::King),
        c(S::Clubs, R::King),
        c(S::Spades, R::Ace),
    ];
    let boat = [
        c(S::Spades, R::Queen),
        c(S::Hearts, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Clubs, R::Jack),
        c(S::Spades, R::Jack),
    ];
    let flush = [
        c(S::Diamonds, R::Ace),
        c(S::Diamonds, R::Jack),
        c(S::Diamonds, R::Nine),
        c(S::Diamonds, R::Six),
        c(S::Diamonds, R::Three),
    ];
    let straight = [
        c(S::Spades, R::Nine),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Six),
        c(S::Spades, R::Five),
    ];
    let trips = [
        c(S::Spades, R::Eight),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Eight),
        c(S::Clubs, R::King),
        c(S::Spades, R::Four),
    ];
    let two_pair = [
        c(S::Spades, R::Ten),
        c(S::Hearts, R::Ten),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Seven),
        c(S::Spades, R::Ace),
    ];
    let pair = [
        c(S::Spades, R::Jack),
        c(S::Hearts, R::Jack),
        c(S::Diamonds, R::Nine),
        c(S::Clubs, R::Five),
        c(S::Spades, R::Two),
    ];
    let high = [
        c(S::Spades, R::Ace),
        c(S::Hearts, R::Queen),
        c(S::Diamonds, R::Nine),
        c(S::Clubs, R::Five),
        c(S::Spades, R::Two),
    ];
    let ladder = [
        score_five(&royal),
        score_five(&quads),
        score_five(&boat),
        score_five(&flush),
        score_five(&straight),
        score_five(&trips),
        score_five(&two_pair),
        score_five(&pair),
        score_five(&high),
    ];
    for pair in ladder.windows(2) {
        assert!(pair[0] > pair[1], "{:?} should beat {:?}", pair[0], pair[1]);
    }
}

#[test]
fn two_pair_tiebreak_orders_pairs_then_kicker() {
    let hand = [
        c(S::Spades, R::Ten),
        c(S::Hearts, R::Ten),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Seven),
        c(S::Spades, R::Ace),
    ];
    let score = score_five(&hand);
    assert_eq!(score.category, Category::TwoPair);
    assert_eq!(score.tiebreak, vec![10, 7, 14]);
}

#[test]
fn full_house_tiebreak_is_trips_then_pair() {
    let hand = [
        c(S::Spades, R::Three),
        c(S::Hearts, R::Three),
        c(S::Diamonds, R::Three),
        c(S::Clubs, R::King),
        c(S::Spades, R::King),
    ];
    let score = score_five(&hand);
    assert_eq!(score.category, Category::FullHouse);
    assert_eq!(score.tiebreak, vec![3, 13]);
}

#[test]
fn kickers_break_equal_pairs() {
    let better = [
        c(S::Spades, R::Eight),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Ace),
        c(S::Clubs, R::Five),
        c(S::Spades, R::Two),
    ];
    let worse = [
        c(S::Clubs, R::Eight),
        c(S::Diamonds, R::Eight),
        c(S::Hearts, R::King),
        c(S::Spades, R::Five),
        c(S::Hearts, R::Two),
    ];
    assert!(score_five(&better) > score_five(&worse));
}

#[test]
fn comparison_is_a_total_order() {
    let hands = [
        [
            c(S::Spades, R::Ace),
            c(S::Hearts, R::Ace),
            c(S::Diamonds, R::Nine),
            c(S::Clubs, R::Five),
            c(S::Spades, R::Two),
        ],
        [
            c(S::Clubs, R::Ace),
            c(S::Diamonds, R::Ace),
            c(S::Hearts, R::Nine),
            c(S::Spades, R::Five),
            c(S::Hearts, R::Two),
        ],
        [
            c(S::Spades, R::Nine),
            c(S::Hearts, R::Eight),
            c(S::Diamonds, R::Seven),
            c(S::Clubs, R::Six),
            c(S::Spades, R::Five),
        ],
    ];
    let scores: Vec<_> = hands.iter().map(score_five).collect();
    for a in &scores {
        for b in &scores {
            let gt = a > b;
            let lt = a < b;
            let eq = a == b;
            assert_eq!(
                u8::from(gt) + u8::from(lt) + u8::from(eq),
                1,
                "exactly one ordering must hold for {:?} vs {:?}",
                a,
                b
            );
        }
    }
    // The two identically ranked pairs of aces compare equal.
    assert_eq!(scores[0], scores[1]);
}

#[test]
fn seven_card_rank_equals_max_over_all_subsets() {
    let seven = [
        c(S::Hearts, R::Ace),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Queen),
        c(S::Spades, R::Queen),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Ten),
        c(S::Clubs, R::Ten),
    ];
    let best = hand_rank(&seven).unwrap();

    let mut expected = None;
    let n = seven.len();
    for a in 0..n {
        for b in a + 1..n {
            for cc in b + 1..n {
                for d in cc + 1..n {
                    for e in d + 1..n {
                        let five = [seven[a], seven[b], seven[cc], seven[d], seven[e]];
                        let score = score_five(&five);
                        if expected.as_ref().map_or(true, |x| score > *x) {
                            expected = Some(score);
                        }
                    }
                }
            }
        }
    }
    assert_eq!(Some(best.clone()), expected);
    assert_eq!(best.category, Category::StraightFlush);
}

#[test]
fn six_card_input_is_accepted() {
    let six = [
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Hearts, R::Two),
        c(S::Spades, R::Nine),
    ];
    let best = hand_rank(&six).unwrap();
    assert_eq!(best.category, Category::FullHouse);
}

#[test]
fn fewer_than_five_cards_is_an_error() {
    let four = [
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Clubs, R::Ace),
    ];
    assert_eq!(
        hand_rank(&four).unwrap_err(),
        GameError::TooFewCards { got: 4 }
    );
}

#[test]
fn best_hand_name_reports_the_category() {
    let hole = [c(S::Spades, R::Ace), c(S::Hearts, R::Ace)];
    let board = [
        c(S::Diamonds, R::Ace),
        c(S::Clubs, R::King),
        c(S::Hearts, R::Queen),
    ];
    assert_eq!(best_hand_name(&hole, &board).unwrap(), "Three of a Kind");
}
