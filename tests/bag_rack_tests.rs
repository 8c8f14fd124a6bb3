//! Bag and rack integration tests.
//!
//! These tests cover drawing, refilling and tile conservation across a
//! short sequence of moves.

use wordgrid_engine::tiles::{consume, letter_count, standard_distribution, TILE_TOTAL};
use wordgrid_engine::{
    evaluate_move, fill_rack, new_bag, BagRng, Grid, Rack, RawPlacement, RejectReason, Tile,
    TileBag,
};

fn count_in(tiles: &[Tile], tile: Tile) -> usize {
    tiles.iter().filter(|&&t| t == tile).count()
}

/// Test that a new bag holds the full catalog.
#[test]
fn test_new_bag_is_complete() {
    let bag = new_bag();
    assert_eq!(bag.len(), TILE_TOTAL);
    assert_eq!(count_in(bag.tiles(), Tile::Letter('E')), letter_count('E'));
    assert_eq!(count_in(bag.tiles(), Tile::Blank), 2);
}

/// Test that fill_rack draws from the front until the rack is full.
#[test]
fn test_fill_rack() {
    let bag = TileBag::shuffled(&mut BagRng::new(11));
    let rack = Rack::parse("AB").unwrap();

    let (filled, rest) = fill_rack(&rack, &bag);

    assert_eq!(filled.len(), 7);
    assert_eq!(&filled.tiles()[2..], &bag.tiles()[..5]);
    assert_eq!(rest.tiles(), &bag.tiles()[5..]);
    assert_eq!(rack.len(), 2);
}

/// Test that fill_rack returns whatever a nearly empty bag holds.
#[test]
fn test_fill_rack_short_bag() {
    let bag = TileBag::from_tiles(vec![Tile::Letter('Q'), Tile::Blank]);
    let (filled, rest) = fill_rack(&Rack::new(), &bag);
    assert_eq!(filled.to_string(), "Q?");
    assert!(rest.is_empty());
}

/// Test that consume refuses tiles the rack does not hold.
#[test]
fn test_consume_mismatch() {
    let rack = Rack::parse("ABC").unwrap();
    let placements =
        wordgrid_engine::moves::normalize(&[RawPlacement::new(7, 7, "Z")]).unwrap();
    assert_eq!(consume(&rack, &placements), Err(RejectReason::RackMismatch));
}

/// Test that tiles are conserved across bag, racks and board.
#[test]
fn test_tile_conservation() {
    let mut rng = BagRng::new(2024);
    let bag = TileBag::shuffled(&mut rng);
    let (rack_a, bag) = fill_rack(&Rack::new(), &bag);
    let (rack_b, bag) = fill_rack(&Rack::new(), &bag);

    // Open with the first tile of the first rack unless it is a blank
    let mut grid = Grid::new();
    let mut rack = rack_a;
    let mut bag = bag;
    if let Some(Tile::Letter(letter)) = rack.tiles().first().copied() {
        let accepted = evaluate_move(
            &grid,
            &rack,
            &bag,
            &[RawPlacement::new(7, 7, letter.to_string())],
        )
        .unwrap();
        grid = accepted.grid;
        rack = accepted.rack;
        bag = accepted.bag;
    }

    let total = bag.len() + rack.len() + rack_b.len() + grid.tile_count();
    assert_eq!(total, TILE_TOTAL);
    assert_eq!(standard_distribution().len(), TILE_TOTAL);
}
