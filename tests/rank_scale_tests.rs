use approx::assert_relative_eq;
use namesurfer::core::{
    CoordinateMode, NDECADES, NameEntry, Rank, RankScale, Viewport, project_rank_points,
    project_rank_segments,
};
use namesurfer::SurferError;

#[test]
fn unranked_always_maps_to_bottom_margin_line() {
    let viewport = Viewport::new(600, 210);
    let scale = RankScale::new(1000, 40.0).expect("scale");

    let y = scale.rank_to_pixel(Rank::Unranked, viewport).expect("map");
    assert_relative_eq!(y, 170.0);
    let y = scale.rank_to_pixel(Rank::Ranked(1000), viewport).expect("map");
    assert_relative_eq!(y, 170.0);
}

#[test]
fn ranked_value_maps_linearly_inside_margin_band() {
    let viewport = Viewport::new(1200, 1000);
    let scale = RankScale::new(1000, 50.0).expect("scale");

    assert_relative_eq!(scale.pixels_per_rank(viewport).expect("per rank"), 0.9);
    assert_relative_eq!(
        scale.rank_to_pixel(Rank::Ranked(500), viewport).expect("map"),
        500.0
    );
    assert_relative_eq!(
        scale.rank_to_pixel(Rank::Ranked(1), viewport).expect("map"),
        50.9
    );
}

#[test]
fn ranks_above_max_are_not_clamped() {
    let viewport = Viewport::new(1200, 1000);
    let scale = RankScale::new(1000, 50.0).expect("scale");
    let y = scale.rank_to_pixel(Rank::Ranked(1500), viewport).expect("map");
    assert_relative_eq!(y, 1400.0);
}

#[test]
fn negative_ranks_plot_above_the_band() {
    let viewport = Viewport::new(1200, 1000);
    let scale = RankScale::new(1000, 50.0).expect("scale");
    let y = scale.rank_to_pixel(Rank::Ranked(-5), viewport).expect("map");
    assert_relative_eq!(y, 45.5);
    assert!(y < scale.plot_top());
}

#[test]
fn decades_are_spread_over_equal_bands() {
    let viewport = Viewport::new(1200, 1000);
    let scale = RankScale::new(1000, 50.0).expect("scale");

    assert_relative_eq!(scale.band_width(viewport).expect("band"), 100.0);
    for decade in 0..NDECADES {
        let x = scale.decade_to_pixel(decade, viewport).expect("x");
        assert_relative_eq!(x, decade as f64 * 100.0);
    }
}

#[test]
fn pixel_snapped_mode_truncates_like_integer_canvas_math() {
    let viewport = Viewport::new(1000, 600);
    let scale = RankScale::new(1000, 20.0)
        .expect("scale")
        .with_mode(CoordinateMode::PixelSnapped);

    assert_relative_eq!(scale.band_width(viewport).expect("band"), 83.0);
    assert_relative_eq!(scale.decade_to_pixel(2, viewport).expect("x"), 166.0);
    // 20 + 18 * 0.56 = 30.08
    assert_relative_eq!(
        scale.rank_to_pixel(Rank::Ranked(18), viewport).expect("y"),
        30.0
    );
    assert_relative_eq!(
        scale.rank_to_pixel(Rank::Unranked, viewport).expect("y"),
        580.0
    );
}

#[test]
fn scale_rejects_invalid_construction_and_viewport() {
    assert!(matches!(
        RankScale::new(0, 20.0),
        Err(SurferError::InvalidData(_))
    ));
    assert!(RankScale::new(1000, -1.0).is_err());
    assert!(RankScale::new(1000, f64::NAN).is_err());

    let scale = RankScale::new(1000, 20.0).expect("scale");
    let err = scale
        .rank_to_pixel(Rank::Ranked(3), Viewport::new(800, 0))
        .expect_err("zero height");
    assert!(matches!(
        err,
        SurferError::InvalidViewport {
            width: 800,
            height: 0
        }
    ));
}

#[test]
fn segments_bend_to_bottom_line_at_unranked_endpoints() {
    let entry = NameEntry::new("Eric", [25, 18, 0, 0, 0, 0, 0, 0, 0, 0, 0, 40]).expect("entry");
    let viewport = Viewport::new(1200, 1000);
    let scale = RankScale::new(1000, 50.0).expect("scale");

    let points = project_rank_points(&entry, scale, viewport).expect("points");
    assert_eq!(points.len(), NDECADES);
    let segments = project_rank_segments(&points);
    assert_eq!(segments.len(), NDECADES - 1);

    // 18 -> unranked
    assert_relative_eq!(segments[1].y1, 50.0 + 18.0 * 0.9);
    assert_relative_eq!(segments[1].y2, 950.0);
    // unranked -> 40
    assert_relative_eq!(segments[10].y1, 950.0);
    assert_relative_eq!(segments[10].y2, 86.0);
    assert_relative_eq!(segments[10].x2, 1100.0);
}
