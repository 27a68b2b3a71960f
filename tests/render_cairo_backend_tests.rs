#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use namesurfer::SurferError;
use namesurfer::api::{NameSurferConfig, NameSurferEngine};
use namesurfer::core::{NDECADES, NameEntry, Viewport};
use namesurfer::database::NameDatabase;
use namesurfer::render::CairoRenderer;

fn database() -> NameDatabase {
    [
        NameEntry::new("Eric", [25, 18, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).expect("eric"),
        NameEntry::new("Mary", [1, 1, 1, 1, 1, 1, 1, 2, 3, 6, 15, 34]).expect("mary"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, SurferError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_grid_and_series() {
    let renderer = CairoRenderer::new(900, 500).expect("renderer");
    let config = NameSurferConfig::new(Viewport::new(900, 500));
    let mut engine = NameSurferEngine::new(renderer, database(), config).expect("engine init");

    engine.on_submit_name("eric").expect("eric");
    engine.on_submit_name("mary").expect("mary");
    let renderer = engine.into_renderer();
    let stats = renderer.last_stats();

    assert_eq!(stats.lines_drawn, NDECADES + 2 + 2 * (NDECADES - 1));
    assert_eq!(stats.texts_drawn, 3 * NDECADES);

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(600, 320).expect("renderer");
    let config = NameSurferConfig::new(Viewport::new(600, 320));
    let mut engine = NameSurferEngine::new(renderer, database(), config).expect("engine init");
    engine.on_clear().expect("clear");

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on external context");

    let stats = engine.into_renderer().last_stats();
    assert_eq!(stats.lines_drawn, NDECADES + 2);
    assert_eq!(stats.texts_drawn, NDECADES);
}

#[test]
fn offscreen_surface_follows_engine_resize() {
    let renderer = CairoRenderer::new(600, 320).expect("renderer");
    let config = NameSurferConfig::new(Viewport::new(600, 320));
    let mut engine = NameSurferEngine::new(renderer, database(), config).expect("engine init");
    engine.on_submit_name("mary").expect("mary");

    engine.on_resize(1200, 1000).expect("resize");
    let renderer = engine.into_renderer();
    let surface = renderer.surface().expect("offscreen surface");
    assert_eq!((surface.width(), surface.height()), (1200, 1000));
    assert_eq!(renderer.last_stats().lines_drawn, NDECADES + 2 + (NDECADES - 1));

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    // IHDR width and height, big-endian, right after the signature and chunk header.
    assert_eq!(&png[16..24], &[0, 0, 4, 176, 0, 0, 3, 232]);
}

#[test]
fn external_context_renderer_only_draws_on_host_context() {
    let config = NameSurferConfig::new(Viewport::new(600, 320));
    let mut engine =
        NameSurferEngine::new(CairoRenderer::for_external_context(), database(), config)
            .expect("engine init");
    engine.on_submit_name("eric").expect("eric");
    assert!(engine.renderer().surface().is_none());
    assert_eq!(engine.renderer().last_stats().lines_drawn, 0);

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on external context");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_stats().lines_drawn, NDECADES + 2 + (NDECADES - 1));
    assert!(renderer.write_png(&mut Vec::new()).is_err());
}
