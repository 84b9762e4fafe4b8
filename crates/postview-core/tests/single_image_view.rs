//! Behavioural tests for the single image view.

#![allow(clippy::unwrap_used)]

use postview_core::{
    Dimensions, FileDescriptor, FileUrls, PointerEvent, PostId, SVG_FALLBACK_HEIGHT,
    SingleImageProps, SingleImageView,
};

fn urls() -> FileUrls {
    FileUrls::new("https://chat.example.com").unwrap()
}

fn props(file: Option<FileDescriptor>) -> SingleImageProps {
    SingleImageProps::new(PostId::new("post-1"), file).with_embed_visible(true)
}

fn png(width: i32, height: i32) -> FileDescriptor {
    FileDescriptor::new("file-1", "photo.png", "png", width, height)
}

#[test]
fn identical_metadata_is_idempotent_and_keeps_loaded() {
    let mut view = SingleImageView::new(props(Some(png(640, 480))));
    view.on_load_complete();

    view.set_props(props(Some(png(640, 480))));

    assert_eq!(view.state().dimensions, Dimensions::new(640, 480));
    assert!(view.state().loaded);
}

#[test]
fn changed_metadata_updates_dimensions_only() {
    let mut view = SingleImageView::new(props(Some(png(0, 0))));
    view.on_load_complete();
    view.request_overlay(&mut PointerEvent::new());

    view.set_props(props(Some(png(1024, 768))));

    let state = view.state();
    assert_eq!(state.dimensions, Dimensions::new(1024, 768));
    assert!(state.loaded);
    assert!(state.overlay_visible);
}

#[test]
fn load_after_teardown_is_discarded() {
    let mut view = SingleImageView::new(props(Some(png(100, 100))));
    let ticket = view.load_ticket();

    view.unmount();
    view.on_load_complete();
    assert!(!view.state().loaded);
    assert!(!view.complete_load(&ticket));
    assert!(!view.state().loaded);
    assert!(!ticket.is_live());
}

#[test]
fn load_before_teardown_sets_loaded_once() {
    let mut view = SingleImageView::new(props(Some(png(100, 100))));
    view.on_load_complete();
    assert!(view.state().loaded);
    view.on_load_complete();
    assert!(view.state().loaded);
}

#[test]
fn overlay_round_trip_and_event_consumed() {
    let mut view = SingleImageView::new(props(Some(png(100, 100))));
    let mut event = PointerEvent::new();

    view.request_overlay(&mut event);
    assert!(event.is_default_prevented());
    assert!(view.state().overlay_visible);
    assert!(view.render(&urls()).unwrap().overlay.is_none());

    view.dismiss_overlay();
    assert!(!view.state().overlay_visible);
}

#[test]
fn svg_sizing_follows_cached_height() {
    let svg = |height| FileDescriptor::new("file-2", "logo.svg", "svg", 0, height);

    let view = SingleImageView::new(props(Some(svg(0))));
    let thumb = view.render(&urls()).unwrap().thumbnail.unwrap();
    assert!(thumb.classification.svg_no_height());
    assert_eq!(thumb.sizing.container_height, Some(SVG_FALLBACK_HEIGHT));
    assert!(thumb.sizing.max_width_fill);

    let view = SingleImageView::new(props(Some(svg(200))));
    let thumb = view.render(&urls()).unwrap().thumbnail.unwrap();
    assert!(thumb.classification.svg_with_height());
    assert!(thumb.sizing.fill_width);
    assert_eq!(thumb.sizing.container_height, None);
}

#[test]
fn small_portrait_png_classification() {
    let view = SingleImageView::new(props(Some(png(40, 80))));
    let class = view.render(&urls()).unwrap().thumbnail.unwrap().classification;
    assert!(class.min_preview);
    assert!(class.portrait_min_preview);
    assert!(!class.compact);

    let view = SingleImageView::new(props(Some(png(40, 80))).with_compact_display(true));
    let class = view.render(&urls()).unwrap().thumbnail.unwrap().classification;
    assert_eq!(
        class.class_names(),
        vec!["min-preview", "min-preview--portrait", "compact-display"]
    );
}

#[test]
fn absent_file_renders_nothing_and_calls_nobody() {
    let mut view = SingleImageView::new(props(None));
    let mut calls = Vec::new();

    view.request_visibility_toggle(&mut |post: &PostId| calls.push(post.clone()));
    view.request_overlay(&mut PointerEvent::new());
    view.on_load_complete();

    assert!(view.render(&urls()).is_none());
    assert!(calls.is_empty());
    assert_eq!(*view.state(), Default::default());
}

#[test]
fn visibility_toggle_is_forwarded_not_stored() {
    let view = SingleImageView::new(props(Some(png(100, 100))));
    let mut calls = Vec::new();

    view.request_visibility_toggle(&mut |post: &PostId| calls.push(post.clone()));

    assert_eq!(calls, vec![PostId::new("post-1")]);
    assert!(view.props().is_embed_visible);
}
