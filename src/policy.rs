//! Decides which snap gestures are permitted and what rectangle they
//! preview. Everything here is a pure function of the modes, the classified
//! sample and the window's minimum size.

use crate::geometry::{Size, WindowRect};
use crate::modes::{GestureModes, GestureResizeMode, ScreenOrientationMode, SidesUsingMode};
use crate::pointer::{PointerSample, Side};
use crate::screen::{RegionKind, ScreenRegions};

pub fn is_fullscreen_gesture(modes: &GestureModes, sample: &PointerSample) -> bool {
    let Some(side) = sample.side else {
        return false;
    };
    if modes.orientation != ScreenOrientationMode::UseSpecial {
        return side == Side::Top;
    }
    if sample.screen.is_landscape() {
        side == Side::Top
    } else {
        matches!(side, Side::Left | Side::Right)
    }
}

/// Target region for the sample's side once orientation is taken into
/// account. Only `use_special` on a portrait screen departs from the
/// classifier's default mapping.
pub fn resolve_region(
    modes: &GestureModes,
    sample: &PointerSample,
    regions: &ScreenRegions,
) -> Option<WindowRect> {
    let side = sample.side?;
    if modes.orientation == ScreenOrientationMode::UseSpecial && sample.screen.is_portrait() {
        let kind = match side {
            Side::Left | Side::Right => RegionKind::Entire,
            Side::Top => RegionKind::Top,
            Side::Bottom => RegionKind::Bottom,
            corner => return corner.default_region().map(|kind| regions.get(kind)),
        };
        return Some(regions.get(kind));
    }
    sample.region
}

/// Returns `true` when any veto applies. The checks are independent.
pub fn should_skip(
    modes: &GestureModes,
    sample: &PointerSample,
    region: Option<WindowRect>,
    minimum: Size,
) -> bool {
    let Some(side) = sample.side else {
        return true;
    };
    let fullscreen = is_fullscreen_gesture(modes, sample);
    let portrait = sample.screen.is_portrait();

    let too_small = region
        .is_some_and(|r| r.height < minimum.height || r.width < minimum.width);

    let vetoes = [
        modes.resize == GestureResizeMode::Never,
        modes.resize == GestureResizeMode::Acceptable && too_small,
        modes.sides == SidesUsingMode::IgnoreCorners && side.is_corner(),
        modes.orientation == ScreenOrientationMode::IgnorePortrait && portrait && !fullscreen,
        modes.orientation != ScreenOrientationMode::UseSpecial && side == Side::Bottom,
        modes.orientation == ScreenOrientationMode::UseSpecial
            && !portrait
            && side == Side::Bottom,
        modes.sides == SidesUsingMode::FullscreenOnly && !fullscreen,
    ];
    vetoes.into_iter().any(|veto| veto)
}

/// Grows `region` up to `minimum` on each deficient axis while keeping its
/// screen-aligned outer edge in place.
///
/// A region flush with the screen origin on an axis extends its far edge.
/// A region that starts inside the screen, or that sits against the right
/// or bottom screen edge, moves its near edge back instead, so the growth
/// goes toward the screen interior.
pub fn shrink_to_fit(
    region: WindowRect,
    side: Side,
    screen: WindowRect,
    minimum: Size,
) -> WindowRect {
    let mut fitted = region;

    if fitted.width < minimum.width {
        let deficit = minimum.width - fitted.width;
        let offset = fitted.x - screen.x;
        if offset > 1 || side.is_far_horizontal() {
            fitted.x = (fitted.x - deficit).max(screen.x);
        }
        fitted.width = minimum.width;
    }

    if fitted.height < minimum.height {
        let deficit = minimum.height - fitted.height;
        let offset = fitted.y - screen.y;
        if offset > 1 || side.is_far_vertical() {
            fitted.y = (fitted.y - deficit).max(screen.y);
        }
        fitted.height = minimum.height;
    }

    fitted
}

/// Full policy pipeline for one move sample: the rectangle to preview, or
/// `None` when no gesture should be offered.
pub fn snap_target(
    modes: &GestureModes,
    sample: &PointerSample,
    regions: &ScreenRegions,
    minimum: Size,
) -> Option<WindowRect> {
    let side = sample.side?;
    let region = resolve_region(modes, sample, regions);
    if should_skip(modes, sample, region, minimum) {
        tracing::trace!(?side, ?region, "gesture vetoed");
        return None;
    }
    let region = region?;
    if modes.resize == GestureResizeMode::ShrinkAsPossible {
        return Some(shrink_to_fit(
            region,
            side,
            sample.screen.geometry,
            minimum,
        ));
    }
    Some(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::pointer::DEFAULT_EDGE_MARGIN;
    use crate::screen::Screen;

    const LANDSCAPE: WindowRect = WindowRect::new(0, 0, 1920, 1080);
    const PORTRAIT: WindowRect = WindowRect::new(0, 0, 1080, 1920);

    fn sample(screen_geo: WindowRect, abs: Point) -> (PointerSample, ScreenRegions) {
        let regions = ScreenRegions::partition(screen_geo);
        let window = WindowRect::new(0, 0, 400, 300);
        let s = PointerSample::classify(
            window,
            Screen::from_geometry(screen_geo),
            &regions,
            abs,
            DEFAULT_EDGE_MARGIN,
        );
        (s, regions)
    }

    fn edge_points(geo: WindowRect) -> Vec<Point> {
        let (r, b) = (geo.right(), geo.bottom());
        let (mx, my) = (geo.width / 2, geo.height / 2);
        vec![
            Point::new(0, my),
            Point::new(r, my),
            Point::new(mx, 0),
            Point::new(mx, b),
            Point::new(0, 0),
            Point::new(r, 0),
            Point::new(0, b),
            Point::new(r, b),
        ]
    }

    #[test]
    fn fullscreen_gesture_is_top_edge_by_default() {
        let modes = GestureModes::default();
        let (top, _) = sample(LANDSCAPE, Point::new(900, 0));
        let (left, _) = sample(LANDSCAPE, Point::new(0, 500));
        assert!(is_fullscreen_gesture(&modes, &top));
        assert!(!is_fullscreen_gesture(&modes, &left));
    }

    #[test]
    fn use_special_rotates_fullscreen_gesture_on_portrait() {
        let modes =
            GestureModes::default().with_orientation(ScreenOrientationMode::UseSpecial);
        let (left, regions) = sample(PORTRAIT, Point::new(0, 900));
        let (top, _) = sample(PORTRAIT, Point::new(500, 0));
        assert!(is_fullscreen_gesture(&modes, &left));
        assert!(!is_fullscreen_gesture(&modes, &top));
        assert_eq!(resolve_region(&modes, &left, &regions), Some(regions.entire));
        assert_eq!(resolve_region(&modes, &top, &regions), Some(regions.top));
    }

    #[test]
    fn never_mode_vetoes_every_side() {
        let modes = GestureModes::default().with_resize(GestureResizeMode::Never);
        for geo in [LANDSCAPE, PORTRAIT] {
            for p in edge_points(geo) {
                let (s, regions) = sample(geo, p);
                assert!(snap_target(&modes, &s, &regions, Size::new(1, 1)).is_none());
            }
        }
    }

    #[test]
    fn bottom_edge_only_snaps_on_portrait_with_use_special() {
        let min = Size::new(100, 100);
        let (s, _) = sample(LANDSCAPE, Point::new(900, 1079));
        assert!(should_skip(&GestureModes::default(), &s, None, min));
        let special =
            GestureModes::default().with_orientation(ScreenOrientationMode::UseSpecial);
        assert!(should_skip(&special, &s, None, min));

        let (s, regions) = sample(PORTRAIT, Point::new(500, 1919));
        assert_eq!(snap_target(&special, &s, &regions, min), Some(regions.bottom));
    }

    #[test]
    fn ignore_portrait_keeps_only_fullscreen() {
        let modes =
            GestureModes::default().with_orientation(ScreenOrientationMode::IgnorePortrait);
        let min = Size::new(100, 100);
        let mut offered = Vec::new();
        for p in edge_points(PORTRAIT) {
            let (s, regions) = sample(PORTRAIT, p);
            if snap_target(&modes, &s, &regions, min).is_some() {
                offered.push(s.side);
            }
        }
        assert_eq!(offered, vec![Some(Side::Top)]);
    }

    #[test]
    fn ignore_corners_and_fullscreen_only() {
        let min = Size::new(100, 100);
        let corners = GestureModes::default().with_sides(SidesUsingMode::IgnoreCorners);
        let (corner, regions) = sample(LANDSCAPE, Point::new(0, 0));
        assert!(snap_target(&corners, &corner, &regions, min).is_none());
        let (left, _) = sample(LANDSCAPE, Point::new(0, 500));
        assert_eq!(
            snap_target(&corners, &left, &regions, min),
            Some(regions.left)
        );

        let fullscreen = GestureModes::default().with_sides(SidesUsingMode::FullscreenOnly);
        assert!(snap_target(&fullscreen, &left, &regions, min).is_none());
        let (top, _) = sample(LANDSCAPE, Point::new(900, 0));
        assert_eq!(
            snap_target(&fullscreen, &top, &regions, min),
            Some(regions.entire)
        );
    }

    #[test]
    fn acceptable_rejects_undersized_regions() {
        let modes = GestureModes::default();
        let (corner, regions) = sample(LANDSCAPE, Point::new(0, 0));
        assert_eq!(
            snap_target(&modes, &corner, &regions, Size::new(480, 360)),
            Some(regions.top_left)
        );
        assert!(snap_target(&modes, &corner, &regions, Size::new(480, 600)).is_none());
    }

    #[test]
    fn always_ignores_minimum() {
        let modes = GestureModes::default().with_resize(GestureResizeMode::Always);
        let (corner, regions) = sample(LANDSCAPE, Point::new(0, 0));
        assert_eq!(
            snap_target(&modes, &corner, &regions, Size::new(1500, 900)),
            Some(regions.top_left)
        );
    }

    #[test]
    fn should_skip_is_deterministic() {
        let modes = GestureModes::default().with_sides(SidesUsingMode::IgnoreCorners);
        let (s, regions) = sample(LANDSCAPE, Point::new(1919, 0));
        let region = resolve_region(&modes, &s, &regions);
        let first = should_skip(&modes, &s, region, Size::new(10, 10));
        for _ in 0..10 {
            assert_eq!(should_skip(&modes, &s, region, Size::new(10, 10)), first);
        }
    }

    #[test]
    fn shrink_leaves_satisfying_regions_alone() {
        let modes = GestureModes::default().with_resize(GestureResizeMode::ShrinkAsPossible);
        let min = Size::new(480, 360);
        let (left, regions) = sample(LANDSCAPE, Point::new(0, 500));
        assert_eq!(
            snap_target(&modes, &left, &regions, min),
            Some(WindowRect::new(0, 0, 960, 1080))
        );
        let (corner, _) = sample(LANDSCAPE, Point::new(0, 0));
        assert_eq!(
            snap_target(&modes, &corner, &regions, min),
            Some(WindowRect::new(0, 0, 960, 540))
        );
    }

    #[test]
    fn shrink_grows_top_left_height_from_origin() {
        let modes = GestureModes::default().with_resize(GestureResizeMode::ShrinkAsPossible);
        let (corner, regions) = sample(LANDSCAPE, Point::new(0, 0));
        assert_eq!(
            snap_target(&modes, &corner, &regions, Size::new(480, 600)),
            Some(WindowRect::new(0, 0, 960, 600))
        );
    }

    #[test]
    fn shrink_grows_far_regions_inward() {
        let min = Size::new(1200, 600);
        let fitted = shrink_to_fit(
            WindowRect::new(960, 540, 960, 540),
            Side::BottomRight,
            LANDSCAPE,
            min,
        );
        assert_eq!(fitted, WindowRect::new(720, 480, 1200, 600));
        assert_eq!(fitted.right(), LANDSCAPE.right());
        assert_eq!(fitted.bottom(), LANDSCAPE.bottom());
    }

    #[test]
    fn shrink_pulls_inset_region_back_toward_origin() {
        let fitted = shrink_to_fit(
            WindowRect::new(100, 100, 50, 50),
            Side::TopLeft,
            LANDSCAPE,
            Size::new(80, 80),
        );
        assert_eq!(fitted, WindowRect::new(70, 70, 80, 80));
    }

    #[test]
    fn shrink_widens_left_half_to_the_right() {
        let modes = GestureModes::default().with_resize(GestureResizeMode::ShrinkAsPossible);
        let (left, regions) = sample(LANDSCAPE, Point::new(0, 500));
        assert_eq!(
            snap_target(&modes, &left, &regions, Size::new(1200, 360)),
            Some(WindowRect::new(0, 0, 1200, 1080))
        );
    }

    #[test]
    fn no_side_means_no_target() {
        let (s, regions) = sample(LANDSCAPE, Point::new(900, 500));
        assert!(snap_target(&GestureModes::default(), &s, &regions, Size::new(1, 1)).is_none());
        assert!(!is_fullscreen_gesture(&GestureModes::default(), &s));
    }
}
