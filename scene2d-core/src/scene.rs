/// Scene orchestration: a draw surface, a fixed view transform, and an
/// ordered object list rendered back to front.
use crate::error::SceneError;
use crate::geometry::{CaptionSet, Point, PointSet, SegmentSet};
use crate::object::Object2d;
use crate::surface::DrawSurface;
use crate::transform::Transform2d;

/// Screen-space nudge applied to caption anchors so labels sit beside
/// their vertex markers.
const CAPTION_NUDGE: f64 = 2.0;

/// A renderable collection of planar objects.
///
/// The view transform maps world coordinates to surface coordinates
/// (y-flip, uniform scale, recentring). It is derived once at construction
/// and never changes afterwards. Stored objects are never mutated: every
/// draw pass works on clones, so repeated draws are identical.
#[derive(Debug)]
pub struct Scene2d<S> {
    surface: S,
    space: Transform2d,
    objects: Vec<Object2d>,
}

impl<S: DrawSurface> Scene2d<S> {
    /// Create a scene around a draw surface.
    ///
    /// Fails with [`SceneError::InvalidDrawSurface`] when the surface
    /// reports a zero-sized drawing area. `scale` is the magnification from
    /// world units to surface units; `center` is where the world origin
    /// lands on the surface.
    pub fn new(surface: S, center: Point, scale: f64) -> Result<Self, SceneError> {
        let (width, height) = surface.size();
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidDrawSurface);
        }
        Ok(Self {
            surface,
            space: view_transform(center, scale),
            objects: Vec::new(),
        })
    }

    /// Append an object. List order is render order: later objects draw
    /// above earlier ones.
    pub fn add_object(&mut self, obj: Object2d) {
        self.objects.push(obj);
    }

    /// Remove the object at `idx`, or every object when `idx` is `None`.
    /// An out-of-range index removes nothing.
    pub fn clear_objects(&mut self, idx: Option<usize>) {
        match idx {
            None => self.objects.clear(),
            Some(i) if i < self.objects.len() => {
                self.objects.remove(i);
            }
            Some(_) => {}
        }
    }

    pub fn objects(&self) -> &[Object2d] {
        &self.objects
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Render every object: clear the surface, then per object clone it,
    /// apply the view transform to the clone, and emit its segments, then
    /// points, then captions.
    pub fn draw(&mut self) {
        let (width, height) = self.surface.size();
        self.surface.clear(width, height);

        for obj in &self.objects {
            let mut view = obj.clone();
            view.apply_transformation(&self.space);

            draw_segments(&mut self.surface, &view.segments());
            draw_points(&mut self.surface, &view.points());
            draw_captions(&mut self.surface, &view.captions());
        }
    }
}

/// The object-to-surface mapping: flip y, uniform-scale through the
/// homogeneous component, then recenter. Once rows are renormalized the net
/// effect is `(x, y) -> (scale * x + center.x, center.y - scale * y)`.
fn view_transform(center: Point, scale: f64) -> Transform2d {
    let mut space = Transform2d::new();
    space.scale("y", -1.0);
    space.scale("s", 1.0 / scale);
    space.translate("x", center.x);
    space.translate("y", center.y);
    space
}

/// Emit all segments as one multi-subpath stroke.
fn draw_segments<S: DrawSurface>(surface: &mut S, segments: &SegmentSet) {
    surface.begin_path();
    for segment in &segments.coords {
        surface.move_to(segment.p1.x, segment.p1.y);
        surface.line_to(segment.p2.x, segment.p2.y);
    }
    surface.stroke(segments.color, segments.width);
}

/// Emit vertex markers as filled circles of radius width/2.
fn draw_points<S: DrawSurface>(surface: &mut S, points: &PointSet) {
    let radius = points.width / 2.0;
    for p in &points.coords {
        surface.fill_circle(p.x, p.y, radius, points.color);
    }
}

/// Emit captions beside their vertices, limited to the shorter of the text
/// and coordinate lists.
fn draw_captions<S: DrawSurface>(surface: &mut S, captions: &CaptionSet) {
    for (text, p) in captions.texts.iter().zip(&captions.coords) {
        surface.fill_text(
            text,
            p.x + CAPTION_NUDGE,
            p.y + CAPTION_NUDGE,
            &captions.font,
            captions.color,
        );
    }
}
