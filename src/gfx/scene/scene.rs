use log::{debug, info};

use super::object::{ObjectId, ObjectKind, SceneObject, Shape};
use crate::config::SketchConfig;
use crate::error::SketchError;
use crate::gfx::geometry::ShapeFactory;

/// The always-present prefix of the scene list, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineSlot {
    Plane = 0,
    Grid = 1,
}

impl BaselineSlot {
    pub const ALL: [BaselineSlot; 2] = [BaselineSlot::Plane, BaselineSlot::Grid];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn kind(self) -> ObjectKind {
        match self {
            BaselineSlot::Plane => ObjectKind::Plane,
            BaselineSlot::Grid => ObjectKind::Grid,
        }
    }
}

/// Ordered list of scene objects; insertion order is draw order.
///
/// The list always starts with the [`BaselineSlot`] objects. Authoring
/// operations only ever append after them, and [`Scene::reset_to_baseline`]
/// truncates back to them.
pub struct Scene {
    objects: Vec<SceneObject>,
    next_id: u64,
    /// Last appended object, if it is a polygon or a copy of one.
    current_shape: Option<ObjectId>,
}

impl Scene {
    /// Creates a scene from its baseline objects
    ///
    /// The shapes are stored in [`BaselineSlot`] order; their kinds are
    /// expected to match the slots.
    pub fn new(plane: Shape, grid: Shape) -> Self {
        debug_assert_eq!(plane.kind, BaselineSlot::Plane.kind());
        debug_assert_eq!(grid.kind, BaselineSlot::Grid.kind());

        let mut scene = Self {
            objects: Vec::new(),
            next_id: 0,
            current_shape: None,
        };
        scene.push(plane);
        scene.push(grid);
        scene
    }

    /// Validates `config` and builds the reference plane and grid from it.
    pub fn from_config(config: &SketchConfig) -> Result<Self, SketchError> {
        config.validate()?;
        let factory = ShapeFactory::new(config);
        Ok(Self::new(
            factory.reference_plane(config.plane_width, config.plane_height),
            factory.reference_grid(config.grid_size(), config.grid_divisions),
        ))
    }

    fn push(&mut self, shape: Shape) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push(SceneObject::new(id, shape));
        id
    }

    /// Appends a shape after everything already in the scene
    pub fn append(&mut self, shape: Shape) -> ObjectId {
        let kind = shape.kind;
        let id = self.push(shape);
        self.current_shape = kind.is_authored_shape().then_some(id);
        debug!("appended {} {} ({} objects)", kind.name(), id, self.objects.len());
        id
    }

    /// Number of objects that survive a reset
    pub fn baseline_len(&self) -> usize {
        BaselineSlot::ALL.len()
    }

    pub fn baseline(&self, slot: BaselineSlot) -> &SceneObject {
        &self.objects[slot.index()]
    }

    /// The pick target for authoring
    pub fn reference_plane(&self) -> &SceneObject {
        self.baseline(BaselineSlot::Plane)
    }

    pub fn reference_grid(&self) -> &SceneObject {
        self.baseline(BaselineSlot::Grid)
    }

    /// Final object of the list, or `None` when only the baseline is present
    pub fn last_shape(&self) -> Option<&SceneObject> {
        self.objects[self.baseline_len()..].last()
    }

    /// The polygon (or copy) a duplicate would be made from
    pub fn current_shape(&self) -> Option<&SceneObject> {
        self.current_shape.and_then(|id| self.get(id))
    }

    /// Appends a copy of the current authored shape
    ///
    /// The copy shares the source's geometry and style and starts with its own
    /// copy of the source transform, so moving it leaves the source in place.
    pub fn duplicate_last(&mut self) -> Result<ObjectId, SketchError> {
        let source = self.current_shape().ok_or(SketchError::NoShapeToCopy)?;
        let source_id = source.id();

        let mut copy = source.shape().clone();
        copy.kind = ObjectKind::DuplicatedShape;

        let id = self.append(copy);
        info!("duplicated {} as {}", source_id, id);
        Ok(id)
    }

    /// Drops every authored object, keeping only the baseline
    pub fn reset_to_baseline(&mut self) {
        let removed = self.objects.len() - self.baseline_len();
        self.objects.truncate(self.baseline_len());
        self.current_shape = None;
        if removed > 0 {
            info!("scene reset, {} objects removed", removed);
        }
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        // Ids are increasing, so the list is sorted by id
        self.objects
            .binary_search_by_key(&id, |object| object.id())
            .ok()
            .map(|index| &self.objects[index])
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        match self.objects.binary_search_by_key(&id, |object| object.id()) {
            Ok(index) => Some(&mut self.objects[index]),
            Err(_) => None,
        }
    }

    /// All objects in draw order, baseline first
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Gets the total number of objects, baseline included
    pub fn get_object_count(&self) -> usize {
        self.objects.len()
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        let authored = &self.objects[self.baseline_len()..];
        let count = |kind: ObjectKind| authored.iter().filter(|o| o.kind() == kind).count();

        SceneStatistics {
            object_count: self.objects.len(),
            line_count: count(ObjectKind::Line),
            polygon_count: count(ObjectKind::Polygon),
            duplicate_count: count(ObjectKind::DuplicatedShape),
            total_triangles: self.objects.iter().map(|o| o.geometry().triangle_count()).sum(),
        }
    }
}

/// Scene statistics for debugging and UI display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub line_count: usize,
    pub polygon_count: usize,
    pub duplicate_count: usize,
    pub total_triangles: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point3;

    fn setup() -> (Scene, ShapeFactory) {
        let config = SketchConfig::default();
        (Scene::from_config(&config).unwrap(), ShapeFactory::new(&config))
    }

    fn triangle(factory: &ShapeFactory) -> Shape {
        factory
            .closed_polygon(&[
                Point3::new(0.0, 0.0, 0.001),
                Point3::new(2.0, 0.0, 0.001),
                Point3::new(0.0, 2.0, 0.001),
                Point3::new(0.0, 0.0, 0.001),
            ])
            .unwrap()
    }

    #[test]
    fn test_baseline_layout() {
        let (scene, _) = setup();
        assert_eq!(scene.get_object_count(), 2);
        assert_eq!(scene.reference_plane().kind(), ObjectKind::Plane);
        assert_eq!(scene.reference_grid().kind(), ObjectKind::Grid);
        assert!(scene.last_shape().is_none());
        assert!(scene.current_shape().is_none());
    }

    #[test]
    fn test_duplicate_requires_authored_shape() {
        let (mut scene, factory) = setup();

        // Only baseline
        assert_eq!(scene.duplicate_last(), Err(SketchError::NoShapeToCopy));
        assert_eq!(scene.get_object_count(), 2);

        // Ending in a line
        scene.append(factory.line_segment(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)));
        assert_eq!(scene.duplicate_last(), Err(SketchError::NoShapeToCopy));
        assert_eq!(scene.get_object_count(), 3);

        // A polygon followed by a new line is no longer copyable
        scene.append(triangle(&factory));
        scene.append(factory.line_segment(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)));
        assert_eq!(scene.duplicate_last(), Err(SketchError::NoShapeToCopy));
    }

    #[test]
    fn test_duplicate_shares_geometry_not_transform() {
        let (mut scene, factory) = setup();
        let source = scene.append(triangle(&factory));
        let before = scene.get_object_count();

        let copy = scene.duplicate_last().unwrap();
        assert_eq!(scene.get_object_count(), before + 1);
        assert_eq!(scene.last_shape().map(|o| o.id()), Some(copy));

        let source_position = scene.get(source).unwrap().position();
        scene
            .get_mut(copy)
            .unwrap()
            .set_position(Point3::new(3.0, -2.0, 0.001));

        let source_obj = scene.get(source).unwrap();
        let copy_obj = scene.get(copy).unwrap();
        assert_eq!(copy_obj.kind(), ObjectKind::DuplicatedShape);
        assert!(copy_obj.shares_geometry_with(source_obj));
        assert_eq!(copy_obj.style(), source_obj.style());
        assert_eq!(source_obj.position(), source_position);
        assert_eq!(copy_obj.position(), Point3::new(3.0, -2.0, 0.001));

        // A copy can be copied again
        assert!(scene.duplicate_last().is_ok());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let (mut scene, factory) = setup();
        scene.append(factory.line_segment(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)));
        let polygon = scene.append(triangle(&factory));

        scene.reset_to_baseline();
        let once: Vec<ObjectId> = scene.objects().iter().map(|o| o.id()).collect();
        scene.reset_to_baseline();
        let twice: Vec<ObjectId> = scene.objects().iter().map(|o| o.id()).collect();

        assert_eq!(once, twice);
        assert_eq!(scene.get_object_count(), scene.baseline_len());
        assert!(scene.get(polygon).is_none());
        assert!(scene.current_shape().is_none());

        // Ids are not reused after a reset
        let next = scene.append(triangle(&factory));
        assert!(next > polygon);
    }

    #[test]
    fn test_statistics() {
        let (mut scene, factory) = setup();
        scene.append(factory.line_segment(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)));
        scene.append(triangle(&factory));
        scene.duplicate_last().unwrap();

        let stats = scene.get_statistics();
        assert_eq!(stats.object_count, 5);
        assert_eq!(stats.line_count, 1);
        assert_eq!(stats.polygon_count, 1);
        assert_eq!(stats.duplicate_count, 1);
        // plane 200 + two copies of one triangle
        assert_eq!(stats.total_triangles, 202);
    }
}
