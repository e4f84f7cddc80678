//! Light records and nearest-light queries
//!
//! Material application approximates local illumination by packing the K
//! nearest active lights into per-draw uniforms. The query contract lives
//! behind the [`LightQuery`] trait so the current linear scan can be
//! swapped for a spatial acceleration structure without touching callers.

use slotmap::SlotMap;

use crate::foundation::math::Vec3;

slotmap::new_key_type! {
    /// Stable key for a registered light
    pub struct LightKey;
}

/// One point light source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World-space position
    pub position: Vec3,
    /// Influence radius
    pub radius: f32,
    /// Light color
    pub color: Vec3,
    /// Attenuation factor in `[0, 1]`
    pub attenuation: f32,
    /// Disabled lights are invisible to queries
    pub enabled: bool,
}

impl PointLight {
    /// Create an enabled point light
    pub fn new(position: Vec3, radius: f32, color: Vec3, attenuation: f32) -> Self {
        Self {
            position,
            radius,
            color,
            attenuation,
            enabled: true,
        }
    }
}

/// Nearest-light query interface
///
/// Implementations answer "which K active lights are closest to this world
/// position" deterministically for identical scene state.
pub trait LightQuery {
    /// Return up to `max_results` active lights ordered by ascending
    /// distance from `position`
    ///
    /// Ties are broken by registration order so frame-to-frame output is
    /// stable. An empty scene yields an empty sequence, not an error.
    fn nearest_lights(&self, position: Vec3, max_results: usize) -> Vec<PointLight>;
}

/// Registered scene lights with a linear-scan query
///
/// Every query walks all registered lights. This is the performance
/// critical path of material application for light-heavy scenes.
// TODO: replace the linear scan with a bounding volume hierarchy
#[derive(Debug, Default)]
pub struct LightSet {
    lights: SlotMap<LightKey, PointLight>,
    /// Registration order, for deterministic tie-breaks
    order: Vec<LightKey>,
}

impl LightSet {
    /// Create an empty light set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a light, returning its stable key
    pub fn insert(&mut self, light: PointLight) -> LightKey {
        let key = self.lights.insert(light);
        self.order.push(key);
        key
    }

    /// Remove a light; returns it if it was registered
    pub fn remove(&mut self, key: LightKey) -> Option<PointLight> {
        let removed = self.lights.remove(key);
        if removed.is_some() {
            self.order.retain(|k| *k != key);
        }
        removed
    }

    /// Look up a registered light
    pub fn get(&self, key: LightKey) -> Option<&PointLight> {
        self.lights.get(key)
    }

    /// Mutable access to a registered light
    pub fn get_mut(&mut self, key: LightKey) -> Option<&mut PointLight> {
        self.lights.get_mut(key)
    }

    /// Enable or disable a light without unregistering it
    pub fn set_enabled(&mut self, key: LightKey, enabled: bool) {
        if let Some(light) = self.lights.get_mut(key) {
            light.enabled = enabled;
        }
    }

    /// Number of registered lights (enabled or not)
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Whether no lights are registered
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Unregister every light
    pub fn clear(&mut self) {
        self.lights.clear();
        self.order.clear();
    }
}

impl LightQuery for LightSet {
    fn nearest_lights(&self, position: Vec3, max_results: usize) -> Vec<PointLight> {
        let mut found: Vec<(f32, PointLight)> = self
            .order
            .iter()
            .filter_map(|key| self.lights.get(*key))
            .filter(|light| light.enabled)
            .map(|light| ((light.position - position).norm_squared(), *light))
            .collect();

        // Stable sort keeps registration order on equal distances
        found.sort_by(|a, b| a.0.total_cmp(&b.0));
        found.truncate(max_results);
        found.into_iter().map(|(_, light)| light).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_at_distance(d: f32) -> PointLight {
        PointLight::new(Vec3::new(d, 0.0, 0.0), 5.0, Vec3::new(1.0, 1.0, 1.0), 0.5)
    }

    #[test]
    fn test_nearest_lights_orders_by_distance() {
        let mut set = LightSet::new();
        for d in [5.0, 1.0, 3.0, 9.0] {
            set.insert(light_at_distance(d));
        }

        let nearest = set.nearest_lights(Vec3::zeros(), 4);
        let distances: Vec<f32> = nearest.iter().map(|l| l.position.x).collect();
        assert_eq!(distances, vec![1.0, 3.0, 5.0, 9.0]);
    }

    #[test]
    fn test_nearest_lights_respects_max_results() {
        let mut set = LightSet::new();
        for d in [5.0, 1.0, 3.0, 9.0] {
            set.insert(light_at_distance(d));
        }

        let nearest = set.nearest_lights(Vec3::zeros(), 2);
        let distances: Vec<f32> = nearest.iter().map(|l| l.position.x).collect();
        assert_eq!(distances, vec![1.0, 3.0]);
    }

    #[test]
    fn test_ties_break_by_registration_order() {
        let mut set = LightSet::new();
        let mut first = light_at_distance(2.0);
        first.color = Vec3::new(1.0, 0.0, 0.0);
        let second = PointLight::new(
            Vec3::new(0.0, 2.0, 0.0),
            5.0,
            Vec3::new(0.0, 1.0, 0.0),
            0.5,
        );
        set.insert(first);
        set.insert(second);

        let nearest = set.nearest_lights(Vec3::zeros(), 2);
        assert_eq!(nearest[0].color, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(nearest[1].color, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_disabled_lights_are_skipped() {
        let mut set = LightSet::new();
        let near = set.insert(light_at_distance(1.0));
        set.insert(light_at_distance(4.0));
        set.set_enabled(near, false);

        let nearest = set.nearest_lights(Vec3::zeros(), 4);
        assert_eq!(nearest.len(), 1);
        assert_eq!(nearest[0].position.x, 4.0);
    }

    #[test]
    fn test_empty_set_yields_empty_sequence() {
        let set = LightSet::new();
        assert!(set.nearest_lights(Vec3::zeros(), 4).is_empty());
    }

    #[test]
    fn test_removed_lights_leave_the_scan() {
        let mut set = LightSet::new();
        let key = set.insert(light_at_distance(1.0));
        set.insert(light_at_distance(2.0));

        assert!(set.remove(key).is_some());
        let nearest = set.nearest_lights(Vec3::zeros(), 4);
        assert_eq!(nearest.len(), 1);
        assert_eq!(nearest[0].position.x, 2.0);
    }
}
