//! Intersections, hit selection and per-hit shading geometry.

use std::ops::Index;

use tracer_math::{Vector4, EPSILON};

use crate::{Hull, Ray};

/// A candidate hit: a distance along a ray and the hull it belongs to.
///
/// Negative distances lie behind the ray origin.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    pub distance: f64,
    pub hull: &'a Hull,
}

impl<'a> Intersection<'a> {
    pub fn new(distance: f64, hull: &'a Hull) -> Self {
        Self { distance, hull }
    }

    /// Derive the shading geometry for this hit on `ray`.
    pub fn prepare_computations(&self, ray: &Ray) -> Computations<'a> {
        let point = ray.position(self.distance);
        let eye = -ray.direction();
        let mut normal = self.hull.normal_at(point);

        // Ray starts inside the hull: shade the inner side
        let inside = normal.dot(eye) < 0.0;
        if inside {
            normal = -normal;
        }

        Computations {
            distance: self.distance,
            hull: self.hull,
            point,
            eye,
            normal,
            over_point: point + normal * EPSILON,
            inside,
        }
    }
}

impl PartialEq for Intersection<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && std::ptr::eq(self.hull, other.hull)
    }
}

/// Shading geometry for one ray-hull hit.
#[derive(Debug, Clone, Copy)]
pub struct Computations<'a> {
    pub distance: f64,
    pub hull: &'a Hull,
    /// World-space hit point
    pub point: Vector4,
    /// Direction back towards the ray origin
    pub eye: Vector4,
    /// Unit surface normal, facing the eye
    pub normal: Vector4,
    /// Hit point nudged along the normal, used as the shadow ray origin
    pub over_point: Vector4,
    /// Whether the ray originated inside the hull
    pub inside: bool,
}

/// An ordered collection of intersections.
#[derive(Debug, Clone, Default)]
pub struct Intersections<'a> {
    items: Vec<Intersection<'a>>,
}

impl<'a> Intersections<'a> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, intersection: Intersection<'a>) {
        self.items.push(intersection);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Intersection<'a>> {
        self.items.iter()
    }

    /// Stable ascending sort by distance.
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }

    /// The visible intersection: smallest strictly positive distance.
    ///
    /// Ties keep the earliest candidate in the collection.
    pub fn hit(&self) -> Option<Intersection<'a>> {
        self.items
            .iter()
            .filter(|i| i.distance > 0.0)
            .fold(None, |best: Option<&Intersection<'a>>, i| match best {
                Some(b) if b.distance <= i.distance => Some(b),
                _ => Some(i),
            })
            .copied()
    }
}

impl<'a> Index<usize> for Intersections<'a> {
    type Output = Intersection<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a> FromIterator<Intersection<'a>> for Intersections<'a> {
    fn from_iter<I: IntoIterator<Item = Intersection<'a>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> Extend<Intersection<'a>> for Intersections<'a> {
    fn extend<I: IntoIterator<Item = Intersection<'a>>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> IntoIterator for Intersections<'a> {
    type Item = Intersection<'a>;
    type IntoIter = std::vec::IntoIter<Intersection<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Intersections<'a> {
    type Item = &'b Intersection<'a>;
    type IntoIter = std::slice::Iter<'b, Intersection<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
